/// Derive an exported Go identifier from a JSON key
///
/// The key is split on `_` and the first character of every part is uppercased, leaving the rest
/// untouched, so `foo_bar` becomes `FooBar` and `onMouseUp` becomes `OnMouseUp`.
pub fn to_go_name(key: &str) -> String {
    let mut name = String::with_capacity(key.len());
    for part in key.split('_') {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_each_part() {
        assert_eq!(to_go_name("foo_bar"), "FooBar");
        assert_eq!(to_go_name("hOffset"), "HOffset");
        assert_eq!(to_go_name("onMouseUp"), "OnMouseUp");
        assert_eq!(to_go_name("window"), "Window");
    }

    #[test]
    fn drops_every_underscore() {
        assert_eq!(to_go_name("__a__b_"), "AB");
        assert_eq!(to_go_name("_"), "");
        assert_eq!(to_go_name(""), "");
    }

    #[test]
    fn leaves_non_letters_alone() {
        assert_eq!(to_go_name("1st_place"), "1stPlace");
        assert_eq!(to_go_name("ünïcode_key"), "ÜnïcodeKey");
    }

    #[test]
    fn is_idempotent_on_derived_names() {
        for key in &["foo", "foo_bar", "hOffset", "a_b_c", "URL_path", "x"] {
            let once = to_go_name(key);
            assert!(!once.contains('_'));
            assert!(once.chars().next().unwrap().is_uppercase());
            assert_eq!(to_go_name(&once), once);
        }
    }
}
