use wasm_bindgen::prelude::*;

use crate::transmogrifier::{Options, Transmogrifier};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Generate a complete Go file from `json`, for use from JavaScript
#[wasm_bindgen]
pub fn json2struct(
    json: &str,
    root_name: &str,
    package: Option<String>,
    import_json: bool,
) -> Result<String, JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let options = Options {
        package: package.unwrap_or_else(|| Options::default().package),
        import_json,
    };
    let mut output = Vec::new();
    Transmogrifier::new(root_name, json.as_bytes(), &mut output)
        .with_options(options)
        .run()
        .map_err(|error| JsValue::from_str(&error.to_string()))?;
    String::from_utf8(output).map_err(|error| JsValue::from_str(&error.to_string()))
}
