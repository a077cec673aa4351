macro_rules! for_wasm {
    ($($item:item)*) => {$(
        #[cfg(target_arch = "wasm32")]
        $item
    )*}
}
// https://github.com/seanmonstar/reqwest/blob/29b15cb1d2ed59db3b57d6a5ff98236435efc9cd/src/lib.rs#L204

pub mod error;
pub mod inferrer;
pub mod schema;
pub mod target;
pub mod transmogrifier;

pub use error::{Error, MalformedInput, Result};
pub use transmogrifier::{Options, Transmogrifier};

use target::{GoStruct, TargetGenerator};

/// Remaining stack below which the recursive walks switch to a freshly allocated segment
pub(crate) const RED_ZONE: usize = 64 * 1024;
pub(crate) const STACK_SIZE: usize = 1024 * 1024;

/// Generate the Go type declarations for a JSON document, without the package clause
///
/// The root object becomes a struct named `root_name`; every nested object becomes its own
/// struct, declared after the one that introduces it.
pub fn generate(root_name: &str, json: &[u8]) -> Result<String> {
    let schema = inferrer::infer_from_slice(root_name, json)?;
    let output = GoStruct::default().generate(&schema)?;
    Ok(output.body)
}

for_wasm! {
    mod wasm;
}
