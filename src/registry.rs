//! Registry of named splitting functions.
//!
//! Custom splitting logic is modeled as a plain function pointer registered
//! under a name, not as an arbitrary closure. The name is what a serialized
//! configuration carries, so a config that references `"my_app::split_dots"`
//! round-trips as long as the process registers that name before
//! deserializing.
//!
//! ```rust
//! use docsplit::register_splitting_function;
//!
//! fn split_dots(text: &str) -> Vec<String> {
//!     text.split('.').map(str::to_string).collect()
//! }
//!
//! register_splitting_function("my_app::split_dots", split_dots);
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;

/// A pure custom splitting function.
///
/// Takes the whole document text and returns the pieces in order. The engine
/// trusts the function to preserve order; it does not require that the pieces
/// concatenate back to the input, which is why offsets and page numbers are
/// not computed in function mode.
pub type SplittingFn = fn(&str) -> Vec<String>;

static REGISTRY: Lazy<RwLock<HashMap<String, SplittingFn>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Register a splitting function under `name`, replacing any previous entry.
pub fn register_splitting_function(name: impl Into<String>, function: SplittingFn) {
    REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(name.into(), function);
}

/// Look up a previously registered splitting function.
pub fn resolve_splitting_function(name: &str) -> Option<SplittingFn> {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn halves(text: &str) -> Vec<String> {
        let mid = text.len() / 2;
        vec![text[..mid].to_string(), text[mid..].to_string()]
    }

    #[test]
    fn register_and_resolve() {
        register_splitting_function("tests::halves", halves);
        let f = resolve_splitting_function("tests::halves").unwrap();
        assert_eq!(f("abcd"), vec!["ab", "cd"]);
    }

    #[test]
    fn unknown_name_resolves_to_none() {
        assert!(resolve_splitting_function("tests::no_such_function").is_none());
    }

    #[test]
    fn reregistering_replaces() {
        fn one(_: &str) -> Vec<String> {
            vec!["one".to_string()]
        }
        fn two(_: &str) -> Vec<String> {
            vec!["two".to_string()]
        }
        register_splitting_function("tests::replaced", one);
        register_splitting_function("tests::replaced", two);
        let f = resolve_splitting_function("tests::replaced").unwrap();
        assert_eq!(f(""), vec!["two"]);
    }
}
