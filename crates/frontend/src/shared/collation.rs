//! Locale-aware string comparison
//!
//! In the browser this delegates to `String.prototype.localeCompare`, so
//! category names sort the way the user's locale expects ("école" next to
//! "Ecran", not after "zèbre"). Native builds (tests) fall back to a
//! case-insensitive comparison with the raw string as tie-breaker.

use std::cmp::Ordering;

#[cfg(target_arch = "wasm32")]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    js_sys::JsString::from(a)
        .locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new())
        .cmp(&0)
        .then_with(|| a.cmp(b))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    fallback_compare(a, b)
}

#[cfg(not(target_arch = "wasm32"))]
fn fallback_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
