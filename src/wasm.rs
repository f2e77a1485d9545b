//! Expose the `clause-diff` crate's functionality to WebAssembly for the
//! review dashboard.
use wasm_bindgen::prelude::*;

use crate::{DiffStats, Redactor};

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::compute_diff` returning the `DiffResult` as a
/// JSON string of the shape
/// `{"original": [{"kind": "removed", "text": "..."}], "suggested": [...]}`.
///
/// # Panics
///
/// If serialization to JSON fails which should not happen
#[wasm_bindgen(js_name = computeDiff)]
#[must_use]
pub fn compute_diff(original: &str, suggested: &str) -> String {
    set_panic_hook();

    let diff = crate::compute_diff(original, suggested);

    serde_json::to_string(&diff).expect("Failed to serialize diff result")
}

/// WASM wrapper around `crate::get_diff_stats`.
#[wasm_bindgen(js_name = getDiffStats)]
#[must_use]
pub fn get_diff_stats(original: &str, suggested: &str) -> DiffStats {
    set_panic_hook();

    crate::get_diff_stats(original, suggested)
}

/// Redact PII from `text` before it's sent for analysis. Returns the
/// `RedactedText` as a JSON string with the keys `text` and `placeholders`.
///
/// # Panics
///
/// If the built-in patterns fail to compile or serialization to JSON fails,
/// neither of which should happen
#[wasm_bindgen(js_name = redactPii)]
#[must_use]
pub fn redact_pii(text: &str) -> String {
    set_panic_hook();

    let redactor = Redactor::legal().expect("Built-in PII patterns must compile");

    serde_json::to_string(&redactor.redact(text)).expect("Failed to serialize redacted text")
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
