//! Input normalization applied before vectorizing.
//!
//! Lower-cases the text and strips everything that is not an ASCII letter or
//! whitespace, then trims the ends. Non-string JSON input normalizes to an
//! empty string.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static NON_ALPHA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").expect("static regex is valid"));

/// Lower-case `input`, drop every character that is not `a-z` or whitespace,
/// and trim leading/trailing whitespace left behind by removed characters.
///
/// Interior whitespace runs and character order are preserved, so
/// `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    NON_ALPHA.replace_all(&lowered, "").trim().to_string()
}

/// Normalize an arbitrary JSON value. Anything other than a string yields `""`.
pub fn normalize_value(input: &Value) -> String {
    match input {
        Value::String(text) => normalize(text),
        _ => String::new(),
    }
}
