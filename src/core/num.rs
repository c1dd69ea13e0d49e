// src/core/num.rs
//
// Centralized numeric reads over JSON cell values. The dataset mixes real
// numbers, numeric strings, decorated strings ("14分"), and nulls; every
// "is this numeric" decision in the pipeline goes through here.

use serde_json::Value;

/// Number, or a string that parses cleanly as one. Anything else is absent.
pub fn as_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Minutes field. Textual values like "14分" or "約14分" yield the first run
/// of digits; plain numbers pass through.
pub fn as_minutes(v: &Value) -> Option<f64> {
    match v {
        Value::String(s) => first_digit_run(s).or_else(|| as_number(v)),
        _ => as_number(v),
    }
}

/// Parse the first contiguous run of ASCII digits, if any.
pub fn first_digit_run(s: &str) -> Option<f64> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let tail = &s[start..];
    let len = tail
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(tail.len());
    tail[..len].parse().ok()
}
