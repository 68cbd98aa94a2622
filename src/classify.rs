use ecow::{eco_format, EcoString};

use crate::value::Value;

/// Describes `input` by its runtime tag. Arms are tried in order,
/// first match wins, and every tag lands somewhere.
///
/// `Long` is not covered by the number arm, which takes the 32-bit tag
/// only, so a 64-bit sample lands in the fallback. That narrowing is
/// kept for output compatibility, do not widen it here.
#[must_use]
pub fn classify(input: &Value) -> EcoString {
    match input {
        Value::Int(i) => eco_format!("got a number {i}"),
        Value::Double(d) => eco_format!("got a double {d}"),
        Value::String(s) => eco_format!("got a string {s}"),

        Value::Long(_) | Value::Bool(_) | Value::Nil => "no clue".into(),
    }
}
