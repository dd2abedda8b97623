// Author: Dustin Pilgrim
// License: MIT

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::ast::Value;

/// Render `value` as JSON indented with four spaces, keeping object order.
///
/// # Examples
/// ```
/// use json_imports::{export::to_json_pretty, Value};
///
/// let value = Value::Array(vec![Value::Null, Value::Bool(true)]);
/// assert_eq!(to_json_pretty(&value)?, "[\n    null,\n    true\n]");
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn to_json_pretty(value: &Value) -> serde_json::Result<String> {
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    String::from_utf8(out).map_err(serde::ser::Error::custom)
}

/// Render `value` as single-line JSON.
pub fn to_json_compact(value: &Value) -> serde_json::Result<String> {
    serde_json::to_string(value)
}
