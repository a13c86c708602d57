use serde_json::Value;

/// JavaScript 風格的真值判斷。
///
/// `null`、`false`、數值 0 與空字串為假；其餘（含空陣列、空物件）為真。
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
