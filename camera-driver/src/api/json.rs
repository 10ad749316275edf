//! Flat JSON object encoding for response bodies.

use serde_json::{Map, Value};

/// Encode string pairs as a single-line JSON object.
///
/// Keys are emitted in sorted order. Keys and values are escaped, so quotes
/// and backslashes in an error message still produce valid JSON. A repeated
/// key keeps its last value.
pub fn object<'a, I>(fields: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let map: Map<String, Value> = fields
        .into_iter()
        .map(|(key, value)| (key.to_owned(), Value::String(value.to_owned())))
        .collect();
    Value::Object(map).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_body() {
        let body = object([("success", "true"), ("message", "Camera started")]);
        assert_eq!(body, r#"{"message":"Camera started","success":"true"}"#);
        assert!(!body.contains('\n'));
    }

    #[test]
    fn test_sorted_keys() {
        let body = object([("status", "stopped"), ("error", "")]);
        assert_eq!(body, r#"{"error":"","status":"stopped"}"#);
    }

    #[test]
    fn test_empty() {
        assert_eq!(object([]), "{}");
    }

    #[test]
    fn test_special_characters_are_escaped() {
        let body = object([("error", r#"bad "frame" at C:\cam"#)]);
        let parsed: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["error"], r#"bad "frame" at C:\cam"#);
    }
}
