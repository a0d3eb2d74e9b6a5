//! The document model
//!
//! Documents are plain `serde_json` values. The workspace enables
//! `preserve_order`, so iterating an object visits keys in input order.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Runtime category of a document node, used for type labels in output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Integer,
    Float,
    Boolean,
    Null,
    Object,
    Array,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => Self::String,
            Value::Number(n) if n.is_f64() => Self::Float,
            Value::Number(_) => Self::Integer,
            Value::Bool(_) => Self::Boolean,
            Value::Null => Self::Null,
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text of a node as it appears in rendered output.
///
/// Strings are printed without quotes; everything else in compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse `source` as JSON and require an object at the root.
pub fn parse_document(source: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(source) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(Error::NotAnObject {
            found: ValueKind::of(&other).as_str(),
        }),
        Err(e) => Err(Error::parse("JSON", e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!("on"), "string")]
    #[case(json!(42), "integer")]
    #[case(json!(-7), "integer")]
    #[case(json!(1.5), "float")]
    #[case(json!(true), "boolean")]
    #[case(json!(null), "null")]
    #[case(json!({}), "object")]
    #[case(json!([]), "array")]
    fn kind_labels(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(ValueKind::of(&value).as_str(), expected);
    }

    #[test]
    fn value_text_unquotes_strings_only() {
        assert_eq!(value_text(&json!("Kitchen")), "Kitchen");
        assert_eq!(value_text(&json!(3)), "3");
        assert_eq!(value_text(&json!(false)), "false");
        assert_eq!(value_text(&json!(["a", 1])), r#"["a",1]"#);
    }

    #[test]
    fn parse_document_preserves_key_order() {
        let doc = parse_document(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let keys: Vec<_> = doc.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn parse_document_rejects_non_object_root() {
        let err = parse_document("[1, 2]").unwrap_err();
        assert!(matches!(err, Error::NotAnObject { found: "array" }));
    }

    #[test]
    fn parse_document_reports_syntax_errors() {
        let err = parse_document("{\"a\": ").unwrap_err();
        assert!(matches!(err, Error::ParseError { .. }));
    }
}
