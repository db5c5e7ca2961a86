//! Core data models for translation requests

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::core::errors::InputError;

/// Placeholder name to value mapping handed to the engine
pub type Params = BTreeMap<String, Value>;

/// Structured translation request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Overrides the translator's default category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Message to be translated
    pub message: String,
    /// Placeholder values
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: Params,
    /// Overrides the current language of the request context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl TranslationRequest {
    /// Create a request for a message with every other field defaulted
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Add a single placeholder value
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Replace all placeholder values
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Set the language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Anything the translator accepts: a bare message or a structured request
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationInput {
    /// Message translated with every default applied
    Plain(String),
    /// Request with optional overrides
    Structured(TranslationRequest),
}

impl TranslationInput {
    /// Convert an untyped JSON value into a translation input.
    ///
    /// Absent and `null` fields are treated alike. Strings become
    /// [`TranslationInput::Plain`], objects become
    /// [`TranslationInput::Structured`], everything else is rejected.
    pub fn from_value(value: Value) -> Result<Self, InputError> {
        match value {
            Value::String(message) => Ok(Self::Plain(message)),
            Value::Object(record) => Self::from_record(record).map(Self::Structured),
            other => Err(InputError::UnsupportedType {
                kind: value_kind(&other),
            }),
        }
    }

    fn from_record(record: Map<String, Value>) -> Result<TranslationRequest, InputError> {
        let message = match string_field(&record, "message")? {
            Some(message) => message,
            None => {
                let received = serde_json::to_string(&record)
                    .unwrap_or_else(|_| format!("{:?}", record));
                return Err(InputError::MissingMessage { received });
            }
        };

        Ok(TranslationRequest {
            category: string_field(&record, "category")?,
            message,
            params: params_field(&record)?,
            language: string_field(&record, "language")?,
        })
    }
}

impl From<&str> for TranslationInput {
    fn from(message: &str) -> Self {
        Self::Plain(message.to_string())
    }
}

impl From<String> for TranslationInput {
    fn from(message: String) -> Self {
        Self::Plain(message)
    }
}

impl From<TranslationRequest> for TranslationInput {
    fn from(request: TranslationRequest) -> Self {
        Self::Structured(request)
    }
}

/// The four values delegated to the engine once every default is applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRequest {
    /// Translation domain
    pub category: String,
    /// Message to translate
    pub message: String,
    /// Placeholder values
    pub params: Params,
    /// Target language
    pub language: String,
}

/// Name of a JSON value's type, used in diagnostics
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read a text field; scalars are stringified, `null` counts as absent
fn string_field(
    record: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, InputError> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(if *b { "1" } else { "" }.to_string())),
        Some(other) => Err(InputError::InvalidField {
            field,
            expected: "string",
            kind: value_kind(other),
        }),
    }
}

/// Read placeholder values; a list becomes index-keyed (`{0}`, `{1}`, ...)
fn params_field(record: &Map<String, Value>) -> Result<Params, InputError> {
    match record.get("params") {
        None | Some(Value::Null) => Ok(Params::new()),
        Some(Value::Object(map)) => Ok(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()),
        Some(Value::Array(list)) => Ok(list
            .iter()
            .enumerate()
            .map(|(index, v)| (index.to_string(), v.clone()))
            .collect()),
        Some(other) => Err(InputError::InvalidField {
            field: "params",
            expected: "object or array",
            kind: value_kind(other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_is_plain() {
        let input = TranslationInput::from_value(json!("Hello")).unwrap();
        assert_eq!(input, TranslationInput::Plain("Hello".to_string()));
    }

    #[test]
    fn test_object_is_structured() {
        let input = TranslationInput::from_value(json!({
            "category": "app",
            "message": "Hi {name}",
            "params": {"name": "Ada"},
        }))
        .unwrap();

        let expected = TranslationRequest::new("Hi {name}")
            .with_category("app")
            .with_param("name", "Ada");
        assert_eq!(input, TranslationInput::Structured(expected));
    }

    #[test]
    fn test_null_fields_count_as_absent() {
        let input = TranslationInput::from_value(json!({
            "message": "Hi",
            "category": null,
            "params": null,
            "language": null,
        }))
        .unwrap();
        assert_eq!(input, TranslationInput::Structured(TranslationRequest::new("Hi")));

        let err = TranslationInput::from_value(json!({"message": null})).unwrap_err();
        assert!(matches!(err, InputError::MissingMessage { .. }));
    }

    #[test]
    fn test_missing_message_dumps_record() {
        let err = TranslationInput::from_value(json!({"category": "app"})).unwrap_err();
        assert_eq!(
            err,
            InputError::MissingMessage {
                received: r#"{"category":"app"}"#.to_string()
            }
        );
    }

    #[test]
    fn test_unsupported_types() {
        for (value, kind) in [
            (json!(42), "number"),
            (json!(true), "boolean"),
            (Value::Null, "null"),
            (json!(["message"]), "array"),
        ] {
            let err = TranslationInput::from_value(value).unwrap_err();
            assert_eq!(err, InputError::UnsupportedType { kind });
        }
    }

    #[test]
    fn test_scalar_fields_are_stringified() {
        let input = TranslationInput::from_value(json!({
            "message": 7,
            "category": true,
            "language": false,
        }))
        .unwrap();

        let expected = TranslationRequest::new("7").with_category("1").with_language("");
        assert_eq!(input, TranslationInput::Structured(expected));
    }

    #[test]
    fn test_list_params_are_index_keyed() {
        let input = TranslationInput::from_value(json!({
            "message": "Hello {0} and {1}",
            "params": ["Ada", 3],
        }))
        .unwrap();

        let expected = TranslationRequest::new("Hello {0} and {1}")
            .with_param("0", "Ada")
            .with_param("1", 3);
        assert_eq!(input, TranslationInput::Structured(expected));
    }

    #[test]
    fn test_invalid_field_types() {
        let err = TranslationInput::from_value(json!({"message": ["Hi"]})).unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidField {
                field: "message",
                expected: "string",
                kind: "array"
            }
        );

        let err = TranslationInput::from_value(json!({"message": "Hi", "category": {"a": 1}}))
            .unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidField {
                field: "category",
                expected: "string",
                kind: "object"
            }
        );

        let err = TranslationInput::from_value(json!({"message": "Hi", "params": "Ada"}))
            .unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidField {
                field: "params",
                expected: "object or array",
                kind: "string"
            }
        );
    }

    #[test]
    fn test_missing_message_checked_before_other_fields() {
        let err = TranslationInput::from_value(json!({"category": {"a": 1}, "params": 5}))
            .unwrap_err();
        assert!(matches!(err, InputError::MissingMessage { .. }));
    }

    #[test]
    fn test_request_deserializes_with_defaults() {
        let request: TranslationRequest = serde_json::from_str(r#"{"message": "Hi"}"#).unwrap();
        assert_eq!(request, TranslationRequest::new("Hi"));
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({"message": "Hi"}));
    }
}
