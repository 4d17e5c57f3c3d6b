//! Schema-bound profile decoding.

use crate::errors::{DecodeError, Result};
use crate::types::SchemaDocument;
use serde_json::Value;

/// Decodes a raw profile payload against a schema document.
///
/// Implementations are pure CPU work and must be deterministic: the same
/// bytes against the same schema always yield the same value. The pipeline
/// treats any error as fatal to the whole registration.
pub trait ProfileDecoder: Send + Sync {
    /// Decode `raw` into structured form, enforcing `schema`
    fn decode(&self, raw: &[u8], schema: &SchemaDocument) -> Result<Value>;
}

/// Reference decoder for JSON profile payloads.
///
/// The schema body is a record description:
///
/// ```json
/// {
///   "name": "BasicEndpointProfile",
///   "fields": [
///     { "name": "os", "type": "string" },
///     { "name": "build", "type": "int", "optional": true }
///   ]
/// }
/// ```
///
/// Decoding is strict. The payload root must be an object, every declared
/// non-optional field must be present with the declared type, and fields the
/// schema does not declare are rejected.
#[derive(Debug, Default)]
pub struct JsonProfileDecoder;

impl JsonProfileDecoder {
    /// Create a reference decoder
    pub fn new() -> Self {
        Self
    }
}

impl ProfileDecoder for JsonProfileDecoder {
    fn decode(&self, raw: &[u8], schema: &SchemaDocument) -> Result<Value> {
        let spec = RecordSchema::parse(&schema.body)?;

        let value: Value = serde_json::from_slice(raw)
            .map_err(|e| DecodeError::Malformed(e.to_string()))?;
        let record = value.as_object().ok_or_else(|| {
            DecodeError::Malformed("profile root must be a JSON object".to_string())
        })?;

        for field in &spec.fields {
            match record.get(&field.name) {
                Some(v) if field.optional && v.is_null() => {}
                Some(v) => {
                    if !field.kind.matches(v) {
                        return Err(DecodeError::TypeMismatch {
                            field: field.name.clone(),
                            expected: field.kind.name(),
                        });
                    }
                }
                None if field.optional => {}
                None => return Err(DecodeError::MissingField(field.name.clone())),
            }
        }

        for key in record.keys() {
            if !spec.fields.iter().any(|f| f.name == *key) {
                return Err(DecodeError::UnknownField(key.clone()));
            }
        }

        Ok(value)
    }
}

struct RecordSchema {
    fields: Vec<FieldSpec>,
}

struct FieldSpec {
    name: String,
    kind: FieldKind,
    optional: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    String,
    Int,
    Long,
    Float,
    Double,
    Boolean,
    Object,
    Array,
}

impl RecordSchema {
    fn parse(body: &Value) -> Result<Self> {
        let obj = body.as_object().ok_or_else(|| {
            DecodeError::InvalidSchema("schema body must be a JSON object".to_string())
        })?;

        let raw_fields = obj
            .get("fields")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                DecodeError::InvalidSchema("schema must declare a 'fields' array".to_string())
            })?;

        let mut fields = Vec::with_capacity(raw_fields.len());
        for raw in raw_fields {
            let name = raw
                .get("name")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    DecodeError::InvalidSchema("field entry is missing a 'name'".to_string())
                })?
                .to_string();

            let type_name = raw.get("type").and_then(Value::as_str).ok_or_else(|| {
                DecodeError::InvalidSchema(format!("field '{}' is missing a 'type'", name))
            })?;
            let kind = FieldKind::parse(type_name).ok_or_else(|| {
                DecodeError::InvalidSchema(format!(
                    "field '{}' has unknown type '{}'",
                    name, type_name
                ))
            })?;

            let optional = raw.get("optional").and_then(Value::as_bool).unwrap_or(false);

            fields.push(FieldSpec {
                name,
                kind,
                optional,
            });
        }

        Ok(Self { fields })
    }
}

impl FieldKind {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "int" => Some(Self::Int),
            "long" => Some(Self::Long),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            "boolean" => Some(Self::Boolean),
            "object" => Some(Self::Object),
            "array" => Some(Self::Array),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Int | Self::Long => value.is_i64() || value.is_u64(),
            Self::Float | Self::Double => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Object => value.is_object(),
            Self::Array => value.is_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn location_schema() -> SchemaDocument {
        SchemaDocument::new(
            2,
            json!({
                "name": "LocationProfile",
                "fields": [
                    { "name": "os", "type": "string" },
                    { "name": "zone", "type": "string" },
                    { "name": "build", "type": "int", "optional": true }
                ]
            }),
        )
    }

    #[test]
    fn test_decodes_full_payload() {
        let decoder = JsonProfileDecoder::new();
        let raw = br#"{"os":"linux","zone":"eu-1","build":42}"#;

        let decoded = decoder.decode(raw, &location_schema()).unwrap();
        assert_eq!(decoded["os"], "linux");
        assert_eq!(decoded["build"], 42);
    }

    #[test]
    fn test_optional_field_may_be_absent_or_null() {
        let decoder = JsonProfileDecoder::new();
        let schema = location_schema();

        assert!(decoder
            .decode(br#"{"os":"linux","zone":"eu-1"}"#, &schema)
            .is_ok());
        assert!(decoder
            .decode(br#"{"os":"linux","zone":"eu-1","build":null}"#, &schema)
            .is_ok());
    }

    #[test]
    fn test_missing_required_field() {
        let decoder = JsonProfileDecoder::new();
        let err = decoder
            .decode(br#"{"os":"linux"}"#, &location_schema())
            .unwrap_err();
        assert!(matches!(err, DecodeError::MissingField(f) if f == "zone"));
    }

    #[test]
    fn test_type_mismatch_names_the_field() {
        let decoder = JsonProfileDecoder::new();
        let err = decoder
            .decode(br#"{"os":"linux","zone":"eu-1","build":"42"}"#, &location_schema())
            .unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TypeMismatch { field, expected: "int" } if field == "build"
        ));
    }

    #[test]
    fn test_rejects_undeclared_field() {
        let decoder = JsonProfileDecoder::new();
        let err = decoder
            .decode(
                br#"{"os":"linux","zone":"eu-1","color":"red"}"#,
                &location_schema(),
            )
            .unwrap_err();
        assert!(matches!(err, DecodeError::UnknownField(f) if f == "color"));
    }

    #[test]
    fn test_rejects_malformed_payload() {
        let decoder = JsonProfileDecoder::new();

        let err = decoder.decode(b"not json", &location_schema()).unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));

        let err = decoder.decode(b"[1,2,3]", &location_schema()).unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn test_rejects_schema_without_fields() {
        let decoder = JsonProfileDecoder::new();
        let schema = SchemaDocument::new(1, json!({ "name": "Empty" }));

        let err = decoder.decode(b"{}", &schema).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidSchema(_)));
    }

    #[test]
    fn test_rejects_unknown_field_type() {
        let decoder = JsonProfileDecoder::new();
        let schema = SchemaDocument::new(
            1,
            json!({ "fields": [ { "name": "os", "type": "blob" } ] }),
        );

        let err = decoder.decode(br#"{"os":"linux"}"#, &schema).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidSchema(_)));
    }

    #[test]
    fn test_decode_is_deterministic() {
        let decoder = JsonProfileDecoder::new();
        let raw = br#"{"os":"linux","zone":"eu-1","build":42}"#;
        let schema = location_schema();

        let first = decoder.decode(raw, &schema).unwrap();
        let second = decoder.decode(raw, &schema).unwrap();
        assert_eq!(first, second);
    }
}
