//! Structural schema validation.
//!
//! The schema language is a small subset: a schema is itself a [`Value`],
//! and conformance is decided by shape alone. Scalar content is never
//! compared.

use crate::value::Value;

/// Checks whether `value` conforms to `schema`.
///
/// Rules:
///
/// - a `Null` schema accepts every value;
/// - otherwise the variants must match;
/// - an object schema requires each of its names to be present in the
///   value with a conforming child; extra names in the value are allowed;
/// - an empty array schema accepts any array, otherwise the first schema
///   element is the element schema for every value element;
/// - matching scalar variants conform regardless of content.
pub fn validate(schema: &Value, value: &Value) -> bool {
    match (schema, value) {
        (Value::Null, _) => true,
        (Value::Array(schema_array), Value::Array(value_array)) => {
            match schema_array.get(0) {
                None => true,
                Some(element_schema) => value_array
                    .iter()
                    .all(|element| validate(element_schema, element)),
            }
        }
        (Value::Object(schema_object), Value::Object(value_object)) => {
            if schema_object.is_empty() {
                return true;
            }
            // A value with fewer pairs than the schema is missing something.
            if value_object.len() < schema_object.len() {
                return false;
            }
            schema_object.iter().all(|(name, child_schema)| {
                value_object
                    .get(name)
                    .is_some_and(|child| validate(child_schema, child))
            })
        }
        (Value::Bool(_), Value::Bool(_))
        | (Value::Number(_), Value::Number(_))
        | (Value::String(_), Value::String(_)) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn first(text: &str) -> Value {
        parse(&format!("[{text}]"))
            .ok()
            .and_then(|root| root.as_array().and_then(|a| a.get(0)).cloned())
            .unwrap_or(Value::Null)
    }

    #[test]
    fn null_schema_accepts_everything() {
        for text in ["null", "true", "1", "\"s\"", "[1]", "{\"a\":1}"] {
            assert!(validate(&Value::Null, &first(text)));
        }
    }

    #[test]
    fn scalar_schemas_check_tags_only() {
        assert!(validate(&first("0"), &first("42")));
        assert!(validate(&first("\"\""), &first("\"anything\"")));
        assert!(validate(&first("false"), &first("true")));
        assert!(!validate(&first("0"), &first("\"42\"")));
        assert!(!validate(&first("true"), &Value::Null));
    }

    #[test]
    fn object_schema_requires_named_children() {
        let schema = first(r#"{"name":null,"age":0}"#);
        assert!(validate(&schema, &first(r#"{"name":"x","age":30,"extra":true}"#)));
        assert!(!validate(&schema, &first(r#"{"name":"x"}"#)));
        assert!(!validate(&schema, &first(r#"{"name":"x","years":30}"#)));
    }

    #[test]
    fn empty_object_schema_accepts_any_object() {
        assert!(validate(&first("{}"), &first(r#"{"a":1,"b":2}"#)));
        assert!(!validate(&first("{}"), &first("[1]")));
    }

    #[test]
    fn array_schema_applies_first_element_to_all() {
        assert!(validate(&first("[null]"), &first(r#"[1,"x",true]"#)));
        assert!(validate(&first("[0]"), &first("[1,2,3]")));
        assert!(!validate(&first("[0]"), &first(r#"[1,"x"]"#)));
        assert!(validate(&first("[]"), &first(r#"[1,"x"]"#)));
    }

    #[test]
    fn nested_schemas_recurse() {
        let schema = first(r#"{"user":{"name":""},"tags":[""]}"#);
        let good = first(r#"{"user":{"name":"ada","id":1},"tags":["a","b"]}"#);
        let bad = first(r#"{"user":{"id":1},"tags":["a"]}"#);
        assert!(validate(&schema, &good));
        assert!(!validate(&schema, &bad));
    }
}
