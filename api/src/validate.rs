//! Payload validation against generated schema artifacts.
//!
//! The generator's JSON-Schema artifact is a document of named validation
//! schemas (`UserCreate`, `UserRead`, ...). [`SchemaSet`] compiles that
//! document once and then checks operation payloads against a named schema,
//! reporting the first failure only - as a wire-shaped [`ApiError`] with a
//! pointer at the rejecting schema location.

use std::collections::BTreeMap;

use jsonschema::Validator;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ApiError;

/// A compiled set of named validation schemas.
///
/// ## Examples
///
/// ```
/// use anchor_api::SchemaSet;
///
/// let artifact = r#"{
///   "UserCreate": {
///     "type": "object",
///     "required": ["id"],
///     "properties": { "id": { "type": "string" } }
///   }
/// }"#;
///
/// let schemas = SchemaSet::from_artifact(artifact).unwrap();
/// assert!(schemas.check("UserCreate", &serde_json::json!({"id": "1"})).is_ok());
/// assert!(schemas.check("UserCreate", &serde_json::json!({})).is_err());
/// ```
#[derive(Debug)]
pub struct SchemaSet {
    validators: BTreeMap<String, Validator>,
}

impl SchemaSet {
    /// Parses a generated JSON-Schema artifact and compiles one validator
    /// per named schema.
    ///
    /// ## Errors
    ///
    /// Returns a `schema_error` (500) when the artifact is not a JSON object
    /// or one of its schemas does not compile. Both indicate a broken or
    /// mismatched artifact, not a client mistake.
    pub fn from_artifact(document: &str) -> Result<Self, ApiError> {
        let parsed: Value = serde_json::from_str(document).map_err(|e| {
            ApiError::schema_error(format!("schema artifact is not valid JSON: {e}"))
        })?;
        let Value::Object(entries) = parsed else {
            return Err(ApiError::schema_error(
                "schema artifact must be a JSON object of named schemas",
            ));
        };

        let mut validators = BTreeMap::new();
        for (name, schema) in entries {
            let validator = jsonschema::validator_for(&schema).map_err(|e| {
                ApiError::schema_error(format!("schema '{name}' does not compile: {e}"))
            })?;
            validators.insert(name, validator);
        }

        debug!(schemas = validators.len(), "compiled schema artifact");
        Ok(Self { validators })
    }

    /// The names of the compiled schemas, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.validators.keys().map(String::as_str)
    }

    /// Returns true when a schema with this name was compiled.
    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    /// Checks a payload against the named schema.
    ///
    /// Reports the first failure only, as an `input_error` (400) carrying
    /// the validator's message and a pointer at the rejecting schema
    /// location.
    ///
    /// ## Errors
    ///
    /// - `not_supported` (400) when no schema with this name exists - the
    ///   operation was generated away or never defined.
    /// - `input_error` (400) when the payload fails validation.
    pub fn check(&self, name: &str, payload: &Value) -> Result<(), ApiError> {
        let validator = self.validators.get(name).ok_or_else(|| {
            warn!(schema = name, "no validation schema for operation");
            ApiError::not_supported()
        })?;

        match validator.validate(payload) {
            Ok(()) => {
                debug!(schema = name, "payload accepted");
                Ok(())
            }
            Err(error) => {
                let pointer = error.schema_path.to_string();
                warn!(schema = name, %pointer, "payload rejected");
                Err(ApiError::input_error(error.to_string(), Some(pointer)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn artifact() -> String {
        json!({
            "WidgetCreate": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "id": { "type": "string" },
                    "count": { "type": "integer", "minimum": 0 },
                },
                "required": ["id"],
            },
        })
        .to_string()
    }

    #[test]
    fn compiles_named_schemas() {
        let schemas = SchemaSet::from_artifact(&artifact()).unwrap();
        assert!(schemas.contains("WidgetCreate"));
        assert_eq!(schemas.names().collect::<Vec<_>>(), vec!["WidgetCreate"]);
    }

    #[test]
    fn valid_payload_passes() {
        let schemas = SchemaSet::from_artifact(&artifact()).unwrap();
        assert!(
            schemas
                .check("WidgetCreate", &json!({"id": "w1", "count": 3}))
                .is_ok()
        );
    }

    #[test]
    fn first_failure_is_reported_with_pointer() {
        let schemas = SchemaSet::from_artifact(&artifact()).unwrap();
        let err = schemas.check("WidgetCreate", &json!({"count": 3})).unwrap_err();
        assert_eq!(err.code, "input_error");
        assert_eq!(err.status, 400);
        let pointer = err.source.unwrap().pointer.unwrap();
        assert!(pointer.contains("required"), "pointer was {pointer}");
    }

    #[test]
    fn unknown_schema_name_is_not_supported() {
        let schemas = SchemaSet::from_artifact(&artifact()).unwrap();
        let err = schemas.check("WidgetUpdate", &json!({})).unwrap_err();
        assert_eq!(err.code, "not_supported");
    }

    #[test]
    fn malformed_artifact_is_a_schema_error() {
        let err = SchemaSet::from_artifact("not json").unwrap_err();
        assert_eq!(err.code, "schema_error");
        assert_eq!(err.status, 500);

        let err = SchemaSet::from_artifact("[1, 2]").unwrap_err();
        assert_eq!(err.code, "schema_error");
    }
}
