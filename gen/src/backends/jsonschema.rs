//! JSON-Schema backend.
//!
//! Produces one JSON document containing a named validation schema per
//! resource per enabled operation. The document key (and the schema `title`)
//! is the canonicalized resource type concatenated with the operation suffix
//! (`UserCreate`, `UserRead`, ...). Keys appear in schema order, operations
//! in create/read/update order, exactly as built - the artifact is
//! byte-stable across runs.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use strum::IntoEnumIterator;

use anchor_define::{Operation, SchemaDefinition};

use crate::builder::{StructuralSchema, build_resource_schema};
use crate::errors::GeneratorError;
use crate::names::schema_name;
use crate::plan::Cache;

/// Generates the JSON-Schema artifact.
///
/// Ignores the cache: this backend has no dependencies.
///
/// ## Examples
///
/// ```
/// use anchor_define::{AttributeDefinition, ResourceDefinition};
/// use anchor_gen::backends::jsonschema;
/// use anchor_gen::plan::Cache;
///
/// let schema = vec![
///     ResourceDefinition::new("user").with_attribute("name", AttributeDefinition::string()),
/// ];
/// let artifact = jsonschema::generate(&schema, &Cache::new()).unwrap();
/// assert!(artifact.contains("\"UserCreate\""));
/// assert!(artifact.contains("\"UserRead\""));
/// assert!(artifact.contains("\"UserUpdate\""));
/// ```
pub fn generate(schema: &SchemaDefinition, _cache: &Cache) -> Result<String, GeneratorError> {
    let mut document = Vec::new();

    for resource in schema {
        for op in Operation::iter() {
            if resource.supports(op) {
                let name = schema_name(&resource.resource_type, op);
                document.push((name, build_resource_schema(resource, op)));
            }
        }
    }

    serde_json::to_string_pretty(&SchemaDocument(document))
        .map_err(|e| GeneratorError::CodeGen(e.to_string()))
}

/// The full document: an ordered mapping of schema name to schema.
struct SchemaDocument(Vec<(String, StructuralSchema)>);

impl Serialize for SchemaDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, schema) in &self.0 {
            map.serialize_entry(name, schema)?;
        }
        map.end()
    }
}
