//! Client-model backend.
//!
//! Emits the client-side data-model configuration consumed by an
//! Orbit-style record layer: one exported mapping of resource type to
//! `{attributes, relationships}`, where attribute types go through a small
//! fixed scalar lookup (client models have no integer type, so `integer`
//! widens to `number`) and relationships become `hasOne`/`hasMany` entries
//! carrying the target model and the configured inverse.
//!
//! Independent of the cache, and deliberately not gated by `resource.ops`:
//! the client needs the model of every resource it can receive, including
//! ones it can only read.

use serde_json::{Map, Value, json};

use anchor_define::{AttributeKind, SchemaDefinition};

use crate::backends::GENERATED_NOTICE;
use crate::errors::GeneratorError;
use crate::plan::Cache;

/// Scalar type translation between schema types and client model types.
const TYPE_MAPPING: &[(&str, &str)] = &[("integer", "number")];

/// Generates the client-model artifact.
///
/// ## Examples
///
/// ```
/// use anchor_define::{AttributeDefinition, RelationshipDefinition, ResourceDefinition};
/// use anchor_gen::backends::orbit;
/// use anchor_gen::plan::Cache;
///
/// let schema = vec![
///     ResourceDefinition::new("user")
///         .with_attribute("age", AttributeDefinition::integer())
///         .with_relationship("posts", RelationshipDefinition::many("post").with_inverse("author")),
/// ];
/// let artifact = orbit::generate(&schema, &Cache::new()).unwrap();
/// assert!(artifact.contains("\"type\": \"number\""));
/// assert!(artifact.contains("\"kind\": \"hasMany\""));
/// ```
pub fn generate(schema: &SchemaDefinition, _cache: &Cache) -> Result<String, GeneratorError> {
    let mut models = Map::new();

    for resource in schema {
        let mut attributes = Map::new();
        for (name, attr) in resource.attributes.iter() {
            attributes.insert(name.to_string(), json!({ "type": model_type(&attr.kind) }));
        }

        let mut relationships = Map::new();
        for (name, rel) in resource.relationships.iter() {
            let mut entry = Map::new();
            if let Some(inverse) = &rel.inverse_name {
                entry.insert("inverse".to_string(), json!(inverse));
            }
            entry.insert("model".to_string(), json!(rel.target_resource_type));
            entry.insert(
                "kind".to_string(),
                json!(if rel.is_many() { "hasMany" } else { "hasOne" }),
            );
            relationships.insert(name.to_string(), Value::Object(entry));
        }

        models.insert(
            resource.resource_type.clone(),
            json!({ "attributes": attributes, "relationships": relationships }),
        );
    }

    let body = serde_json::to_string_pretty(&Value::Object(models))
        .map_err(|e| GeneratorError::CodeGen(e.to_string()))?;

    Ok(format!(
        "{GENERATED_NOTICE}\nimport {{ ModelDefinition }} from \"@orbit/records\";\n\nexport const Models: Record<string, ModelDefinition> = {body};\n"
    ))
}

/// Maps a schema attribute kind to the client model's type vocabulary.
fn model_type(kind: &AttributeKind) -> &'static str {
    let name = kind.type_name();
    TYPE_MAPPING
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_define::{
        AttributeDefinition, RelationshipDefinition, ResourceDefinition, ResourceOps,
    };
    use serde_json::Value;

    fn models_json(schema: &SchemaDefinition) -> Value {
        let artifact = generate(schema, &Cache::new()).unwrap();
        let body = artifact
            .split_once("= ")
            .map(|(_, rest)| rest.trim_end().trim_end_matches(';'))
            .unwrap();
        serde_json::from_str(body).expect("model mapping must be valid JSON")
    }

    #[test]
    fn integer_widens_to_number_and_others_pass_through() {
        let schema = vec![
            ResourceDefinition::new("user")
                .with_attribute("age", AttributeDefinition::integer())
                .with_attribute("name", AttributeDefinition::string())
                .with_attribute("score", AttributeDefinition::number())
                .with_attribute("active", AttributeDefinition::boolean()),
        ];
        let models = models_json(&schema);
        let attrs = &models["user"]["attributes"];
        assert_eq!(attrs["age"]["type"], "number");
        assert_eq!(attrs["name"]["type"], "string");
        assert_eq!(attrs["score"]["type"], "number");
        assert_eq!(attrs["active"]["type"], "boolean");
    }

    #[test]
    fn relationships_carry_kind_model_and_inverse() {
        let schema = vec![
            ResourceDefinition::new("post")
                .with_relationship(
                    "author",
                    RelationshipDefinition::one("user").with_inverse("posts"),
                )
                .with_relationship("comments", RelationshipDefinition::many("comment")),
        ];
        let models = models_json(&schema);
        assert_eq!(
            models["post"]["relationships"]["author"],
            serde_json::json!({ "inverse": "posts", "model": "user", "kind": "hasOne" })
        );
        // No inverse configured: the key is absent, not null.
        assert_eq!(
            models["post"]["relationships"]["comments"],
            serde_json::json!({ "model": "comment", "kind": "hasMany" })
        );
    }

    #[test]
    fn op_gated_resources_are_still_modeled() {
        let schema = vec![
            ResourceDefinition::new("category")
                .with_ops(ResourceOps::read_only())
                .with_attribute("name", AttributeDefinition::string()),
        ];
        let models = models_json(&schema);
        assert_eq!(models["category"]["attributes"]["name"]["type"], "string");
    }

    #[test]
    fn emits_import_and_export_wrapper() {
        let artifact = generate(&vec![ResourceDefinition::new("user")], &Cache::new()).unwrap();
        assert!(artifact.contains("import { ModelDefinition } from \"@orbit/records\";"));
        assert!(artifact.contains("export const Models: Record<string, ModelDefinition> = {"));
        assert!(artifact.ends_with(";\n"));
    }

    #[test]
    fn artifact_is_byte_stable() {
        let schema = vec![
            ResourceDefinition::new("user").with_attribute("name", AttributeDefinition::string()),
        ];
        assert_eq!(
            generate(&schema, &Cache::new()).unwrap(),
            generate(&schema, &Cache::new()).unwrap()
        );
    }
}
