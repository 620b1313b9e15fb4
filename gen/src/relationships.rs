//! Relationship mapping into structural schemas.
//!
//! Relationships render the same way in every operation's schema: a closed
//! wrapper object whose `data` member carries resource identifiers. Unlike
//! attributes, relationships have no per-operation visibility - the CRUD
//! gates and visibility tables apply to `attributes` only.

use anchor_define::{Cardinality, RelationshipDefinition, ResourceDefinition};

use crate::builder::{ArraySchema, ObjectSchema, StructuralSchema};

/// Builds the `relationships` member of a resource envelope: a closed object
/// holding one wrapper per relationship, in declaration order.
pub fn build_relationships(resource: &ResourceDefinition) -> StructuralSchema {
    let properties = resource
        .relationships
        .iter()
        .map(|(name, def)| (name.to_string(), build_relationship(def)))
        .collect();

    StructuralSchema::Object(ObjectSchema {
        title: None,
        properties,
        required: None,
        nullable: false,
    })
}

/// Builds one relationship wrapper.
///
/// The wrapper is always closed and requires `data`, except for a nullable
/// to-one relationship, whose `data` becomes optional without changing
/// shape. Cardinality decides whether `data` is a single identifier object
/// or an array of them.
///
/// ## Examples
///
/// ```
/// use anchor_define::RelationshipDefinition;
/// use anchor_gen::relationships::build_relationship;
///
/// let wrapper = build_relationship(&RelationshipDefinition::many("post"));
/// let json = serde_json::to_value(&wrapper).unwrap();
/// assert_eq!(json["properties"]["data"]["type"], "array");
/// assert_eq!(json["required"][0], "data");
/// ```
pub fn build_relationship(def: &RelationshipDefinition) -> StructuralSchema {
    let data = match def.cardinality {
        Cardinality::One => identifier(&def.target_resource_type),
        Cardinality::Many => StructuralSchema::Array(ArraySchema {
            items: Box::new(identifier(&def.target_resource_type)),
            nullable: false,
        }),
    };

    let required = if def.is_one() && def.nullable {
        None
    } else {
        Some(vec!["data".to_string()])
    };

    StructuralSchema::Object(ObjectSchema {
        title: None,
        properties: vec![("data".to_string(), data)],
        required,
        nullable: false,
    })
}

/// The resource identifier shape: `{id, type: const(target)}`, closed, both
/// members required.
fn identifier(target: &str) -> StructuralSchema {
    StructuralSchema::Object(ObjectSchema {
        title: None,
        properties: vec![
            ("id".to_string(), StructuralSchema::plain_string()),
            (
                "type".to_string(),
                StructuralSchema::Const(target.to_string()),
            ),
        ],
        required: Some(vec!["id".to_string(), "type".to_string()]),
        nullable: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_define::{AttributeDefinition, Operation, Visibility};
    use serde_json::json;

    #[test]
    fn one_relationship_renders_single_identifier() {
        let wrapper =
            serde_json::to_value(build_relationship(&RelationshipDefinition::one("user"))).unwrap();
        assert_eq!(
            wrapper,
            json!({
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "data": {
                        "type": "object",
                        "additionalProperties": false,
                        "properties": {
                            "id": { "type": "string" },
                            "type": { "const": "user" },
                        },
                        "required": ["id", "type"],
                    },
                },
                "required": ["data"],
            })
        );
    }

    #[test]
    fn many_relationship_renders_identifier_array() {
        let wrapper =
            serde_json::to_value(build_relationship(&RelationshipDefinition::many("comment")))
                .unwrap();
        assert_eq!(wrapper["properties"]["data"]["type"], json!("array"));
        assert_eq!(
            wrapper["properties"]["data"]["items"]["properties"]["type"]["const"],
            json!("comment")
        );
        assert_eq!(wrapper["required"], json!(["data"]));
    }

    #[test]
    fn nullable_one_makes_data_optional_without_changing_shape() {
        let plain = build_relationship(&RelationshipDefinition::one("user"));
        let nullable = build_relationship(&RelationshipDefinition::one("user").nullable());

        let plain_json = serde_json::to_value(&plain).unwrap();
        let nullable_json = serde_json::to_value(&nullable).unwrap();

        assert_eq!(
            plain_json["properties"]["data"],
            nullable_json["properties"]["data"]
        );
        assert_eq!(plain_json["required"], json!(["data"]));
        assert!(nullable_json.get("required").is_none());
    }

    #[test]
    fn nullable_many_still_requires_data() {
        // Nullability is meaningful for to-one only; a many-relationship
        // keeps its required data array.
        let wrapper = serde_json::to_value(build_relationship(
            &RelationshipDefinition::many("tag").nullable(),
        ))
        .unwrap();
        assert_eq!(wrapper["required"], json!(["data"]));
    }

    #[test]
    fn container_lists_relationships_in_order_with_no_required() {
        let resource = ResourceDefinition::new("post")
            .with_relationship("author", RelationshipDefinition::one("user"))
            .with_relationship("comments", RelationshipDefinition::many("comment"));

        let container = serde_json::to_value(build_relationships(&resource)).unwrap();
        assert_eq!(container["additionalProperties"], json!(false));
        assert!(container.get("required").is_none());
        let keys: Vec<_> = container["properties"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, vec!["author", "comments"]);
    }

    #[test]
    fn relationships_ignore_attribute_visibility_rules() {
        // Even when every attribute is omitted from an operation, the
        // relationships member is unchanged.
        let resource = ResourceDefinition::new("post")
            .with_attribute(
                "title",
                AttributeDefinition::string().on_update(Visibility::Omit),
            )
            .with_relationship("author", RelationshipDefinition::one("user"));

        let update = serde_json::to_value(crate::builder::build_resource_schema(
            &resource,
            Operation::Update,
        ))
        .unwrap();
        assert!(update["properties"]["relationships"]["properties"]["author"].is_object());
    }
}
