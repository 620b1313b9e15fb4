//! Pre-generation validation and linting.
//!
//! Definition errors are fatal and surface before any backend runs, so a
//! failing schema never produces partial output. Lints are advisory: the
//! schema still generates, and the driver hands the findings to the caller
//! (the CLI prints them in yellow).

use std::collections::{HashMap, HashSet};
use std::fmt;

use anchor_define::{AttributeDefinition, AttributeKind, SchemaDefinition};

use crate::errors::GeneratorError;
use crate::names::pascal_case;

/// Non-fatal findings about a schema definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintWarning {
    /// A relationship points at a resource type that is not defined in this
    /// schema. The target is passed through to the artifacts unchanged.
    UnresolvedRelationshipTarget {
        /// The resource declaring the relationship.
        resource_type: String,
        /// The relationship's name.
        relationship: String,
        /// The missing target type.
        target: String,
    },
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedRelationshipTarget {
                resource_type,
                relationship,
                target,
            } => write!(
                f,
                "relationship '{relationship}' on resource '{resource_type}' targets '{target}', which is not defined in this schema"
            ),
        }
    }
}

/// Validates a schema definition before generation.
///
/// Checks, in order:
///
/// 1. Every resource has a non-empty type that canonicalizes to a usable
///    identifier.
/// 2. Resource types are unique, both verbatim and after canonicalization
///    (artifact names are derived from the canonical form, so `user-profile`
///    and `user_profile` cannot coexist).
/// 3. Attribute trees and relationship tables carry no empty member names.
///
/// ## Examples
///
/// ```
/// use anchor_define::ResourceDefinition;
/// use anchor_gen::validation::validate_schema;
///
/// let schema = vec![
///     ResourceDefinition::new("user-profile"),
///     ResourceDefinition::new("user_profile"),
/// ];
/// assert!(validate_schema(&schema).is_err());
/// ```
pub fn validate_schema(schema: &SchemaDefinition) -> Result<(), GeneratorError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut canonical_owners: HashMap<String, &str> = HashMap::new();

    for (index, resource) in schema.iter().enumerate() {
        let resource_type = resource.resource_type.as_str();
        if resource_type.trim().is_empty() {
            return Err(GeneratorError::EmptyResourceType { index });
        }

        if !seen.insert(resource_type) {
            return Err(GeneratorError::DuplicateResourceType {
                resource_type: resource_type.to_string(),
            });
        }

        let canonical = pascal_case(resource_type);
        if canonical.is_empty() {
            return Err(GeneratorError::InvalidResourceType {
                resource_type: resource_type.to_string(),
                reason: "it canonicalizes to an empty identifier".to_string(),
            });
        }
        if let Some(first) = canonical_owners.get(canonical.as_str()) {
            return Err(GeneratorError::NamingCollision {
                first: (*first).to_string(),
                second: resource_type.to_string(),
                canonical,
            });
        }
        canonical_owners.insert(canonical, resource_type);

        for (name, attr) in resource.attributes.iter() {
            check_member_name(resource_type, "attributes", name)?;
            check_attribute_tree(resource_type, &format!("attributes.{name}"), attr)?;
        }
        for (name, _) in resource.relationships.iter() {
            if name.trim().is_empty() {
                return Err(GeneratorError::EmptyRelationshipName {
                    resource_type: resource_type.to_string(),
                });
            }
        }
    }

    Ok(())
}

fn check_member_name(
    resource_type: &str,
    path: &str,
    name: &str,
) -> Result<(), GeneratorError> {
    if name.trim().is_empty() {
        return Err(GeneratorError::EmptyAttributeName {
            resource_type: resource_type.to_string(),
            path: path.to_string(),
        });
    }
    Ok(())
}

fn check_attribute_tree(
    resource_type: &str,
    path: &str,
    attr: &AttributeDefinition,
) -> Result<(), GeneratorError> {
    match &attr.kind {
        AttributeKind::Object { properties } => {
            for (name, child) in properties.iter() {
                check_member_name(resource_type, path, name)?;
                check_attribute_tree(resource_type, &format!("{path}.{name}"), child)?;
            }
            Ok(())
        }
        AttributeKind::Array { items } => {
            check_attribute_tree(resource_type, &format!("{path}[]"), items)
        }
        AttributeKind::String(_)
        | AttributeKind::Number(_)
        | AttributeKind::Integer(_)
        | AttributeKind::Boolean => Ok(()),
    }
}

/// Surfaces advisory findings that do not block generation.
///
/// Currently: relationships whose target type is not defined in the schema.
///
/// ## Examples
///
/// ```
/// use anchor_define::{RelationshipDefinition, ResourceDefinition};
/// use anchor_gen::validation::lint_schema;
///
/// let schema = vec![
///     ResourceDefinition::new("user")
///         .with_relationship("posts", RelationshipDefinition::many("article")),
/// ];
/// let warnings = lint_schema(&schema);
/// assert_eq!(warnings.len(), 1);
/// ```
pub fn lint_schema(schema: &SchemaDefinition) -> Vec<LintWarning> {
    let defined: HashSet<&str> = schema.iter().map(|r| r.resource_type.as_str()).collect();
    let mut warnings = Vec::new();

    for resource in schema {
        for (name, rel) in resource.relationships.iter() {
            if !defined.contains(rel.target_resource_type.as_str()) {
                warnings.push(LintWarning::UnresolvedRelationshipTarget {
                    resource_type: resource.resource_type.clone(),
                    relationship: name.to_string(),
                    target: rel.target_resource_type.clone(),
                });
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_define::{AttributeDefinition, RelationshipDefinition, ResourceDefinition};

    #[test]
    fn accepts_a_well_formed_schema() {
        let schema = vec![
            ResourceDefinition::new("user")
                .with_attribute("name", AttributeDefinition::string())
                .with_relationship("posts", RelationshipDefinition::many("post")),
            ResourceDefinition::new("post"),
        ];
        assert!(validate_schema(&schema).is_ok());
    }

    #[test]
    fn rejects_empty_resource_type() {
        let schema = vec![ResourceDefinition::new("user"), ResourceDefinition::new("")];
        match validate_schema(&schema).unwrap_err() {
            GeneratorError::EmptyResourceType { index } => assert_eq!(index, 1),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_exact_duplicate_type() {
        let schema = vec![ResourceDefinition::new("user"), ResourceDefinition::new("user")];
        assert!(matches!(
            validate_schema(&schema).unwrap_err(),
            GeneratorError::DuplicateResourceType { resource_type } if resource_type == "user"
        ));
    }

    #[test]
    fn rejects_canonical_collision_across_conventions() {
        let schema = vec![
            ResourceDefinition::new("user-profile"),
            ResourceDefinition::new("user_profile"),
        ];
        match validate_schema(&schema).unwrap_err() {
            GeneratorError::NamingCollision {
                first,
                second,
                canonical,
            } => {
                assert_eq!(first, "user-profile");
                assert_eq!(second, "user_profile");
                assert_eq!(canonical, "UserProfile");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_type_with_no_identifier_characters() {
        let schema = vec![ResourceDefinition::new("---")];
        assert!(matches!(
            validate_schema(&schema).unwrap_err(),
            GeneratorError::InvalidResourceType { .. }
        ));
    }

    #[test]
    fn rejects_empty_attribute_name_at_depth() {
        let schema = vec![ResourceDefinition::new("user").with_attribute(
            "settings",
            AttributeDefinition::object([("", AttributeDefinition::string())]),
        )];
        match validate_schema(&schema).unwrap_err() {
            GeneratorError::EmptyAttributeName {
                resource_type,
                path,
            } => {
                assert_eq!(resource_type, "user");
                assert_eq!(path, "attributes.settings");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_relationship_name() {
        let schema = vec![
            ResourceDefinition::new("user")
                .with_relationship("", RelationshipDefinition::one("post")),
        ];
        assert!(matches!(
            validate_schema(&schema).unwrap_err(),
            GeneratorError::EmptyRelationshipName { .. }
        ));
    }

    #[test]
    fn dangling_relationship_target_is_a_lint_not_an_error() {
        let schema = vec![
            ResourceDefinition::new("user")
                .with_relationship("posts", RelationshipDefinition::many("article")),
        ];
        assert!(validate_schema(&schema).is_ok());

        let warnings = lint_schema(&schema);
        assert_eq!(
            warnings,
            vec![LintWarning::UnresolvedRelationshipTarget {
                resource_type: "user".to_string(),
                relationship: "posts".to_string(),
                target: "article".to_string(),
            }]
        );
        let rendered = warnings[0].to_string();
        assert!(rendered.contains("'article'"));
    }

    #[test]
    fn resolved_targets_do_not_warn() {
        let schema = vec![
            ResourceDefinition::new("user")
                .with_relationship("posts", RelationshipDefinition::many("post")),
            ResourceDefinition::new("post"),
        ];
        assert!(lint_schema(&schema).is_empty());
    }
}
