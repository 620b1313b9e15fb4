//! Relationship definitions between resources.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// How many related resources a relationship points at.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Cardinality {
    /// Exactly one related resource (or none, when nullable).
    One,
    /// Any number of related resources.
    Many,
}

/// A typed reference from one resource to another.
///
/// Relationships are rendered into every operation's structural schema;
/// unlike attributes they carry no per-operation visibility table.
///
/// ## Examples
///
/// A to-many relationship with a named inverse:
///
/// ```
/// use anchor_define::{Cardinality, RelationshipDefinition};
///
/// let posts = RelationshipDefinition::many("post").with_inverse("author");
/// assert_eq!(posts.cardinality, Cardinality::Many);
/// assert_eq!(posts.inverse_name.as_deref(), Some("author"));
/// ```
///
/// A nullable to-one relationship:
///
/// ```
/// use anchor_define::RelationshipDefinition;
///
/// let avatar = RelationshipDefinition::one("image").nullable();
/// assert!(avatar.nullable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipDefinition {
    /// One related resource or many.
    pub cardinality: Cardinality,
    /// The `type` of the resource this relationship points at.
    ///
    /// Should name another resource in the same schema; a dangling target is
    /// passed through to the artifacts unchanged and surfaced as a lint
    /// warning, never as a generation error.
    pub target_resource_type: String,
    /// The relationship on the target resource pointing back at this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inverse_name: Option<String>,
    /// Whether the relationship may be empty. Meaningful only for
    /// [`Cardinality::One`]; a many-relationship is simply an empty list.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub nullable: bool,
}

impl RelationshipDefinition {
    /// A to-one relationship pointing at `target`.
    pub fn one(target: impl Into<String>) -> Self {
        Self {
            cardinality: Cardinality::One,
            target_resource_type: target.into(),
            inverse_name: None,
            nullable: false,
        }
    }

    /// A to-many relationship pointing at `target`.
    pub fn many(target: impl Into<String>) -> Self {
        Self {
            cardinality: Cardinality::Many,
            target_resource_type: target.into(),
            inverse_name: None,
            nullable: false,
        }
    }

    /// Names the inverse relationship on the target resource.
    pub fn with_inverse(mut self, inverse: impl Into<String>) -> Self {
        self.inverse_name = Some(inverse.into());
        self
    }

    /// Marks the relationship as allowed to be empty.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Returns true for to-one relationships.
    pub fn is_one(&self) -> bool {
        self.cardinality == Cardinality::One
    }

    /// Returns true for to-many relationships.
    pub fn is_many(&self) -> bool {
        self.cardinality == Cardinality::Many
    }
}
