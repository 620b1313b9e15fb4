//! Resource definitions and the schema they form together.

use serde::{Deserialize, Serialize};

use crate::attribute::AttributeDefinition;
use crate::ops::Operation;
use crate::ordered::OrderedMap;
use crate::relationship::RelationshipDefinition;

/// Which CRUD operations a resource supports.
///
/// Everything defaults to enabled; definitions only mention the operations
/// they switch off. `delete` is tracked for routing purposes but produces no
/// structural schema (a delete request has no body).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceOps {
    /// Whether this resource can be created.
    #[serde(default = "enabled")]
    pub create: bool,
    /// Whether this resource can be read.
    #[serde(default = "enabled")]
    pub read: bool,
    /// Whether this resource can be updated.
    #[serde(default = "enabled")]
    pub update: bool,
    /// Whether this resource can be deleted.
    #[serde(default = "enabled")]
    pub delete: bool,
}

fn enabled() -> bool {
    true
}

impl Default for ResourceOps {
    fn default() -> Self {
        Self {
            create: true,
            read: true,
            update: true,
            delete: true,
        }
    }
}

impl ResourceOps {
    /// All operations enabled (the default).
    pub fn all() -> Self {
        Self::default()
    }

    /// Only reads enabled; create, update, and delete are switched off.
    pub fn read_only() -> Self {
        Self {
            create: false,
            read: true,
            update: false,
            delete: false,
        }
    }

    /// Returns true when every operation is enabled.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Returns whether structural schemas are generated for `op`.
    pub fn enables(&self, op: Operation) -> bool {
        match op {
            Operation::Create => self.create,
            Operation::Read => self.read,
            Operation::Update => self.update,
        }
    }
}

/// One entity type exposed by the API.
///
/// The `resource_type` doubles as the unique identifier within a schema and
/// as the wire name (`"type"` on resource payloads, the `const` in generated
/// validation schemas, the key in generated client models).
///
/// ## Examples
///
/// ```
/// use anchor_define::{AttributeDefinition, RelationshipDefinition, ResourceDefinition};
///
/// let user = ResourceDefinition::new("user")
///     .with_attribute("name", AttributeDefinition::string())
///     .with_relationship("posts", RelationshipDefinition::many("post").with_inverse("author"));
///
/// assert_eq!(user.resource_type, "user");
/// assert_eq!(user.attributes.len(), 1);
/// assert_eq!(user.relationships.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDefinition {
    /// Unique identifier and wire name of this resource.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Which CRUD operations the resource supports.
    #[serde(default, skip_serializing_if = "ResourceOps::is_default")]
    pub ops: ResourceOps,
    /// The resource's attributes, in declaration order.
    #[serde(default)]
    pub attributes: OrderedMap<AttributeDefinition>,
    /// The resource's relationships, in declaration order.
    #[serde(default)]
    pub relationships: OrderedMap<RelationshipDefinition>,
}

impl ResourceDefinition {
    /// Creates a resource with no attributes or relationships and every
    /// operation enabled.
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            ops: ResourceOps::default(),
            attributes: OrderedMap::new(),
            relationships: OrderedMap::new(),
        }
    }

    /// Adds (or replaces) an attribute, keeping declaration order.
    pub fn with_attribute(mut self, name: impl Into<String>, attr: AttributeDefinition) -> Self {
        self.attributes.insert(name, attr);
        self
    }

    /// Adds (or replaces) a relationship, keeping declaration order.
    pub fn with_relationship(
        mut self,
        name: impl Into<String>,
        relationship: RelationshipDefinition,
    ) -> Self {
        self.relationships.insert(name, relationship);
        self
    }

    /// Replaces the operation gates.
    pub fn with_ops(mut self, ops: ResourceOps) -> Self {
        self.ops = ops;
        self
    }

    /// Returns whether structural schemas are generated for `op`.
    pub fn supports(&self, op: Operation) -> bool {
        self.ops.enables(op)
    }
}

/// An ordered set of resource definitions, generated as one unit.
///
/// Constructed once by the caller and treated as immutable for the duration
/// of a generation run. Resource types must be unique within the sequence;
/// the generator checks this (including collisions introduced by name
/// canonicalization) before producing any artifact.
pub type SchemaDefinition = Vec<ResourceDefinition>;
