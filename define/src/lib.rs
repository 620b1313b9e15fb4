//! Anchor Definition Library
//!
//! This crate provides types (primitives) for describing REST resources in a
//! declarative way: their attributes, their relationships, and which CRUD
//! operations apply. These definitions are consumed by the `anchor-gen`
//! crate, which derives request-validation schemas, static type
//! declarations, and client-side data models from them.
//!
//! ## Core Types
//!
//! - [`ResourceDefinition`] - One entity type with attributes and relationships
//! - [`AttributeDefinition`] / [`AttributeKind`] - Recursively typed fields
//! - [`RelationshipDefinition`] / [`Cardinality`] - Typed links between resources
//! - [`ResourceOps`] - Per-resource CRUD gates
//! - [`Operation`] / [`Visibility`] / [`AttributeOps`] - Per-operation field visibility
//! - [`SchemaDefinition`] - The ordered set of resources generated as one unit
//! - [`OrderedMap`] - Insertion-ordered tables backing all of the above
//!
//! ## Examples
//!
//! Define a resource with a visibility override and a relationship:
//!
//! ```
//! use anchor_define::{
//!     AttributeDefinition, Operation, RelationshipDefinition, ResourceDefinition,
//!     Visibility, resolve_visibility,
//! };
//!
//! let user = ResourceDefinition::new("user")
//!     .with_attribute("name", AttributeDefinition::string())
//!     .with_attribute(
//!         "email",
//!         AttributeDefinition::string().on_create(Visibility::Required),
//!     )
//!     .with_relationship(
//!         "posts",
//!         RelationshipDefinition::many("post").with_inverse("author"),
//!     );
//!
//! // `name` has no override: optional on create, required on read.
//! let name = user.attributes.get("name").unwrap();
//! assert_eq!(resolve_visibility(name, Operation::Create), Visibility::Optional);
//! assert_eq!(resolve_visibility(name, Operation::Read), Visibility::Required);
//!
//! // `email` pins create explicitly.
//! let email = user.attributes.get("email").unwrap();
//! assert_eq!(resolve_visibility(email, Operation::Create), Visibility::Required);
//! ```
//!
//! ## Resource Sets
//!
//! Complete resource sets (like the blog example) live in the separate
//! `anchor-definitions` crate, which uses these primitives to define real
//! schemas.

pub mod attribute;
pub mod ops;
pub mod ordered;
pub mod prelude;
pub mod relationship;
pub mod resource;

// Re-export main types at crate root
pub use attribute::{
    AttributeDefinition, AttributeKind, NumericBounds, StringConstraints, StringFormat,
};
pub use ops::{AttributeOps, Operation, Visibility, resolve_visibility};
pub use ordered::OrderedMap;
pub use relationship::{Cardinality, RelationshipDefinition};
pub use resource::{ResourceDefinition, ResourceOps, SchemaDefinition};
