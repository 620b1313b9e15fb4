//! Convenient re-exports for working with anchor definitions.
//!
//! ## Examples
//!
//! ```
//! use anchor_define::prelude::*;
//!
//! let post = ResourceDefinition::new("post")
//!     .with_attribute("title", AttributeDefinition::string().on_create(Visibility::Required))
//!     .with_attribute("body", AttributeDefinition::string().nullable())
//!     .with_relationship("author", RelationshipDefinition::one("user"));
//!
//! assert!(post.supports(Operation::Create));
//! ```

pub use crate::attribute::{
    AttributeDefinition, AttributeKind, NumericBounds, StringConstraints, StringFormat,
};
pub use crate::ops::{AttributeOps, Operation, Visibility, resolve_visibility};
pub use crate::ordered::OrderedMap;
pub use crate::relationship::{Cardinality, RelationshipDefinition};
pub use crate::resource::{ResourceDefinition, ResourceOps, SchemaDefinition};
