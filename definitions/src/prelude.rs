//! Convenient re-exports for working with resource set definitions.
//!
//! ## Examples
//!
//! ```
//! use anchor_definitions::prelude::*;
//!
//! let schema = define_blog_schema();
//! assert_eq!(schema[0].resource_type, "user");
//! ```

pub use crate::blog::define_blog_schema;
pub use crate::catalog::define_catalog_schema;
