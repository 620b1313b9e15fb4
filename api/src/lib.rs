//! Anchor API boundary types.
//!
//! This crate holds the shapes that cross the API boundary around a set of
//! anchor-generated resources:
//!
//! - [`OperationRequest`] and the response types - what a request router
//!   parses HTTP traffic into and what processors answer with
//! - [`ApiError`] / [`ErrorDocument`] - machine-readable wire errors with an
//!   HTTP-style status, a stable code, and a schema-location pointer
//! - [`SchemaSet`] - compiled validators over a generated JSON-Schema
//!   artifact, reporting the first failure per check
//!
//! Routing and persistence belong to the caller; this crate only defines
//! the contract and the validation step.
//!
//! ## Example
//!
//! ```
//! use anchor_api::{OperationRequest, SchemaSet};
//!
//! let artifact = r#"{
//!   "NoteCreate": {
//!     "type": "object",
//!     "required": ["type"],
//!     "properties": { "type": { "const": "note" } }
//!   }
//! }"#;
//! let schemas = SchemaSet::from_artifact(artifact).unwrap();
//!
//! let request = OperationRequest::Add {
//!     resource_type: "note".to_string(),
//!     data: serde_json::json!({"type": "note"}),
//! };
//! let payload = request.payload().unwrap();
//! assert!(schemas.check("NoteCreate", payload).is_ok());
//! ```

pub mod error;
pub mod operation;
pub mod validate;

pub use error::{ApiError, ErrorDocument, ErrorSource};
pub use operation::{
    Filter, FilterSet, Linkage, ListResponse, OperationRequest, RelationshipObject,
    ResourceIdentifier, ResourceObject, SingleResponse,
};
pub use validate::SchemaSet;
