//! Anchor artifact generator library.
//!
//! This crate derives downstream artifacts from the declarative resource
//! definitions in `anchor-define`. One schema in, three formats out:
//!
//! - a JSON-Schema document with one validation schema per resource per
//!   enabled CRUD operation, honoring per-field visibility rules
//! - TypeScript type declarations that embed those schemas and infer static
//!   types from them
//! - a client-side data-model configuration for an Orbit-style record layer
//!
//! ## Modules
//!
//! - [`builder`] - Recursive structural schema construction per operation
//! - [`relationships`] - Relationship shapes shared by every operation
//! - [`backends`] - The three artifact generators
//! - [`plan`] - Backend dependency resolution and the generation driver
//! - [`validation`] - Pre-generation checks and lint warnings
//! - [`names`] - Canonical identifier conversion
//! - [`output`] - Atomic artifact writing
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use anchor_definitions::blog::define_blog_schema;
//! use anchor_gen::plan::{OutputKind, run_plan};
//!
//! let schema = define_blog_schema();
//! let outcome = run_plan(&schema, &[OutputKind::JsonSchema, OutputKind::ClientModel]).unwrap();
//!
//! assert_eq!(outcome.artifacts.len(), 2);
//! assert!(outcome.warnings.is_empty());
//! ```
//!
//! ## Determinism
//!
//! Generation is synchronous, single-threaded, and pure: the same schema
//! always yields byte-identical artifacts. The only ordering constraint is a
//! data dependency - typed declarations re-serialize the JSON-Schema
//! artifact out of the per-run cache - and the plan resolver enforces it.

pub mod backends;
pub mod builder;
pub mod errors;
pub mod names;
pub mod output;
pub mod plan;
pub mod relationships;
pub mod validation;
