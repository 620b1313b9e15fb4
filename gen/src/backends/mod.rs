//! Generator backends.
//!
//! Each backend is a pure function from the schema definition (plus the
//! per-run artifact cache) to one serialized artifact string. Backends never
//! write files and never mutate the schema; the driver in
//! [`crate::plan`] decides execution order and the caller decides where the
//! strings go.
//!
//! ## Submodules
//!
//! - [`jsonschema`] - the JSON-Schema validation document
//! - [`typescript`] - TypeScript type declarations derived from that document
//! - [`orbit`] - the Orbit-style client data-model configuration
//!
//! All three share the same signature:
//!
//! ```text
//! fn generate(schema: &SchemaDefinition, cache: &Cache) -> Result<String, GeneratorError>
//! ```

pub mod jsonschema;
pub mod orbit;
pub mod typescript;

/// Comment line prepended to every emitted source artifact.
pub(crate) const GENERATED_NOTICE: &str =
    "// This file was automatically generated by anchor-gen. Do not edit manually.";
