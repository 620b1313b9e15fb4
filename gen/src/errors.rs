//! Error types for the anchor generator.

use thiserror::Error;

use crate::plan::OutputKind;

/// Errors that can occur during artifact generation.
///
/// Definition errors (the first five variants) are reported before any
/// artifact is produced; there is never partial output. Generation is pure
/// and deterministic, so no failure here is worth retrying: the same input
/// fails the same way every time. Fix the definitions or the invocation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A resource was defined with an empty type name.
    #[error("resource at position {index} has an empty type name")]
    EmptyResourceType {
        /// Position of the offending resource within the schema.
        index: usize,
    },

    /// Two resources share the same type name verbatim.
    #[error("duplicate resource type '{resource_type}'")]
    DuplicateResourceType {
        /// The repeated type name.
        resource_type: String,
    },

    /// A resource type cannot be turned into a usable identifier.
    #[error("resource type '{resource_type}' is invalid: {reason}")]
    InvalidResourceType {
        /// The offending type name.
        resource_type: String,
        /// Explanation of why the type name is invalid.
        reason: String,
    },

    /// Two distinct resource types canonicalize to the same identifier.
    ///
    /// Artifact names are derived from canonicalized resource types, so
    /// `user-profile` and `user_profile` would both claim `UserProfile`.
    #[error("resource types '{first}' and '{second}' both canonicalize to '{canonical}'")]
    NamingCollision {
        /// The type that claimed the identifier first.
        first: String,
        /// The type that collided with it.
        second: String,
        /// The shared canonical identifier.
        canonical: String,
    },

    /// An attribute tree contains an empty property name.
    #[error("resource '{resource_type}' has an empty attribute name under '{path}'")]
    EmptyAttributeName {
        /// The resource whose attribute tree is malformed.
        resource_type: String,
        /// Dotted path of the enclosing object ('attributes' at top level).
        path: String,
    },

    /// A relationship table contains an empty relationship name.
    #[error("resource '{resource_type}' has an empty relationship name")]
    EmptyRelationshipName {
        /// The resource whose relationship table is malformed.
        resource_type: String,
    },

    /// A backend ran before the artifact it depends on was produced.
    ///
    /// The plan resolver orders backends so this cannot happen through the
    /// driver; it fires when a backend is invoked directly out of order.
    #[error("the {backend} backend requires the {requires} artifact in the cache")]
    MissingDependency {
        /// The backend that was invoked.
        backend: OutputKind,
        /// The artifact it needs.
        requires: OutputKind,
    },

    /// Artifact assembly or serialization failed.
    #[error("artifact generation failed: {0}")]
    CodeGen(String),

    /// Invalid CLI or driver configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Failed to write an artifact file.
    #[error("failed to write output file '{path}': {source}")]
    Write {
        /// The path that could not be written.
        path: String,
        #[source]
        source: std::io::Error,
    },
}
