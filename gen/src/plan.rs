//! Generation plan resolution and the driver.
//!
//! Backends are identified by [`OutputKind`] and may depend on each other's
//! artifacts: the typed-declarations backend re-serializes the JSON-Schema
//! backend's output instead of re-running the builder. Those edges are
//! declared explicitly on the kind and resolved once into a topological
//! execution order, rather than being an implicit convention between
//! backends. Within one run, artifacts flow through a write-once [`Cache`]
//! that is dropped when the run ends; no state survives across runs.

use std::collections::BTreeMap;

use clap::ValueEnum;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use anchor_define::SchemaDefinition;

use crate::backends;
use crate::errors::GeneratorError;
use crate::validation::{self, LintWarning};

/// The artifact formats the generator can produce.
///
/// ## Examples
///
/// ```
/// use anchor_gen::plan::OutputKind;
///
/// assert_eq!(OutputKind::JsonSchema.to_string(), "json-schema");
/// assert_eq!(OutputKind::TypedDeclarations.dependencies(), &[OutputKind::JsonSchema]);
/// assert!(OutputKind::ClientModel.dependencies().is_empty());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    ValueEnum,
)]
#[strum(serialize_all = "kebab-case")]
pub enum OutputKind {
    /// One JSON document of named per-operation validation schemas.
    JsonSchema,
    /// TypeScript declarations deriving static types from those schemas.
    TypedDeclarations,
    /// TypeScript client-side data-model configuration.
    ClientModel,
}

impl OutputKind {
    /// Artifacts this backend reads from the cache.
    pub fn dependencies(self) -> &'static [OutputKind] {
        match self {
            Self::TypedDeclarations => &[Self::JsonSchema],
            Self::JsonSchema | Self::ClientModel => &[],
        }
    }

    /// The filename this artifact is written to under the output directory.
    pub fn default_filename(self) -> &'static str {
        match self {
            Self::JsonSchema => "schemas.json",
            Self::TypedDeclarations => "resources.ts",
            Self::ClientModel => "models.ts",
        }
    }
}

/// Per-run artifact cache, keyed by the producing backend.
///
/// Write-once-then-read: the driver inserts each artifact exactly once, in
/// plan order, and later backends only read.
pub type Cache = BTreeMap<OutputKind, String>;

/// The result of one generation run.
#[derive(Debug)]
pub struct GenerationOutcome {
    /// Requested artifacts in plan order, ready to be written.
    pub artifacts: Vec<(OutputKind, String)>,
    /// Non-fatal findings about the schema.
    pub warnings: Vec<LintWarning>,
}

/// Resolves the requested kinds into a topologically valid execution order.
///
/// Dependencies are inserted ahead of their dependents even when they were
/// not requested themselves (they run to feed the cache; only requested
/// kinds end up in the outcome). Duplicates collapse; otherwise the
/// requested order is preserved.
///
/// ## Examples
///
/// ```
/// use anchor_gen::plan::{OutputKind, resolve_plan};
///
/// let plan = resolve_plan(&[OutputKind::TypedDeclarations]);
/// assert_eq!(plan, vec![OutputKind::JsonSchema, OutputKind::TypedDeclarations]);
/// ```
pub fn resolve_plan(requested: &[OutputKind]) -> Vec<OutputKind> {
    fn visit(kind: OutputKind, plan: &mut Vec<OutputKind>) {
        for dep in kind.dependencies() {
            visit(*dep, plan);
        }
        if !plan.contains(&kind) {
            plan.push(kind);
        }
    }

    let mut plan = Vec::new();
    for kind in requested {
        visit(*kind, &mut plan);
    }
    plan
}

/// Runs a single backend against the schema and the current cache.
///
/// ## Errors
///
/// Returns [`GeneratorError::MissingDependency`] when the backend needs an
/// artifact the cache does not hold - the driver's plan ordering prevents
/// this, so it only fires on direct out-of-order invocation.
pub fn run_backend(
    kind: OutputKind,
    schema: &SchemaDefinition,
    cache: &Cache,
) -> Result<String, GeneratorError> {
    match kind {
        OutputKind::JsonSchema => backends::jsonschema::generate(schema, cache),
        OutputKind::TypedDeclarations => backends::typescript::generate(schema, cache),
        OutputKind::ClientModel => backends::orbit::generate(schema, cache),
    }
}

/// Validates the schema, resolves the plan, and runs every backend in order.
///
/// Definition errors are fatal and reported before any backend runs; there
/// is never partial output. Generation itself is deterministic and
/// side-effect-free - the caller decides what to do with the returned
/// artifact strings.
///
/// An empty `requested` slice means all kinds, in declaration order.
///
/// ## Examples
///
/// ```
/// use anchor_definitions::blog::define_blog_schema;
/// use anchor_gen::plan::{OutputKind, run_plan};
///
/// let outcome = run_plan(&define_blog_schema(), &[OutputKind::JsonSchema]).unwrap();
/// assert_eq!(outcome.artifacts.len(), 1);
/// assert!(outcome.artifacts[0].1.contains("\"UserRead\""));
/// ```
pub fn run_plan(
    schema: &SchemaDefinition,
    requested: &[OutputKind],
) -> Result<GenerationOutcome, GeneratorError> {
    validation::validate_schema(schema)?;
    let warnings = validation::lint_schema(schema);

    let all: Vec<OutputKind>;
    let requested = if requested.is_empty() {
        all = OutputKind::iter().collect();
        &all
    } else {
        requested
    };

    let plan = resolve_plan(requested);
    let mut cache = Cache::new();
    for kind in &plan {
        let artifact = run_backend(*kind, schema, &cache)?;
        cache.insert(*kind, artifact);
    }

    let mut artifacts = Vec::new();
    for kind in plan {
        if requested.contains(&kind)
            && let Some(artifact) = cache.remove(&kind)
        {
            artifacts.push((kind, artifact));
        }
    }

    Ok(GenerationOutcome {
        artifacts,
        warnings,
    })
}
