//! Artifact writing.
//!
//! Generation itself is pure; everything filesystem-shaped lives here. Each
//! requested artifact is written to its default filename under the output
//! directory using a temp-file + rename pattern, so a crash mid-write never
//! leaves a truncated artifact behind.

use std::fs;
use std::path::Path;

use anchor_define::SchemaDefinition;

use crate::errors::GeneratorError;
use crate::plan::{GenerationOutcome, OutputKind, run_plan};

/// Writes content to a file atomically using temp file + rename.
///
/// Parent directories are created as needed. Other processes observe either
/// the old or the new content, never a mix.
///
/// ## Errors
///
/// Returns [`GeneratorError::Write`] if directories cannot be created, the
/// temp file cannot be written, or the rename fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::Write {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::Write {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::Write {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Runs the generation plan and writes the requested artifacts.
///
/// With `dry_run` set, artifacts are printed to stdout instead of written.
/// Writing only begins after every backend has succeeded, so a generation
/// failure never leaves a partial artifact set on disk.
///
/// ## Arguments
///
/// * `schema` - The resource definitions to generate from
/// * `requested` - Output kinds to produce (empty means all)
/// * `out_dir` - Directory the artifacts are written into
/// * `dry_run` - Print artifacts instead of writing files
///
/// ## Returns
///
/// The generation outcome (artifacts and lint warnings), also useful for
/// callers that want the strings without touching the filesystem.
pub fn generate_and_write(
    schema: &SchemaDefinition,
    requested: &[OutputKind],
    out_dir: &Path,
    dry_run: bool,
) -> Result<GenerationOutcome, GeneratorError> {
    let outcome = run_plan(schema, requested)?;

    if dry_run {
        for (kind, artifact) in &outcome.artifacts {
            println!("=== {} ===\n{}\n", kind.default_filename(), artifact);
        }
    } else {
        for (kind, artifact) in &outcome.artifacts {
            write_atomic(&out_dir.join(kind.default_filename()), artifact)?;
        }
    }

    Ok(outcome)
}
