//! Anchor Artifact Generator
//!
//! Derives validation schemas, typed declarations, and client models from
//! declarative resource definitions.

use std::path::Path;

use clap::Parser;
use colored::Colorize;

use anchor_definitions::blog::define_blog_schema;
use anchor_definitions::catalog::define_catalog_schema;
use anchor_gen::errors::GeneratorError;
use anchor_gen::output::generate_and_write;
use anchor_gen::plan::OutputKind;

/// Anchor artifact generator - transforms resource definitions into
/// validation schemas, typed declarations, and client models
#[derive(Parser, Debug)]
#[command(name = "anchor-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Resource set to generate artifacts for (e.g. "blog")
    #[arg(short, long)]
    schema: String,

    /// Output directory for generated artifacts
    #[arg(short, long, default_value = "generated")]
    output: String,

    /// Artifact kinds to produce (defaults to all)
    #[arg(short, long, value_enum, value_delimiter = ',')]
    kinds: Vec<OutputKind>,

    /// Print generated artifacts without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();

    let schema = match cli.schema.as_str() {
        "blog" => define_blog_schema(),
        "catalog" => define_catalog_schema(),
        other => {
            return Err(GeneratorError::Config(format!(
                "Unknown schema: '{}'. Available schemas: blog, catalog",
                other
            )));
        }
    };

    if cli.verbose > 0 {
        eprintln!("Generating artifacts for schema: {}", cli.schema);
        eprintln!("Output directory: {}", cli.output);
        if cli.dry_run {
            eprintln!("Dry run mode - no files will be written");
        }
    }

    let types: Vec<&str> = schema.iter().map(|r| r.resource_type.as_str()).collect();
    eprintln!("{}", format!("Resources: {}", types.join(", ")).cyan());

    let out_dir = Path::new(&cli.output);
    let outcome = generate_and_write(&schema, &cli.kinds, out_dir, cli.dry_run)?;

    for warning in &outcome.warnings {
        eprintln!("{}", format!("warning: {warning}").yellow());
    }

    for (kind, artifact) in &outcome.artifacts {
        if cli.verbose > 0 {
            eprintln!("{}", format!("Generated {kind} ({} bytes)", artifact.len()).green());
        }
        if !cli.dry_run {
            eprintln!(
                "{}",
                format!("-> Wrote {}", out_dir.join(kind.default_filename()).display()).dimmed()
            );
        }
    }

    Ok(())
}
