//! Typed-declarations backend.
//!
//! Emits TypeScript declarations: one namespace per resource, holding each
//! enabled operation's validation schema as an `as const` literal and a type
//! alias inferred from it via `json-schema-to-ts`.
//!
//! This backend does not run the builder. It depends on the JSON-Schema
//! backend's artifact being present in the cache and embeds those schemas
//! verbatim, which keeps the two artifacts consistent by construction: a
//! field present in a `UserCreate` validation schema is present in the
//! `UserResource.Create` type because they are the same data.

use std::fmt::Write;

use anchor_define::{Operation, SchemaDefinition};

use crate::backends::GENERATED_NOTICE;
use crate::errors::GeneratorError;
use crate::names::{pascal_case, schema_name};
use crate::plan::{Cache, OutputKind};

/// Generates the TypeScript declarations artifact.
///
/// ## Errors
///
/// Returns [`GeneratorError::MissingDependency`] when the JSON-Schema
/// artifact is not in the cache, and [`GeneratorError::CodeGen`] when the
/// cached artifact cannot be parsed or lacks an expected schema.
///
/// ## Examples
///
/// ```
/// use anchor_define::{AttributeDefinition, ResourceDefinition};
/// use anchor_gen::backends::{jsonschema, typescript};
/// use anchor_gen::plan::{Cache, OutputKind};
///
/// let schema = vec![
///     ResourceDefinition::new("user").with_attribute("name", AttributeDefinition::string()),
/// ];
/// let mut cache = Cache::new();
/// let document = jsonschema::generate(&schema, &cache).unwrap();
/// cache.insert(OutputKind::JsonSchema, document);
///
/// let artifact = typescript::generate(&schema, &cache).unwrap();
/// assert!(artifact.contains("export namespace UserResource"));
/// assert!(artifact.contains("export type Read = FromSchema<typeof ReadSchema>;"));
/// ```
pub fn generate(schema: &SchemaDefinition, cache: &Cache) -> Result<String, GeneratorError> {
    let document =
        cache
            .get(&OutputKind::JsonSchema)
            .ok_or(GeneratorError::MissingDependency {
                backend: OutputKind::TypedDeclarations,
                requires: OutputKind::JsonSchema,
            })?;
    let parsed: serde_json::Value = serde_json::from_str(document).map_err(|e| {
        GeneratorError::CodeGen(format!("cached JSON-Schema artifact is not valid JSON: {e}"))
    })?;

    let mut out = String::new();
    out.push_str(GENERATED_NOTICE);
    out.push_str("\nimport { FromSchema } from \"json-schema-to-ts\";\n");

    for resource in schema {
        let namespace = format!("{}Resource", pascal_case(&resource.resource_type));
        out.push('\n');
        let _ = writeln!(out, "export namespace {namespace} {{");

        let mut first = true;
        // Read leads: it is the shape consumers see most.
        for op in [Operation::Read, Operation::Create, Operation::Update] {
            if !resource.supports(op) {
                continue;
            }
            let name = schema_name(&resource.resource_type, op);
            let literal = parsed.get(&name).ok_or_else(|| {
                GeneratorError::CodeGen(format!(
                    "cached JSON-Schema artifact is missing '{name}'"
                ))
            })?;
            let literal = serde_json::to_string(literal)
                .map_err(|e| GeneratorError::CodeGen(e.to_string()))?;

            if !first {
                out.push('\n');
            }
            first = false;
            let suffix = op.suffix();
            let _ = writeln!(out, "  export const {suffix}Schema = {literal} as const;");
            let _ = writeln!(
                out,
                "  export type {suffix} = FromSchema<typeof {suffix}Schema>;"
            );
        }

        out.push_str("}\n");
    }

    Ok(out)
}
