//! End-to-end generation tests over the bundled resource sets.
//!
//! These exercise the full pipeline - validation, plan resolution, every
//! backend, artifact writing - against the blog and catalog definitions.

use serde_json::Value;
use tempfile::TempDir;

use anchor_define::{
    AttributeDefinition, RelationshipDefinition, ResourceDefinition, Visibility,
};
use anchor_definitions::blog::define_blog_schema;
use anchor_definitions::catalog::define_catalog_schema;
use anchor_gen::output::generate_and_write;
use anchor_gen::plan::{OutputKind, run_plan};

fn artifact(outcome: &anchor_gen::plan::GenerationOutcome, kind: OutputKind) -> &str {
    outcome
        .artifacts
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, text)| text.as_str())
        .expect("artifact must be present")
}

fn json_schema_document(schema: &anchor_define::SchemaDefinition) -> Value {
    let outcome = run_plan(schema, &[OutputKind::JsonSchema]).unwrap();
    serde_json::from_str(artifact(&outcome, OutputKind::JsonSchema)).unwrap()
}

#[test]
fn blog_document_covers_every_resource_and_operation() {
    let doc = json_schema_document(&define_blog_schema());
    let keys: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();
    assert_eq!(
        keys,
        vec![
            "UserCreate",
            "UserRead",
            "UserUpdate",
            "PostCreate",
            "PostRead",
            "PostUpdate",
            "CommentCreate",
            "CommentRead",
            "CommentUpdate",
        ]
    );
}

#[test]
fn user_create_requires_nothing_but_user_read_requires_name() {
    // A resource {type: "user", attributes: {name: string}, relationships:
    // {posts: many post inverse author}} must leave `name` optional on
    // create and require it on read.
    let schema = vec![
        ResourceDefinition::new("user")
            .with_attribute("name", AttributeDefinition::string())
            .with_relationship(
                "posts",
                RelationshipDefinition::many("post").with_inverse("author"),
            ),
        ResourceDefinition::new("post"),
    ];
    let doc = json_schema_document(&schema);

    let create_required = doc["UserCreate"]["properties"]["attributes"]["required"]
        .as_array()
        .unwrap();
    assert!(create_required.is_empty());

    let read_required = doc["UserRead"]["properties"]["attributes"]["required"]
        .as_array()
        .unwrap();
    assert_eq!(read_required, &[Value::String("name".to_string())]);
}

#[test]
fn nested_create_override_lands_in_nested_required_list() {
    // An object attribute {bio: {type: string, ops: {create: required}}}
    // must render bio under properties and in the nested required list.
    let schema = vec![ResourceDefinition::new("user").with_attribute(
        "profile",
        AttributeDefinition::object([(
            "bio",
            AttributeDefinition::string().on_create(Visibility::Required),
        )]),
    )];
    let doc = json_schema_document(&schema);

    let profile = &doc["UserCreate"]["properties"]["attributes"]["properties"]["profile"];
    assert!(profile["properties"]["bio"].is_object());
    assert_eq!(profile["required"], serde_json::json!(["bio"]));
}

#[test]
fn omitted_fields_never_reach_the_update_schema() {
    let doc = json_schema_document(&define_blog_schema());
    for schema_name in ["UserUpdate", "UserCreate"] {
        let attributes = &doc[schema_name]["properties"]["attributes"];
        assert!(
            attributes["properties"].get("joined_at").is_none(),
            "{schema_name} must not contain joined_at"
        );
        let required = attributes["required"].as_array().unwrap();
        assert!(!required.iter().any(|v| v == "joined_at"));
    }
    // And it is still part of the read schema.
    assert!(
        doc["UserRead"]["properties"]["attributes"]["properties"]["joined_at"].is_object()
    );
}

#[test]
fn relationship_cardinalities_render_distinct_data_shapes() {
    let doc = json_schema_document(&define_blog_schema());

    let author =
        &doc["PostRead"]["properties"]["relationships"]["properties"]["author"]["properties"]
            ["data"];
    assert_eq!(author["type"], "object");
    assert_eq!(author["properties"]["type"]["const"], "user");

    let comments =
        &doc["PostRead"]["properties"]["relationships"]["properties"]["comments"]["properties"]
            ["data"];
    assert_eq!(comments["type"], "array");
    assert_eq!(comments["items"]["properties"]["type"]["const"], "comment");
}

#[test]
fn nullable_one_relationship_makes_data_optional() {
    let doc = json_schema_document(&define_blog_schema());
    let relationships = &doc["CommentRead"]["properties"]["relationships"]["properties"];

    // `post` is a plain to-one: data is required.
    assert_eq!(relationships["post"]["required"], serde_json::json!(["data"]));
    // `parent` is nullable: same shape, no required list.
    assert!(relationships["parent"].get("required").is_none());
    assert_eq!(
        relationships["post"]["properties"]["data"]["type"],
        relationships["parent"]["properties"]["data"]["type"],
    );
}

#[test]
fn catalog_read_only_resource_generates_read_schema_only() {
    let doc = json_schema_document(&define_catalog_schema());
    let keys: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();
    assert!(keys.contains(&"CategoryRead".to_string()));
    assert!(!keys.contains(&"CategoryCreate".to_string()));
    assert!(!keys.contains(&"CategoryUpdate".to_string()));
    // Product keeps all three.
    assert!(keys.contains(&"ProductCreate".to_string()));
}

#[test]
fn generation_is_idempotent_across_runs() {
    let schema = define_blog_schema();
    let first = run_plan(&schema, &[]).unwrap();
    let second = run_plan(&schema, &[]).unwrap();
    assert_eq!(first.artifacts, second.artifacts);
}

#[test]
fn typed_declarations_cover_every_field_of_the_create_schema() {
    let schema = define_blog_schema();
    let outcome = run_plan(
        &schema,
        &[OutputKind::JsonSchema, OutputKind::TypedDeclarations],
    )
    .unwrap();
    let doc: Value =
        serde_json::from_str(artifact(&outcome, OutputKind::JsonSchema)).unwrap();
    let declarations = artifact(&outcome, OutputKind::TypedDeclarations);

    // Every attribute present in the JSON-Schema create output appears in
    // the embedded Create literal, because the literal is the same schema.
    let user_create = serde_json::to_string(&doc["UserCreate"]).unwrap();
    let namespace_at = declarations.find("export namespace UserResource").unwrap();
    let create_at = declarations[namespace_at..]
        .find(&format!("export const CreateSchema = {user_create} as const;"))
        .map(|at| namespace_at + at);
    assert!(create_at.is_some(), "UserCreate literal must be embedded verbatim");

    for field in ["name", "email", "bio", "settings"] {
        assert!(user_create.contains(&format!("\"{field}\"")));
    }
}

#[test]
fn typed_declarations_requested_alone_still_work() {
    let outcome = run_plan(&define_blog_schema(), &[OutputKind::TypedDeclarations]).unwrap();
    assert_eq!(outcome.artifacts.len(), 1);
    assert!(outcome.artifacts[0].1.contains("export namespace UserResource"));
}

#[test]
fn client_model_maps_cardinalities_and_widens_integers() {
    let outcome = run_plan(&define_blog_schema(), &[OutputKind::ClientModel]).unwrap();
    let models = artifact(&outcome, OutputKind::ClientModel);

    // view_count is an integer attribute; client models widen it.
    assert!(models.contains("\"view_count\": {\n        \"type\": \"number\"\n      }"));
    assert!(models.contains("\"kind\": \"hasMany\""));
    assert!(models.contains("\"kind\": \"hasOne\""));
    assert!(models.contains("\"inverse\": \"author\""));
    assert!(models.contains("\"model\": \"post\""));
}

#[test]
fn dangling_targets_warn_but_generate() {
    let schema = vec![
        ResourceDefinition::new("user")
            .with_relationship("posts", RelationshipDefinition::many("article")),
    ];
    let outcome = run_plan(&schema, &[OutputKind::JsonSchema]).unwrap();
    assert_eq!(outcome.warnings.len(), 1);

    // The unresolved target passes through opaquely.
    let doc: Value = serde_json::from_str(artifact(&outcome, OutputKind::JsonSchema)).unwrap();
    assert_eq!(
        doc["UserRead"]["properties"]["relationships"]["properties"]["posts"]["properties"]
            ["data"]["items"]["properties"]["type"]["const"],
        "article"
    );
}

#[test]
fn colliding_resource_names_fail_before_any_artifact() {
    let schema = vec![
        ResourceDefinition::new("user-profile"),
        ResourceDefinition::new("user_profile"),
    ];
    let temp_dir = TempDir::new().unwrap();

    let result = generate_and_write(&schema, &[], temp_dir.path(), false);

    assert!(result.is_err());
    assert!(std::fs::read_dir(temp_dir.path()).unwrap().next().is_none());
}

#[test]
fn full_pipeline_writes_all_three_artifacts() {
    let temp_dir = TempDir::new().unwrap();

    let outcome =
        generate_and_write(&define_blog_schema(), &[], temp_dir.path(), false).unwrap();

    assert!(outcome.warnings.is_empty());
    for name in ["schemas.json", "resources.ts", "models.ts"] {
        let path = temp_dir.path().join(name);
        assert!(path.exists(), "{name} must be written");
        assert!(!std::fs::read_to_string(path).unwrap().is_empty());
    }
}
