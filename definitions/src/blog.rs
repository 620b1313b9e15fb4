//! Blog resource set definition.
//!
//! A small publishing domain (users, posts, comments) that exercises most of
//! the definition surface: nested objects, arrays, numeric bounds, nullable
//! attributes, server-managed fields omitted from writes, and relationships
//! in both cardinalities.

use anchor_define::{
    AttributeDefinition, NumericBounds, RelationshipDefinition, ResourceDefinition,
    SchemaDefinition, StringConstraints, StringFormat, Visibility,
};

/// Creates the blog resource set.
///
/// ## Resources
///
/// - `user` - authors, with a nested settings object
/// - `post` - articles, authored by users and commented on
/// - `comment` - replies on posts, optionally threaded
///
/// ## Examples
///
/// ```
/// use anchor_definitions::blog::define_blog_schema;
///
/// let schema = define_blog_schema();
/// assert_eq!(schema.len(), 3);
/// assert_eq!(schema[0].resource_type, "user");
/// ```
pub fn define_blog_schema() -> SchemaDefinition {
    vec![define_user(), define_post(), define_comment()]
}

fn define_user() -> ResourceDefinition {
    ResourceDefinition::new("user")
        .with_attribute("name", AttributeDefinition::string())
        .with_attribute(
            "email",
            AttributeDefinition::string_constrained(StringConstraints {
                format: Some(StringFormat::Email),
                max_length: Some(254),
                ..StringConstraints::default()
            })
            .on_create(Visibility::Required),
        )
        .with_attribute("bio", AttributeDefinition::string().nullable())
        .with_attribute(
            "settings",
            AttributeDefinition::object([
                ("theme", AttributeDefinition::string()),
                ("notifications", AttributeDefinition::boolean()),
            ]),
        )
        .with_attribute(
            "joined_at",
            // Server-managed: present on reads, never accepted on writes.
            AttributeDefinition::string_constrained(StringConstraints {
                format: Some(StringFormat::DateTime),
                ..StringConstraints::default()
            })
            .on_create(Visibility::Omit)
            .on_update(Visibility::Omit),
        )
        .with_relationship(
            "posts",
            RelationshipDefinition::many("post").with_inverse("author"),
        )
}

fn define_post() -> ResourceDefinition {
    ResourceDefinition::new("post")
        .with_attribute(
            "title",
            AttributeDefinition::string_constrained(StringConstraints {
                min_length: Some(1),
                max_length: Some(200),
                ..StringConstraints::default()
            })
            .on_create(Visibility::Required),
        )
        .with_attribute("body", AttributeDefinition::string())
        .with_attribute(
            "tags",
            AttributeDefinition::array(AttributeDefinition::string()),
        )
        .with_attribute(
            "rating",
            AttributeDefinition::number_bounded(NumericBounds {
                minimum: Some(0.0),
                maximum: Some(5.0),
                ..NumericBounds::default()
            })
            .nullable(),
        )
        .with_attribute("published", AttributeDefinition::boolean())
        .with_attribute(
            "view_count",
            AttributeDefinition::integer()
                .on_create(Visibility::Omit)
                .on_update(Visibility::Omit),
        )
        .with_relationship(
            "author",
            RelationshipDefinition::one("user").with_inverse("posts"),
        )
        .with_relationship(
            "comments",
            RelationshipDefinition::many("comment").with_inverse("post"),
        )
}

fn define_comment() -> ResourceDefinition {
    ResourceDefinition::new("comment")
        .with_attribute(
            "body",
            AttributeDefinition::string().on_create(Visibility::Required),
        )
        .with_attribute(
            "created_at",
            AttributeDefinition::string_constrained(StringConstraints {
                format: Some(StringFormat::DateTime),
                ..StringConstraints::default()
            })
            .on_create(Visibility::Omit)
            .on_update(Visibility::Omit),
        )
        .with_relationship(
            "post",
            RelationshipDefinition::one("post").with_inverse("comments"),
        )
        .with_relationship(
            "parent",
            RelationshipDefinition::one("comment")
                .with_inverse("replies")
                .nullable(),
        )
}
