//! Catalog resource set definition.
//!
//! A product catalog where taxonomy is managed out of band: categories are
//! read-only through this API, so only their read schema is generated.

use anchor_define::{
    AttributeDefinition, NumericBounds, RelationshipDefinition, ResourceDefinition, ResourceOps,
    SchemaDefinition, Visibility,
};

/// Creates the catalog resource set.
///
/// ## Resources
///
/// - `product` - full CRUD except delete
/// - `category` - read-only
///
/// ## Examples
///
/// ```
/// use anchor_definitions::catalog::define_catalog_schema;
///
/// let schema = define_catalog_schema();
/// assert_eq!(schema.len(), 2);
/// assert!(!schema[1].ops.create);
/// ```
pub fn define_catalog_schema() -> SchemaDefinition {
    vec![define_product(), define_category()]
}

fn define_product() -> ResourceDefinition {
    ResourceDefinition::new("product")
        .with_ops(ResourceOps {
            delete: false,
            ..ResourceOps::all()
        })
        .with_attribute(
            "sku",
            AttributeDefinition::string().on_create(Visibility::Required),
        )
        .with_attribute(
            "price",
            AttributeDefinition::number_bounded(NumericBounds {
                minimum: Some(0.0),
                ..NumericBounds::default()
            })
            .on_create(Visibility::Required),
        )
        .with_attribute(
            "stock",
            AttributeDefinition::integer_bounded(NumericBounds {
                minimum: Some(0.0),
                ..NumericBounds::default()
            }),
        )
        .with_relationship("category", RelationshipDefinition::one("category"))
}

fn define_category() -> ResourceDefinition {
    ResourceDefinition::new("category")
        .with_ops(ResourceOps::read_only())
        .with_attribute("name", AttributeDefinition::string())
        .with_attribute("slug", AttributeDefinition::string())
        .with_relationship(
            "products",
            RelationshipDefinition::many("product").with_inverse("category"),
        )
}
