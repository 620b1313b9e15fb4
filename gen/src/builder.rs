//! Recursive structural schema builder.
//!
//! This module turns one [`ResourceDefinition`] into the operation-specific
//! structural schema used by the JSON-Schema backend (and, via the cache, by
//! the typed-declarations backend). The output is its own small IR,
//! [`StructuralSchema`], rather than loose JSON values: the builder matches
//! exhaustively over [`AttributeKind`] and the serializer emits keys in a
//! fixed order, so artifacts are byte-stable across runs.
//!
//! ## Shape Rules
//!
//! - The envelope has fixed properties `id`, `type`, `attributes`,
//!   `relationships`, all four always required, whatever the operation.
//! - Attribute visibility is resolved per operation at every nesting depth:
//!   omitted attributes disappear from properties and required alike,
//!   required ones are listed in their enclosing object's `required`.
//! - Arrays transform their element schema once; they carry no visibility
//!   semantics of their own.
//! - The `ops` control block never reaches the output; nullability is
//!   rendered as a `["<base>", "null"]` type union.
//! - Every object is closed (`additionalProperties: false`).

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use anchor_define::{
    AttributeDefinition, AttributeKind, NumericBounds, Operation, OrderedMap, ResourceDefinition,
    StringConstraints, StringFormat, Visibility, resolve_visibility,
};

use crate::names::schema_name;
use crate::relationships::build_relationships;

/// An operation-specific structural schema.
///
/// Serializes to a JSON-Schema-shaped object. Constructed by
/// [`build_resource_schema`]; the variants mirror [`AttributeKind`] plus the
/// `const` schema used for wire-type discriminators.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuralSchema {
    /// A closed object with ordered properties.
    Object(ObjectSchema),
    /// A homogeneous array.
    Array(ArraySchema),
    /// A string, with whatever constraints the definition carried.
    String(StringSchema),
    /// A number or integer, with whatever bounds the definition carried.
    Numeric(NumericSchema),
    /// A boolean.
    Boolean {
        /// Whether `null` is also acceptable.
        nullable: bool,
    },
    /// A constant string value (`{"const": ...}`).
    Const(String),
}

/// Object schema node.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSchema {
    /// Document-level name; set only on the envelope.
    pub title: Option<String>,
    /// Ordered property map.
    pub properties: Vec<(String, StructuralSchema)>,
    /// Required property names. `None` omits the key entirely;
    /// `Some(vec![])` serializes an explicit empty list.
    pub required: Option<Vec<String>>,
    /// Whether `null` is also acceptable.
    pub nullable: bool,
}

/// Array schema node.
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySchema {
    /// Element schema shared by every item.
    pub items: Box<StructuralSchema>,
    /// Whether `null` is also acceptable.
    pub nullable: bool,
}

/// String schema node.
#[derive(Debug, Clone, PartialEq)]
pub struct StringSchema {
    /// Constraints carried over from the definition.
    pub constraints: StringConstraints,
    /// Whether `null` is also acceptable.
    pub nullable: bool,
}

/// Number / integer schema node.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSchema {
    /// True for `integer`, false for `number`.
    pub integer: bool,
    /// Bounds carried over from the definition.
    pub bounds: NumericBounds,
    /// Whether `null` is also acceptable.
    pub nullable: bool,
}

impl StructuralSchema {
    /// A plain string schema with no constraints.
    pub fn plain_string() -> Self {
        Self::String(StringSchema {
            constraints: StringConstraints::default(),
            nullable: false,
        })
    }

    /// A string schema carrying a semantic format.
    pub fn formatted_string(format: StringFormat) -> Self {
        Self::String(StringSchema {
            constraints: StringConstraints {
                format: Some(format),
                ..StringConstraints::default()
            },
            nullable: false,
        })
    }
}

/// Builds the structural schema of one resource for one operation.
///
/// ## Examples
///
/// ```
/// use anchor_define::{AttributeDefinition, Operation, ResourceDefinition};
/// use anchor_gen::builder::build_resource_schema;
///
/// let user = ResourceDefinition::new("user")
///     .with_attribute("name", AttributeDefinition::string());
///
/// let read = build_resource_schema(&user, Operation::Read);
/// let json = serde_json::to_value(&read).unwrap();
/// assert_eq!(json["title"], "UserRead");
/// assert_eq!(json["properties"]["type"]["const"], "user");
/// assert_eq!(json["properties"]["attributes"]["required"][0], "name");
/// ```
pub fn build_resource_schema(resource: &ResourceDefinition, op: Operation) -> StructuralSchema {
    let properties = vec![
        (
            "id".to_string(),
            StructuralSchema::formatted_string(StringFormat::Uuid),
        ),
        (
            "type".to_string(),
            StructuralSchema::Const(resource.resource_type.clone()),
        ),
        (
            "attributes".to_string(),
            build_attribute_object(&resource.attributes, op, false),
        ),
        ("relationships".to_string(), build_relationships(resource)),
    ];

    StructuralSchema::Object(ObjectSchema {
        title: Some(schema_name(&resource.resource_type, op)),
        properties,
        // The resource envelope itself is never optional.
        required: Some(
            ["id", "attributes", "relationships", "type"]
                .map(String::from)
                .to_vec(),
        ),
        nullable: false,
    })
}

/// Transforms one attribute definition for one operation.
///
/// Visibility is resolved by the enclosing object walk, not here: by the
/// time this runs, the attribute is known to be present, and only its shape
/// (and its children's visibility) remains to be decided.
pub fn build_attribute(def: &AttributeDefinition, op: Operation) -> StructuralSchema {
    match &def.kind {
        AttributeKind::Object { properties } => build_attribute_object(properties, op, def.nullable),
        AttributeKind::Array { items } => StructuralSchema::Array(ArraySchema {
            items: Box::new(build_attribute(items, op)),
            nullable: def.nullable,
        }),
        AttributeKind::String(constraints) => StructuralSchema::String(StringSchema {
            constraints: constraints.clone(),
            nullable: def.nullable,
        }),
        AttributeKind::Number(bounds) => StructuralSchema::Numeric(NumericSchema {
            integer: false,
            bounds: *bounds,
            nullable: def.nullable,
        }),
        AttributeKind::Integer(bounds) => StructuralSchema::Numeric(NumericSchema {
            integer: true,
            bounds: *bounds,
            nullable: def.nullable,
        }),
        AttributeKind::Boolean => StructuralSchema::Boolean {
            nullable: def.nullable,
        },
    }
}

fn build_attribute_object(
    properties: &OrderedMap<AttributeDefinition>,
    op: Operation,
    nullable: bool,
) -> StructuralSchema {
    let mut built = Vec::new();
    let mut required = Vec::new();

    for (name, child) in properties.iter() {
        match resolve_visibility(child, op) {
            Visibility::Omit => continue,
            Visibility::Required => required.push(name.to_string()),
            Visibility::Optional => {}
        }
        built.push((name.to_string(), build_attribute(child, op)));
    }

    StructuralSchema::Object(ObjectSchema {
        title: None,
        properties: built,
        required: Some(required),
        nullable,
    })
}

/// `"type"` value that widens to a null union when nullable.
struct TypeTag {
    base: &'static str,
    nullable: bool,
}

impl Serialize for TypeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.nullable {
            let mut seq = serializer.serialize_seq(Some(2))?;
            seq.serialize_element(self.base)?;
            seq.serialize_element("null")?;
            seq.end()
        } else {
            serializer.serialize_str(self.base)
        }
    }
}

/// Ordered property map serialization.
struct Properties<'a>(&'a [(String, StructuralSchema)]);

impl Serialize for Properties<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, schema) in self.0 {
            map.serialize_entry(name, schema)?;
        }
        map.end()
    }
}

impl Serialize for StructuralSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Object(object) => {
                let mut len = 3;
                if object.title.is_some() {
                    len += 1;
                }
                if object.required.is_some() {
                    len += 1;
                }
                let mut map = serializer.serialize_map(Some(len))?;
                if let Some(title) = &object.title {
                    map.serialize_entry("title", title)?;
                }
                map.serialize_entry(
                    "type",
                    &TypeTag {
                        base: "object",
                        nullable: object.nullable,
                    },
                )?;
                map.serialize_entry("additionalProperties", &false)?;
                map.serialize_entry("properties", &Properties(&object.properties))?;
                if let Some(required) = &object.required {
                    map.serialize_entry("required", required)?;
                }
                map.end()
            }
            Self::Array(array) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry(
                    "type",
                    &TypeTag {
                        base: "array",
                        nullable: array.nullable,
                    },
                )?;
                map.serialize_entry("items", array.items.as_ref())?;
                map.end()
            }
            Self::String(string) => {
                let c = &string.constraints;
                let len = 1
                    + usize::from(c.min_length.is_some())
                    + usize::from(c.max_length.is_some())
                    + usize::from(c.pattern.is_some())
                    + usize::from(c.format.is_some());
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry(
                    "type",
                    &TypeTag {
                        base: "string",
                        nullable: string.nullable,
                    },
                )?;
                if let Some(min_length) = c.min_length {
                    map.serialize_entry("minLength", &min_length)?;
                }
                if let Some(max_length) = c.max_length {
                    map.serialize_entry("maxLength", &max_length)?;
                }
                if let Some(pattern) = &c.pattern {
                    map.serialize_entry("pattern", pattern)?;
                }
                if let Some(format) = &c.format {
                    map.serialize_entry("format", format)?;
                }
                map.end()
            }
            Self::Numeric(numeric) => {
                let b = &numeric.bounds;
                let len = 1
                    + usize::from(b.minimum.is_some())
                    + usize::from(b.maximum.is_some())
                    + usize::from(b.exclusive_minimum.is_some())
                    + usize::from(b.exclusive_maximum.is_some())
                    + usize::from(b.multiple_of.is_some());
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry(
                    "type",
                    &TypeTag {
                        base: if numeric.integer { "integer" } else { "number" },
                        nullable: numeric.nullable,
                    },
                )?;
                if let Some(minimum) = b.minimum {
                    map.serialize_entry("minimum", &minimum)?;
                }
                if let Some(maximum) = b.maximum {
                    map.serialize_entry("maximum", &maximum)?;
                }
                if let Some(exclusive_minimum) = b.exclusive_minimum {
                    map.serialize_entry("exclusiveMinimum", &exclusive_minimum)?;
                }
                if let Some(exclusive_maximum) = b.exclusive_maximum {
                    map.serialize_entry("exclusiveMaximum", &exclusive_maximum)?;
                }
                if let Some(multiple_of) = b.multiple_of {
                    map.serialize_entry("multipleOf", &multiple_of)?;
                }
                map.end()
            }
            Self::Boolean { nullable } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(
                    "type",
                    &TypeTag {
                        base: "boolean",
                        nullable: *nullable,
                    },
                )?;
                map.end()
            }
            Self::Const(value) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("const", value)?;
                map.end()
            }
        }
    }
}
