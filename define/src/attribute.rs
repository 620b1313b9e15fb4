//! Attribute definitions for resources.
//!
//! An attribute is a scalar or nested field on a resource. The shape is an
//! explicit sum type ([`AttributeKind`]), so the recursive builders in the
//! generator match exhaustively instead of probing for properties at runtime.
//! Every attribute additionally carries a nullability flag and an optional
//! per-operation visibility table ([`AttributeOps`]).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::ops::{AttributeOps, Operation, Visibility};
use crate::ordered::OrderedMap;

/// A single attribute on a resource.
///
/// ## Examples
///
/// A plain string attribute:
///
/// ```
/// use anchor_define::AttributeDefinition;
///
/// let name = AttributeDefinition::string();
/// assert!(name.is_scalar());
/// assert!(!name.nullable);
/// ```
///
/// A constrained, nullable email that must be supplied on create:
///
/// ```
/// use anchor_define::{AttributeDefinition, StringConstraints, StringFormat, Operation, Visibility};
///
/// let email = AttributeDefinition::string_constrained(StringConstraints {
///     format: Some(StringFormat::Email),
///     max_length: Some(254),
///     ..StringConstraints::default()
/// })
/// .nullable()
/// .on_create(Visibility::Required);
///
/// assert!(email.nullable);
/// assert_eq!(email.ops.get(Operation::Create), Some(Visibility::Required));
/// ```
///
/// A nested object:
///
/// ```
/// use anchor_define::AttributeDefinition;
///
/// let settings = AttributeDefinition::object([
///     ("theme", AttributeDefinition::string()),
///     ("compact", AttributeDefinition::boolean()),
/// ]);
/// assert!(settings.is_object());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    /// The attribute's shape and constraints.
    #[serde(flatten)]
    pub kind: AttributeKind,
    /// Whether `null` is an acceptable value in addition to the base type.
    ///
    /// Orthogonal to per-operation visibility: a nullable attribute widens
    /// its type in every operation it appears in.
    #[serde(default, skip_serializing_if = "is_false")]
    pub nullable: bool,
    /// Per-operation visibility overrides. Stripped from every artifact.
    #[serde(default, skip_serializing_if = "AttributeOps::is_empty")]
    pub ops: AttributeOps,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl AttributeDefinition {
    fn with_kind(kind: AttributeKind) -> Self {
        Self {
            kind,
            nullable: false,
            ops: AttributeOps::default(),
        }
    }

    /// An unconstrained string attribute.
    pub fn string() -> Self {
        Self::with_kind(AttributeKind::String(StringConstraints::default()))
    }

    /// A string attribute with explicit constraints.
    pub fn string_constrained(constraints: StringConstraints) -> Self {
        Self::with_kind(AttributeKind::String(constraints))
    }

    /// An unconstrained floating-point number attribute.
    pub fn number() -> Self {
        Self::with_kind(AttributeKind::Number(NumericBounds::default()))
    }

    /// A number attribute with explicit bounds.
    pub fn number_bounded(bounds: NumericBounds) -> Self {
        Self::with_kind(AttributeKind::Number(bounds))
    }

    /// An unconstrained integer attribute.
    pub fn integer() -> Self {
        Self::with_kind(AttributeKind::Integer(NumericBounds::default()))
    }

    /// An integer attribute with explicit bounds.
    pub fn integer_bounded(bounds: NumericBounds) -> Self {
        Self::with_kind(AttributeKind::Integer(bounds))
    }

    /// A boolean attribute.
    pub fn boolean() -> Self {
        Self::with_kind(AttributeKind::Boolean)
    }

    /// A nested object attribute with the given named properties.
    pub fn object<K, I>(properties: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, AttributeDefinition)>,
    {
        Self::with_kind(AttributeKind::Object {
            properties: properties.into_iter().collect(),
        })
    }

    /// An array attribute whose elements all match `items`.
    pub fn array(items: AttributeDefinition) -> Self {
        Self::with_kind(AttributeKind::Array {
            items: Box::new(items),
        })
    }

    /// Marks the attribute as accepting `null` in addition to its base type.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Overrides the attribute's visibility for the create operation.
    pub fn on_create(mut self, visibility: Visibility) -> Self {
        self.ops = self.ops.with(Operation::Create, visibility);
        self
    }

    /// Overrides the attribute's visibility for the read operation.
    pub fn on_read(mut self, visibility: Visibility) -> Self {
        self.ops = self.ops.with(Operation::Read, visibility);
        self
    }

    /// Overrides the attribute's visibility for the update operation.
    pub fn on_update(mut self, visibility: Visibility) -> Self {
        self.ops = self.ops.with(Operation::Update, visibility);
        self
    }

    /// Returns true for string, number, integer, and boolean attributes.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self.kind,
            AttributeKind::String(_)
                | AttributeKind::Number(_)
                | AttributeKind::Integer(_)
                | AttributeKind::Boolean
        )
    }

    /// Returns true for object attributes.
    pub fn is_object(&self) -> bool {
        matches!(self.kind, AttributeKind::Object { .. })
    }

    /// Returns true for array attributes.
    pub fn is_array(&self) -> bool {
        matches!(self.kind, AttributeKind::Array { .. })
    }
}

/// The shape of an attribute, tagged by its wire `type` name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AttributeKind {
    /// UTF-8 text, optionally constrained by length, pattern, or format.
    String(StringConstraints),
    /// Floating-point number, optionally bounded.
    Number(NumericBounds),
    /// Whole number, optionally bounded.
    Integer(NumericBounds),
    /// True or false.
    Boolean,
    /// Nested object with an ordered property map.
    Object {
        /// Named child attributes, in declaration order.
        properties: OrderedMap<AttributeDefinition>,
    },
    /// Homogeneous list.
    Array {
        /// The element shape shared by every item.
        items: Box<AttributeDefinition>,
    },
}

impl AttributeKind {
    /// Returns the wire name of this shape (`"string"`, `"integer"`, ...).
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Integer(_) => "integer",
            Self::Boolean => "boolean",
            Self::Object { .. } => "object",
            Self::Array { .. } => "array",
        }
    }
}

/// Constraints applicable to string attributes.
///
/// All fields are optional; an all-`None` value constrains nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringConstraints {
    /// Minimum length in characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// Maximum length in characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Regular expression the value must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Named semantic format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<StringFormat>,
}

/// Named string formats understood by downstream validators.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StringFormat {
    Uri,
    UriReference,
    Email,
    DateTime,
    Time,
    Date,
    Duration,
    Hostname,
    Uuid,
    Ipv4,
    Ipv6,
    Regex,
}

/// Bounds applicable to number and integer attributes.
///
/// All fields are optional; an all-`None` value constrains nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericBounds {
    /// Inclusive lower bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Inclusive upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// Exclusive lower bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<f64>,
    /// Exclusive upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<f64>,
    /// The value must be a multiple of this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,
}
