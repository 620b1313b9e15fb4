//! CRUD operations and per-operation attribute visibility.
//!
//! Every attribute can be classified independently for each generated
//! operation: it may be required, optional, or omitted entirely. When a
//! definition does not say anything, the operation's hard-coded default
//! applies (`create` → optional, `read` → required, `update` → optional).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::attribute::AttributeDefinition;

/// The operations a structural schema can be generated for.
///
/// This enum deliberately excludes `delete`: a delete request carries no
/// resource body, so there is nothing to derive a schema from. Whether a
/// resource can be deleted at all is tracked by
/// [`ResourceOps::delete`](crate::resource::ResourceOps).
///
/// ## Examples
///
/// Parse from string:
///
/// ```
/// use std::str::FromStr;
/// use anchor_define::Operation;
///
/// let op = Operation::from_str("create").unwrap();
/// assert_eq!(op, Operation::Create);
/// ```
///
/// Display as lowercase:
///
/// ```
/// use anchor_define::Operation;
///
/// assert_eq!(Operation::Read.to_string(), "read");
/// ```
///
/// Iterate over all operations:
///
/// ```
/// use anchor_define::Operation;
/// use strum::IntoEnumIterator;
///
/// let ops: Vec<_> = Operation::iter().collect();
/// assert_eq!(ops.len(), 3);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    /// POST to a collection - create a new resource
    Create,
    /// GET on a resource or collection
    Read,
    /// PATCH on a resource - partial update
    Update,
}

impl Operation {
    /// Returns the visibility applied to attributes that carry no explicit
    /// override for this operation.
    ///
    /// Reads must return complete resources, so attributes default to
    /// required on `read`. Writes accept partial payloads, so attributes
    /// default to optional on `create` and `update`.
    ///
    /// ## Examples
    ///
    /// ```
    /// use anchor_define::{Operation, Visibility};
    ///
    /// assert_eq!(Operation::Create.default_visibility(), Visibility::Optional);
    /// assert_eq!(Operation::Read.default_visibility(), Visibility::Required);
    /// assert_eq!(Operation::Update.default_visibility(), Visibility::Optional);
    /// ```
    pub fn default_visibility(self) -> Visibility {
        match self {
            Self::Create | Self::Update => Visibility::Optional,
            Self::Read => Visibility::Required,
        }
    }

    /// Returns the capitalized suffix used in generated artifact names
    /// (e.g. `UserCreate`, `UserRead`).
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Read => "Read",
            Self::Update => "Update",
        }
    }
}

/// Per-operation classification of an attribute.
///
/// - `Required`: the field must be present and is listed in the enclosing
///   object's `required` list.
/// - `Optional`: the field may be present.
/// - `Omit`: the field does not appear in the operation's structural schema
///   at all - neither in the property map nor in any required list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Visibility {
    /// Field must be present.
    Required,
    /// Field may be present.
    Optional,
    /// Field is excluded from the operation entirely.
    Omit,
}

/// Explicit visibility overrides for a single attribute.
///
/// Any operation left as `None` falls back to
/// [`Operation::default_visibility`]. The table is a generation-time control
/// block only; it is stripped before anything is serialized into an artifact.
///
/// ## Examples
///
/// ```
/// use anchor_define::{AttributeOps, Operation, Visibility};
///
/// let ops = AttributeOps::default().with(Operation::Create, Visibility::Required);
/// assert_eq!(ops.get(Operation::Create), Some(Visibility::Required));
/// assert_eq!(ops.get(Operation::Read), None);
/// assert!(!ops.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeOps {
    /// Override for the create operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<Visibility>,
    /// Override for the read operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<Visibility>,
    /// Override for the update operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<Visibility>,
}

impl AttributeOps {
    /// Returns true when no override is set for any operation.
    pub fn is_empty(&self) -> bool {
        self.create.is_none() && self.read.is_none() && self.update.is_none()
    }

    /// Returns the explicit override for `op`, if any.
    pub fn get(&self, op: Operation) -> Option<Visibility> {
        match op {
            Operation::Create => self.create,
            Operation::Read => self.read,
            Operation::Update => self.update,
        }
    }

    /// Returns a copy with the override for `op` set to `visibility`.
    pub fn with(mut self, op: Operation, visibility: Visibility) -> Self {
        match op {
            Operation::Create => self.create = Some(visibility),
            Operation::Read => self.read = Some(visibility),
            Operation::Update => self.update = Some(visibility),
        }
        self
    }
}

/// Resolves the effective visibility of an attribute for one operation.
///
/// Returns the attribute's explicit override when one is set, otherwise the
/// operation's hard-coded default. This function is pure: it is invoked once
/// per attribute per target output per operation and has no side effects.
///
/// ## Examples
///
/// ```
/// use anchor_define::{resolve_visibility, AttributeDefinition, Operation, Visibility};
///
/// let plain = AttributeDefinition::string();
/// assert_eq!(resolve_visibility(&plain, Operation::Create), Visibility::Optional);
/// assert_eq!(resolve_visibility(&plain, Operation::Read), Visibility::Required);
///
/// let pinned = AttributeDefinition::string().on_update(Visibility::Omit);
/// assert_eq!(resolve_visibility(&pinned, Operation::Update), Visibility::Omit);
/// ```
pub fn resolve_visibility(attr: &AttributeDefinition, op: Operation) -> Visibility {
    attr.ops.get(op).unwrap_or_else(|| op.default_visibility())
}
