//! Operation request and response value types.
//!
//! These are the shapes the request router parses HTTP traffic into and the
//! shapes processors answer with. They are plain serde values; routing and
//! processing themselves live with the caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A reference to one resource (or a collection) on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    /// The resource id.
    pub id: String,
    /// The resource's wire type.
    #[serde(rename = "type")]
    pub resource_type: String,
}

/// Relationship linkage: one identifier or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Linkage {
    /// To-many linkage.
    Many(Vec<ResourceIdentifier>),
    /// To-one linkage.
    One(ResourceIdentifier),
}

/// One relationship member on a resource payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipObject {
    /// The linked resource(s); absent for an empty nullable to-one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Linkage>,
}

/// A full resource payload as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceObject {
    /// The resource id.
    pub id: String,
    /// The resource's wire type.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Attribute values, in wire order.
    #[serde(default)]
    pub attributes: serde_json::Map<String, Value>,
    /// Relationship members, in wire order.
    #[serde(default)]
    pub relationships: BTreeMap<String, RelationshipObject>,
}

/// Comparison filters applied to one attribute on list reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Greater than.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<String>,
    /// Greater than or equal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gte: Option<String>,
    /// Less than.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<String>,
    /// Less than or equal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte: Option<String>,
    /// Equality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eq: Option<String>,
}

/// Filters keyed by attribute name.
pub type FilterSet = BTreeMap<String, Filter>;

/// A parsed operation request.
///
/// ## Examples
///
/// ```
/// use anchor_api::OperationRequest;
///
/// let request = OperationRequest::Get {
///     resource_type: "user".to_string(),
///     id: "42".to_string(),
///     filters: Default::default(),
/// };
/// assert_eq!(request.resource_type(), "user");
/// assert!(request.payload().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum OperationRequest {
    /// Read one resource by id.
    Get {
        /// The targeted resource type.
        resource_type: String,
        /// The targeted resource id.
        id: String,
        /// Attribute filters.
        #[serde(default)]
        filters: FilterSet,
    },
    /// Read a collection.
    List {
        /// The targeted resource type.
        resource_type: String,
        /// Attribute filters.
        #[serde(default)]
        filters: FilterSet,
    },
    /// Create a resource from a payload.
    Add {
        /// The targeted resource type.
        resource_type: String,
        /// The unvalidated request payload.
        data: Value,
    },
    /// Update a resource from a payload.
    Update {
        /// The targeted resource type.
        resource_type: String,
        /// The targeted resource id.
        id: String,
        /// The unvalidated request payload.
        data: Value,
    },
}

impl OperationRequest {
    /// The resource type this request targets.
    pub fn resource_type(&self) -> &str {
        match self {
            Self::Get { resource_type, .. }
            | Self::List { resource_type, .. }
            | Self::Add { resource_type, .. }
            | Self::Update { resource_type, .. } => resource_type,
        }
    }

    /// The payload carried by a write request, if any.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Add { data, .. } | Self::Update { data, .. } => Some(data),
            Self::Get { .. } | Self::List { .. } => None,
        }
    }
}

/// Response to a single-resource operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleResponse {
    /// The resource, or null when it does not exist.
    pub data: Option<ResourceObject>,
    /// Side-loaded related resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<Vec<ResourceObject>>,
}

/// Response to a collection operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse {
    /// The matching resources.
    pub data: Vec<ResourceObject>,
    /// Side-loaded related resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<Vec<ResourceObject>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resource_type_and_payload_accessors() {
        let add = OperationRequest::Add {
            resource_type: "post".to_string(),
            data: json!({"id": "1"}),
        };
        assert_eq!(add.resource_type(), "post");
        assert_eq!(add.payload(), Some(&json!({"id": "1"})));

        let list = OperationRequest::List {
            resource_type: "post".to_string(),
            filters: FilterSet::new(),
        };
        assert!(list.payload().is_none());
    }

    #[test]
    fn operation_serializes_with_op_tag() {
        let get = OperationRequest::Get {
            resource_type: "user".to_string(),
            id: "7".to_string(),
            filters: FilterSet::new(),
        };
        let json = serde_json::to_value(&get).unwrap();
        assert_eq!(json["op"], "get");
        assert_eq!(json["resource_type"], "user");
    }

    #[test]
    fn linkage_is_untagged_one_or_many() {
        let one: Linkage = serde_json::from_value(json!({"id": "1", "type": "user"})).unwrap();
        assert!(matches!(one, Linkage::One(_)));

        let many: Linkage =
            serde_json::from_value(json!([{"id": "1", "type": "post"}])).unwrap();
        match many {
            Linkage::Many(items) => assert_eq!(items.len(), 1),
            other => panic!("expected many linkage, got {other:?}"),
        }
    }

    #[test]
    fn resource_object_round_trips() {
        let payload = json!({
            "id": "9",
            "type": "post",
            "attributes": { "title": "hello" },
            "relationships": {
                "author": { "data": { "id": "1", "type": "user" } },
                "parent": {},
            },
        });
        let resource: ResourceObject = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(resource.resource_type, "post");
        assert_eq!(resource.attributes["title"], "hello");
        assert!(resource.relationships["parent"].data.is_none());

        let back = serde_json::to_value(&resource).unwrap();
        assert_eq!(back["relationships"]["author"]["data"]["id"], "1");
    }

    #[test]
    fn filters_skip_unset_comparisons() {
        let filter = Filter {
            gte: Some("10".to_string()),
            ..Filter::default()
        };
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json, json!({"gte": "10"}));
    }

    #[test]
    fn single_response_with_missing_resource_is_null_data() {
        let response = SingleResponse {
            data: None,
            included: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, json!({"data": null}));
    }
}
