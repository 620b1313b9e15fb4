//! Wire-shaped API errors.
//!
//! Errors crossing the API boundary carry a machine-readable code, an
//! HTTP-style status, and optionally a pointer at the schema location that
//! rejected the payload. They serialize to the error-object shape clients
//! expect: `{status, code, title?, detail?, source: {pointer?}}`.

use serde::Serialize;

/// A machine-readable API error.
///
/// ## Examples
///
/// ```
/// use anchor_api::ApiError;
///
/// let err = ApiError::not_found();
/// assert_eq!(err.status, 404);
/// assert_eq!(err.code, "not_found");
///
/// let json = serde_json::to_value(&err).unwrap();
/// assert_eq!(json["status"], 404);
/// assert!(json.get("source").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// HTTP-style status.
    pub status: u16,
    /// Stable machine-readable code.
    pub code: String,
    /// Short human-readable summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Longer human-readable explanation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Where the error originated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.code,
            self.status,
            self.detail.as_deref().unwrap_or("no detail")
        )
    }
}

impl std::error::Error for ApiError {}

/// Pointer at the origin of an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorSource {
    /// JSON pointer into the schema that rejected the payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointer: Option<String>,
}

impl ApiError {
    /// The requested resource does not exist.
    pub fn not_found() -> Self {
        Self {
            status: 404,
            code: "not_found".to_string(),
            title: None,
            detail: Some("This resource was not found".to_string()),
            source: None,
        }
    }

    /// The endpoint exists but the operation is not supported on it.
    pub fn not_supported() -> Self {
        Self {
            status: 400,
            code: "not_supported".to_string(),
            title: None,
            detail: Some("This endpoint is not supported".to_string()),
            source: None,
        }
    }

    /// The request path does not match any routable shape.
    pub fn invalid_path(detail: impl Into<String>) -> Self {
        Self {
            status: 400,
            code: "invalid_path".to_string(),
            title: None,
            detail: Some(detail.into()),
            source: None,
        }
    }

    /// A write operation arrived without a body.
    pub fn body_missing() -> Self {
        Self {
            status: 400,
            code: "body_missing".to_string(),
            title: None,
            detail: Some("Request body is missing".to_string()),
            source: None,
        }
    }

    /// The request body is not valid JSON.
    pub fn invalid_json() -> Self {
        Self {
            status: 400,
            code: "invalid_json".to_string(),
            title: None,
            detail: Some("JSON was formatted incorrectly".to_string()),
            source: None,
        }
    }

    /// A payload failed validation against its generated schema.
    ///
    /// `pointer` names the schema location that rejected the payload.
    pub fn input_error(detail: impl Into<String>, pointer: Option<String>) -> Self {
        Self {
            status: 400,
            code: "input_error".to_string(),
            title: None,
            detail: Some(detail.into()),
            source: Some(ErrorSource { pointer }),
        }
    }

    /// A generated schema artifact could not be loaded or compiled.
    ///
    /// This is a server-side configuration problem, not a client error.
    pub fn schema_error(detail: impl Into<String>) -> Self {
        Self {
            status: 500,
            code: "schema_error".to_string(),
            title: None,
            detail: Some(detail.into()),
            source: None,
        }
    }
}

/// The wire document wrapping one or more errors: `{"errors": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDocument {
    /// The errors being reported.
    pub errors: Vec<ApiError>,
}

impl From<ApiError> for ErrorDocument {
    fn from(error: ApiError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}
