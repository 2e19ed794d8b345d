//! Analysis backend client
//!
//! The page talks to two endpoints:
//! - `GET /api/streets/` returning `{"streets": [...]}`
//! - `POST /api/analyze/` returning an array of result items
//!
//! [`AnalysisApi`] is the seam between the page and the transport; the
//! reqwest implementation lives in [`http`].

pub mod http;

use crate::error::{Error, Result};
use crate::model::{SearchQuery, StreetName};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Street list response body
///
/// A missing or `null` `streets` field reads as an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreetsResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub streets: Vec<StreetName>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<StreetName>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<StreetName>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Error body the backend may attach to a failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Trait for analysis backends
pub trait AnalysisApi: Send + Sync {
    /// Fetch the list of valid street names, in backend order
    fn streets(&self) -> impl std::future::Future<Output = Result<Vec<StreetName>>> + Send;

    /// Submit a query and return the decoded response body
    fn analyze(
        &self,
        query: &SearchQuery,
    ) -> impl std::future::Future<Output = Result<Value>> + Send;
}

/// Build the error for a non-success response
///
/// Prefers the `error` field of a JSON body and falls back to the status'
/// canonical reason when the body is not JSON or carries no message.
pub fn status_error(status: u16, body: &str) -> Error {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| canonical_reason(status).to_string());

    Error::Status { status, message }
}

fn canonical_reason(status: u16) -> &'static str {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown Status")
}
