//! Outbound response and the JSON envelope every route answers with.

use crate::error::FixtureError;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCode(pub u16);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(200);
    pub const CREATED: StatusCode = StatusCode(201);
    pub const NOT_FOUND: StatusCode = StatusCode(404);
    pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode(500);
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        StatusCode(code)
    }
}

/// Value of the envelope's `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Error,
}

/// JSON body shared by every route.
///
/// Fields serialize in declaration order and are omitted when unset, so
/// `/test` renders as `{"status","message","received"}` and `/headers` as
/// `{"status","headers"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub status: Outcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    /// An empty success envelope.
    pub fn success() -> Self {
        Self {
            status: Outcome::Success,
            message: None,
            headers: None,
            received: None,
            error: None,
        }
    }

    /// An error envelope with the given message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: Outcome::Error,
            ..Self::success()
        }
        .message(message)
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn received(mut self, received: Value) -> Self {
        self.received = Some(received);
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Response produced by the router.
#[derive(Debug, Clone)]
pub struct FixtureResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// HTTP headers.
    pub headers: BTreeMap<String, String>,
    /// Response body.
    pub body: Bytes,
}

impl FixtureResponse {
    /// Serialize `data` as a JSON response with the given status.
    pub fn json<T: Serialize>(
        status: impl Into<StatusCode>,
        data: &T,
    ) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_vec(data)?;
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Ok(Self {
            status: status.into(),
            headers,
            body: Bytes::from(body),
        })
    }

    /// The body decoded as text, lossily.
    pub fn text_body(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parse the body as an [`Envelope`].
    pub fn envelope(&self) -> Result<Envelope, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

impl From<FixtureError> for FixtureResponse {
    fn from(err: FixtureError) -> Self {
        let envelope = Envelope::failure("Internal server error").error(err.message);
        // Unreachable in practice: an envelope of strings always serializes.
        FixtureResponse::json(StatusCode::INTERNAL_SERVER_ERROR, &envelope).unwrap_or_else(|_| {
            FixtureResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                headers: BTreeMap::from([(
                    "Content-Type".to_string(),
                    "application/json".to_string(),
                )]),
                body: Bytes::from_static(
                    br#"{"status":"error","message":"Internal server error"}"#,
                ),
            }
        })
    }
}
