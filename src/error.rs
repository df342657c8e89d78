//! Error types for the Meteocat client
//!
//! Every call fails at exactly one stage: local validation before any
//! network attempt, the HTTP exchange itself, or decoding the payload.

use std::fmt;

use thiserror::Error;

use crate::model::ApiError;
use crate::request::common::DateParts;
use crate::request::plan::ResponseShape;

/// Result alias used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Which reference set a code was checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    /// Station identifier, e.g. `D5`
    Station,
    /// Variable identifier, e.g. `32`
    Variable,
    /// Station status, one of `ope`, `des`, `bte`
    Status,
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeKind::Station => f.write_str("station"),
            CodeKind::Variable => f.write_str("variable"),
            CodeKind::Status => f.write_str("status"),
        }
    }
}

/// Local parameter validation failures, raised before any request is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A parameter the endpoint needs was not supplied
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),

    /// A code is not part of its reference set
    #[error("invalid {kind} code `{code}`")]
    InvalidCode {
        /// Reference set the code was checked against
        kind: CodeKind,
        /// The offending code as supplied
        code: String,
    },

    /// Some but not all of year, month and day were supplied
    #[error("incomplete date {0}: year, month and day must all be set or all be empty")]
    InvalidDate(DateParts),

    /// Some of hour, minute and second were left empty
    #[error("incomplete time of day: hour, minute and second must all be set")]
    InvalidTime,

    /// The API key does not have the fixed key length
    #[error("invalid API key format: expected {expected} characters, got {found}")]
    InvalidApiKeyFormat {
        /// Expected key length
        expected: usize,
        /// Length of the supplied key
        found: usize,
    },
}

/// Failures of the HTTP exchange
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, TLS or protocol failure
    #[error("HTTP request failed: {0}")]
    Network(String),

    /// The transport gave up waiting for the server
    #[error("HTTP request timed out: {0}")]
    Timeout(String),

    /// The request descriptor could not be turned into an HTTP request
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The server answered with a non-2xx status
    #[error("API returned status {status}: {}", status_message(.api_error, .body))]
    Status {
        /// HTTP status code
        status: u16,
        /// Request id echoed by the server, if any
        request_id: Option<String>,
        /// Legacy `{message, cod}` error body, when the body had that shape
        api_error: Option<ApiError>,
        /// Raw body, truncated
        body: String,
    },
}

fn status_message(api_error: &Option<ApiError>, body: &str) -> String {
    match api_error {
        Some(e) => e.message.clone(),
        None => body.to_string(),
    }
}

impl TransportError {
    /// HTTP status attached to this error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Payload could not be decoded into the planned shape
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Body is not valid JSON or its fields have unexpected types
    #[error("failed to decode {len} byte payload as {shape}: {source}")]
    Malformed {
        /// Shape the planner expected
        shape: ResponseShape,
        /// Payload size in bytes
        len: usize,
        /// Underlying parser error
        #[source]
        source: serde_json::Error,
    },

    /// Body is valid JSON but an object arrived where an array was planned, or vice versa
    #[error("expected {shape} but got {found} in {len} byte payload")]
    ShapeMismatch {
        /// Shape the planner expected
        shape: ResponseShape,
        /// JSON kind actually received
        found: &'static str,
        /// Payload size in bytes
        len: usize,
    },
}

impl DecodeError {
    /// Shape the decoder attempted
    pub fn shape(&self) -> ResponseShape {
        match self {
            DecodeError::Malformed { shape, .. } | DecodeError::ShapeMismatch { shape, .. } => *shape,
        }
    }

    /// Size of the payload that failed to decode
    pub fn payload_len(&self) -> usize {
        match self {
            DecodeError::Malformed { len, .. } | DecodeError::ShapeMismatch { len, .. } => *len,
        }
    }
}

/// Top-level error for the Meteocat client
#[derive(Debug, Error)]
pub enum Error {
    /// Parameters rejected before any network access
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// HTTP exchange failed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Response payload could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A reading carried a timestamp in an unknown layout
    #[error("invalid reading timestamp `{value}`")]
    Timestamp {
        /// Timestamp as received
        value: String,
        /// Underlying parser error
        #[source]
        source: chrono::ParseError,
    },

    /// An open-data reading carried a non-numeric value
    #[error("invalid reading value `{value}`")]
    Value {
        /// Value as received
        value: String,
        /// Underlying parser error
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Observations could not be converted to a DataFrame
    #[cfg(feature = "table")]
    #[error("failed to build DataFrame: {0}")]
    Table(#[from] polars_core::error::PolarsError),

    /// JSON serialization of intermediate data failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
