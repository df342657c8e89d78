//! Response processors
//!
//! A processor turns the transport's response into the caller's output. All
//! processors reject non-2xx responses the same way; they differ in what they
//! make of a successful body.
use std::marker::PhantomData;

use crate::error::{Result, TransportError};
use crate::model::ApiError;
use crate::request::plan::Plan;
use crate::response::Response;

pub mod decoder;
#[cfg(feature = "table")]
pub mod table;

pub use decoder::{Decode, Shaped};
#[cfg(feature = "table")]
pub use table::Table;

/// Turns a raw response into an output value
pub trait Processor {
    /// Output produced on success
    type Output;

    /// Process `response` for the request described by `plan`
    fn process<R: Response>(&self, plan: &Plan, response: Result<R>) -> Result<Self::Output>;
}

/// Returns the body untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct Raw;

impl Processor for Raw {
    type Output = String;

    fn process<R: Response>(&self, _plan: &Plan, response: Result<R>) -> Result<String> {
        let resp = successful(response)?;
        Ok(resp.body().to_owned())
    }
}

/// Decodes the body into `T` using the planned response shape
pub struct Typed<T> {
    _output: PhantomData<fn() -> T>,
}

impl<T> Typed<T> {
    /// Create a typed processor
    pub fn new() -> Self {
        Self { _output: PhantomData }
    }
}

impl<T> Default for Typed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Decode> Processor for Typed<T> {
    type Output = T;

    fn process<R: Response>(&self, plan: &Plan, response: Result<R>) -> Result<T> {
        let resp = successful(response)?;
        Ok(decoder::decode(plan, resp.body())?)
    }
}

const MAX_ERROR_BODY: usize = 200;

/// Pass 2xx responses through; turn anything else into [`TransportError::Status`].
///
/// The body of a failed response is only read as the legacy `{message, cod}`
/// error, and only on a best-effort basis.
pub(crate) fn successful<R: Response>(response: Result<R>) -> Result<R> {
    let resp = response?;
    if resp.is_success() {
        return Ok(resp);
    }
    let api_error = serde_json::from_str::<ApiError>(resp.body()).ok();
    log::debug!("request failed with status {}: {:?}", resp.status(), api_error);
    Err(TransportError::Status {
        status: resp.status(),
        request_id: resp.request_id().to_owned(),
        api_error,
        body: truncate_body(resp.body()),
    }
    .into())
}

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
