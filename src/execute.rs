//! Execute trait for running API requests
//!
//! The `Execute` trait provides the `.get()` method used by every endpoint
//! request to plan, send and decode a call.

use crate::error::Result;

/// Trait for executing API requests
///
/// Implemented by [`crate::request::call::EndpointRequest`].
pub trait Execute {
    /// The output type of the request
    type Output;

    /// Execute the request and return the result
    fn get(self) -> impl std::future::Future<Output = Result<Self::Output>>;
}
