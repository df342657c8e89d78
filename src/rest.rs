//! REST API endpoints for Meteocat
//!
//! One function per endpoint. Each returns an [`EndpointRequest`](crate::request::call::EndpointRequest)
//! that decodes into the endpoint's typed result; call `.raw()` for the body
//! as received, or `.as_dataframe()` (feature `table`) for observations.
pub mod measurements;
pub mod metadata;
pub mod open_data;
pub mod stations;
