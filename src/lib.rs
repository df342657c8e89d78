//! Rust client library for the Meteocat XEMA weather API
//!
//! The API answers some endpoints with either a single JSON object or an
//! array, depending on which filters were sent. Every call is therefore
//! planned first: parameters are validated locally, the request is built and
//! the response shape is decided, and only then is the request sent and the
//! body decoded against that shape.
//!
//! # Quick Start
//!
//! ```no_run
//! use meteocat::Meteocat;
//! use meteocat::rest::measurements;
//! use meteocat::request::params::{ParamOption, ParameterSet};
//! use meteocat::request::common::DateParts;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Meteocat::default().with_key("0123456789012345678901234567890123456789")?;
//!     let params = ParameterSet::new([
//!         ParamOption::variable("32"),
//!         ParamOption::date(DateParts::new("2023", "01", "06")),
//!     ])?;
//!     let readings = measurements::by_day(&client, params).get().await?;
//!     println!("{} stations", readings.station_count());
//!     Ok(())
//! }
//! ```
//!
//! # Output
//!
//! Endpoint functions return typed results by default. Switch the processor
//! before calling `.get()`:
//!
//! ```no_run
//! use meteocat::Meteocat;
//! use meteocat::rest::metadata;
//! use meteocat::request::params::ParameterSet;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Meteocat::default().with_key("0123456789012345678901234567890123456789")?;
//!
//! // Raw JSON response
//! let json = metadata::all_variables(&client, ParameterSet::default()).raw().get().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **`hyper`** (default) - Uses [`hyper`](https://docs.rs/hyper) as the HTTP client (lightweight and fast).
//!
//! - **`reqwest`** - Alternative HTTP client using [`reqwest`](https://docs.rs/reqwest) (more features).
//!   To use reqwest instead: `default-features = false, features = ["reqwest"]`.
//!
//! - **`dotenvy`** - Enables loading API keys from environment variables via [`dotenvy`](https://docs.rs/dotenvy).
//!   Adds `Meteocat::new()` which loads `METEOCAT_API_KEY` from `.env` or environment.
//!   Without this feature, use `Meteocat::default().with_key("your_key")` instead.
//!
//! - **`table`** - Enables Polars DataFrame output via [`polars`](https://docs.rs/polars).

#![warn(missing_docs)]

mod client;
pub mod error;
pub mod model;
pub mod reference;
pub mod request;
pub mod response;
pub mod rest;
pub mod validate;

pub mod execute;
pub mod processor;

pub use error::{Error, Result};
pub use model::{Observation, Observations};
pub use request::Request;
pub use request::plan::{Endpoint, ResponseShape};
pub use response::Response;

/// The main Meteocat API client with the default HTTP client.
///
/// - When `hyper` feature is enabled (default): uses `HyperClient`
/// - When `reqwest` feature is enabled: uses `reqwest::Client`
/// - Otherwise: use `client::Meteocat<YourClient>` directly
#[cfg(feature = "reqwest")]
pub type Meteocat = client::Meteocat<reqwest::Client>;

/// The main Meteocat API client with the default HTTP client.
///
/// - When `hyper` feature is enabled (default): uses `HyperClient`
/// - When `reqwest` feature is enabled: uses `reqwest::Client`
/// - Otherwise: use `client::Meteocat<YourClient>` directly
#[cfg(all(feature = "hyper", not(feature = "reqwest")))]
pub type Meteocat = client::Meteocat<request::HyperClient>;

// When neither reqwest nor hyper is enabled, re-export the generic Meteocat
#[cfg(not(any(feature = "reqwest", feature = "hyper")))]
pub use client::Meteocat;

/// Client generic over its transport, for custom [`Request`] implementations
pub type MeteocatWith<C> = client::Meteocat<C>;

#[cfg(any(feature = "reqwest", feature = "hyper"))]
static STATIC_INSTANCE: std::sync::LazyLock<arc_swap::ArcSwap<Meteocat>> =
    std::sync::LazyLock::new(|| arc_swap::ArcSwap::from_pointee(Meteocat::default()));

/// Initialize a static Meteocat instance.
#[cfg(any(feature = "reqwest", feature = "hyper"))]
pub fn initialize(client: Meteocat) -> std::sync::Arc<Meteocat> {
    STATIC_INSTANCE.swap(std::sync::Arc::from(client))
}

/// Get the static Meteocat instance.
#[cfg(any(feature = "reqwest", feature = "hyper"))]
pub fn instance() -> std::sync::Arc<Meteocat> {
    STATIC_INSTANCE.load().clone()
}
