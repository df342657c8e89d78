//! Main Meteocat API client
use std::fmt;
use std::sync::Arc;

use crate::error::{Result, ValidationError};
use crate::reference::ReferenceData;
use crate::request::Request;
use crate::request::params::ParameterSet;
use crate::request::plan::{BaseUrls, Endpoint, Plan, Planner};
use crate::validate::{API_KEY_LEN, valid_api_key};

/// The main Meteocat API client.
///
/// Holds everything shared between calls: the HTTP capability, the API key,
/// the reference codes requests are validated against and the base URLs.
/// Per-call state never lives here, so a client can be shared freely.
///
/// When the `reqwest` feature is enabled, this uses `reqwest::Client` as the default HTTP client.
/// When the `hyper` feature is enabled, this uses `HyperClient` as the default HTTP client.
/// Otherwise, you must provide your own HTTP client that implements [`Request`].
#[cfg(feature = "reqwest")]
#[derive(Clone)]
pub struct Meteocat<Client: Request = reqwest::Client> {
    client: Client,
    api_key: Option<String>,
    reference: Arc<ReferenceData>,
    urls: BaseUrls,
}

/// The main Meteocat API client.
///
/// Holds everything shared between calls: the HTTP capability, the API key,
/// the reference codes requests are validated against and the base URLs.
/// Per-call state never lives here, so a client can be shared freely.
///
/// When the `reqwest` feature is enabled, this uses `reqwest::Client` as the default HTTP client.
/// When the `hyper` feature is enabled, this uses `HyperClient` as the default HTTP client.
/// Otherwise, you must provide your own HTTP client that implements [`Request`].
#[cfg(all(feature = "hyper", not(feature = "reqwest")))]
#[derive(Clone)]
pub struct Meteocat<Client: Request = crate::request::HyperClient> {
    client: Client,
    api_key: Option<String>,
    reference: Arc<ReferenceData>,
    urls: BaseUrls,
}

/// The main Meteocat API client.
///
/// Holds everything shared between calls: the HTTP capability, the API key,
/// the reference codes requests are validated against and the base URLs.
/// Per-call state never lives here, so a client can be shared freely.
///
/// No HTTP client feature is enabled: provide your own client that implements [`Request`].
#[cfg(not(any(feature = "reqwest", feature = "hyper")))]
#[derive(Clone)]
pub struct Meteocat<Client: Request> {
    client: Client,
    api_key: Option<String>,
    reference: Arc<ReferenceData>,
    urls: BaseUrls,
}

impl<Client: Request> Meteocat<Client> {
    /// Create a new Meteocat client using the default HTTP client.
    ///
    /// This method is only available when the `dotenvy` feature is enabled.
    /// It loads the API key from the `METEOCAT_API_KEY` environment variable using dotenvy.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is missing or the key does not have the expected length.
    #[cfg(feature = "dotenvy")]
    pub fn new() -> Result<Self> {
        dotenvy::dotenv().ok(); // a missing .env file is fine

        let api_key =
            std::env::var("METEOCAT_API_KEY").map_err(|_| ValidationError::MissingParameter("METEOCAT_API_KEY"))?;

        Self::from_client(Client::new()).with_key(api_key)
    }

    #[cfg(not(feature = "dotenvy"))]
    /// Create a new Meteocat client with the default HTTP client.
    ///
    /// You must set the API key using [`with_key`](Self::with_key) before
    /// calling any authenticated endpoint.
    pub fn new() -> Self {
        Self::from_client(Client::new())
    }

    /// Create a client around an existing HTTP client, with no API key
    pub fn from_client(client: Client) -> Self {
        Self {
            client,
            api_key: None,
            reference: Arc::new(ReferenceData::default()),
            urls: BaseUrls::default(),
        }
    }

    /// Sets the HTTP client for this instance.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Set the API key for this instance.
    ///
    /// # Errors
    ///
    /// Fails with [`ValidationError::InvalidApiKeyFormat`] unless the key is
    /// exactly 40 characters long.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use meteocat::Meteocat;
    ///
    /// let client = Meteocat::default()
    ///     .with_key("0123456789012345678901234567890123456789")
    ///     .unwrap();
    /// ```
    pub fn with_key(mut self, api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if !valid_api_key(&api_key) {
            return Err(ValidationError::InvalidApiKeyFormat {
                expected: API_KEY_LEN,
                found: api_key.len(),
            }
            .into());
        }
        self.api_key = Some(api_key);
        Ok(self)
    }

    /// Replace the station and variable codes requests are validated against
    pub fn with_reference_data(mut self, reference: impl Into<Arc<ReferenceData>>) -> Self {
        self.reference = reference.into();
        self
    }

    /// Point the authenticated API at another base URL
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.urls.api = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Point the open-data feed at another URL
    pub fn with_open_data_base(mut self, base: impl Into<String>) -> Self {
        self.urls.open_data = base.into();
        self
    }

    /// Get the API key for this instance.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Get a reference to the underlying HTTP client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Reference codes requests are validated against
    pub fn reference_data(&self) -> &ReferenceData {
        &self.reference
    }

    /// Base URLs requests are planned against
    pub fn base_urls(&self) -> &BaseUrls {
        &self.urls
    }

    /// Validate `params` for `endpoint` and build the request, without sending it
    pub fn plan(&self, endpoint: Endpoint, params: &ParameterSet) -> Result<Plan> {
        let plan = Planner::new(&self.reference, &self.urls).plan(endpoint, params, self.api_key())?;
        Ok(plan)
    }
}

// Keeps the API key out of logs.
impl<Client: Request + fmt::Debug> fmt::Debug for Meteocat<Client> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Meteocat")
            .field("client", &self.client)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("urls", &self.urls)
            .finish_non_exhaustive()
    }
}

// Default implementation for reqwest
#[cfg(feature = "reqwest")]
impl Default for Meteocat<reqwest::Client> {
    fn default() -> Self {
        Self::from_client(reqwest::Client::new())
    }
}

// Default implementation for hyper
#[cfg(all(feature = "hyper", not(feature = "reqwest")))]
impl Default for Meteocat<crate::request::HyperClient> {
    fn default() -> Self {
        Self::from_client(<crate::request::HyperClient as Request>::new())
    }
}

// Default implementation when no HTTP client feature is enabled
#[cfg(not(any(feature = "reqwest", feature = "hyper")))]
impl<Client: Request> Default for Meteocat<Client> {
    /// Create a default Meteocat client with no API key set.
    fn default() -> Self {
        Self::from_client(Client::new())
    }
}
