//! Request planning: path and query construction and response shape selection
//!
//! Planning is pure. It validates a [`ParameterSet`] for one [`Endpoint`],
//! builds the [`RequestDescriptor`] to send, and decides whether the server
//! will answer with one JSON object or an array of them. The shape travels
//! with the descriptor in the returned [`Plan`]; nothing is stored on the
//! client, so concurrent calls never see each other's state.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, PercentEncode, utf8_percent_encode};

use crate::error::{CodeKind, ValidationError};
use crate::reference::ReferenceData;
use crate::request::common::{DateParts, StatusCode, TimeOfDay};
use crate::request::params::ParameterSet;
use crate::validate::{self, CodeValidator};

/// Base URL of the authenticated XEMA API
pub const API_BASE: &str = "https://api.meteo.cat/xema/v1";

/// Base URL of the unauthenticated open-data feed
pub const OPEN_DATA_BASE: &str = "https://analisi.transparenciacatalunya.cat/resource/nzvn-apee.json";

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Every request the client knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// One variable for one day, all stations or one station
    MeasurementsByDay,
    /// All variables of one station for one day
    MeasurementsAllByStation,
    /// Last readings of one variable, all stations or one station
    LatestMeasurements,
    /// Metadata of every variable a station measures
    MetadataAllByStation,
    /// Metadata of one variable at one station
    MetadataByStationAndVariable,
    /// Metadata of every variable
    MetadataAllVariables,
    /// Metadata of one variable
    MetadataOneVariable,
    /// Metadata of every station
    StationsAll,
    /// Open-data feed of all readings at one instant
    OpenDataSnapshot,
}

impl Endpoint {
    /// All endpoints
    pub const ALL: [Endpoint; 9] = [
        Endpoint::MeasurementsByDay,
        Endpoint::MeasurementsAllByStation,
        Endpoint::LatestMeasurements,
        Endpoint::MetadataAllByStation,
        Endpoint::MetadataByStationAndVariable,
        Endpoint::MetadataAllVariables,
        Endpoint::MetadataOneVariable,
        Endpoint::StationsAll,
        Endpoint::OpenDataSnapshot,
    ];

    /// Shape of endpoints whose response never depends on the parameters
    pub fn fixed_shape(&self) -> Option<ResponseShape> {
        match self {
            Endpoint::MeasurementsAllByStation
            | Endpoint::MetadataAllVariables
            | Endpoint::StationsAll
            | Endpoint::OpenDataSnapshot => Some(ResponseShape::Collection),
            Endpoint::MetadataByStationAndVariable | Endpoint::MetadataOneVariable => {
                Some(ResponseShape::Single)
            }
            Endpoint::MeasurementsByDay
            | Endpoint::LatestMeasurements
            | Endpoint::MetadataAllByStation => None,
        }
    }

    /// Whether the request carries the API key header
    pub fn requires_key(&self) -> bool {
        !matches!(self, Endpoint::OpenDataSnapshot)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Endpoint::MeasurementsByDay => "measurements-by-day",
            Endpoint::MeasurementsAllByStation => "measurements-all-by-station",
            Endpoint::LatestMeasurements => "latest-measurements",
            Endpoint::MetadataAllByStation => "metadata-all-by-station",
            Endpoint::MetadataByStationAndVariable => "metadata-by-station-and-variable",
            Endpoint::MetadataAllVariables => "metadata-all-variables",
            Endpoint::MetadataOneVariable => "metadata-one-variable",
            Endpoint::StationsAll => "stations-all",
            Endpoint::OpenDataSnapshot => "open-data-snapshot",
        };
        f.write_str(name)
    }
}

/// Whether the server answers with one JSON object or an array of objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseShape {
    /// A single JSON object
    Single,
    /// A JSON array of objects
    Collection,
}

impl fmt::Display for ResponseShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseShape::Single => f.write_str("single object"),
            ResponseShape::Collection => f.write_str("collection"),
        }
    }
}

/// HTTP method; the API is read-only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// GET
    #[default]
    Get,
}

impl Method {
    /// Method name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
        }
    }
}

/// Fully formed request, built once per call
#[derive(Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    method: Method,
    base: String,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
}

impl RequestDescriptor {
    /// HTTP method
    pub fn method(&self) -> Method {
        self.method
    }

    /// Path relative to the base URL; empty for the open-data feed
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters in serialization order
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Headers the transport must send
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Encoded query string without the leading `?`
    pub fn query_string(&self) -> String {
        // Serializing a slice of string pairs cannot fail.
        serde_urlencoded::to_string(&self.query).unwrap_or_default()
    }

    /// Path plus query string, e.g. `/variables/mesurades/32/ultimes?codiEstacio=D5`
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query_string())
        }
    }

    /// Absolute URL
    pub fn url(&self) -> String {
        format!("{}{}", self.base, self.path_and_query())
    }
}

// Keeps the API key out of logs.
impl fmt::Debug for RequestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<&str> = self.headers.iter().map(|(k, _)| k.as_str()).collect();
        f.debug_struct("RequestDescriptor")
            .field("method", &self.method)
            .field("url", &self.url())
            .field("headers", &headers)
            .finish()
    }
}

/// Output of planning: what to send and how to read the answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Endpoint the plan was built for
    pub endpoint: Endpoint,
    /// Request to execute
    pub descriptor: RequestDescriptor,
    /// Expected response shape
    pub shape: ResponseShape,
    /// Normalized station code used in the request, if any
    pub station: Option<String>,
}

/// Base URLs requests are planned against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrls {
    /// Authenticated API
    pub api: String,
    /// Open-data feed
    pub open_data: String,
}

impl Default for BaseUrls {
    fn default() -> Self {
        Self {
            api: API_BASE.to_string(),
            open_data: OPEN_DATA_BASE.to_string(),
        }
    }
}

/// Turns an endpoint and a parameter set into a [`Plan`]
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    validator: CodeValidator<'a>,
    urls: &'a BaseUrls,
}

/// Station status and date filter, present only as a pair
type StatusFilter = Option<(StatusCode, DateParts)>;

impl<'a> Planner<'a> {
    /// Create a planner over a reference set and base URLs
    pub fn new(refs: &'a ReferenceData, urls: &'a BaseUrls) -> Self {
        Self {
            validator: CodeValidator::new(refs),
            urls,
        }
    }

    /// Validate `params` for `endpoint` and build the request.
    ///
    /// `api_key` is required for every endpoint except the open-data snapshot.
    pub fn plan(
        &self,
        endpoint: Endpoint,
        params: &ParameterSet,
        api_key: Option<&str>,
    ) -> Result<Plan, ValidationError> {
        let mut query: Vec<(String, String)> = Vec::new();
        let mut station_filter = None;
        let mut status_filter: StatusFilter = None;

        let path = match endpoint {
            Endpoint::MeasurementsByDay => {
                let variable = self.required_variable(params)?;
                let date = required_date(params)?;
                station_filter = self.optional_station(params)?;
                format!(
                    "/variables/mesurades/{}/{}/{}/{}",
                    segment(variable),
                    segment(&date.year),
                    segment(&date.month),
                    segment(&date.day)
                )
            }
            Endpoint::MeasurementsAllByStation => {
                let station = self.required_station(params)?;
                let date = required_date(params)?;
                format!(
                    "/estacions/mesurades/{}/{}/{}/{}",
                    segment(&station),
                    segment(&date.year),
                    segment(&date.month),
                    segment(&date.day)
                )
            }
            Endpoint::LatestMeasurements => {
                let variable = self.required_variable(params)?;
                station_filter = self.optional_station(params)?;
                format!("/variables/mesurades/{}/ultimes", segment(variable))
            }
            Endpoint::MetadataAllByStation => {
                let station = self.required_station(params)?;
                status_filter = status_filter_of(params)?;
                format!("/estacions/{}/variables/mesurades/metadades", segment(&station))
            }
            Endpoint::MetadataByStationAndVariable => {
                let station = self.required_station(params)?;
                let variable = self.required_variable(params)?;
                format!(
                    "/estacions/{}/variables/mesurades/{}/metadades",
                    segment(&station),
                    segment(variable)
                )
            }
            Endpoint::MetadataAllVariables => "/variables/mesurades/metadades".to_string(),
            Endpoint::MetadataOneVariable => {
                let variable = self.required_variable(params)?;
                format!("/variables/mesurades/{}/metadades", segment(variable))
            }
            Endpoint::StationsAll => {
                status_filter = status_filter_of(params)?;
                "/estacions/metadades".to_string()
            }
            Endpoint::OpenDataSnapshot => {
                let date = required_date(params)?;
                let time = params.time_of_day().ok_or(ValidationError::MissingParameter("time of day"))?;
                if !validate::valid_time(time) {
                    return Err(ValidationError::InvalidTime);
                }
                query.push(("data_lectura".to_string(), open_data_timestamp(date, time)));
                if let Some(station) = self.optional_station(params)? {
                    query.push(("codi_estacio".to_string(), station));
                }
                if let Some(variable) = params.variable() {
                    self.check_variable(variable)?;
                    query.push(("codi_variable".to_string(), variable.to_string()));
                }
                String::new()
            }
        };

        if let Some(station) = &station_filter {
            query.push(("codiEstacio".to_string(), station.clone()));
        }
        if let Some((status, date)) = &status_filter {
            query.push(("estat".to_string(), status.as_str().to_string()));
            query.push(("data".to_string(), date.to_query_date()));
        }

        let shape = match endpoint.fixed_shape() {
            Some(shape) => shape,
            None if station_filter.is_some() => ResponseShape::Single,
            None if status_filter.is_some() => ResponseShape::Single,
            None => ResponseShape::Collection,
        };

        let mut headers = Vec::new();
        if endpoint.requires_key() {
            let key = api_key.ok_or(ValidationError::MissingParameter("api key"))?;
            if !validate::valid_api_key(key) {
                return Err(ValidationError::InvalidApiKeyFormat {
                    expected: validate::API_KEY_LEN,
                    found: key.len(),
                });
            }
            headers.push((API_KEY_HEADER.to_string(), key.to_string()));
        }

        let base = if endpoint == Endpoint::OpenDataSnapshot {
            &self.urls.open_data
        } else {
            &self.urls.api
        };

        let station = match endpoint {
            Endpoint::MeasurementsAllByStation
            | Endpoint::MetadataAllByStation
            | Endpoint::MetadataByStationAndVariable => params.station().map(str::to_uppercase),
            _ => station_filter,
        };

        let plan = Plan {
            endpoint,
            descriptor: RequestDescriptor {
                method: Method::Get,
                base: base.clone(),
                path,
                query,
                headers,
            },
            shape,
            station,
        };
        log::debug!("planned {} -> {:?} ({})", endpoint, plan.descriptor, shape);
        log_ignored(endpoint, params);
        Ok(plan)
    }

    fn required_station(&self, params: &ParameterSet) -> Result<String, ValidationError> {
        self.optional_station(params)?
            .ok_or(ValidationError::MissingParameter("station"))
    }

    /// Uppercased station code, if one was supplied and it is known
    fn optional_station(&self, params: &ParameterSet) -> Result<Option<String>, ValidationError> {
        let Some(code) = params.station() else {
            return Ok(None);
        };
        let code = code.to_uppercase();
        if !self.validator.valid_station(&code) {
            return Err(ValidationError::InvalidCode {
                kind: CodeKind::Station,
                code,
            });
        }
        Ok(Some(code))
    }

    fn required_variable<'p>(&self, params: &'p ParameterSet) -> Result<&'p str, ValidationError> {
        let variable = params.variable().ok_or(ValidationError::MissingParameter("variable"))?;
        self.check_variable(variable)?;
        Ok(variable)
    }

    fn check_variable(&self, code: &str) -> Result<(), ValidationError> {
        if self.validator.valid_variable(code) {
            Ok(())
        } else {
            Err(ValidationError::InvalidCode {
                kind: CodeKind::Variable,
                code: code.to_string(),
            })
        }
    }
}

fn required_date(params: &ParameterSet) -> Result<&DateParts, ValidationError> {
    match params.date() {
        Some(date) if validate::valid_date(date) => Ok(date),
        Some(date) if !date.is_empty() => Err(ValidationError::InvalidDate(date.clone())),
        _ => Err(ValidationError::MissingParameter("date")),
    }
}

/// The `estat`/`data` pair. Either both are given or neither; anything in between fails.
fn status_filter_of(params: &ParameterSet) -> Result<StatusFilter, ValidationError> {
    let date = params.date().filter(|d| !d.is_empty());
    match (params.status(), date) {
        (None, None) => Ok(None),
        (Some(status), Some(date)) => {
            if !validate::valid_date(date) {
                return Err(ValidationError::InvalidDate(date.clone()));
            }
            Ok(Some((status, date.clone())))
        }
        (Some(_), None) => Err(ValidationError::MissingParameter("date")),
        (None, Some(date)) if !validate::valid_date(date) => Err(ValidationError::InvalidDate(date.clone())),
        (None, Some(_)) => Err(ValidationError::MissingParameter("status")),
    }
}

/// Parameters an endpoint has no use for are dropped, not rejected.
fn log_ignored(endpoint: Endpoint, params: &ParameterSet) {
    use Endpoint::*;

    let uses_station = !matches!(endpoint, MetadataAllVariables | MetadataOneVariable);
    let uses_variable = matches!(
        endpoint,
        MeasurementsByDay | LatestMeasurements | MetadataByStationAndVariable | MetadataOneVariable | OpenDataSnapshot
    );
    let uses_status = matches!(endpoint, MetadataAllByStation | StationsAll);
    let uses_date = matches!(
        endpoint,
        MeasurementsByDay | MeasurementsAllByStation | MetadataAllByStation | StationsAll | OpenDataSnapshot
    );
    let uses_time = endpoint == OpenDataSnapshot;

    let ignored = [
        ("station", params.station().is_some() && !uses_station),
        ("variable", params.variable().is_some() && !uses_variable),
        ("status", params.status().is_some() && !uses_status),
        ("date", params.date().is_some() && !uses_date),
        ("time of day", params.time_of_day().is_some() && !uses_time),
    ];
    for (name, _) in ignored.iter().filter(|(_, ignored)| *ignored) {
        log::debug!("{endpoint} ignores the {name} parameter");
    }
}

// Everything but unreserved characters, dots included, so a value can never
// add a segment, a `..` hop or a query of its own.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'~');

/// One path segment, percent-encoded
fn segment(value: &str) -> PercentEncode<'_> {
    utf8_percent_encode(value, SEGMENT)
}

/// `YYYY-MM-DDTHH:MM:SS[.mmm]`
fn open_data_timestamp(date: &DateParts, time: &TimeOfDay) -> String {
    format!("{}-{}-{}T{}", date.year, date.month, date.day, time)
}
