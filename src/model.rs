//! Typed records returned by the API
//!
//! Every decoded result that contains readings can be flattened into
//! [`Observation`]s, one per station, variable and timestamp, so a sink
//! (a time-series database writer, a table) can consume them without
//! touching JSON.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod measurements;
pub mod metadata;
pub mod open_data;

pub use measurements::{Reading, Readings, StationReadings, VariableReadings};
pub use metadata::{
    Area, Coordinates, Municipality, StationMetadata, StationVariableMetadata, StatusPeriod,
    TemporalBasePeriod, VariableMetadata,
};
pub use open_data::OpenDataReading;

/// Legacy error body, `{"message": "...", "cod": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human readable message
    pub message: String,
    /// Service error code, string or number depending on the endpoint
    #[serde(default)]
    pub cod: Option<serde_json::Value>,
}

/// A single numeric reading, ready to be written to a time-series sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Station code
    pub station_code: String,
    /// Variable code
    pub variable_code: String,
    /// Reading time
    pub timestamp: DateTime<Utc>,
    /// Reading value
    pub value: f64,
}

/// Flatten a decoded result into observations.
///
/// Fails on the first reading whose timestamp or value cannot be parsed.
pub trait Observations {
    /// All observations, in payload order
    fn observations(&self) -> Result<Vec<Observation>>;
}

impl<T: Observations> Observations for Vec<T> {
    fn observations(&self) -> Result<Vec<Observation>> {
        let mut out = Vec::new();
        for item in self {
            out.extend(item.observations()?);
        }
        Ok(out)
    }
}

// API readings use minute precision with a `Z` suffix, the open-data feed
// uses seconds and milliseconds without a zone; both are UTC.
const READING_LAYOUTS: [&str; 3] = ["%Y-%m-%dT%H:%MZ", "%Y-%m-%dT%H:%M:%S%.fZ", "%Y-%m-%dT%H:%M:%S%.f"];

pub(crate) fn parse_reading_time(value: &str) -> Result<DateTime<Utc>> {
    let mut last_err = None;
    for layout in READING_LAYOUTS {
        match NaiveDateTime::parse_from_str(value, layout) {
            Ok(naive) => return Ok(naive.and_utc()),
            Err(e) => last_err = Some(e),
        }
    }
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(e) => Err(Error::Timestamp {
            value: value.to_string(),
            source: last_err.unwrap_or(e),
        }),
    }
}
