//! Readings returned by the measurement endpoints
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Observation, Observations, parse_reading_time};

/// One timestamped value, e.g.
/// `{"data":"2021-01-06T10:00Z","valor":8.7,"estat":" ","baseHoraria":"SH"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Reading time, `YYYY-MM-DDTHH:MMZ`
    #[serde(rename = "data")]
    pub timestamp: String,
    /// Time of the extreme value, for max/min variables
    #[serde(rename = "dataExtrem", default, skip_serializing_if = "Option::is_none")]
    pub extreme_timestamp: Option<String>,
    /// Measured value
    #[serde(rename = "valor")]
    pub value: f64,
    /// Quality flag
    #[serde(rename = "estat", default)]
    pub status: String,
    /// Temporal aggregation base, e.g. `SH` (semi-hourly)
    #[serde(rename = "baseHoraria", default)]
    pub temporal_base: String,
}

/// Readings of one variable; the single-station response shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableReadings {
    /// Variable code
    #[serde(rename = "codi")]
    pub code: i32,
    /// Readings in server order
    #[serde(rename = "lectures", default)]
    pub readings: Vec<Reading>,
}

/// Readings of one station, grouped by variable; the element of the all-stations shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationReadings {
    /// Station code
    #[serde(rename = "codi")]
    pub code: String,
    /// Variables measured
    #[serde(default)]
    pub variables: Vec<VariableReadings>,
}

/// Result of the by-day and latest-measurement endpoints.
///
/// When a station filter was given the server drops the station wrapper and
/// returns the readings of that station only.
#[derive(Debug, Clone, PartialEq)]
pub enum Readings {
    /// Readings of the filtered station
    Single {
        /// Station the request was filtered on
        station: String,
        /// Readings of the requested variable
        readings: VariableReadings,
    },
    /// Readings of every station that reported
    Collection(Vec<StationReadings>),
}

impl Readings {
    /// Number of stations covered
    pub fn station_count(&self) -> usize {
        match self {
            Readings::Single { .. } => 1,
            Readings::Collection(stations) => stations.len(),
        }
    }

    /// Convert into the all-stations form
    pub fn into_stations(self) -> Vec<StationReadings> {
        match self {
            Readings::Single { station, readings } => vec![StationReadings {
                code: station,
                variables: vec![readings],
            }],
            Readings::Collection(stations) => stations,
        }
    }
}

impl VariableReadings {
    fn observations_at(&self, station: &str) -> Result<Vec<Observation>> {
        self.readings
            .iter()
            .map(|r| {
                Ok(Observation {
                    station_code: station.to_string(),
                    variable_code: self.code.to_string(),
                    timestamp: parse_reading_time(&r.timestamp)?,
                    value: r.value,
                })
            })
            .collect()
    }
}

impl Observations for StationReadings {
    fn observations(&self) -> Result<Vec<Observation>> {
        let mut out = Vec::new();
        for variable in &self.variables {
            out.extend(variable.observations_at(&self.code)?);
        }
        Ok(out)
    }
}

impl Observations for Readings {
    fn observations(&self) -> Result<Vec<Observation>> {
        match self {
            Readings::Single { station, readings } => readings.observations_at(station),
            Readings::Collection(stations) => stations.observations(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn reading_decodes_wire_names() {
        let r: Reading = serde_json::from_str(
            r#"{"data":"2021-01-06T10:00Z","dataExtrem":"2021-01-06T10:24Z","valor":8.7,"estat":" ","baseHoraria":"SH"}"#,
        )
        .unwrap();
        assert_eq!(r.timestamp, "2021-01-06T10:00Z");
        assert_eq!(r.extreme_timestamp.as_deref(), Some("2021-01-06T10:24Z"));
        assert_eq!(r.value, 8.7);
        assert_eq!(r.status, " ");
        assert_eq!(r.temporal_base, "SH");
    }

    #[test]
    fn single_readings_carry_the_planned_station() {
        let readings = Readings::Single {
            station: "D5".to_string(),
            readings: VariableReadings {
                code: 32,
                readings: vec![Reading {
                    timestamp: "2023-01-06T00:30Z".to_string(),
                    extreme_timestamp: None,
                    value: 9.1,
                    status: "V".to_string(),
                    temporal_base: "SH".to_string(),
                }],
            },
        };
        let obs = readings.observations().unwrap();
        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].station_code, "D5");
        assert_eq!(obs[0].variable_code, "32");
        assert_eq!(obs[0].timestamp, Utc.with_ymd_and_hms(2023, 1, 6, 0, 30, 0).unwrap());
        assert_eq!(obs[0].value, 9.1);

        let stations = readings.into_stations();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].code, "D5");
    }

    #[test]
    fn bad_timestamp_is_an_error_not_a_skipped_row() {
        let station = StationReadings {
            code: "D5".to_string(),
            variables: vec![VariableReadings {
                code: 32,
                readings: vec![Reading {
                    timestamp: "yesterday".to_string(),
                    extreme_timestamp: None,
                    value: 1.0,
                    status: String::new(),
                    temporal_base: String::new(),
                }],
            }],
        };
        assert!(station.observations().is_err());
    }
}
