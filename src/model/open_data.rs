//! Records of the open-data snapshot feed
//!
//! The feed has coarser precision than the API and reports numeric values as strings.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Observation, Observations, parse_reading_time};

/// One reading of the open-data feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenDataReading {
    /// Row identifier
    pub id: String,
    /// Station code
    pub codi_estacio: String,
    /// Variable code
    pub codi_variable: String,
    /// Reading time, `YYYY-MM-DDTHH:MM:SS.mmm`
    pub data_lectura: String,
    /// Time of the extreme value, for max/min variables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_extrem: Option<String>,
    /// Value, as a decimal string
    pub valor_lectura: String,
    /// Temporal base code
    #[serde(default)]
    pub codi_base: String,
}

impl OpenDataReading {
    /// Numeric value of the reading
    pub fn value(&self) -> Result<f64> {
        self.valor_lectura.trim().parse().map_err(|source| Error::Value {
            value: self.valor_lectura.clone(),
            source,
        })
    }
}

impl Observations for OpenDataReading {
    fn observations(&self) -> Result<Vec<Observation>> {
        Ok(vec![Observation {
            station_code: self.codi_estacio.clone(),
            variable_code: self.codi_variable.clone(),
            timestamp: parse_reading_time(&self.data_lectura)?,
            value: self.value()?,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn reading(value: &str) -> OpenDataReading {
        OpenDataReading {
            id: "X420211205043000".to_string(),
            codi_estacio: "X4".to_string(),
            codi_variable: "32".to_string(),
            data_lectura: "2021-12-05T04:30:00.000".to_string(),
            data_extrem: None,
            valor_lectura: value.to_string(),
            codi_base: "SH".to_string(),
        }
    }

    #[test]
    fn string_value_is_parsed() {
        let obs = reading("11.3").observations().unwrap();
        assert_eq!(obs[0].value, 11.3);
        assert_eq!(obs[0].timestamp, Utc.with_ymd_and_hms(2021, 12, 5, 4, 30, 0).unwrap());
    }

    #[test]
    fn non_numeric_value_is_an_error() {
        assert!(matches!(reading("n/a").value(), Err(Error::Value { .. })));
    }
}
