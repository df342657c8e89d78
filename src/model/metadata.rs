//! Variable and station metadata records
use serde::{Deserialize, Serialize};

/// Metadata of a measured variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableMetadata {
    /// Variable code
    #[serde(rename = "codi")]
    pub code: i32,
    /// Variable name
    #[serde(rename = "nom")]
    pub name: String,
    /// Unit of measurement, e.g. `°C`
    #[serde(rename = "unitats")]
    pub unit: String,
    /// Acronym
    #[serde(rename = "acronim")]
    pub acronym: String,
    /// Kind of variable, e.g. `DAT`
    #[serde(rename = "tipus")]
    pub kind: String,
    /// Number of decimals the value is reported with
    #[serde(rename = "decimals")]
    pub decimal_precision: i32,
}

/// Period during which a station or variable held a status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPeriod {
    /// Status code: 1 operational, 2 dismantled, 3 temporarily down
    #[serde(rename = "codi")]
    pub code: i32,
    /// Start of the period
    pub data_inici: String,
    /// End of the period; open periods have none
    #[serde(default)]
    pub data_fi: Option<String>,
}

/// Period during which a variable was reported at a temporal base
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalBasePeriod {
    /// Temporal base code, e.g. `SH`
    #[serde(rename = "codi")]
    pub code: String,
    /// Start of the period
    pub data_inici: String,
    /// End of the period; open periods have none
    #[serde(default)]
    pub data_fi: Option<String>,
}

/// Metadata of a variable as measured at one station
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationVariableMetadata {
    /// The variable itself
    #[serde(flatten)]
    pub variable: VariableMetadata,
    /// Status history of the variable at the station
    #[serde(rename = "estats", default)]
    pub statuses: Vec<StatusPeriod>,
    /// Temporal bases the variable is reported at
    #[serde(rename = "basesTemporals", default)]
    pub temporal_bases: Vec<TemporalBasePeriod>,
}

/// WGS84 position of a station
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    #[serde(rename = "latitud")]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[serde(rename = "longitud", alias = "Longitud")]
    pub longitude: f64,
}

/// Named administrative area (municipality) with a string code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Municipality {
    /// INE code
    #[serde(rename = "codi")]
    pub code: String,
    /// Name
    #[serde(rename = "nom")]
    pub name: String,
}

/// Named area with a numeric code (county, province, network)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    /// Identifier
    #[serde(rename = "codi")]
    pub code: i32,
    /// Name
    #[serde(rename = "nom")]
    pub name: String,
}

/// Metadata of a station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationMetadata {
    /// Station code
    #[serde(rename = "codi")]
    pub code: String,
    /// Station name
    #[serde(rename = "nom")]
    pub name: String,
    /// Station type, usually automatic
    #[serde(rename = "tipus")]
    pub kind: String,
    /// Position
    #[serde(rename = "coordenades")]
    pub coordinates: Coordinates,
    /// Description of the site
    #[serde(rename = "emplacament", default)]
    pub location: String,
    /// Metres above sea level
    #[serde(rename = "altitud")]
    pub altitude: f64,
    /// Municipality
    #[serde(rename = "municipi")]
    pub municipality: Municipality,
    /// County ("comarca")
    #[serde(rename = "comarca")]
    pub county: Area,
    /// Province
    #[serde(rename = "provincia")]
    pub province: Area,
    /// Station network
    #[serde(rename = "xarxa")]
    pub network: Area,
    /// Status history
    #[serde(rename = "estats", default)]
    pub statuses: Vec<StatusPeriod>,
}
