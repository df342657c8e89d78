//! Optional query dimensions shared by every endpoint
//!
//! A [`ParameterSet`] is built once per call from a list of [`ParamOption`]s
//! and is immutable afterwards. Options that carry a closed set of values
//! (the station status) are checked as they are applied; station and
//! variable codes are checked later, by the planner, against the client's
//! reference data.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::request::common::{DateParts, StatusCode, TimeOfDay};

/// Immutable set of optional request parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawParams", into = "RawParams")]
pub struct ParameterSet {
    station: Option<String>,
    variable: Option<String>,
    status: Option<StatusCode>,
    date: Option<DateParts>,
    time_of_day: Option<TimeOfDay>,
}

/// A single mutation applied while building a [`ParameterSet`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamOption {
    /// Station code, e.g. `D5`
    Station(String),
    /// Variable code, e.g. `32`
    Variable(String),
    /// Station status, one of `ope`, `des`, `bte` in any case
    Status(String),
    /// Calendar date
    Date(DateParts),
    /// Time of day, used by the open-data snapshot
    TimeOfDay(TimeOfDay),
}

impl ParamOption {
    /// Station code option
    pub fn station(code: impl Into<String>) -> Self {
        ParamOption::Station(code.into())
    }

    /// Variable code option
    pub fn variable(code: impl Into<String>) -> Self {
        ParamOption::Variable(code.into())
    }

    /// Station status option
    pub fn status(code: impl Into<String>) -> Self {
        ParamOption::Status(code.into())
    }

    /// Date option
    pub fn date(date: impl Into<DateParts>) -> Self {
        ParamOption::Date(date.into())
    }

    /// Time of day option
    pub fn time_of_day(time: impl Into<TimeOfDay>) -> Self {
        ParamOption::TimeOfDay(time.into())
    }

    fn apply(self, params: &mut ParameterSet) -> Result<(), ValidationError> {
        match self {
            ParamOption::Station(code) => params.station = Some(code),
            ParamOption::Variable(code) => params.variable = Some(code),
            ParamOption::Status(code) => params.status = Some(code.parse()?),
            ParamOption::Date(date) => params.date = Some(date),
            ParamOption::TimeOfDay(time) => params.time_of_day = Some(time),
        }
        Ok(())
    }
}

impl ParameterSet {
    /// Apply `options` in order, stopping at the first one that fails.
    ///
    /// ```
    /// use meteocat::request::params::{ParamOption, ParameterSet};
    /// use meteocat::request::common::DateParts;
    ///
    /// let params = ParameterSet::new([
    ///     ParamOption::variable("32"),
    ///     ParamOption::date(DateParts::new("2023", "01", "06")),
    /// ])
    /// .unwrap();
    /// assert_eq!(params.variable(), Some("32"));
    /// ```
    pub fn new(options: impl IntoIterator<Item = ParamOption>) -> Result<Self, ValidationError> {
        let mut params = Self::default();
        for option in options {
            option.apply(&mut params)?;
        }
        Ok(params)
    }

    /// Station code as supplied (not yet normalized)
    pub fn station(&self) -> Option<&str> {
        self.station.as_deref()
    }

    /// Variable code as supplied
    pub fn variable(&self) -> Option<&str> {
        self.variable.as_deref()
    }

    /// Station status filter
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Calendar date, possibly incomplete
    pub fn date(&self) -> Option<&DateParts> {
        self.date.as_ref()
    }

    /// Time of day
    pub fn time_of_day(&self) -> Option<&TimeOfDay> {
        self.time_of_day.as_ref()
    }
}

/// Wire form of [`ParameterSet`], so deserialized sets go through the same checks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    station_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    variable_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<DateParts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time_of_day: Option<TimeOfDay>,
}

impl TryFrom<RawParams> for ParameterSet {
    type Error = ValidationError;

    fn try_from(raw: RawParams) -> Result<Self, Self::Error> {
        let options = raw
            .station_code
            .map(ParamOption::Station)
            .into_iter()
            .chain(raw.variable_code.map(ParamOption::Variable))
            .chain(raw.status_code.map(ParamOption::Status))
            .chain(raw.date.map(ParamOption::Date))
            .chain(raw.time_of_day.map(ParamOption::TimeOfDay));
        ParameterSet::new(options)
    }
}

impl From<ParameterSet> for RawParams {
    fn from(params: ParameterSet) -> Self {
        RawParams {
            station_code: params.station,
            variable_code: params.variable,
            status_code: params.status.map(|s| s.as_str().to_string()),
            date: params.date,
            time_of_day: params.time_of_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodeKind;

    #[test]
    fn options_are_applied_in_order() {
        let params = ParameterSet::new([
            ParamOption::station("ug"),
            ParamOption::station("D5"),
            ParamOption::status("OPE"),
        ])
        .unwrap();
        assert_eq!(params.station(), Some("D5"));
        assert_eq!(params.status(), Some(StatusCode::Ope));
        assert_eq!(params.variable(), None);
    }

    #[test]
    fn invalid_status_fails_at_option_time() {
        let err = ParameterSet::new([ParamOption::variable("32"), ParamOption::status("open")]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidCode {
                kind: CodeKind::Status,
                code: "open".to_string()
            }
        );
    }

    #[test]
    fn free_form_codes_are_not_checked_at_construction() {
        let params = ParameterSet::new([ParamOption::station("nope"), ParamOption::variable("nope")]);
        assert!(params.is_ok());
    }

    #[test]
    fn partial_date_is_kept_for_the_planner_to_reject() {
        let params = ParameterSet::new([ParamOption::date(DateParts::new("2023", "", "06"))]).unwrap();
        assert_eq!(params.date(), Some(&DateParts::new("2023", "", "06")));
    }

    #[test]
    fn deserialization_goes_through_option_checks() {
        let ok: ParameterSet =
            serde_json::from_str(r#"{"stationCode":"D5","statusCode":"des"}"#).unwrap();
        assert_eq!(ok.station(), Some("D5"));
        assert_eq!(ok.status(), Some(StatusCode::Des));

        let bad = serde_json::from_str::<ParameterSet>(r#"{"statusCode":"gone"}"#);
        assert!(bad.is_err());
    }
}
