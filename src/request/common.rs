//! Common types used across multiple endpoints
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{CodeKind, ValidationError};
use crate::validate::valid_status;

/// Lifecycle state of a station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCode {
    /// Operational ("Operativa")
    Ope,
    /// Dismantled ("Desmantellada")
    Des,
    /// Temporarily down ("Baixa temporal")
    Bte,
}

impl StatusCode {
    /// All status codes, in wire order
    pub const ALL: [StatusCode; 3] = [StatusCode::Ope, StatusCode::Des, StatusCode::Bte];

    /// Wire value used in the `estat` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCode::Ope => "ope",
            StatusCode::Des => "des",
            StatusCode::Bte => "bte",
        }
    }

    /// Display name used by the service
    pub fn name(&self) -> &'static str {
        match self {
            StatusCode::Ope => "Operativa",
            StatusCode::Des => "Desmantellada",
            StatusCode::Bte => "Baixa temporal",
        }
    }
}

impl FromStr for StatusCode {
    type Err = ValidationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        StatusCode::ALL
            .into_iter()
            .find(|code| valid_status(&lower) && code.as_str() == lower)
            .ok_or_else(|| ValidationError::InvalidCode {
                kind: CodeKind::Status,
                code: s.to_string(),
            })
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar date as the path and query segments expect it.
///
/// Fields are kept as strings so they can be embedded verbatim. All three
/// must be filled or all three left empty; see [`crate::validate::valid_date`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateParts {
    /// Four digit year
    pub year: String,
    /// Two digit month
    pub month: String,
    /// Two digit day of month
    pub day: String,
}

impl DateParts {
    /// Create a date from its three parts
    pub fn new(year: impl Into<String>, month: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
            day: day.into(),
        }
    }

    /// True when none of the parts are set
    pub fn is_empty(&self) -> bool {
        self.year.is_empty() && self.month.is_empty() && self.day.is_empty()
    }

    /// True when every part is set
    pub fn is_complete(&self) -> bool {
        !self.year.is_empty() && !self.month.is_empty() && !self.day.is_empty()
    }

    /// `YYYY-MM-DDZ`, the layout of the `data` query parameter
    pub fn to_query_date(&self) -> String {
        format!("{}-{}-{}Z", self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for DateParts {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: format!("{:04}", date.year()),
            month: format!("{:02}", date.month()),
            day: format!("{:02}", date.day()),
        }
    }
}

impl fmt::Display for DateParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.month, self.day)
    }
}

/// Time of day for the open-data snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeOfDay {
    /// Two digit hour
    pub hour: String,
    /// Two digit minute
    pub minute: String,
    /// Two digit second
    pub second: String,
    /// Optional three digit millisecond
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub millisecond: Option<String>,
}

impl TimeOfDay {
    /// Create a time of day with whole-second precision
    pub fn new(hour: impl Into<String>, minute: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            hour: hour.into(),
            minute: minute.into(),
            second: second.into(),
            millisecond: None,
        }
    }

    /// Add a millisecond part
    pub fn with_millisecond(mut self, millisecond: impl Into<String>) -> Self {
        self.millisecond = Some(millisecond.into());
        self
    }

    /// True when hour, minute and second are all set
    pub fn is_complete(&self) -> bool {
        !self.hour.is_empty() && !self.minute.is_empty() && !self.second.is_empty()
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self::new(
            format!("{:02}", time.hour()),
            format!("{:02}", time.minute()),
            format!("{:02}", time.second()),
        )
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.hour, self.minute, self.second)?;
        if let Some(ms) = &self.millisecond {
            write!(f, ".{ms}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_parses_case_insensitively() {
        assert_eq!("OPE".parse::<StatusCode>(), Ok(StatusCode::Ope));
        assert_eq!("Bte".parse::<StatusCode>(), Ok(StatusCode::Bte));
        for code in StatusCode::ALL {
            assert_eq!(code.as_str().parse::<StatusCode>(), Ok(code));
        }
    }

    #[test]
    fn parsing_agrees_with_status_validation() {
        for input in ["ope", "DES", "Bte", "op", "opex", "", " ope"] {
            assert_eq!(
                input.parse::<StatusCode>().is_ok(),
                valid_status(&input.to_lowercase()),
                "{input:?}"
            );
        }
    }

    #[test]
    fn unknown_status_code_is_rejected() {
        let err = "xyz".parse::<StatusCode>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidCode {
                kind: CodeKind::Status,
                code: "xyz".to_string()
            }
        );
    }

    #[test]
    fn date_parts_from_naive_date_are_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 6).unwrap();
        let parts = DateParts::from(date);
        assert_eq!(parts, DateParts::new("2023", "01", "06"));
        assert_eq!(parts.to_query_date(), "2023-01-06Z");
    }

    #[test]
    fn time_of_day_display_includes_optional_millisecond() {
        let t = TimeOfDay::new("04", "30", "00");
        assert_eq!(t.to_string(), "04:30:00");
        assert_eq!(t.with_millisecond("000").to_string(), "04:30:00.000");
    }
}
