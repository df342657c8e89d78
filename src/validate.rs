//! Format and membership checks on codes, keys and dates
//!
//! All checks are pure and never touch the network.

use crate::reference::ReferenceData;
use crate::request::common::{DateParts, StatusCode, TimeOfDay};

/// Length of every key issued by the service
pub const API_KEY_LEN: usize = 40;

/// Checks station and variable codes against an injected reference set
#[derive(Debug, Clone, Copy)]
pub struct CodeValidator<'a> {
    refs: &'a ReferenceData,
}

impl<'a> CodeValidator<'a> {
    /// Create a validator over the given reference set
    pub fn new(refs: &'a ReferenceData) -> Self {
        Self { refs }
    }

    /// True iff `code` is a known station code
    pub fn valid_station(&self, code: &str) -> bool {
        self.refs.stations.contains_key(code)
    }

    /// True iff `code` is a known variable code
    pub fn valid_variable(&self, code: &str) -> bool {
        self.refs.variables.contains_key(code)
    }
}

/// True iff `code` is one of `ope`, `des`, `bte`. Callers lower-case first.
pub fn valid_status(code: &str) -> bool {
    StatusCode::ALL.iter().any(|s| s.as_str() == code)
}

/// Format check only; says nothing about whether the service accepts the key
pub fn valid_api_key(key: &str) -> bool {
    key.len() == API_KEY_LEN
}

/// True iff year, month and day are all set.
///
/// A partially filled date is logged, since it is never what the caller meant.
pub fn valid_date(date: &DateParts) -> bool {
    if date.is_complete() {
        return true;
    }
    if !date.is_empty() {
        log::warn!("incomplete date {date}: year, month and day must all be set or all be empty");
    }
    false
}

/// True iff hour, minute and second are all set
pub fn valid_time(time: &TimeOfDay) -> bool {
    time.is_complete()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{STATIONS, VARIABLES};

    #[test]
    fn every_reference_station_is_valid() {
        let refs = ReferenceData::default();
        let v = CodeValidator::new(&refs);
        for (code, _) in STATIONS {
            assert!(v.valid_station(code), "{code} should be valid");
        }
        assert!(!v.valid_station("anything"));
        assert!(!v.valid_station(""));
        assert!(!v.valid_station("D5D5D5D5D5D5D5D5"));
    }

    #[test]
    fn every_reference_variable_is_valid() {
        let refs = ReferenceData::default();
        let v = CodeValidator::new(&refs);
        for (code, _) in VARIABLES {
            assert!(v.valid_variable(code), "{code} should be valid");
        }
        assert!(!v.valid_variable("X"));
        assert!(!v.valid_variable("999"));
    }

    #[test]
    fn injected_reference_data_replaces_defaults() {
        let refs = ReferenceData::new([("QQ", "Somewhere")], [("7", "Something")]);
        let v = CodeValidator::new(&refs);
        assert!(v.valid_station("QQ"));
        assert!(!v.valid_station("D5"));
        assert!(v.valid_variable("7"));
        assert!(!v.valid_variable("32"));
    }

    #[test]
    fn status_codes() {
        assert!(valid_status("ope"));
        assert!(valid_status("des"));
        assert!(valid_status("bte"));
        assert!(!valid_status("OPE"));
        assert!(!valid_status(""));
    }

    #[test]
    fn api_key_length() {
        assert!(valid_api_key(&"a".repeat(40)));
        assert!(!valid_api_key(&"a".repeat(39)));
        assert!(!valid_api_key(&"a".repeat(41)));
    }

    #[test]
    fn date_must_be_all_or_nothing() {
        assert!(valid_date(&DateParts::new("2023", "01", "06")));
        assert!(!valid_date(&DateParts::default()));
        assert!(!valid_date(&DateParts::new("2023", "", "")));
        assert!(!valid_date(&DateParts::new("2023", "01", "")));
        assert!(!valid_date(&DateParts::new("", "01", "06")));
        // format only, no calendar check
        assert!(valid_date(&DateParts::new("2023", "13", "99")));
    }

    #[test]
    fn time_must_be_complete() {
        assert!(valid_time(&TimeOfDay::new("04", "30", "00")));
        assert!(!valid_time(&TimeOfDay::new("04", "", "00")));
    }
}
