//! Shape-directed JSON decoding
//!
//! The planner decides whether a response is a single object or an array;
//! the decoder checks the payload against that decision and decodes exactly
//! once. There is no fallback to the other shape: a mismatch is an error.
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::DecodeError;
use crate::model::{
    Readings, StationMetadata, StationVariableMetadata, VariableMetadata, VariableReadings,
};
use crate::request::plan::{Plan, ResponseShape};

/// A result that is either one record or a list of records
#[derive(Debug, Clone, PartialEq)]
pub enum Shaped<S, C = S> {
    /// One record
    Single(S),
    /// Records in server order
    Collection(Vec<C>),
}

impl<S, C> Shaped<S, C> {
    /// Shape this value was decoded as
    pub fn shape(&self) -> ResponseShape {
        match self {
            Shaped::Single(_) => ResponseShape::Single,
            Shaped::Collection(_) => ResponseShape::Collection,
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        match self {
            Shaped::Single(_) => 1,
            Shaped::Collection(items) => items.len(),
        }
    }

    /// True for an empty collection
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Shaped<T, T> {
    /// All records as a list
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Shaped::Single(item) => vec![item],
            Shaped::Collection(items) => items,
        }
    }
}

/// Types the decoder can produce from a shape-checked JSON value
pub trait Decode: Sized {
    /// Build `Self` from a value whose JSON kind already matches `shape`.
    ///
    /// `station` is the normalized station code the request was planned with.
    fn from_json(shape: ResponseShape, station: Option<&str>, value: Value) -> serde_json::Result<Self>;
}

impl<S: DeserializeOwned, C: DeserializeOwned> Decode for Shaped<S, C> {
    fn from_json(shape: ResponseShape, _station: Option<&str>, value: Value) -> serde_json::Result<Self> {
        match shape {
            ResponseShape::Single => serde_json::from_value(value).map(Shaped::Single),
            ResponseShape::Collection => serde_json::from_value(value).map(Shaped::Collection),
        }
    }
}

impl<T: DeserializeOwned> Decode for Vec<T> {
    fn from_json(_shape: ResponseShape, _station: Option<&str>, value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}

impl Decode for Readings {
    fn from_json(shape: ResponseShape, station: Option<&str>, value: Value) -> serde_json::Result<Self> {
        match shape {
            ResponseShape::Single => Ok(Readings::Single {
                station: station.unwrap_or_default().to_string(),
                readings: serde_json::from_value::<VariableReadings>(value)?,
            }),
            ResponseShape::Collection => serde_json::from_value(value).map(Readings::Collection),
        }
    }
}

macro_rules! decode_single_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Decode for $ty {
                fn from_json(
                    _shape: ResponseShape,
                    _station: Option<&str>,
                    value: Value,
                ) -> serde_json::Result<Self> {
                    serde_json::from_value(value)
                }
            }
        )*
    };
}

decode_single_record!(VariableMetadata, StationVariableMetadata, StationMetadata);

/// Decode `body` as planned by `plan`
pub fn decode<T: Decode>(plan: &Plan, body: &str) -> Result<T, DecodeError> {
    decode_as(plan.shape, plan.station.as_deref(), body)
}

/// Decode `body` as `shape`, without a full plan
pub fn decode_as<T: Decode>(shape: ResponseShape, station: Option<&str>, body: &str) -> Result<T, DecodeError> {
    let len = body.len();
    let value: Value =
        serde_json::from_str(body).map_err(|source| DecodeError::Malformed { shape, len, source })?;

    let matches = match shape {
        ResponseShape::Single => value.is_object(),
        ResponseShape::Collection => value.is_array(),
    };
    if !matches {
        return Err(DecodeError::ShapeMismatch {
            shape,
            found: json_kind(&value),
            len,
        });
    }

    T::from_json(shape, station, value).map_err(|source| DecodeError::Malformed { shape, len, source })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StationReadings;

    const ONE_STATION: &str = r#"{"codi":32,"lectures":[{"data":"2021-01-06T10:00Z","valor":8.7,"estat":" ","baseHoraria":"SH"}]}"#;
    const ALL_STATIONS: &str = r#"[
        {"codi":"D5","variables":[{"codi":32,"lectures":[{"data":"2021-01-06T10:00Z","valor":8.7,"estat":" ","baseHoraria":"SH"}]}]},
        {"codi":"UG","variables":[{"codi":32,"lectures":[]}]}
    ]"#;

    #[test]
    fn single_reading_set_decodes_exactly() {
        let readings: Readings = decode_as(ResponseShape::Single, Some("D5"), ONE_STATION).unwrap();
        let Readings::Single { station, readings } = readings else {
            panic!("expected a single reading set");
        };
        assert_eq!(station, "D5");
        assert_eq!(readings.code, 32);
        assert_eq!(readings.readings[0].timestamp, "2021-01-06T10:00Z");
        assert_eq!(readings.readings[0].value, 8.7);
        assert_eq!(readings.readings[0].status, " ");
        assert_eq!(readings.readings[0].temporal_base, "SH");
    }

    #[test]
    fn collection_decodes_every_station() {
        let readings: Readings = decode_as(ResponseShape::Collection, None, ALL_STATIONS).unwrap();
        assert_eq!(readings.station_count(), 2);
    }

    #[test]
    fn array_against_single_is_a_shape_mismatch() {
        let err = decode_as::<Readings>(ResponseShape::Single, Some("D5"), ALL_STATIONS).unwrap_err();
        assert!(matches!(err, DecodeError::ShapeMismatch { found: "array", .. }));
        assert_eq!(err.shape(), ResponseShape::Single);
        assert_eq!(err.payload_len(), ALL_STATIONS.len());
    }

    #[test]
    fn object_against_collection_is_a_shape_mismatch() {
        let err = decode_as::<Vec<StationReadings>>(ResponseShape::Collection, None, ONE_STATION).unwrap_err();
        assert!(matches!(err, DecodeError::ShapeMismatch { found: "object", .. }));
    }

    #[test]
    fn malformed_json_reports_shape_and_size() {
        let err = decode_as::<VariableMetadata>(ResponseShape::Single, None, "{\"codi\":").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { .. }));
        assert_eq!(err.payload_len(), 8);
    }

    #[test]
    fn wrong_field_types_are_malformed() {
        let err = decode_as::<VariableMetadata>(ResponseShape::Single, None, r#"{"codi":"one"}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { shape: ResponseShape::Single, .. }));
    }

    #[test]
    fn empty_collection_is_not_an_error() {
        let metadata: Vec<VariableMetadata> = decode_as(ResponseShape::Collection, None, "[]").unwrap();
        assert!(metadata.is_empty());
    }

    #[test]
    fn shaped_follows_the_shape_tag() {
        let json = r#"{"codi":1,"nom":"Pressió atmosfèrica màxima","unitats":"hPa","acronim":"Px","tipus":"DAT","decimals":1}"#;
        let one: Shaped<VariableMetadata> = decode_as(ResponseShape::Single, None, json).unwrap();
        assert_eq!(one.shape(), ResponseShape::Single);
        assert_eq!(one.into_vec()[0].unit, "hPa");

        let many: Shaped<VariableMetadata> =
            decode_as(ResponseShape::Collection, None, &format!("[{json},{json}]")).unwrap();
        assert_eq!(many.len(), 2);
    }
}
