//! Table processor using Polars DataFrames
use std::io::Cursor;
use std::marker::PhantomData;

use polars_core::frame::DataFrame;
use polars_io::prelude::*;

use crate::error::Result;
use crate::model::Observations;
use crate::processor::{Processor, decoder, successful};
use crate::request::plan::Plan;
use crate::response::Response;

/// Decodes into `T` and flattens its observations into a DataFrame.
///
/// Columns: `station_code`, `variable_code`, `timestamp` (RFC 3339 string) and `value`.
pub struct Table<T> {
    _decoded: PhantomData<fn() -> T>,
}

impl<T> Table<T> {
    /// Create a table processor
    pub fn new() -> Self {
        Self { _decoded: PhantomData }
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: decoder::Decode + Observations> Processor for Table<T> {
    type Output = DataFrame;

    fn process<R: Response>(&self, plan: &Plan, response: Result<R>) -> Result<DataFrame> {
        let resp = successful(response)?;
        let decoded: T = decoder::decode(plan, resp.body())?;
        let rows = decoded.observations()?;

        // An empty result is still a result.
        if rows.is_empty() {
            return Ok(DataFrame::empty());
        }

        let json_bytes = serde_json::to_vec(&rows)?;
        let df = JsonReader::new(Cursor::new(json_bytes)).finish()?;
        Ok(df)
    }
}
