//! Measured readings

use crate::client::Meteocat;
use crate::model::{Readings, StationReadings};
use crate::processor::Typed;
use crate::request::Request;
use crate::request::call::EndpointRequest;
use crate::request::params::ParameterSet;
use crate::request::plan::Endpoint;

/// Readings of one variable on one day
///
/// Needs a variable code and a date. With a station code the answer is the
/// readings of that station alone; without one, every station's readings.
///
/// # Example
/// ```no_run
/// # use meteocat::Meteocat;
/// # use meteocat::request::params::{ParamOption, ParameterSet};
/// # use meteocat::request::common::DateParts;
/// # async fn example() -> meteocat::Result<()> {
/// # let client = Meteocat::default().with_key("0123456789012345678901234567890123456789")?;
/// let params = ParameterSet::new([
///     ParamOption::variable("32"),
///     ParamOption::station("D5"),
///     ParamOption::date(DateParts::new("2023", "01", "06")),
/// ])?;
/// let readings = meteocat::rest::measurements::by_day(&client, params).get().await?;
/// # Ok(())
/// # }
/// ```
pub fn by_day<'a, Client: Request>(
    client: &'a Meteocat<Client>,
    params: ParameterSet,
) -> EndpointRequest<'a, Client, Typed<Readings>> {
    EndpointRequest::new(client, Endpoint::MeasurementsByDay, params, Typed::new())
}

/// Every variable measured by one station on one day
///
/// Needs a station code and a date.
pub fn all_by_station<'a, Client: Request>(
    client: &'a Meteocat<Client>,
    params: ParameterSet,
) -> EndpointRequest<'a, Client, Typed<Vec<StationReadings>>> {
    EndpointRequest::new(client, Endpoint::MeasurementsAllByStation, params, Typed::new())
}

/// Latest readings of one variable
///
/// Needs a variable code; a station code narrows the answer to one station.
pub fn latest<'a, Client: Request>(
    client: &'a Meteocat<Client>,
    params: ParameterSet,
) -> EndpointRequest<'a, Client, Typed<Readings>> {
    EndpointRequest::new(client, Endpoint::LatestMeasurements, params, Typed::new())
}
