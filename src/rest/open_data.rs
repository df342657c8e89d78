//! Open-data snapshot feed (no API key)

use crate::client::Meteocat;
use crate::model::OpenDataReading;
use crate::processor::Typed;
use crate::request::Request;
use crate::request::call::EndpointRequest;
use crate::request::params::ParameterSet;
use crate::request::plan::Endpoint;

/// All readings taken at one instant
///
/// Needs a date and a time of day; station and variable codes filter the rows.
///
/// # Example
/// ```no_run
/// # use meteocat::Meteocat;
/// # use meteocat::request::params::{ParamOption, ParameterSet};
/// # use meteocat::request::common::{DateParts, TimeOfDay};
/// # async fn example() -> meteocat::Result<()> {
/// let client = Meteocat::default();
/// let params = ParameterSet::new([
///     ParamOption::date(DateParts::new("2023", "01", "06")),
///     ParamOption::time_of_day(TimeOfDay::new("10", "00", "00")),
/// ])?;
/// let rows = meteocat::rest::open_data::snapshot(&client, params).get().await?;
/// # Ok(())
/// # }
/// ```
pub fn snapshot<'a, Client: Request>(
    client: &'a Meteocat<Client>,
    params: ParameterSet,
) -> EndpointRequest<'a, Client, Typed<Vec<OpenDataReading>>> {
    EndpointRequest::new(client, Endpoint::OpenDataSnapshot, params, Typed::new())
}
