//! Variable metadata

use crate::client::Meteocat;
use crate::model::{StationVariableMetadata, VariableMetadata};
use crate::processor::{Shaped, Typed};
use crate::request::Request;
use crate::request::call::EndpointRequest;
use crate::request::params::ParameterSet;
use crate::request::plan::Endpoint;

/// Metadata of every variable a station measures
///
/// Needs a station code. A status together with a date asks for the
/// variables in that status on that date, answered as a single record.
pub fn all_by_station<'a, Client: Request>(
    client: &'a Meteocat<Client>,
    params: ParameterSet,
) -> EndpointRequest<'a, Client, Typed<Shaped<StationVariableMetadata>>> {
    EndpointRequest::new(client, Endpoint::MetadataAllByStation, params, Typed::new())
}

/// Metadata of one variable at one station
pub fn by_station_and_variable<'a, Client: Request>(
    client: &'a Meteocat<Client>,
    params: ParameterSet,
) -> EndpointRequest<'a, Client, Typed<StationVariableMetadata>> {
    EndpointRequest::new(client, Endpoint::MetadataByStationAndVariable, params, Typed::new())
}

/// Metadata of every measured variable
pub fn all_variables<'a, Client: Request>(
    client: &'a Meteocat<Client>,
    params: ParameterSet,
) -> EndpointRequest<'a, Client, Typed<Vec<VariableMetadata>>> {
    EndpointRequest::new(client, Endpoint::MetadataAllVariables, params, Typed::new())
}

/// Metadata of one measured variable
pub fn one_variable<'a, Client: Request>(
    client: &'a Meteocat<Client>,
    params: ParameterSet,
) -> EndpointRequest<'a, Client, Typed<VariableMetadata>> {
    EndpointRequest::new(client, Endpoint::MetadataOneVariable, params, Typed::new())
}
