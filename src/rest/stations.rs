//! Station metadata

use crate::client::Meteocat;
use crate::model::StationMetadata;
use crate::processor::Typed;
use crate::request::Request;
use crate::request::call::EndpointRequest;
use crate::request::params::ParameterSet;
use crate::request::plan::Endpoint;

/// Every station, optionally only those in a status on a date
pub fn all<'a, Client: Request>(
    client: &'a Meteocat<Client>,
    params: ParameterSet,
) -> EndpointRequest<'a, Client, Typed<Vec<StationMetadata>>> {
    EndpointRequest::new(client, Endpoint::StationsAll, params, Typed::new())
}
