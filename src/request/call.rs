//! Endpoint request builder
//!
//! Every endpoint is executed through [`EndpointRequest`]: plan locally, send
//! through the client's transport, hand the response to the processor. The
//! plan lives on the stack of a single call, so one client can serve many
//! concurrent requests.

use crate::client::Meteocat;
use crate::error::Result;
use crate::execute::Execute;
use crate::processor::{Processor, Raw, Typed};
use crate::request::Request;
use crate::request::params::ParameterSet;
use crate::request::plan::{Endpoint, Plan};

/// Request for one endpoint, with output decided by `P`
pub struct EndpointRequest<'a, Client: Request, P: Processor = Raw> {
    client: &'a Meteocat<Client>,
    endpoint: Endpoint,
    params: ParameterSet,
    processor: P,
}

impl<'a, C: Request, P: Processor> EndpointRequest<'a, C, P> {
    /// Create a request with an explicit processor
    pub fn new(client: &'a Meteocat<C>, endpoint: Endpoint, params: ParameterSet, processor: P) -> Self {
        Self {
            client,
            endpoint,
            params,
            processor,
        }
    }

    /// Endpoint this request targets
    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Parameters this request was built with
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Plan the request without sending it
    pub fn plan(&self) -> Result<Plan> {
        self.client.plan(self.endpoint, &self.params)
    }

    /// Replace the processor
    pub fn with_processor<Q: Processor>(self, processor: Q) -> EndpointRequest<'a, C, Q> {
        EndpointRequest {
            client: self.client,
            endpoint: self.endpoint,
            params: self.params,
            processor,
        }
    }

    /// Return the response body untouched
    pub fn raw(self) -> EndpointRequest<'a, C, Raw> {
        self.with_processor(Raw)
    }

    /// Decode the response into `T`
    pub fn typed<T: crate::processor::Decode>(self) -> EndpointRequest<'a, C, Typed<T>> {
        self.with_processor(Typed::new())
    }
}

impl<'a, C: Request, T> EndpointRequest<'a, C, Typed<T>>
where
    T: crate::processor::Decode + crate::model::Observations,
{
    /// Return the decoded observations as a Polars DataFrame
    #[cfg(feature = "table")]
    pub fn as_dataframe(self) -> EndpointRequest<'a, C, crate::processor::Table<T>> {
        self.with_processor(crate::processor::Table::new())
    }
}

impl<'a, C: Request, P: Processor + 'a> EndpointRequest<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<P::Output>> + 'a {
        Execute::get(self)
    }
}

impl<'a, C: Request, P: Processor + 'a> Execute for EndpointRequest<'a, C, P> {
    type Output = P::Output;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<P::Output> {
        let plan = self.client.plan(self.endpoint, &self.params)?;

        let response = self.client.client().execute(&plan.descriptor).await;

        self.processor.process(&plan, response)
    }
}
