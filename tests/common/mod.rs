//! In-memory transport used by the offline tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use meteocat::error::TransportError;
use meteocat::request::{HttpResponse, Request, RequestDescriptor};
use meteocat::{MeteocatWith, Result};

pub const KEY: &str = "0123456789012345678901234567890123456789";

/// Replies with a fixed status and body and records every request it sees
#[derive(Debug, Clone)]
pub struct Canned {
    status: u16,
    body: String,
    timeout: bool,
    seen: Arc<Mutex<Vec<RequestDescriptor>>>,
}

impl Canned {
    pub fn reply(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            timeout: false,
            seen: Arc::default(),
        }
    }

    pub fn timeout() -> Self {
        Self {
            timeout: true,
            ..Self::reply(200, "")
        }
    }

    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.seen.lock().unwrap().clone()
    }
}

impl Request for Canned {
    type Response = HttpResponse;

    fn new() -> Self {
        Self::reply(200, "[]")
    }

    async fn execute(&self, request: &RequestDescriptor) -> Result<HttpResponse> {
        self.seen.lock().unwrap().push(request.clone());
        if self.timeout {
            return Err(TransportError::Timeout("operation timed out".into()).into());
        }
        Ok(HttpResponse::new(self.status, self.body.clone(), Some("req-1".into())))
    }
}

pub fn client(transport: &Canned) -> MeteocatWith<Canned> {
    MeteocatWith::from_client(transport.clone()).with_key(KEY).unwrap()
}

pub const TWO_STATIONS: &str = r#"[
    {"codi":"D5","variables":[{"codi":32,"lectures":[
        {"data":"2023-01-06T10:00Z","valor":8.7,"estat":" ","baseHoraria":"SH"},
        {"data":"2023-01-06T10:30Z","valor":9.1,"estat":"V","baseHoraria":"SH"}
    ]}]},
    {"codi":"UG","variables":[{"codi":32,"lectures":[
        {"data":"2023-01-06T10:00Z","valor":6.2,"estat":"V","baseHoraria":"SH"}
    ]}]}
]"#;

pub const ONE_STATION: &str = r#"{"codi":32,"lectures":[
    {"data":"2023-01-06T10:00Z","valor":8.7,"estat":" ","baseHoraria":"SH"}
]}"#;

pub const OPEN_DATA: &str = r#"[
    {"id":"X420211205043000000","codi_estacio":"X4","codi_variable":"32","data_lectura":"2021-12-05T04:30:00.000","valor_lectura":"11.4","codi_base":"SH"},
    {"id":"X420211205043000001","codi_estacio":"X4","codi_variable":"33","data_lectura":"2021-12-05T04:30:00.000","valor_lectura":"81","codi_base":"SH"}
]"#;
