//! Integration tests for the Meteocat API client
//!
//! These tests make real API calls and should be run sparingly to avoid
//! exhausting the monthly quota. Run with:
//!
//! ```sh
//! cargo test --test integration_tests -- --ignored --test-threads=1
//! ```
//!
//! Ensure METEOCAT_API_KEY is set in your environment or .env file.

use chrono::{Duration, Utc};
use meteocat::error::ValidationError;
use meteocat::model::Readings;
use meteocat::request::common::{DateParts, TimeOfDay};
use meteocat::request::params::{ParamOption, ParameterSet};
use meteocat::{Meteocat, Observations, Result, rest};

/// Helper to initialize the client from environment
fn setup() -> Result<Meteocat> {
    dotenvy::dotenv().ok();
    let key = std::env::var("METEOCAT_API_KEY").map_err(|_| ValidationError::MissingParameter("METEOCAT_API_KEY"))?;
    Meteocat::default().with_key(key)
}

fn yesterday() -> DateParts {
    (Utc::now() - Duration::days(1)).date_naive().into()
}

#[tokio::test]
#[ignore]
async fn test_measurements_by_day_all_stations() {
    let client = setup().expect("Failed to initialize client");
    let params = ParameterSet::new([ParamOption::variable("32"), ParamOption::date(yesterday())]).unwrap();

    let result = rest::measurements::by_day(&client, params).get().await;

    assert!(result.is_ok(), "Failed to fetch readings: {:?}", result.err());
    let readings = result.unwrap();
    assert!(matches!(readings, Readings::Collection(_)));
    assert!(readings.station_count() > 1, "Expected readings from many stations");
}

#[tokio::test]
#[ignore]
async fn test_measurements_by_day_one_station() {
    let client = setup().expect("Failed to initialize client");
    let params = ParameterSet::new([
        ParamOption::variable("32"),
        ParamOption::station("D5"),
        ParamOption::date(yesterday()),
    ])
    .unwrap();

    let readings = rest::measurements::by_day(&client, params).get().await.unwrap();

    let Readings::Single { station, readings } = &readings else {
        panic!("Expected a single reading set");
    };
    assert_eq!(station, "D5");
    assert_eq!(readings.code, 32);
}

#[tokio::test]
#[ignore]
async fn test_latest_measurements() {
    let client = setup().expect("Failed to initialize client");
    let params = ParameterSet::new([ParamOption::variable("32"), ParamOption::station("D5")]).unwrap();

    let readings = rest::measurements::latest(&client, params).get().await.unwrap();
    let observations = readings.observations().unwrap();

    assert!(observations.iter().all(|o| o.station_code == "D5"));
}

#[tokio::test]
#[ignore]
async fn test_all_variables_metadata() {
    let client = setup().expect("Failed to initialize client");

    let variables = rest::metadata::all_variables(&client, ParameterSet::default())
        .get()
        .await
        .unwrap();

    assert!(variables.iter().any(|v| v.code == 32), "Temperature should be listed");
}

#[tokio::test]
#[ignore]
async fn test_one_variable_metadata() {
    let client = setup().expect("Failed to initialize client");
    let params = ParameterSet::new([ParamOption::variable("32")]).unwrap();

    let variable = rest::metadata::one_variable(&client, params).get().await.unwrap();

    assert_eq!(variable.code, 32);
}

#[tokio::test]
#[ignore]
async fn test_operational_stations() {
    let client = setup().expect("Failed to initialize client");
    let params = ParameterSet::new([ParamOption::status("ope"), ParamOption::date(yesterday())]).unwrap();

    let stations = rest::stations::all(&client, params).get().await.unwrap();

    assert!(stations.iter().any(|s| s.code == "D5"));
}

#[tokio::test]
#[ignore]
async fn test_open_data_snapshot() {
    // No key needed.
    let client = Meteocat::default();
    let params = ParameterSet::new([
        ParamOption::date(yesterday()),
        ParamOption::time_of_day(TimeOfDay::new("10", "00", "00").with_millisecond("000")),
        ParamOption::station("D5"),
    ])
    .unwrap();

    let rows = rest::open_data::snapshot(&client, params).get().await.unwrap();

    assert!(rows.iter().all(|r| r.codi_estacio == "D5"));
}
