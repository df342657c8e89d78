//! Print the latest readings of one variable at one station.
//!
//! ```sh
//! METEOCAT_API_KEY=... cargo run --example latest_readings -- 32 D5
//! ```

use meteocat::request::params::{ParamOption, ParameterSet};
use meteocat::{Meteocat, Observations, rest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let variable = args.next().unwrap_or_else(|| "32".to_string());
    let station = args.next().unwrap_or_else(|| "D5".to_string());

    dotenvy::dotenv().ok();
    let key = std::env::var("METEOCAT_API_KEY")?;
    let client = Meteocat::default().with_key(key)?;

    let params = ParameterSet::new([ParamOption::variable(variable.as_str()), ParamOption::station(station.as_str())])?;
    let readings = rest::measurements::latest(&client, params).get().await?;

    let variable_name = client.reference_data().variable_name(&variable).unwrap_or("unknown variable");
    let station_name = client.reference_data().station_name(&station.to_uppercase()).unwrap_or("unknown station");
    println!("{variable_name} at {station_name}");
    for observation in readings.observations()? {
        println!("  {}  {:>8.1}", observation.timestamp.format("%Y-%m-%d %H:%M"), observation.value);
    }
    Ok(())
}
