use clap::Parser;
use fwi_core::{
    run_station_series, DangerClass, FireCodeState, PipelineOptions, WeatherObservation,
};
use tracing_subscriber::EnvFilter;

/// FWI System demo with configurable weather
#[derive(Parser, Debug)]
#[command(name = "fwi-demo")]
#[command(about = "Canadian Forest Fire Weather Index System calculator", long_about = None)]
struct Args {
    /// Yesterday's Fine Fuel Moisture Code
    #[arg(long, default_value_t = FireCodeState::STARTUP.ffmc)]
    ffmc: f64,

    /// Yesterday's Duff Moisture Code
    #[arg(long, default_value_t = FireCodeState::STARTUP.dmc)]
    dmc: f64,

    /// Yesterday's Drought Code
    #[arg(long, default_value_t = FireCodeState::STARTUP.dc)]
    dc: f64,

    /// Noon temperature in °C
    #[arg(short, long, default_value_t = 17.0)]
    temperature: f64,

    /// Noon relative humidity in %
    #[arg(long, default_value_t = 42.0)]
    humidity: f64,

    /// Noon 10-m wind speed in km/h
    #[arg(short, long, default_value_t = 25.0)]
    wind_speed: f64,

    /// 24-hour rainfall in mm
    #[arg(short, long, default_value_t = 0.0)]
    rain: f64,

    /// Station latitude in decimal degrees (positive north)
    #[arg(long, default_value_t = 49.75, allow_negative_numbers = true)]
    latitude: f64,

    /// Calendar month (1-12)
    #[arg(short, long, default_value_t = 7)]
    month: u8,

    /// Repeat the same weather for this many consecutive days
    #[arg(short, long, default_value_t = 1)]
    days: usize,

    /// Use the 46°N day-length tables at every latitude
    #[arg(long)]
    no_latitude_adjust: bool,

    /// Use the FBP high-wind function in the ISI
    #[arg(long)]
    fbp: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("=== FWI System Demo ===\n");

    let start = FireCodeState::new(args.ffmc, args.dmc, args.dc);
    let obs = WeatherObservation::new(
        args.temperature,
        args.humidity,
        args.wind_speed,
        args.rain,
        args.latitude,
        args.month,
    );
    let options = PipelineOptions {
        latitude_adjust: !args.no_latitude_adjust,
        fbp_modification: args.fbp,
    };

    println!(
        "Start codes: FFMC {:.1}, DMC {:.1}, DC {:.1}",
        start.ffmc, start.dmc, start.dc
    );
    println!(
        "Weather: {}, RH {}, wind {}, rain {}",
        obs.temperature, obs.relative_humidity, obs.wind_speed, obs.precipitation
    );
    println!(
        "Station: {} in month {} (latitude adjust: {}, FBP: {})\n",
        obs.latitude, obs.month, options.latitude_adjust, options.fbp_modification
    );

    let observations = vec![obs; args.days.max(1)];
    let results = match run_station_series(&start, &observations, &options) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Rejected input: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "{:>4} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6}  Danger",
        "Day", "FFMC", "DMC", "DC", "ISI", "BUI", "FWI", "DSR"
    );
    for (day, result) in results.iter().enumerate() {
        let danger = DangerClass::from_fwi(result.indices.fwi)
            .map_or_else(|| "-".to_string(), |class| class.to_string());
        println!(
            "{:>4} {:>6.1} {:>6.1} {:>6.1} {:>6.1} {:>6.1} {:>6.1} {:>6.1}  {}",
            day + 1,
            result.state.ffmc,
            result.state.dmc,
            result.state.dc,
            result.indices.isi,
            result.indices.bui,
            result.indices.fwi,
            result.indices.dsr,
            danger
        );
    }
}
