mod cli;
mod commands;
mod config;
mod services;
mod types;

use structopt::StructOpt;

use services::maps_client::maps_service::MapsService;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    // diagnostics go to stderr so the tabular stdout stays pipeable
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = cli::Cli::from_args();
    let config = config::MapsConfig::from_env();
    let service = MapsService::new(config);

    let exit_code = match args {
        cli::Cli::Geocode { addresses } => commands::geocode::run(&service, &addresses).await,
        cli::Cli::Reverse { location } => commands::reverse_geocode::run(&service, &location).await,
        cli::Cli::Directions {
            from,
            to,
            mode,
            imperial,
        } => commands::directions::run(&service, &from, &to, mode, imperial).await,
        cli::Cli::Distance {
            from,
            to,
            mode,
            imperial,
        } => commands::distance::run(&service, &from, &to, mode, imperial).await,
        cli::Cli::Timezone { locations } => commands::time_zone::run(&service, &locations).await,
        cli::Cli::Nearby {
            location,
            radius,
            place_type,
            keywords,
        } => commands::nearby::run(&service, location, radius, place_type, keywords).await,
        cli::Cli::Locate { coordinates } => commands::locate::run(&service, coordinates).await,
    };

    std::process::exit(exit_code);
}
