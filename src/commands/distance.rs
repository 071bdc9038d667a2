use tracing::{error, warn};

use crate::services::maps_client::maps_service::{DistanceInput, MapsService};
use crate::services::maps_client::types::maps_service_error::ApiResponse;
use crate::types::travel::{TravelMode, UnitSystem};

pub async fn run(
    service: &MapsService,
    from: &str,
    to: &str,
    mode: TravelMode,
    imperial: bool,
) -> i32 {
    let input = DistanceInput {
        origin: from.to_string(),
        destination: to.to_string(),
        mode,
        units: UnitSystem::from_imperial_flag(imperial),
    };

    match service.distance(&input).await {
        Ok(ApiResponse::Results(result)) => {
            println!("origin\tdestination\tduration\tdistance\tmode\tfare");
            // the fare column stays empty for non-transit results
            let fare = result
                .fare
                .map(|fare| format!("{} ({})", fare.text, fare.currency))
                .unwrap_or_default();
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                result.origin, result.destination, result.duration, result.distance, result.mode, fare
            );
            0
        }
        Ok(ApiResponse::NoResults) => {
            warn!("no route found from \"{}\" to \"{}\"", from, to);
            0
        }
        Err(e) => {
            error!("distance from \"{}\" to \"{}\" failed: {}", from, to, e);
            1
        }
    }
}
