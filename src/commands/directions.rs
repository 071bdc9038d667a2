use tracing::{error, warn};

use crate::services::maps_client::maps_service::{DirectionsInput, MapsService};
use crate::services::maps_client::types::maps_service_error::ApiResponse;
use crate::types::travel::{TravelMode, UnitSystem};

pub async fn run(
    service: &MapsService,
    from: &str,
    to: &str,
    mode: TravelMode,
    imperial: bool,
) -> i32 {
    if mode == TravelMode::Transit {
        error!("transit is not a supported directions mode; use `gmaps distance --mode transit`");
        return 1;
    }

    let input = DirectionsInput {
        origin: from.to_string(),
        destination: to.to_string(),
        mode,
        units: UnitSystem::from_imperial_flag(imperial),
    };

    match service.directions(&input).await {
        Ok(ApiResponse::Results(steps)) => {
            println!("step\tinstruction\tduration\tdistance\tmode\tmaneuver");
            for (index, step) in steps.iter().enumerate() {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    index + 1,
                    step.instruction,
                    step.duration,
                    step.distance,
                    step.travel_mode,
                    step.maneuver
                );
            }
            0
        }
        Ok(ApiResponse::NoResults) => {
            warn!("no route found from \"{}\" to \"{}\"", from, to);
            0
        }
        Err(e) => {
            error!("directions from \"{}\" to \"{}\" failed: {}", from, to, e);
            1
        }
    }
}
