use tracing::{error, warn};

use crate::services::maps_client::maps_service::{MapsService, NearbySearchInput};
use crate::services::maps_client::types::maps_service_error::ApiResponse;
use crate::types::coordinate::Coordinate;

pub async fn run(
    service: &MapsService,
    location: Coordinate,
    radius: u32,
    place_type: Option<String>,
    keywords: Vec<String>,
) -> i32 {
    let input = NearbySearchInput {
        location,
        radius,
        place_type,
        keywords,
    };

    match service.nearby_places(&input).await {
        Ok(ApiResponse::Results(places)) => {
            println!("name\tvicinity\ttype\tcoordinates\topen_now");
            // rows stay in the API's ranking order
            for place in places {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    place.name, place.vicinity, place.place_type, place.location, place.open_now
                );
            }
            0
        }
        Ok(ApiResponse::NoResults) => {
            warn!("no places found around {}", location);
            0
        }
        Err(e) => {
            error!("nearby search around {} failed: {}", location, e);
            1
        }
    }
}
