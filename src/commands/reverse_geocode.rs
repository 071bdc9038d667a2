use tracing::{error, warn};

use crate::services::maps_client::maps_service::MapsService;
use crate::services::maps_client::types::maps_service_error::ApiResponse;
use crate::types::coordinate::Coordinate;

pub async fn run(service: &MapsService, location: &Coordinate) -> i32 {
    match service.reverse_geocode(location).await {
        Ok(ApiResponse::Results(address)) => {
            println!("{}", address);
            0
        }
        Ok(ApiResponse::NoResults) => {
            warn!("no address found for {}", location);
            0
        }
        Err(e) => {
            error!("reverse geocoding {} failed: {}", location, e);
            1
        }
    }
}
