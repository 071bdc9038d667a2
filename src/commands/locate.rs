use tracing::{error, info, warn};

use crate::services::maps_client::maps_service::MapsService;
use crate::services::maps_client::types::maps_service_error::ApiResponse;
use crate::services::wifi_scanner::wifi_scanner;

/// Estimates the machine's position from visible wireless access points,
/// then reverse geocodes the fix into a street address.
pub async fn run(service: &MapsService, show_coordinates: bool) -> i32 {
    let access_points = match wifi_scanner::scan_access_points() {
        Ok(access_points) => access_points,
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };

    if access_points.is_empty() {
        println!("No wireless access points are visible; cannot estimate a location.");
        return 0;
    }
    info!("sending {} visible access points", access_points.len());

    let fix = match service.geolocate(&access_points).await {
        Ok(fix) => fix,
        Err(e) => {
            error!("geolocation failed: {}", e);
            return 1;
        }
    };

    match service.reverse_geocode(&fix.location).await {
        Ok(ApiResponse::Results(address)) => {
            if show_coordinates {
                println!("{}\t{}", address, fix.location);
            } else {
                println!("{}", address);
            }
            0
        }
        Ok(ApiResponse::NoResults) => {
            warn!("no address found for {}", fix.location);
            if show_coordinates {
                println!("{}", fix.location);
            }
            0
        }
        Err(e) => {
            error!("reverse geocoding {} failed: {}", fix.location, e);
            1
        }
    }
}
