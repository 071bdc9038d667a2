use chrono::Utc;
use tracing::{error, warn};

use crate::services::maps_client::maps_service::MapsService;
use crate::services::maps_client::types::maps_service_error::{ApiResponse, MapsServiceError};
use crate::types::coordinate::Coordinate;

pub async fn run(service: &MapsService, locations: &[Coordinate]) -> i32 {
    // One reference instant per invocation: every coordinate in the batch
    // is resolved against the same timestamp.
    let timestamp = Utc::now().timestamp();
    run_with_timestamp(service, locations, timestamp).await
}

pub(crate) async fn run_with_timestamp(
    service: &MapsService,
    locations: &[Coordinate],
    timestamp: i64,
) -> i32 {
    println!("coordinates\tzone_id\tzone_name\tlocal_time");
    let mut failed = false;
    for location in locations {
        match service.time_zone(location, timestamp).await {
            Ok(ApiResponse::Results(result)) => {
                println!(
                    "{}\t{}\t{}\t{}",
                    location,
                    result.zone_id,
                    result.zone_name,
                    result.local_time.format("%Y-%m-%d %H:%M:%S")
                );
            }
            Ok(ApiResponse::NoResults) => warn!("no time zone found for {}", location),
            Err(MapsServiceError::MissingApiKey(e)) => {
                error!("{}", e);
                return 1;
            }
            Err(e) => {
                error!("time zone lookup for {} failed: {}", location, e);
                failed = true;
            }
        }
    }
    i32::from(failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use crate::services::maps_client::types::google_time_zone_response::GoogleTimeZoneResponse;

    #[tokio::test]
    async fn every_coordinate_in_a_batch_shares_one_timestamp() {
        let mut server = mockito::Server::new_async().await;
        let body = GoogleTimeZoneResponse {
            status: "OK".to_string(),
            time_zone_id: Some("America/New_York".to_string()),
            time_zone_name: Some("Eastern Standard Time".to_string()),
            raw_offset: Some(-18000),
            dst_offset: Some(0),
            error_message: None,
        };
        let mock = server
            .mock("GET", "/maps/api/timezone/json")
            .match_query(mockito::Matcher::UrlEncoded(
                "timestamp".to_string(),
                "1700000000".to_string(),
            ))
            .with_body(serde_json::to_string(&body).unwrap())
            .expect(2)
            .create_async()
            .await;
        let service = MapsService::new(test_config(&server.url()));
        let locations = vec![
            Coordinate {
                lat: 40.7127753,
                lng: -74.0059728,
            },
            Coordinate {
                lat: 38.8976763,
                lng: -77.0365298,
            },
        ];

        let exit_code = run_with_timestamp(&service, &locations, 1700000000).await;

        mock.assert();
        assert_eq!(exit_code, 0);
    }
}
