use tracing::{error, warn};

use crate::services::maps_client::maps_service::MapsService;
use crate::services::maps_client::types::maps_service_error::{ApiResponse, MapsServiceError};

/// Resolves each address independently: one failed lookup logs a
/// diagnostic and the batch moves on to the next input.
pub async fn run(service: &MapsService, addresses: &[String]) -> i32 {
    println!("input\taddress\tcountry\tstate\tpostal_code\tcoordinates");
    let mut failed = false;
    for address in addresses {
        if address.trim().is_empty() {
            warn!("skipping empty address");
            continue;
        }
        match service.geocode(address).await {
            Ok(ApiResponse::Results(results)) => {
                for result in results {
                    println!(
                        "{}\t{}\t{}\t{}\t{}\t{}",
                        result.input_address,
                        result.formatted_address,
                        result.country,
                        result.state,
                        result.postal_code,
                        result.location
                    );
                }
            }
            Ok(ApiResponse::NoResults) => warn!("no results for \"{}\"", address),
            Err(MapsServiceError::MissingApiKey(e)) => {
                error!("{}", e);
                return 1;
            }
            Err(e) => {
                error!("geocoding \"{}\" failed: {}", address, e);
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
    use crate::services::maps_client::types::google_geocode_response::*;
    use tracing_test::traced_test;

    fn ok_response(address: &str) -> GoogleGeocodeResponse {
        GoogleGeocodeResponse {
            status: "OK".to_string(),
            error_message: None,
            results: vec![GoogleGeocodeResponseResult {
                formatted_address: address.to_string(),
                address_components: vec![],
                geometry: GoogleGeocodeResponseGeometry {
                    location: GoogleGeocodeResponseLocation {
                        lat: 1.0,
                        lng: 2.0,
                    },
                },
            }],
        }
    }

    #[tokio::test]
    #[traced_test]
    async fn one_bad_address_does_not_abort_the_batch() {
        let mut server = mockito::Server::new_async().await;
        let denied = GoogleGeocodeResponse {
            status: "REQUEST_DENIED".to_string(),
            error_message: Some("quota".to_string()),
            results: vec![],
        };
        let first = server
            .mock("GET", "/maps/api/geocode/json")
            .match_query(mockito::Matcher::Regex("address=bad\\+place".to_string()))
            .with_body(serde_json::to_string(&denied).unwrap())
            .create_async()
            .await;
        let second = server
            .mock("GET", "/maps/api/geocode/json")
            .match_query(mockito::Matcher::Regex("address=good\\+place".to_string()))
            .with_body(serde_json::to_string(&ok_response("Good Place, USA")).unwrap())
            .create_async()
            .await;
        let service = MapsService::new(test_config(&server.url()));
        let addresses = vec!["bad place".to_string(), "good place".to_string()];

        let exit_code = run(&service, &addresses).await;

        first.assert();
        second.assert();
        assert_eq!(exit_code, 1);
        assert!(logs_contain("geocoding \"bad place\" failed"));
    }

    #[tokio::test]
    #[traced_test]
    async fn missing_key_aborts_without_touching_the_network() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/maps/api/geocode/json")
            .match_query(mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let mut config = test_config(&server.url());
        config.geocoding_key = None;
        let service = MapsService::new(config);
        let addresses = vec!["white house".to_string(), "eiffel tower".to_string()];

        let exit_code = run(&service, &addresses).await;

        mock.assert();
        assert_eq!(exit_code, 1);
        assert!(logs_contain("GOOGLE_GEOCODING_API_KEY is not set"));
    }
}
