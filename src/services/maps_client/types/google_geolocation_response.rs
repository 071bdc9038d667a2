use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleGeolocationRequestAccessPoint {
    pub mac_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal_strength: Option<i32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleGeolocationRequest {
    pub consider_ip: bool,
    pub wifi_access_points: Vec<GoogleGeolocationRequestAccessPoint>,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleGeolocationResponseLocation {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleGeolocationResponse {
    pub location: GoogleGeolocationResponseLocation,
    pub accuracy: f64,
}
