use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct GoogleGeocodeResponseAddressComponent {
    pub long_name: String,
    pub types: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleGeocodeResponseLocation {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleGeocodeResponseGeometry {
    pub location: GoogleGeocodeResponseLocation,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleGeocodeResponseResult {
    pub formatted_address: String,
    #[serde(default)]
    pub address_components: Vec<GoogleGeocodeResponseAddressComponent>,
    pub geometry: GoogleGeocodeResponseGeometry,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleGeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GoogleGeocodeResponseResult>,
    pub error_message: Option<String>,
}
