use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct GooglePlacesResponseLocation {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize)]
pub struct GooglePlacesResponseGeometry {
    pub location: GooglePlacesResponseLocation,
}

#[derive(Serialize, Deserialize)]
pub struct GooglePlacesResponseOpeningHours {
    pub open_now: Option<bool>,
}

#[derive(Serialize, Deserialize)]
pub struct GooglePlacesResponseResult {
    pub name: String,
    pub vicinity: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    pub geometry: GooglePlacesResponseGeometry,
    pub opening_hours: Option<GooglePlacesResponseOpeningHours>,
}

#[derive(Serialize, Deserialize)]
pub struct GooglePlacesResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GooglePlacesResponseResult>,
    pub error_message: Option<String>,
}
