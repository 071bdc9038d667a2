use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct GoogleDirectionsResponseTextValue {
    pub text: String,
    pub value: i64,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleDirectionsResponseStep {
    pub html_instructions: String,
    pub duration: GoogleDirectionsResponseTextValue,
    pub distance: GoogleDirectionsResponseTextValue,
    pub travel_mode: String,
    pub maneuver: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleDirectionsResponseLeg {
    pub steps: Vec<GoogleDirectionsResponseStep>,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleDirectionsResponseRoute {
    pub legs: Vec<GoogleDirectionsResponseLeg>,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleDirectionsResponse {
    pub status: String,
    #[serde(default)]
    pub routes: Vec<GoogleDirectionsResponseRoute>,
    pub error_message: Option<String>,
}
