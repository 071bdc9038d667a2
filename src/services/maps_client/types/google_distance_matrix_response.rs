use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct GoogleDistanceMatrixResponseTextValue {
    pub text: String,
    pub value: i64,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleDistanceMatrixResponseFare {
    pub text: String,
    pub value: f64,
    pub currency: String,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleDistanceMatrixResponseElement {
    pub status: String,
    pub duration: Option<GoogleDistanceMatrixResponseTextValue>,
    pub distance: Option<GoogleDistanceMatrixResponseTextValue>,
    /// Only returned for transit requests, and not for all of them.
    pub fare: Option<GoogleDistanceMatrixResponseFare>,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleDistanceMatrixResponseRow {
    pub elements: Vec<GoogleDistanceMatrixResponseElement>,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleDistanceMatrixResponse {
    pub status: String,
    #[serde(default)]
    pub origin_addresses: Vec<String>,
    #[serde(default)]
    pub destination_addresses: Vec<String>,
    #[serde(default)]
    pub rows: Vec<GoogleDistanceMatrixResponseRow>,
    pub error_message: Option<String>,
}
