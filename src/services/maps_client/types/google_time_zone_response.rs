use serde::{Deserialize, Serialize};

/// The Time Zone API uses camelCase field names, unlike the other maps
/// endpoints.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleTimeZoneResponse {
    pub status: String,
    pub time_zone_id: Option<String>,
    pub time_zone_name: Option<String>,
    pub raw_offset: Option<i64>,
    pub dst_offset: Option<i64>,
    pub error_message: Option<String>,
}
