use std::env;
use std::fmt;

pub const DEFAULT_MAPS_HOST: &str = "https://maps.googleapis.com";
pub const DEFAULT_GEOLOCATION_HOST: &str = "https://www.googleapis.com";

/// Per-endpoint API keys and hosts, read from the process environment once
/// at startup and passed into the service constructor. Adapters never read
/// the environment themselves, which keeps them swappable against a mock
/// host in tests.
#[derive(Clone)]
pub struct MapsConfig {
    pub host: String,
    pub geolocation_host: String,
    pub geocoding_key: Option<String>,
    pub directions_key: Option<String>,
    pub distance_key: Option<String>,
    pub time_zone_key: Option<String>,
    pub places_key: Option<String>,
    pub geolocation_key: Option<String>,
}

/// A required API key that was not present in the environment. Raised
/// before any network activity and treated as fatal by every command.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingApiKey {
    pub variable: &'static str,
    pub docs_url: &'static str,
}

impl fmt::Display for MissingApiKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} is not set. Create an API key at {} and export it before retrying.",
            self.variable, self.docs_url
        )
    }
}

impl MapsConfig {
    pub fn from_env() -> Self {
        MapsConfig {
            host: DEFAULT_MAPS_HOST.to_string(),
            geolocation_host: DEFAULT_GEOLOCATION_HOST.to_string(),
            geocoding_key: env::var("GOOGLE_GEOCODING_API_KEY").ok(),
            directions_key: env::var("GOOGLE_DIRECTIONS_API_KEY").ok(),
            distance_key: env::var("GOOGLE_DISTANCE_API_KEY").ok(),
            time_zone_key: env::var("GOOGLE_TIMEZONE_API_KEY").ok(),
            places_key: env::var("GOOGLE_PLACES_API_KEY").ok(),
            geolocation_key: env::var("GOOGLE_GEOLOCATION_API_KEY").ok(),
        }
    }

    /// The geocoding key also covers reverse geocoding.
    pub fn geocoding_key(&self) -> Result<&str, MissingApiKey> {
        require(
            &self.geocoding_key,
            "GOOGLE_GEOCODING_API_KEY",
            "https://developers.google.com/maps/documentation/geocoding/get-api-key",
        )
    }

    pub fn directions_key(&self) -> Result<&str, MissingApiKey> {
        require(
            &self.directions_key,
            "GOOGLE_DIRECTIONS_API_KEY",
            "https://developers.google.com/maps/documentation/directions/get-api-key",
        )
    }

    pub fn distance_key(&self) -> Result<&str, MissingApiKey> {
        require(
            &self.distance_key,
            "GOOGLE_DISTANCE_API_KEY",
            "https://developers.google.com/maps/documentation/distance-matrix/get-api-key",
        )
    }

    pub fn time_zone_key(&self) -> Result<&str, MissingApiKey> {
        require(
            &self.time_zone_key,
            "GOOGLE_TIMEZONE_API_KEY",
            "https://developers.google.com/maps/documentation/timezone/get-api-key",
        )
    }

    pub fn places_key(&self) -> Result<&str, MissingApiKey> {
        require(
            &self.places_key,
            "GOOGLE_PLACES_API_KEY",
            "https://developers.google.com/maps/documentation/places/web-service/get-api-key",
        )
    }

    pub fn geolocation_key(&self) -> Result<&str, MissingApiKey> {
        require(
            &self.geolocation_key,
            "GOOGLE_GEOLOCATION_API_KEY",
            "https://developers.google.com/maps/documentation/geolocation/get-api-key",
        )
    }
}

fn require<'a>(
    value: &'a Option<String>,
    variable: &'static str,
    docs_url: &'static str,
) -> Result<&'a str, MissingApiKey> {
    value
        .as_deref()
        .filter(|key| !key.is_empty())
        .ok_or(MissingApiKey { variable, docs_url })
}

#[cfg(test)]
pub fn test_config(host: &str) -> MapsConfig {
    MapsConfig {
        host: host.to_string(),
        geolocation_host: host.to_string(),
        geocoding_key: Some("test-key".to_string()),
        directions_key: Some("test-key".to_string()),
        distance_key: Some("test-key".to_string()),
        time_zone_key: Some("test-key".to_string()),
        places_key: Some("test-key".to_string()),
        geolocation_key: Some("test-key".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_names_variable_and_docs_url() {
        let mut config = test_config("http://localhost");
        config.places_key = None;

        let err = config.places_key().unwrap_err();

        assert_eq!(err.variable, "GOOGLE_PLACES_API_KEY");
        let message = err.to_string();
        assert!(message.contains("GOOGLE_PLACES_API_KEY is not set"));
        assert!(message.contains("https://developers.google.com/maps/documentation/places"));
    }

    #[test]
    fn empty_key_counts_as_missing() {
        let mut config = test_config("http://localhost");
        config.geocoding_key = Some(String::new());

        assert!(config.geocoding_key().is_err());
    }

    #[test]
    fn present_key_is_returned() {
        let config = test_config("http://localhost");

        assert_eq!(config.directions_key().unwrap(), "test-key");
    }
}
