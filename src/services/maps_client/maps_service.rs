use chrono::{DateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;
use urlencoding::encode;

use super::html_cleanup::clean_instruction;
use super::types::{
    google_directions_response::GoogleDirectionsResponse,
    google_distance_matrix_response::GoogleDistanceMatrixResponse,
    google_geocode_response::{GoogleGeocodeResponse, GoogleGeocodeResponseAddressComponent},
    google_geolocation_response::{
        GoogleGeolocationRequest, GoogleGeolocationRequestAccessPoint, GoogleGeolocationResponse,
    },
    google_places_response::GooglePlacesResponse,
    google_time_zone_response::GoogleTimeZoneResponse,
    maps_service_error::{screen_status, ApiResponse, MapsServiceError},
};
use crate::config::MapsConfig;
use crate::services::wifi_scanner::wifi_scanner::AccessPoint;
use crate::types::coordinate::Coordinate;
use crate::types::travel::{TravelMode, UnitSystem};

/// Stateless adapters over the Google Maps web services. Every method is a
/// pure function of its input and the remote response: one request awaited
/// at a time, no retries, no shared mutable state.
#[derive(Clone)]
pub struct MapsService {
    config: MapsConfig,
    client: reqwest::Client,
}

#[derive(Debug)]
pub struct GeocodeResult {
    pub input_address: String,
    pub formatted_address: String,
    pub country: String,
    pub state: String,
    pub postal_code: String,
    pub location: Coordinate,
}

#[derive(Debug)]
pub struct DirectionStep {
    pub instruction: String,
    pub duration: String,
    pub distance: String,
    pub travel_mode: String,
    pub maneuver: String,
}

pub struct DirectionsInput {
    pub origin: String,
    pub destination: String,
    pub mode: TravelMode,
    pub units: UnitSystem,
}

#[derive(Debug)]
pub struct FareAmount {
    pub text: String,
    pub value: f64,
    pub currency: String,
}

#[derive(Debug)]
pub struct DistanceResult {
    pub origin: String,
    pub destination: String,
    pub duration: String,
    pub distance: String,
    pub mode: TravelMode,
    pub fare: Option<FareAmount>,
}

pub struct DistanceInput {
    pub origin: String,
    pub destination: String,
    pub mode: TravelMode,
    pub units: UnitSystem,
}

#[derive(Debug)]
pub struct TimeZoneResult {
    pub zone_name: String,
    pub zone_id: String,
    pub local_time: DateTime<Utc>,
}

/// Tri-state opening flag: the places endpoint omits the field for venues
/// with no registered hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpenNow {
    Open,
    Closed,
    Unknown,
}

impl std::fmt::Display for OpenNow {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OpenNow::Open => f.write_str("true"),
            OpenNow::Closed => f.write_str("false"),
            OpenNow::Unknown => f.write_str("unknown"),
        }
    }
}

#[derive(Debug)]
pub struct PlaceResult {
    pub name: String,
    pub vicinity: String,
    pub place_type: String,
    pub location: Coordinate,
    pub open_now: OpenNow,
}

pub struct NearbySearchInput {
    pub location: Coordinate,
    pub radius: u32,
    pub place_type: Option<String>,
    pub keywords: Vec<String>,
}

#[derive(Debug)]
pub struct GeolocationFix {
    pub location: Coordinate,
    pub accuracy: f64,
}

impl MapsService {
    pub fn new(config: MapsConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Resolves a free-text address to zero or more candidate matches.
    pub async fn geocode(
        &self,
        address: &str,
    ) -> Result<ApiResponse<Vec<GeocodeResult>>, MapsServiceError> {
        let key = self
            .config
            .geocoding_key()
            .map_err(MapsServiceError::MissingApiKey)?;
        let url = format!(
            "{}/maps/api/geocode/json?address={}&key={}",
            self.config.host,
            plus_encode(address),
            key
        );

        let body = self.fetch::<GoogleGeocodeResponse>(&url).await?;
        if !screen_status(body.status, body.error_message)? {
            return Ok(ApiResponse::NoResults);
        }

        let results = body
            .results
            .into_iter()
            .map(|result| GeocodeResult {
                input_address: address.to_string(),
                formatted_address: result.formatted_address,
                country: component_long_name(&result.address_components, "country"),
                state: component_long_name(
                    &result.address_components,
                    "administrative_area_level_1",
                ),
                postal_code: component_long_name(&result.address_components, "postal_code"),
                location: Coordinate {
                    lat: result.geometry.location.lat,
                    lng: result.geometry.location.lng,
                },
            })
            .collect();

        Ok(ApiResponse::Results(results))
    }

    /// Resolves a coordinate to its most specific formatted address (the
    /// first result in the response list).
    pub async fn reverse_geocode(
        &self,
        location: &Coordinate,
    ) -> Result<ApiResponse<String>, MapsServiceError> {
        let key = self
            .config
            .geocoding_key()
            .map_err(MapsServiceError::MissingApiKey)?;
        let url = format!(
            "{}/maps/api/geocode/json?latlng={}&key={}",
            self.config.host, location, key
        );

        let body = self.fetch::<GoogleGeocodeResponse>(&url).await?;
        if !screen_status(body.status, body.error_message)? {
            return Ok(ApiResponse::NoResults);
        }

        match body.results.into_iter().next() {
            Some(result) => Ok(ApiResponse::Results(result.formatted_address)),
            None => Ok(ApiResponse::NoResults),
        }
    }

    /// Fetches a route and flattens all legs' steps into one ordered
    /// sequence.
    pub async fn directions(
        &self,
        input: &DirectionsInput,
    ) -> Result<ApiResponse<Vec<DirectionStep>>, MapsServiceError> {
        let key = self
            .config
            .directions_key()
            .map_err(MapsServiceError::MissingApiKey)?;
        let url = format!(
            "{}/maps/api/directions/json?origin={}&destination={}&mode={}&units={}&key={}",
            self.config.host,
            plus_encode(&input.origin),
            plus_encode(&input.destination),
            input.mode.as_param(),
            input.units.as_param(),
            key
        );

        let body = self.fetch::<GoogleDirectionsResponse>(&url).await?;
        if !screen_status(body.status, body.error_message)? {
            return Ok(ApiResponse::NoResults);
        }

        let route = match body.routes.into_iter().next() {
            Some(route) => route,
            None => return Ok(ApiResponse::NoResults),
        };

        let steps = route
            .legs
            .into_iter()
            .flat_map(|leg| leg.steps)
            .map(|step| DirectionStep {
                instruction: clean_instruction(&step.html_instructions),
                duration: step.duration.text,
                distance: step.distance.text,
                travel_mode: step.travel_mode,
                maneuver: step.maneuver.unwrap_or_default(),
            })
            .collect();

        Ok(ApiResponse::Results(steps))
    }

    /// Fetches a single origin/destination pair from the distance matrix.
    /// A missing fare never fails the result, it just leaves the field
    /// empty.
    pub async fn distance(
        &self,
        input: &DistanceInput,
    ) -> Result<ApiResponse<DistanceResult>, MapsServiceError> {
        let key = self
            .config
            .distance_key()
            .map_err(MapsServiceError::MissingApiKey)?;
        let url = format!(
            "{}/maps/api/distancematrix/json?origins={}&destinations={}&mode={}&units={}&key={}",
            self.config.host,
            plus_encode(&input.origin),
            plus_encode(&input.destination),
            input.mode.as_param(),
            input.units.as_param(),
            key
        );

        let body = self.fetch::<GoogleDistanceMatrixResponse>(&url).await?;
        if !screen_status(body.status, body.error_message)? {
            return Ok(ApiResponse::NoResults);
        }

        let element = body
            .rows
            .into_iter()
            .next()
            .and_then(|row| row.elements.into_iter().next())
            .ok_or_else(|| {
                MapsServiceError::Parse("Distance matrix response contained no elements".to_string())
            })?;
        if !screen_status(element.status, None)? {
            return Ok(ApiResponse::NoResults);
        }

        Ok(ApiResponse::Results(DistanceResult {
            origin: body.origin_addresses.into_iter().next().unwrap_or_default(),
            destination: body
                .destination_addresses
                .into_iter()
                .next()
                .unwrap_or_default(),
            duration: element.duration.map(|d| d.text).unwrap_or_default(),
            distance: element.distance.map(|d| d.text).unwrap_or_default(),
            mode: input.mode,
            fare: element.fare.map(|fare| FareAmount {
                text: fare.text,
                value: fare.value,
                currency: fare.currency,
            }),
        }))
    }

    /// Looks up the time zone at a coordinate. The timestamp is supplied by
    /// the caller so a whole batch shares one reference instant; the local
    /// time is epoch + timestamp + raw offset + DST offset, in seconds.
    pub async fn time_zone(
        &self,
        location: &Coordinate,
        timestamp: i64,
    ) -> Result<ApiResponse<TimeZoneResult>, MapsServiceError> {
        let key = self
            .config
            .time_zone_key()
            .map_err(MapsServiceError::MissingApiKey)?;
        let url = format!(
            "{}/maps/api/timezone/json?location={}&timestamp={}&key={}",
            self.config.host, location, timestamp, key
        );

        let body = self.fetch::<GoogleTimeZoneResponse>(&url).await?;
        if !screen_status(body.status, body.error_message)? {
            return Ok(ApiResponse::NoResults);
        }

        let local_seconds =
            timestamp + body.raw_offset.unwrap_or(0) + body.dst_offset.unwrap_or(0);
        let local_time = Utc
            .timestamp_opt(local_seconds, 0)
            .single()
            .ok_or_else(|| {
                MapsServiceError::Parse(format!("Offsets produced an invalid time: {}", local_seconds))
            })?;

        Ok(ApiResponse::Results(TimeZoneResult {
            zone_name: body.time_zone_name.unwrap_or_default(),
            zone_id: body.time_zone_id.unwrap_or_default(),
            local_time,
        }))
    }

    /// Searches for places around a coordinate, preserving the remote
    /// ranking order. Keywords are OR-combined; none at all is valid.
    pub async fn nearby_places(
        &self,
        input: &NearbySearchInput,
    ) -> Result<ApiResponse<Vec<PlaceResult>>, MapsServiceError> {
        let key = self
            .config
            .places_key()
            .map_err(MapsServiceError::MissingApiKey)?;
        let url = format!(
            "{}/maps/api/place/nearbysearch/json?{}&key={}",
            self.config.host,
            nearby_query(input),
            key
        );

        let body = self.fetch::<GooglePlacesResponse>(&url).await?;
        if !screen_status(body.status, body.error_message)? {
            return Ok(ApiResponse::NoResults);
        }

        let places = body
            .results
            .into_iter()
            .map(|place| PlaceResult {
                name: place.name,
                vicinity: place.vicinity.unwrap_or_default(),
                place_type: place
                    .types
                    .first()
                    .map(|t| display_place_type(t))
                    .unwrap_or_default(),
                location: Coordinate {
                    lat: place.geometry.location.lat,
                    lng: place.geometry.location.lng,
                },
                open_now: match place.opening_hours.and_then(|hours| hours.open_now) {
                    Some(true) => OpenNow::Open,
                    Some(false) => OpenNow::Closed,
                    None => OpenNow::Unknown,
                },
            })
            .collect();

        Ok(ApiResponse::Results(places))
    }

    /// Estimates the device position from every visible access point. The
    /// endpoint answers with an HTTP error rather than a status field, so
    /// there is no ZERO_RESULTS branch here.
    pub async fn geolocate(
        &self,
        access_points: &[AccessPoint],
    ) -> Result<GeolocationFix, MapsServiceError> {
        let key = self
            .config
            .geolocation_key()
            .map_err(MapsServiceError::MissingApiKey)?;
        let url = format!(
            "{}/geolocation/v1/geolocate?key={}",
            self.config.geolocation_host, key
        );
        let request = GoogleGeolocationRequest {
            consider_ip: false,
            wifi_access_points: access_points
                .iter()
                .map(|ap| GoogleGeolocationRequestAccessPoint {
                    mac_address: ap.bssid.clone(),
                    // nmcli reports quality as 0-100; the API wants dBm
                    signal_strength: ap.signal.map(|percent| percent / 2 - 100),
                })
                .collect(),
        };

        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| MapsServiceError::Request(format!("Failed to send request: {}", e)))?;

        if !resp.status().is_success() {
            let status = resp.status().to_string();
            let message = resp.text().await.ok().filter(|body| !body.is_empty());
            return Err(MapsServiceError::Status { status, message });
        }

        let body = resp
            .json::<GoogleGeolocationResponse>()
            .await
            .map_err(|e| MapsServiceError::Parse(format!("Failed to get response body: {}", e)))?;

        Ok(GeolocationFix {
            location: Coordinate {
                lat: body.location.lat,
                lng: body.location.lng,
            },
            accuracy: body.accuracy,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, MapsServiceError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MapsServiceError::Request(format!("Failed to send request: {}", e)))?;

        resp.json::<T>()
            .await
            .map_err(|e| MapsServiceError::Parse(format!("Failed to get response body: {}", e)))
    }
}

/// Replaces internal whitespace with `+`, the historical encoding for
/// address parameters. Not percent-encoding on purpose.
fn plus_encode(address: &str) -> String {
    address.split_whitespace().collect::<Vec<_>>().join("+")
}

/// Query string for a nearby search. The type filter and the OR-joined
/// keyword list only appear when the caller supplied them.
fn nearby_query(input: &NearbySearchInput) -> String {
    let mut query = format!("location={}&radius={}", input.location, input.radius);
    if let Some(place_type) = &input.place_type {
        query.push_str(&format!("&type={}", encode(place_type)));
    }
    if !input.keywords.is_empty() {
        query.push_str(&format!("&keyword={}", encode(&input.keywords.join("|"))));
    }
    query
}

/// First matching component's long name, or empty when the response has no
/// component of that kind.
fn component_long_name(
    components: &[GoogleGeocodeResponseAddressComponent],
    kind: &str,
) -> String {
    components
        .iter()
        .find(|component| component.types.iter().any(|t| t == kind))
        .map(|component| component.long_name.clone())
        .unwrap_or_default()
}

/// `night_club` -> `Night Club`.
fn display_place_type(raw: &str) -> String {
    raw.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
