pub mod google_directions_response;
pub mod google_distance_matrix_response;
pub mod google_geocode_response;
pub mod google_geolocation_response;
pub mod google_places_response;
pub mod google_time_zone_response;
pub mod maps_service_error;
