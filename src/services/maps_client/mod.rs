pub mod html_cleanup;
pub mod maps_service;
pub mod types;
