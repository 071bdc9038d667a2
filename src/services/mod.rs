pub mod maps_client;
pub mod wifi_scanner;
