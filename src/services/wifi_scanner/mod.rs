pub mod wifi_scanner;
