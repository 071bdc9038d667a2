pub mod directions;
pub mod distance;
pub mod geocode;
pub mod locate;
pub mod nearby;
pub mod reverse_geocode;
pub mod time_zone;
