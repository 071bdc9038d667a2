use structopt::StructOpt;

use crate::types::coordinate::Coordinate;
use crate::types::travel::TravelMode;

/// Tab-separated output throughout, so that the coordinate column of
/// `geocode` can be piped straight into `reverse`, `timezone` or `nearby`.
#[derive(StructOpt)]
#[structopt(name = "gmaps", about = "Tabular client for the Google Maps web services")]
pub enum Cli {
    /// Resolve free-text addresses to coordinates and address details
    Geocode {
        /// One or more addresses, resolved independently
        #[structopt(required = true)]
        addresses: Vec<String>,
    },
    /// Resolve a "lat,lng" coordinate to its street address
    #[structopt(setting = structopt::clap::AppSettings::AllowLeadingHyphen)]
    Reverse {
        // southern-hemisphere coordinates start with a hyphen
        #[structopt(allow_hyphen_values = true)]
        location: Coordinate,
    },
    /// Turn-by-turn steps between two addresses
    Directions {
        #[structopt(long)]
        from: String,
        #[structopt(long)]
        to: String,
        /// driving, bicycling or walking
        #[structopt(long, default_value = "driving")]
        mode: TravelMode,
        /// Report distances in imperial units instead of metric
        #[structopt(long)]
        imperial: bool,
    },
    /// Travel time and distance between two addresses
    Distance {
        #[structopt(long)]
        from: String,
        #[structopt(long)]
        to: String,
        /// driving, bicycling, walking or transit
        #[structopt(long, default_value = "driving")]
        mode: TravelMode,
        /// Report distances in imperial units instead of metric
        #[structopt(long)]
        imperial: bool,
    },
    /// Time zone and local time at one or more coordinates
    #[structopt(setting = structopt::clap::AppSettings::AllowLeadingHyphen)]
    Timezone {
        /// One or more "lat,lng" coordinates
        #[structopt(required = true, allow_hyphen_values = true)]
        locations: Vec<Coordinate>,
    },
    /// Places around a coordinate, in the API's ranking order
    #[structopt(setting = structopt::clap::AppSettings::AllowLeadingHyphen)]
    Nearby {
        #[structopt(allow_hyphen_values = true)]
        location: Coordinate,
        /// Search radius in meters (the API caps this at 50000)
        #[structopt(long, default_value = "500")]
        radius: u32,
        /// Place type filter, e.g. restaurant
        #[structopt(long = "place-type")]
        place_type: Option<String>,
        /// OR-combined keyword filter; may be repeated
        #[structopt(long = "keyword")]
        keywords: Vec<String>,
    },
    /// Estimate this machine's address from visible wifi networks
    Locate {
        /// Also print the estimated coordinate
        #[structopt(long)]
        coordinates: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_accepts_negative_latitude() {
        let cli = Cli::from_iter_safe(["gmaps", "reverse", "-33.8688197,151.2092955"]).unwrap();

        match cli {
            Cli::Reverse { location } => {
                assert_eq!(location.lat, -33.8688197);
                assert_eq!(location.lng, 151.2092955);
            }
            _ => panic!("expected the reverse subcommand"),
        }
    }

    #[test]
    fn timezone_accepts_a_batch_of_negative_coordinates() {
        let cli = Cli::from_iter_safe([
            "gmaps",
            "timezone",
            "-33.8688197,151.2092955",
            "-36.8484597,174.7633315",
        ])
        .unwrap();

        match cli {
            Cli::Timezone { locations } => {
                assert_eq!(locations.len(), 2);
                assert_eq!(locations[0].lat, -33.8688197);
                assert_eq!(locations[1].lng, 174.7633315);
            }
            _ => panic!("expected the timezone subcommand"),
        }
    }

    #[test]
    fn nearby_accepts_a_negative_coordinate_with_filters() {
        let cli = Cli::from_iter_safe([
            "gmaps",
            "nearby",
            "-33.8688197,151.2092955",
            "--radius",
            "1200",
            "--keyword",
            "coffee",
        ])
        .unwrap();

        match cli {
            Cli::Nearby {
                location,
                radius,
                keywords,
                ..
            } => {
                assert_eq!(location.lat, -33.8688197);
                assert_eq!(radius, 1200);
                assert_eq!(keywords, vec!["coffee".to_string()]);
            }
            _ => panic!("expected the nearby subcommand"),
        }
    }
}
