use std::fmt;
use std::str::FromStr;

/// A latitude/longitude pair in decimal degrees.
///
/// Rendered as `"{lat},{lng}"` with 7 decimal places, which is also the
/// format every coordinate-accepting subcommand parses. The geocode output
/// can be fed straight into `reverse`, `timezone` and `nearby`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.7},{:.7}", self.lat, self.lng)
    }
}

impl FromStr for Coordinate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| format!("expected \"lat,lng\", got \"{}\"", s))?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid latitude \"{}\": {}", lat.trim(), e))?;
        let lng = lng
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid longitude \"{}\": {}", lng.trim(), e))?;
        Ok(Coordinate { lat, lng })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_seven_decimal_places() {
        let coordinate = Coordinate {
            lat: 38.8976763,
            lng: -77.0365298,
        };

        assert_eq!(coordinate.to_string(), "38.8976763,-77.0365298");
    }

    #[test]
    fn pads_short_fractions() {
        let coordinate = Coordinate { lat: 40.5, lng: -3.0 };

        assert_eq!(coordinate.to_string(), "40.5000000,-3.0000000");
    }

    #[test]
    fn parses_own_rendering() {
        let parsed: Coordinate = "38.8976763,-77.0365298".parse().unwrap();

        assert_eq!(parsed.lat, 38.8976763);
        assert_eq!(parsed.lng, -77.0365298);
    }

    #[test]
    fn parses_with_surrounding_whitespace() {
        let parsed: Coordinate = " 59.3293235 , 18.0685808 ".parse().unwrap();

        assert_eq!(parsed.lat, 59.3293235);
        assert_eq!(parsed.lng, 18.0685808);
    }

    #[test]
    fn rejects_missing_comma() {
        assert!("59.3293235".parse::<Coordinate>().is_err());
    }

    #[test]
    fn rejects_non_numeric_parts() {
        assert!("north,south".parse::<Coordinate>().is_err());
    }
}
