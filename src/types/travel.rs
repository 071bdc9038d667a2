use std::fmt;
use std::str::FromStr;

/// Travel mode accepted by the directions and distance matrix endpoints.
/// Transit is only meaningful for the distance matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TravelMode {
    Driving,
    Bicycling,
    Walking,
    Transit,
}

impl TravelMode {
    pub fn as_param(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Walking => "walking",
            TravelMode::Transit => "transit",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "driving" => Ok(TravelMode::Driving),
            "bicycling" => Ok(TravelMode::Bicycling),
            "walking" => Ok(TravelMode::Walking),
            "transit" => Ok(TravelMode::Transit),
            other => Err(format!(
                "unknown travel mode \"{}\" (expected driving, bicycling, walking or transit)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitSystem {
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_param(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    pub fn from_imperial_flag(imperial: bool) -> Self {
        if imperial {
            UnitSystem::Imperial
        } else {
            UnitSystem::Metric
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_modes_case_insensitively() {
        assert_eq!("Driving".parse::<TravelMode>().unwrap(), TravelMode::Driving);
        assert_eq!("transit".parse::<TravelMode>().unwrap(), TravelMode::Transit);
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!("teleport".parse::<TravelMode>().is_err());
    }

    #[test]
    fn unit_flag_defaults_to_metric() {
        assert_eq!(UnitSystem::from_imperial_flag(false), UnitSystem::Metric);
        assert_eq!(UnitSystem::from_imperial_flag(true), UnitSystem::Imperial);
    }
}
