use crate::config::MissingApiKey;

#[derive(Debug)]
pub enum MapsServiceError {
    /// Required API key absent from the environment. Fatal: commands abort
    /// instead of moving on to the next input item.
    MissingApiKey(MissingApiKey),
    /// The request never produced a usable response.
    Request(String),
    /// The response body could not be decoded.
    Parse(String),
    /// The API answered with a status other than OK or ZERO_RESULTS.
    Status {
        status: String,
        message: Option<String>,
    },
}

impl std::fmt::Display for MapsServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MapsServiceError::MissingApiKey(e) => write!(f, "{}", e),
            MapsServiceError::Request(e) => write!(f, "Request error: {}", e),
            MapsServiceError::Parse(e) => write!(f, "Response error: {}", e),
            MapsServiceError::Status { status, message } => match message {
                Some(message) => write!(f, "API returned {}: {}", status, message),
                None => write!(f, "API returned {}", status),
            },
        }
    }
}

/// Outcome of a successfully transported and decoded API call. `NoResults`
/// maps the ZERO_RESULTS status, which is a normal empty outcome rather
/// than an error; every other non-OK status becomes a `MapsServiceError`.
#[derive(Debug)]
pub enum ApiResponse<T> {
    Results(T),
    NoResults,
}

/// Screens an API status field. `Ok(true)` means results are present,
/// `Ok(false)` means ZERO_RESULTS.
pub fn screen_status(status: String, message: Option<String>) -> Result<bool, MapsServiceError> {
    match status.as_str() {
        "OK" => Ok(true),
        "ZERO_RESULTS" => Ok(false),
        _ => Err(MapsServiceError::Status { status, message }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_status_passes() {
        assert!(screen_status("OK".to_string(), None).unwrap());
    }

    #[test]
    fn zero_results_is_not_an_error() {
        assert!(!screen_status("ZERO_RESULTS".to_string(), None).unwrap());
    }

    #[test]
    fn other_statuses_carry_the_api_message() {
        let err = screen_status(
            "REQUEST_DENIED".to_string(),
            Some("The provided API key is invalid.".to_string()),
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("REQUEST_DENIED"));
        assert!(message.contains("The provided API key is invalid."));
    }
}
