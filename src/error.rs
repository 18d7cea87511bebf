use thiserror::Error;

// Errors raised while talking to the hotel-inventory provider
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    #[error("Provider error: {}", provider_message(.status_code, .message))]
    Provider {
        status_code: Option<u16>,
        message: String,
    },

    #[error("Location not found: {0}")]
    LocationNotFound(String),
}

impl SearchError {
    // Stable label for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::Transport(_) => "transport",
            SearchError::Timeout(_) => "timeout",
            SearchError::Provider { .. } => "provider",
            SearchError::LocationNotFound(_) => "location_not_found",
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        SearchError::Provider {
            status_code: None,
            message: message.into(),
        }
    }
}

fn provider_message(status_code: &Option<u16>, message: &str) -> String {
    match status_code {
        Some(code) => format!("{} - {}", code, message),
        None => message.to_string(),
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },

    #[error("Initialization error: {0}")]
    InitError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_message() {
        let with_status = SearchError::Provider {
            status_code: Some(429),
            message: "Too many requests".to_string(),
        };
        assert_eq!(
            with_status.to_string(),
            "Provider error: 429 - Too many requests"
        );

        let malformed = SearchError::malformed("missing field `result`");
        assert_eq!(malformed.to_string(), "Provider error: missing field `result`");
        assert_eq!(malformed.kind(), "provider");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(SearchError::Transport("dns".into()).kind(), "transport");
        assert_eq!(SearchError::Timeout(5000).kind(), "timeout");
        assert_eq!(
            SearchError::LocationNotFound("Atlantis".into()).kind(),
            "location_not_found"
        );
        assert_eq!(
            SearchError::LocationNotFound("Atlantis".into()).to_string(),
            "Location not found: Atlantis"
        );
    }
}
