// Copyright 2025 Cowboy AI, LLC.

//! Error types for tour operations

use thiserror::Error;

/// Errors that can occur while building or running the tour
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// Raw value does not name a card rank
    #[error("Invalid rank: {0} is not between 1 and 13")]
    InvalidRank(u8),

    /// Page slug that no page answers to
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// Configuration value could not be interpreted
    #[error("Invalid configuration for {key}: {reason}")]
    InvalidConfig {
        /// Configuration key (environment variable or JSON field)
        key: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A launched background task did not complete
    #[error("Background task failed: {0}")]
    BackgroundTask(String),
}

/// Result type for tour operations
pub type TourResult<T> = Result<T, TourError>;

impl From<serde_json::Error> for TourError {
    fn from(err: serde_json::Error) -> Self {
        TourError::Serialization(err.to_string())
    }
}

impl From<tokio::task::JoinError> for TourError {
    fn from(err: tokio::task::JoinError) -> Self {
        TourError::BackgroundTask(err.to_string())
    }
}

impl TourError {
    /// Create a configuration error for the given key
    pub fn invalid_config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        TourError::InvalidConfig {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TourError::InvalidRank(14).to_string(),
            "Invalid rank: 14 is not between 1 and 13"
        );
        assert_eq!(
            TourError::invalid_config("TOUR_SERVER", "empty").to_string(),
            "Invalid configuration for TOUR_SERVER: empty"
        );
    }

    #[test]
    fn test_serde_json_conversion() {
        let err = serde_json::from_str::<u8>("not json").unwrap_err();
        let tour_err: TourError = err.into();
        assert!(matches!(tour_err, TourError::Serialization(_)));
    }
}
