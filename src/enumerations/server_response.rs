//! Server responses carrying associated values

use super::Rank;
use serde::{Deserialize, Serialize};

/// Response to a sunrise/sunset request
///
/// Each case carries its own payload. A failure is a value like any other;
/// nothing here is returned as an `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ServerResponse {
    /// The requested times
    Result {
        /// Sunrise time
        sunrise: String,
        /// Sunset time
        sunset: String,
    },
    /// What went wrong
    Failure {
        /// Failure description
        message: String,
    },
    /// Test payload pairing a label with a rank
    Test {
        /// Free-form label
        value: String,
        /// Rank attached to the label
        rank: Rank,
    },
}

impl ServerResponse {
    /// Successful response
    pub fn result(sunrise: impl Into<String>, sunset: impl Into<String>) -> Self {
        ServerResponse::Result {
            sunrise: sunrise.into(),
            sunset: sunset.into(),
        }
    }

    /// Failed response
    pub fn failure(message: impl Into<String>) -> Self {
        ServerResponse::Failure {
            message: message.into(),
        }
    }

    /// Line printed for this response
    pub fn describe(&self) -> String {
        match self {
            ServerResponse::Result { sunrise, sunset } => {
                format!("Sunrise is at {sunrise} and sunset is at {sunset}.")
            }
            ServerResponse::Failure { message } => format!("Failure...  {message}"),
            ServerResponse::Test { value, rank } => {
                format!("{value} and {}", rank.simple_description())
            }
        }
    }
}
