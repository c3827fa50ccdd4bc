//! Enumeration with string raw values

use serde::{Deserialize, Serialize};

/// Weather conditions
///
/// `Rain` has an explicit raw value; the other cases use their own names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weather {
    /// Rain, raw value `"Test"`
    #[serde(rename = "Test")]
    Rain,
    /// Clear sky
    #[serde(rename = "clear")]
    Clear,
    /// Fog
    #[serde(rename = "fog")]
    Fog,
    /// Snow
    #[serde(rename = "snow")]
    Snow,
}

impl Weather {
    /// String raw value of the case
    pub fn raw_value(self) -> &'static str {
        match self {
            Weather::Rain => "Test",
            Weather::Clear => "clear",
            Weather::Fog => "fog",
            Weather::Snow => "snow",
        }
    }
}
