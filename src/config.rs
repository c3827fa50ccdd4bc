// Copyright 2025 Cowboy AI, LLC.

//! Runner configuration
//!
//! Defaults run every page against the primary server. Environment variables
//! or a JSON document can narrow the pages or change the server.

use crate::concurrency::PRIMARY_SERVER;
use crate::errors::{TourError, TourResult};
use crate::pages::Page;
use serde::{Deserialize, Serialize};

/// Comma-separated page slugs to run
pub const ENV_PAGES: &str = "TOUR_PAGES";

/// Server handed to the concurrency page
pub const ENV_SERVER: &str = "TOUR_SERVER";

/// Whether to wait for background tasks before exiting
pub const ENV_AWAIT_BACKGROUND: &str = "TOUR_AWAIT_BACKGROUND";

/// Configuration for a tour run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    /// Pages to run; always executed in canonical order
    pub pages: Vec<Page>,

    /// Server name passed to the concurrency page
    pub server: String,

    /// Wait for launched tasks before the process exits
    pub await_background: bool,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            pages: Page::ALL.to_vec(),
            server: PRIMARY_SERVER.to_string(),
            await_background: true,
        }
    }
}

impl TourConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> TourResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parse configuration from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> TourResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from any key lookup, unset keys keep defaults
    pub fn from_lookup<F>(lookup: F) -> TourResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(pages) = lookup(ENV_PAGES) {
            config.pages = pages
                .split(',')
                .map(str::trim)
                .filter(|slug| !slug.is_empty())
                .map(str::parse)
                .collect::<TourResult<Vec<Page>>>()?;
        }

        if let Some(server) = lookup(ENV_SERVER) {
            config.server = server;
        }

        if let Some(flag) = lookup(ENV_AWAIT_BACKGROUND) {
            config.await_background = parse_flag(ENV_AWAIT_BACKGROUND, &flag)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot run
    pub fn validate(&self) -> TourResult<()> {
        if self.pages.is_empty() {
            return Err(TourError::invalid_config("pages", "at least one page is required"));
        }
        if self.server.trim().is_empty() {
            return Err(TourError::invalid_config("server", "must not be empty"));
        }
        Ok(())
    }
}

fn parse_flag(key: &str, value: &str) -> TourResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(TourError::invalid_config(
            key,
            format!("expected a boolean, got {other:?}"),
        )),
    }
}
