// Copyright 2025 Cowboy AI, LLC.

//! The tour pages, one demonstration per language feature

mod concurrency;
mod enumerations;
mod objects;
mod protocols;

pub use concurrency::ConcurrencyPage;
pub use enumerations::EnumerationsPage;
pub use objects::ObjectsPage;
pub use protocols::ProtocolsPage;

use crate::errors::TourError;
use crate::runner::Demonstration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A page of the tour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    /// Enums, structs and associated values
    EnumerationsAndStructures,
    /// Shapes and employees
    ObjectsAndClasses,
    /// Traits and extensions
    ProtocolsAndExtensions,
    /// Async functions and tasks
    Concurrency,
}

impl Page {
    /// Every page in tour order
    pub const ALL: [Page; 4] = [
        Page::EnumerationsAndStructures,
        Page::ObjectsAndClasses,
        Page::ProtocolsAndExtensions,
        Page::Concurrency,
    ];

    /// Slug used in configuration
    pub fn slug(self) -> &'static str {
        match self {
            Page::EnumerationsAndStructures => "enumerations-and-structures",
            Page::ObjectsAndClasses => "objects-and-classes",
            Page::ProtocolsAndExtensions => "protocols-and-extensions",
            Page::Concurrency => "concurrency",
        }
    }

    /// Page heading
    pub fn title(self) -> &'static str {
        match self {
            Page::EnumerationsAndStructures => "Enumerations and Structures",
            Page::ObjectsAndClasses => "Objects and Classes",
            Page::ProtocolsAndExtensions => "Protocols and Extensions",
            Page::Concurrency => "Concurrency",
        }
    }

    /// The demonstration that renders this page
    pub fn demonstration(self) -> Box<dyn Demonstration> {
        match self {
            Page::EnumerationsAndStructures => Box::new(EnumerationsPage),
            Page::ObjectsAndClasses => Box::new(ObjectsPage),
            Page::ProtocolsAndExtensions => Box::new(ProtocolsPage),
            Page::Concurrency => Box::new(ConcurrencyPage),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Page {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .iter()
            .copied()
            .find(|page| page.slug() == s)
            .ok_or_else(|| TourError::UnknownPage(s.to_string()))
    }
}
