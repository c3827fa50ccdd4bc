// Copyright 2025 Cowboy AI, LLC.

//! Enumerations and structures
//!
//! Ranks and suits are enums with methods, a card is a struct composed of
//! both, and server responses show enum cases carrying associated values.

pub mod card;
pub mod rank;
pub mod server_response;
pub mod suit;
pub mod weather;

pub use card::{create_deck, Card};
pub use rank::{compare_rank, Rank};
pub use server_response::ServerResponse;
pub use suit::{Suit, SuitColor};
pub use weather::Weather;
