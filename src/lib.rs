//! # Guided Tour
//!
//! A tour of language features, one page at a time:
//! - **Enumerations and Structures**: ranks, suits, cards and server responses
//! - **Objects and Classes**: shapes and employees built from capability traits
//! - **Protocols and Extensions**: one trait adopted by several types, and an
//!   extension method on `f64`
//! - **Concurrency**: async functions and a fire-and-forget task
//!
//! The [`ExampleRunner`] executes the pages in order and prints each one to a
//! [`Console`].
//!
//! ```rust
//! use guided_tour::{Console, ExampleRunner, Page, TourConfig};
//!
//! let config = TourConfig {
//!     pages: vec![Page::EnumerationsAndStructures],
//!     ..TourConfig::default()
//! };
//! let console = Console::captured();
//! let report = ExampleRunner::standard(config).run(&console).unwrap();
//!
//! assert_eq!(report.pages, vec![Page::EnumerationsAndStructures]);
//! assert!(console.lines().contains(&"The 3 of spades".to_string()));
//! ```

#![warn(missing_docs)]

pub mod concurrency;
pub mod config;
pub mod console;
pub mod enumerations;
mod errors;
pub mod pages;
pub mod people;
pub mod protocols;
pub mod runner;
pub mod shapes;

pub use concurrency::{connect_user, fetch_user_id, fetch_username, launch};
pub use config::TourConfig;
pub use console::Console;
pub use enumerations::{
    compare_rank, create_deck, Card, Rank, ServerResponse, Suit, SuitColor, Weather,
};
pub use errors::{TourError, TourResult};
pub use pages::Page;
pub use people::{Employee, Greet, Person};
pub use protocols::{AbsoluteValue, ExampleProtocol, SimpleClass, SimpleStructure};
pub use runner::{Demonstration, ExampleRunner, PageContext, RunReport};
pub use shapes::{
    Circle, Describable, EquilateralTriangle, HasArea, Named, NamedShape, Shape, Square,
    TriangleAndSquare,
};
