//! Favorite extraction and statement generation.
//!
//! The pipeline is linear: a [`DependencyParser`](akari_parse::DependencyParser)
//! turns raw text into a chunk graph, [`extract::find_favorite`] recovers
//! the liked phrase, and [`compose::compose`] wraps it into the fixed
//! statement template. [`Akari`] ties the three together.

pub mod akari;
pub mod compose;
pub mod error;
pub mod extract;

pub use akari::Akari;
pub use error::AkariError;
