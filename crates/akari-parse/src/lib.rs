//! Dependency-parse provider abstraction and client implementations.
//!
//! Every provider maps its native wire schema into the shared
//! [`Sentence`]/[`Chunk`]/[`Morpheme`] model so downstream extraction
//! never depends on which service produced the parse.

pub mod any;
pub mod cotoha;
pub mod error;
pub mod http;
#[cfg(feature = "mock")]
pub mod mock;
pub mod parser;
pub mod sentence;
pub mod yahoo;

pub use error::ParseError;
pub use parser::DependencyParser;
pub use sentence::{Chunk, Morpheme, PartOfSpeech, Sentence};
