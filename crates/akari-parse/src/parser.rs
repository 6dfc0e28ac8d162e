use crate::error::ParseError;
use crate::sentence::Sentence;

/// A dependency-parse provider.
///
/// Implementations hold whatever shared state they need (HTTP client,
/// credentials) and must be safe to call from multiple outstanding
/// requests at once. Retry, caching, and rate limiting are the
/// implementation's concern; callers issue single-shot calls.
pub trait DependencyParser: Send + Sync {
    /// Parse raw text into a chunk graph.
    ///
    /// An empty [`Sentence`] is a normal result meaning the provider found
    /// nothing analyzable.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be reached or answers with
    /// something other than a well-formed parse result.
    fn parse(&self, text: &str) -> impl Future<Output = Result<Sentence, ParseError>> + Send;

    fn name(&self) -> &'static str;
}
