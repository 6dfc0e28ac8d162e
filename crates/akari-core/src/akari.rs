use akari_parse::DependencyParser;

use crate::compose::compose;
use crate::error::AkariError;
use crate::extract::find_favorite;

/// Generator of Akari favorite statements, generic over the dependency
/// parse provider.
///
/// Holds no per-call state; a single instance serves any number of
/// concurrent [`say`](Akari::say) calls.
#[derive(Debug, Clone)]
pub struct Akari<P> {
    parser: P,
}

impl<P: DependencyParser> Akari<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Generate a favorite statement from `text`.
    ///
    /// Returns an empty string when the text parsed fine but expresses
    /// no favorite.
    ///
    /// # Errors
    ///
    /// Returns [`AkariError::Parse`] when the parse provider fails; the
    /// underlying cause stays available via `source()`.
    pub async fn say(&self, text: &str) -> Result<String, AkariError> {
        let sentence = self.parser.parse(text).await?;
        let favorite = find_favorite(&sentence);

        if let Some(ref phrase) = favorite {
            tracing::debug!(parser = self.parser.name(), favorite = %phrase, "favorite found");
        }

        Ok(compose(favorite.as_deref()))
    }
}
