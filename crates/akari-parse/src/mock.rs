//! Test-only mock dependency parser.

use std::sync::{Arc, Mutex};

use crate::error::ParseError;
use crate::parser::DependencyParser;
use crate::sentence::Sentence;

#[derive(Debug, Clone, Default)]
pub struct MockParser {
    sentences: Arc<Mutex<Vec<Sentence>>>,
    pub fail_parse: bool,
}

impl MockParser {
    /// Queue sentences to return in order; once drained, an empty
    /// sentence is returned.
    #[must_use]
    pub fn with_sentences(sentences: Vec<Sentence>) -> Self {
        Self {
            sentences: Arc::new(Mutex::new(sentences)),
            fail_parse: false,
        }
    }

    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_parse: true,
            ..Self::default()
        }
    }
}

impl DependencyParser for MockParser {
    async fn parse(&self, _text: &str) -> Result<Sentence, ParseError> {
        if self.fail_parse {
            return Err(ParseError::Api {
                provider: "mock",
                status: 503,
                message: "mock parse error".into(),
            });
        }
        let mut sentences = self.sentences.lock().unwrap();
        if sentences.is_empty() {
            Ok(Sentence::default())
        } else {
            Ok(sentences.remove(0))
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
