use serde::{Deserialize, Serialize};

/// Part-of-speech tag vocabulary shared by every parse provider.
///
/// Providers emit their own native tag strings; adapters normalize them
/// through [`PartOfSpeech::from_ja`] so the extraction layer never sees a
/// provider-specific tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    /// 形容動詞 (na-adjective). Some providers call this "adjectival noun".
    AdjectivalNoun,
    Adverb,
    Particle,
    AuxiliaryVerb,
    Symbol,
    Other,
}

impl PartOfSpeech {
    /// Map a provider-native Japanese tag to the shared vocabulary.
    ///
    /// Matching is prefix-tolerant: COTOHA emits sub-classified tags such
    /// as `動詞語幹` or `格助詞` while Yahoo emits the bare class names.
    /// `形容動詞` must be checked before `形容詞`.
    #[must_use]
    pub fn from_ja(tag: &str) -> Self {
        if tag.starts_with("形容動詞") {
            Self::AdjectivalNoun
        } else if tag.starts_with("形容詞") {
            Self::Adjective
        } else if tag.starts_with("動詞") {
            Self::Verb
        } else if tag.starts_with("名詞") {
            Self::Noun
        } else if tag.starts_with("副詞") {
            Self::Adverb
        } else if tag.ends_with("助詞") {
            Self::Particle
        } else if tag.starts_with("助動詞") {
            Self::AuxiliaryVerb
        } else if tag.starts_with("特殊") || tag.starts_with("記号") {
            Self::Symbol
        } else {
            Self::Other
        }
    }
}

/// Smallest lexical unit: exact surface text plus its tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morpheme {
    pub surface: String,
    pub pos: PartOfSpeech,
}

impl Morpheme {
    #[must_use]
    pub fn new(surface: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            surface: surface.into(),
            pos,
        }
    }
}

/// A syntactic phrase unit: ordered morphemes plus a dependency link to
/// the chunk it modifies. `head == None` marks the sentence root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: u32,
    pub head: Option<u32>,
    pub morphemes: Vec<Morpheme>,
}

impl Chunk {
    #[must_use]
    pub fn new(id: u32, head: Option<u32>, morphemes: Vec<Morpheme>) -> Self {
        Self {
            id,
            head,
            morphemes,
        }
    }

    /// Concatenated surface text of every morpheme in order.
    #[must_use]
    pub fn surface(&self) -> String {
        self.morphemes.iter().map(|m| m.surface.as_str()).collect()
    }
}

/// One parsed input text. May be empty when the provider found nothing
/// analyzable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub chunks: Vec<Chunk>,
}

impl Sentence {
    #[must_use]
    pub fn new(chunks: Vec<Chunk>) -> Self {
        Self { chunks }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
