//! Favorite extraction over a dependency-parsed sentence.
//!
//! Locates the first predicate morpheme expressing "like/love"
//! (好き/大好き) and walks the chunk graph to recover the noun phrase
//! that is the object of that liking.

use std::collections::HashMap;

use akari_parse::{Chunk, Morpheme, PartOfSpeech, Sentence};

/// How predicate morphemes are matched.
///
/// `Prefix` is the canonical rule: surface starting with 大好き or 好き,
/// tagged adjective or adjectival noun. `Exact` is the narrower
/// historical variant (exact surface, adjectival noun only), kept as an
/// explicit configuration choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PredicateRule {
    #[default]
    Prefix,
    Exact,
}

fn is_favorite_morpheme(m: &Morpheme, rule: PredicateRule) -> bool {
    match rule {
        PredicateRule::Prefix => {
            (m.surface.starts_with("大好き") || m.surface.starts_with("好き"))
                && matches!(
                    m.pos,
                    PartOfSpeech::Adjective | PartOfSpeech::AdjectivalNoun
                )
        }
        PredicateRule::Exact => {
            (m.surface == "好き" || m.surface == "大好き")
                && m.pos == PartOfSpeech::AdjectivalNoun
        }
    }
}

/// Extract the favored phrase using the canonical predicate rule.
///
/// `None` means the sentence expresses no recoverable favorite; that is
/// a normal outcome, not an error.
#[must_use]
pub fn find_favorite(sentence: &Sentence) -> Option<String> {
    find_favorite_with(sentence, PredicateRule::default())
}

/// Extract the favored phrase with an explicit predicate rule.
#[must_use]
pub fn find_favorite_with(sentence: &Sentence, rule: PredicateRule) -> Option<String> {
    if sentence.is_empty() {
        return None;
    }

    // One pass: group chunks under their head and find the first chunk
    // carrying a predicate morpheme. First match wins; the scan keeps
    // going only to finish the index.
    let mut index: HashMap<u32, Vec<&Chunk>> = HashMap::new();
    let mut predicate: Option<(&Chunk, usize)> = None;

    for chunk in &sentence.chunks {
        if let Some(head) = chunk.head {
            index.entry(head).or_default().push(chunk);
        }

        if predicate.is_none()
            && let Some(i) = chunk
                .morphemes
                .iter()
                .position(|m| is_favorite_morpheme(m, rule))
        {
            predicate = Some((chunk, i));
        }
    }

    let (favo_chunk, favo_index) = predicate?;

    let Some(deps) = index.get(&favo_chunk.id) else {
        // Nothing depends on the predicate chunk: the favored entity must
        // sit inside it, immediately before the predicate morpheme.
        return favo_chunk.morphemes[..favo_index]
            .iter()
            .rev()
            .find(|m| m.pos != PartOfSpeech::Particle)
            .map(|m| m.surface.clone());
    };

    // Dependents come back in original sentence order; the first one
    // matching a rule decides the result.
    for dep in deps {
        let [.., second_last, last] = dep.morphemes.as_slice() else {
            continue;
        };
        if last.pos != PartOfSpeech::Particle {
            continue;
        }
        match last.surface.as_str() {
            "の" => {
                // Nominalized verb phrase ("見るの"): keep the whole
                // surface including the の. A non-verb before の is
                // skipped with no fallback.
                if second_last.pos == PartOfSpeech::Verb {
                    return Some(dep.surface());
                }
            }
            "が" | "も" | "を" => {
                let phrase: String = dep.morphemes[..dep.morphemes.len() - 1]
                    .iter()
                    .map(|m| m.surface.as_str())
                    .collect();
                return Some(phrase);
            }
            _ => {}
        }
    }

    None
}
