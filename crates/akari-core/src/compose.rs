//! Statement composition from an extracted favorite phrase.

/// Wrap an extracted phrase into Akari's fixed statement template.
///
/// `None` or an empty phrase composes to an empty string, meaning
/// "nothing to say".
#[must_use]
pub fn compose(favorite: Option<&str>) -> String {
    match favorite {
        Some(phrase) if !phrase.is_empty() => {
            format!("わぁい{phrase} あかり{phrase}大好き")
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_composes_to_empty() {
        assert_eq!(compose(None), "");
    }

    #[test]
    fn empty_phrase_composes_to_empty() {
        assert_eq!(compose(Some("")), "");
    }

    #[test]
    fn phrase_appears_twice_in_template() {
        assert_eq!(compose(Some("猫")), "わぁい猫 あかり猫大好き");
        assert_eq!(
            compose(Some("ケーキ")),
            "わぁいケーキ あかりケーキ大好き"
        );
    }
}
