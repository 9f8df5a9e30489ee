use crate::language::detect::split_sentences;
use whatlang::{detect, Lang};

/// Keeps only the English sentences of `text`.
///
/// Sentences shorter than `min_sentence_chars` are kept as-is (headers, page
/// numbers), and so are sentences whose detection fails.
pub fn filter_english_sentences(text: &str, min_sentence_chars: usize) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }

    let mut kept = Vec::new();
    for sentence in split_sentences(text, "en") {
        if sentence.chars().count() < min_sentence_chars {
            kept.push(sentence);
            continue;
        }

        match detect(&sentence) {
            Some(info) if info.lang() == Lang::Eng => kept.push(sentence),
            Some(_) => {}
            None => kept.push(sentence),
        }
    }

    if kept.is_empty() {
        None
    } else {
        Some(kept.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_english_drops_french() {
        let text = "This sentence is written in plain English for testing. \
                    Cette phrase est écrite entièrement en français pour le test. \
                    Another English sentence follows here at the end.";
        let filtered = filter_english_sentences(text, 10).unwrap();
        assert!(filtered.contains("plain English"));
        assert!(filtered.contains("Another English"));
        assert!(!filtered.contains("français"));
    }

    #[test]
    fn short_fragments_are_kept() {
        let filtered = filter_english_sentences("Page 3. This is a longer English sentence for the detector.", 10).unwrap();
        assert!(filtered.contains("Page 3."));
    }

    #[test]
    fn empty_input_yields_none() {
        assert!(filter_english_sentences("", 10).is_none());
        assert!(filter_english_sentences("   \n ", 10).is_none());
    }

    #[test]
    fn all_foreign_text_yields_none() {
        let text = "Cette phrase est écrite entièrement en français pour vérifier le filtre. \
                    Une autre phrase française suit immédiatement la première.";
        assert!(filter_english_sentences(text, 10).is_none());
    }
}
