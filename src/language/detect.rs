use crate::utils::{LangProcError, Result};
use whatlang::{detect, Lang};

/// Detects the dominant language of `text`, sampling at most `sample_chars`
/// characters. Returns an ISO 639-1 code (e.g. "en", "fr", "zh").
pub fn detect_language(text: &str, sample_chars: usize) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(LangProcError::DetectionFailed("text is empty".to_string()));
    }

    let sample: String = trimmed.chars().take(sample_chars).collect();
    match detect(&sample) {
        Some(info) => Ok(iso639_1(info.lang()).to_string()),
        None => Err(LangProcError::DetectionFailed(
            "no language recognized".to_string(),
        )),
    }
}

/// Maps whatlang's ISO 639-3 variants to the two-letter codes used in the
/// dataset and by the translation endpoint.
pub fn iso639_1(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Spa => "es",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Por => "pt",
        Lang::Rus => "ru",
        Lang::Jpn => "ja",
        Lang::Cmn => "zh",
        Lang::Ara => "ar",
        Lang::Hin => "hi",
        Lang::Ita => "it",
        Lang::Nld => "nl",
        Lang::Pol => "pl",
        Lang::Tur => "tr",
        Lang::Vie => "vi",
        Lang::Kor => "ko",
        Lang::Swe => "sv",
        Lang::Dan => "da",
        Lang::Fin => "fi",
        Lang::Nob => "no",
        other => other.code(),
    }
}

const LATIN_TERMINATORS: [char; 3] = ['.', '!', '?'];
const CJK_TERMINATORS: [char; 6] = ['。', '！', '？', '；', '!', '?'];

/// Splits text into sentences, choosing the punctuation set by language.
/// Chinese and Japanese use full-width terminators and drop fragments of
/// three characters or fewer (headers, page numbers).
pub fn split_sentences(text: &str, language: &str) -> Vec<String> {
    match language {
        "zh" | "ja" => split_on(text, &CJK_TERMINATORS, 3),
        _ => split_latin(text),
    }
}

fn split_on(text: &str, terminators: &[char], min_chars: usize) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        current.push(c);
        if terminators.contains(&c) {
            push_sentence(&mut sentences, &mut current, min_chars);
        }
    }
    push_sentence(&mut sentences, &mut current, min_chars);

    sentences
}

/// Latin-script splitting: a terminator ends a sentence only when followed by
/// whitespace or end of input, so "3.14" stays intact.
fn split_latin(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if LATIN_TERMINATORS.contains(&c) {
            let boundary = match chars.peek() {
                Some(next) => next.is_whitespace(),
                None => true,
            };
            if boundary {
                push_sentence(&mut sentences, &mut current, 0);
            }
        }
    }
    push_sentence(&mut sentences, &mut current, 0);

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String, min_chars: usize) {
    let trimmed = current.trim();
    if !trimmed.is_empty() && trimmed.chars().count() > min_chars {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}
