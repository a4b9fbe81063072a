//! Question text normalization
//!
//! Applied in this order, which matters for the output:
//! - `M.` → `Mr` (before lowercasing)
//! - no-break spaces → spaces
//! - apostrophes followed by a space
//! - URL removal
//! - lowercasing, then `m.` → `mr`
//! - spaces around `. , ! ? ( )`
//! - whitespace runs collapsed
//! - optional heading removal

use once_cell::sync::Lazy;
use regex::Regex;

use super::heading::remove_heading;
use super::markup::strip_markup_document;
use crate::config::CleanConfig;

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+").unwrap());
static PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([.,!?()])").unwrap());
static SPACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Text normalizer for raw question text
#[derive(Debug, Clone, Copy)]
pub struct TextNormalizer {
    /// Whether the question heading is removed
    remove_heading: bool,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TextNormalizer {
    /// Create a new TextNormalizer
    pub fn new(remove_heading: bool) -> Self {
        Self { remove_heading }
    }

    /// Whether heading removal is enabled
    pub fn removes_heading(&self) -> bool {
        self.remove_heading
    }

    /// Normalize one document
    pub fn normalize(&self, text: &str) -> String {
        let mut result = text.replace("M.", "Mr");
        result = result.replace('\u{a0}', " ");
        result = result.replace('\'', "' ");
        result = URL_RE.replace_all(&result, "").into_owned();
        result = result.to_lowercase();
        result = result.replace("m.", "mr");

        result = PUNCT_RE.replace_all(&result, " ${1} ").into_owned();
        result = SPACES_RE.replace_all(&result, " ").into_owned();

        if self.remove_heading {
            let tokens: Vec<&str> = result.split_whitespace().collect();
            result = remove_heading(&tokens);
        }

        result
    }

    /// Normalize every document, keeping order and count
    pub fn normalize_corpus<S: AsRef<str>>(&self, documents: &[S]) -> Vec<String> {
        documents
            .iter()
            .map(|doc| self.normalize(doc.as_ref()))
            .collect()
    }
}

/// Normalize a corpus of raw question texts
pub fn normalize<S: AsRef<str>>(documents: &[S], remove_heading: bool) -> Vec<String> {
    TextNormalizer::new(remove_heading).normalize_corpus(documents)
}

/// Strip markup (when enabled) and normalize each document
pub fn clean_corpus<S: AsRef<str>>(documents: &[S], config: &CleanConfig) -> Vec<String> {
    let normalizer = TextNormalizer::new(config.remove_heading);
    documents
        .iter()
        .map(|doc| {
            let doc = doc.as_ref();
            if config.strip_markup {
                normalizer.normalize(&strip_markup_document(doc))
            } else {
                normalizer.normalize(doc)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_punctuation_spacing() {
        let normalizer = TextNormalizer::new(false);
        let result = normalizer.normalize("M. Dupont, bonjour!");
        assert_eq!(result, "mr dupont , bonjour ! ");
    }

    #[test]
    fn test_url_removed_and_apostrophe_spaced() {
        let result = normalize(&["it's a url http://x.com test"], false);
        assert_eq!(result, vec!["it' s a url test".to_string()]);
        assert!(!result[0].contains("http"));
    }

    #[test]
    fn test_no_break_space_replaced() {
        let normalizer = TextNormalizer::new(false);
        assert_eq!(normalizer.normalize("l'État\u{a0}français"), "l' état français");
    }

    #[test]
    fn test_lowercase_abbreviation_pass_also_hits_word_final_m() {
        // "m." is rewritten after lowercasing, wherever it occurs
        let normalizer = TextNormalizer::new(false);
        assert_eq!(normalizer.normalize("Le film."), "le filmr");
        assert_eq!(normalizer.normalize("m. Martin"), "mr martin");
    }

    #[test]
    fn test_parentheses_and_question_mark() {
        let normalizer = TextNormalizer::new(false);
        assert_eq!(
            normalizer.normalize("Quel budget (en euros)?"),
            "quel budget ( en euros ) ? "
        );
    }

    #[test]
    fn test_heading_removed_by_default() {
        let normalizer = TextNormalizer::default();
        assert!(normalizer.removes_heading());
        let result =
            normalizer.normalize("Question de M. Jean Dupont à Mme la ministre de la santé.");
        assert_eq!(result, "question de de la santé .");
    }

    #[test]
    fn test_heading_flag_off_keeps_heading() {
        let text = "Question de M. Jean Dupont à Mme la ministre de la santé.";
        let result = normalize(&[text], false);
        assert_eq!(
            result[0],
            "question de mr jean dupont à mme la ministre de la santé . "
        );
    }

    #[test]
    fn test_no_heading_falls_back_to_joined_tokens() {
        let result = normalize(&["Une question sans titre."], true);
        assert_eq!(result[0], "une question sans titre .");
    }

    #[test]
    fn test_document_count_preserved() {
        let docs = vec!["a", "", "http://only.url", "b"];
        assert_eq!(normalize(&docs, true).len(), docs.len());
        assert_eq!(normalize(&docs, false).len(), docs.len());
    }

    #[test]
    fn test_clean_corpus_strips_markup_first() {
        let docs = ["<p>Question de <b>M.</b> Paul Durand à Mme la ministre du travail.</p>"];
        let result = clean_corpus(&docs, &CleanConfig::default());
        assert_eq!(result, vec!["question de du travail .".to_string()]);

        let raw = clean_corpus(
            &["<i>Bonjour</i>"],
            &CleanConfig {
                strip_markup: false,
                remove_heading: false,
            },
        );
        assert_eq!(raw, vec!["<i>bonjour</i>".to_string()]);
    }
}
