//! Animate (person) noun table loading
//!
//! Table rows are `index<TAB>feminine<TAB>masculine`.

use std::path::Path;
use tracing::debug;

use super::extractor::{Exclusions, WordSet};
use super::read_lines;
use crate::config::ExtraAnimateWords;
use crate::error::{LexiconError, Result};

const FEMININE_FIELD: usize = 1;
const MASCULINE_FIELD: usize = 2;
const MIN_FIELDS: usize = 3;

/// Semantically masculine and feminine person nouns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimateWords {
    /// Masculine forms (third column)
    pub masculine: WordSet,
    /// Feminine forms (second column)
    pub feminine: WordSet,
}

impl AnimateWords {
    /// Add the hand-curated words, gender by gender
    pub fn union(mut self, extra: &ExtraAnimateWords) -> Self {
        self.masculine.extend(extra.masculine.iter().cloned());
        self.feminine.extend(extra.feminine.iter().cloned());
        self
    }
}

impl From<AnimateWords> for Exclusions {
    fn from(words: AnimateWords) -> Self {
        Exclusions::new(words.masculine, words.feminine)
    }
}

/// Load animate words from in-memory table rows
pub fn load_animate_words<I, S>(rows: I) -> Result<AnimateWords>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    load_labeled(rows, "<rows>")
}

/// Load animate words from a tab-separated file
pub fn load_animate_words_from_path<P: AsRef<Path>>(path: P) -> Result<AnimateWords> {
    let path = path.as_ref();
    let rows = read_lines(path)?;
    let words = load_labeled(&rows, &path.display().to_string())?;
    debug!(
        "Loaded {} masculine / {} feminine animate words from {:?}",
        words.masculine.len(),
        words.feminine.len(),
        path
    );
    Ok(words)
}

fn load_labeled<I, S>(rows: I, source_name: &str) -> Result<AnimateWords>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words = AnimateWords::default();

    for (i, row) in rows.into_iter().enumerate() {
        let fields: Vec<&str> = row.as_ref().split('\t').collect();
        if fields.len() < MIN_FIELDS {
            return Err(LexiconError::malformed(
                source_name,
                i + 1,
                format!("expected {MIN_FIELDS} fields, found {}", fields.len()),
            ));
        }

        let masculine = fields[MASCULINE_FIELD].trim_end_matches(&['\r', '\n'][..]);
        words.masculine.insert(masculine.to_string());
        words.feminine.insert(fields[FEMININE_FIELD].to_string());
    }

    Ok(words)
}
