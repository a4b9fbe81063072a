//! Gender list pipeline
//!
//! 1. Load the animate word table and add the hand-curated words
//! 2. Extract gendered nouns without exclusions (for the "before" counts)
//! 3. Extract again, excluding animate words
//! 4. Write one sorted lemma list per gender

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use super::animate::load_animate_words_from_path;
use super::extractor::{extract_labeled, Exclusions, GenderSets, SetCounts, WordSet};
use super::read_lines;
use crate::config::GenderListConfig;
use crate::error::{LexiconError, Result};

/// Set sizes observed during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenderListReport {
    /// Grammatical gender sets before removing animate words
    pub before: SetCounts,
    /// Grammatical gender sets after removing animate words
    pub after: SetCounts,
    /// Size of the exclusion sets
    pub excluded: SetCounts,
}

/// Builds the grammatical masculine/feminine noun lists
#[derive(Debug, Clone)]
pub struct GenderListBuilder {
    config: GenderListConfig,
}

impl GenderListBuilder {
    /// Create a builder for the given paths
    pub fn new(config: GenderListConfig) -> Self {
        Self { config }
    }

    /// Paths in use
    pub fn config(&self) -> &GenderListConfig {
        &self.config
    }

    /// Run the pipeline and write both lists
    pub fn run(&self) -> Result<GenderListReport> {
        let extra = self.config.extra_animate_words()?;
        let exclusions: Exclusions = load_animate_words_from_path(&self.config.animate_table)?
            .union(&extra)
            .into();

        let (before, after) = self.extract(&exclusions)?;
        info!("(before) {}", before.counts());
        info!("(after)  {}", after.counts());

        write_word_list(&self.config.masculine_out, &after.masculine)?;
        write_word_list(&self.config.feminine_out, &after.feminine)?;
        info!(
            "Wrote {:?} and {:?}",
            self.config.masculine_out, self.config.feminine_out
        );

        Ok(GenderListReport {
            before: before.counts(),
            after: after.counts(),
            excluded: exclusions.counts(),
        })
    }

    fn extract(&self, exclusions: &Exclusions) -> Result<(GenderSets, GenderSets)> {
        let corpus = &self.config.corpus;
        let rows = read_lines(corpus)?;
        let label = corpus.display().to_string();

        let before = extract_labeled(&rows, &Exclusions::none(), &label)?;
        let after = extract_labeled(&rows, exclusions, &label)?;
        Ok((before, after))
    }
}

/// Write one word per line, in set order
pub fn write_word_list<P: AsRef<Path>>(path: P, words: &WordSet) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| LexiconError::io(parent, e))?;
    }

    let file = File::create(path).map_err(|e| LexiconError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for word in words {
        writeln!(writer, "{word}").map_err(|e| LexiconError::io(path, e))?;
    }
    writer.flush().map_err(|e| LexiconError::io(path, e))
}
