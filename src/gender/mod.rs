//! Grammatical gender noun lists
//!
//! - Gender extraction from CoNLL-U rows
//! - Animate (person) noun tables used as exclusions
//! - The end-to-end list builder

mod animate;
mod builder;
mod extractor;

pub use animate::{load_animate_words, load_animate_words_from_path, AnimateWords};
pub use builder::{write_word_list, GenderListBuilder, GenderListReport};
pub use extractor::{
    extract_gender_sets, extract_gender_sets_from_path, Exclusions, Gender, GenderSets,
    SetCounts, WordSet,
};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{LexiconError, Result};

pub(crate) fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| LexiconError::io(path, e))?;
    BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| LexiconError::io(path, e))
}
