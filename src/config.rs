//! Configuration and reference data
//!
//! - `ExtraAnimateWords`: hand-curated person nouns, shipped as a versioned
//!   YAML resource and embedded at compile time
//! - `GenderListConfig`: input/output paths of the gender list pipeline
//! - `CleanConfig`: switches of the question text pipeline

use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{LexiconError, Result};

const BUILTIN_EXTRA_ANIMATE: &str = include_str!("../resources/extra_animate_words.yaml");
const BUILTIN_LABEL: &str = "<builtin>/extra_animate_words.yaml";

/// Animate nouns that the reference table misses, by grammatical gender
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ExtraAnimateWords {
    /// Resource format version
    pub version: u32,
    /// Masculine person nouns
    #[serde(default)]
    pub masculine: BTreeSet<String>,
    /// Feminine person nouns
    #[serde(default)]
    pub feminine: BTreeSet<String>,
}

impl ExtraAnimateWords {
    /// Parse the copy bundled with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_EXTRA_ANIMATE, Path::new(BUILTIN_LABEL))
    }

    /// Load an override from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| LexiconError::io(path, e))?;
        Self::from_yaml(&content, path)
    }

    fn from_yaml(content: &str, path: &Path) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|source| LexiconError::Resource {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Paths used by the gender list pipeline
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GenderListConfig {
    /// Dependency-annotated corpus (CoNLL-U)
    pub corpus: PathBuf,
    /// Tab-separated animate word table
    pub animate_table: PathBuf,
    /// Optional override of the bundled extra animate words
    pub extra_words: Option<PathBuf>,
    /// Output list of masculine lemmas
    pub masculine_out: PathBuf,
    /// Output list of feminine lemmas
    pub feminine_out: PathBuf,
}

impl Default for GenderListConfig {
    fn default() -> Self {
        Self {
            corpus: PathBuf::from("data/fr_gsd-ud-dev.conllu"),
            animate_table: PathBuf::from("data/zmigrod_animate_words.tsv"),
            extra_words: None,
            masculine_out: PathBuf::from("data/grammatical_masculine.txt"),
            feminine_out: PathBuf::from("data/grammatical_feminine.txt"),
        }
    }
}

impl GenderListConfig {
    /// Load from a YAML file; missing keys keep their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| LexiconError::io(path, e))?;
        serde_yaml::from_str(&content).map_err(|source| LexiconError::Resource {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Extra animate words from the override path, or the bundled copy
    pub fn extra_animate_words(&self) -> Result<ExtraAnimateWords> {
        match &self.extra_words {
            Some(path) => ExtraAnimateWords::load(path),
            None => ExtraAnimateWords::builtin(),
        }
    }
}

/// Steps applied by the question text pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanConfig {
    /// Strip HTML before normalizing
    pub strip_markup: bool,
    /// Drop the "question de mr X à mme Y" heading
    pub remove_heading: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            strip_markup: true,
            remove_heading: true,
        }
    }
}
