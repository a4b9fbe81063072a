//! # frlex - French lexical resource builders
//!
//! Small utilities feeding a French NLP pipeline.
//!
//! ## Features
//!
//! - Grammatically masculine/feminine noun lists from a CoNLL-U corpus,
//!   with person (animate) nouns removed
//! - Cleanup of raw question text: HTML stripping, title and punctuation
//!   normalization, question heading removal
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use frlex::gender::{extract_gender_sets, Exclusions};
//! use frlex::text::normalize;
//!
//! let sets = extract_gender_sets(corpus_rows, &Exclusions::none())?;
//! let cleaned = normalize(&["M. Dupont, bonjour!"], false);
//! ```

// Require docs for public items
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod gender;
pub mod text;

// Re-exports for convenience
pub use config::{CleanConfig, ExtraAnimateWords, GenderListConfig};
pub use error::LexiconError;
pub use gender::{GenderListBuilder, GenderListReport};
pub use text::TextNormalizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
