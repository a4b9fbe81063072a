//! Question text cleanup
//!
//! - HTML markup stripping
//! - Normalization (titles, apostrophes, URLs, case, punctuation spacing)
//! - Question heading removal

mod heading;
mod markup;
mod normalizer;

pub use heading::{
    locate_heading, remove_heading, try_remove_heading, HeadingSpan, HEADING_KEYWORDS,
    HEADING_SKIP, HEADING_WINDOW,
};
pub use markup::{strip_markup, strip_markup_document};
pub use normalizer::{clean_corpus, normalize, TextNormalizer};
