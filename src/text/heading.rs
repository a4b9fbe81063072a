//! Question heading removal
//!
//! Questions open with a heading such as
//! `question de mr jean dupont à mme la ministre de ...`. Two title markers are
//! searched near the start; everything from the first marker up to three
//! tokens past the second one is dropped.

use tracing::debug;

use crate::error::{LexiconError, Result};

/// Title markers, in search priority order
pub const HEADING_KEYWORDS: [&str; 7] = ["mr", "mme", "demr", "mmme", "demme", "mmr", "interrogemme"];

/// Largest token position at which a marker still counts
pub const HEADING_WINDOW: usize = 20;

/// Tokens dropped after the second marker
pub const HEADING_SKIP: usize = 3;

/// Token range `[start, end)` covered by a heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingSpan {
    /// Position of the earlier marker
    pub start: usize,
    /// One past the last removed token, clamped to the token count
    pub end: usize,
}

/// Find the heading span of a whitespace-tokenized sentence
///
/// Returns `None` unless two marker tokens sit within the window.
pub fn locate_heading<S: AsRef<str>>(tokens: &[S]) -> Option<HeadingSpan> {
    locate(&strip_leading_quote(tokens))
}

/// Remove the heading and re-join with single spaces
///
/// A sentence without two markers in the window is returned as is (only the
/// leading quote stripped).
pub fn remove_heading<S: AsRef<str>>(tokens: &[S]) -> String {
    let tokens = strip_leading_quote(tokens);
    match locate(&tokens) {
        Some(span) => cut(&tokens, span),
        None => {
            debug!("No heading found in {} tokens, keeping sentence", tokens.len());
            tokens.join(" ")
        }
    }
}

/// Like [`remove_heading`], but a missing heading is an error
pub fn try_remove_heading<S: AsRef<str>>(tokens: &[S]) -> Result<String> {
    let tokens = strip_leading_quote(tokens);
    match locate(&tokens) {
        Some(span) => Ok(cut(&tokens, span)),
        None => Err(LexiconError::HeadingNotFound {
            tokens: tokens.join(" "),
        }),
    }
}

fn strip_leading_quote<S: AsRef<str>>(tokens: &[S]) -> Vec<&str> {
    let mut out: Vec<&str> = tokens.iter().map(|token| token.as_ref()).collect();
    if let Some(first) = out.first_mut() {
        let token: &str = *first;
        *first = token.strip_prefix('"').unwrap_or(token);
    }
    out
}

fn locate(tokens: &[&str]) -> Option<HeadingSpan> {
    let first = find_marker(tokens, None)?;
    let second = find_marker(tokens, Some(first))?;

    let (start, last) = if first <= second {
        (first, second)
    } else {
        (second, first)
    };
    Some(HeadingSpan {
        start,
        end: (last + HEADING_SKIP).min(tokens.len()),
    })
}

/// First keyword, in priority order, whose first occurrence lies in the window
fn find_marker(tokens: &[&str], masked: Option<usize>) -> Option<usize> {
    HEADING_KEYWORDS.iter().find_map(|keyword| {
        tokens
            .iter()
            .enumerate()
            .position(|(i, token)| Some(i) != masked && token == keyword)
            .filter(|&i| i <= HEADING_WINDOW)
    })
}

fn cut(tokens: &[&str], span: HeadingSpan) -> String {
    tokens[..span.start]
        .iter()
        .chain(&tokens[span.end..])
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
