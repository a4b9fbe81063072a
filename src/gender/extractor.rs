//! Grammatical gender extraction from a CoNLL-U corpus
//!
//! Only data rows are inspected: the index column must be all digits, which
//! skips comments, sentence separators, multiword ranges (`3-4`) and empty
//! nodes (`5.1`). Among those, only `NOUN` rows contribute, by lemma.

use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

use super::read_lines;
use crate::error::{LexiconError, Result};

/// Ordered set of lemmas
pub type WordSet = BTreeSet<String>;

const INDEX_FIELD: usize = 0;
const LEMMA_FIELD: usize = 2;
const UPOS_FIELD: usize = 3;
const FEATS_FIELD: usize = 5;
const MIN_FIELDS: usize = 6;

const NOUN_TAG: &str = "NOUN";
const GENDER_FEATURE: &str = "Gender";

/// Grammatical gender as annotated in the morphological features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// `Gender=Masc`
    Masculine,
    /// `Gender=Fem`
    Feminine,
}

impl Gender {
    /// Map a feature value (`Masc`, `Fem`) to a gender
    pub fn from_feature_value(value: &str) -> Option<Self> {
        match value {
            "Masc" => Some(Self::Masculine),
            "Fem" => Some(Self::Feminine),
            _ => None,
        }
    }
}

/// Masculine and feminine lemma sets
///
/// A lemma annotated with both genders on different rows is kept in both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenderSets {
    /// Lemmas seen with `Gender=Masc`
    pub masculine: WordSet,
    /// Lemmas seen with `Gender=Fem`
    pub feminine: WordSet,
}

impl GenderSets {
    /// Set for one gender
    pub fn get(&self, gender: Gender) -> &WordSet {
        match gender {
            Gender::Masculine => &self.masculine,
            Gender::Feminine => &self.feminine,
        }
    }

    fn get_mut(&mut self, gender: Gender) -> &mut WordSet {
        match gender {
            Gender::Masculine => &mut self.masculine,
            Gender::Feminine => &mut self.feminine,
        }
    }

    /// Number of masculine and feminine lemmas
    pub fn counts(&self) -> SetCounts {
        SetCounts {
            masculine: self.masculine.len(),
            feminine: self.feminine.len(),
        }
    }
}

/// Sizes of a masculine/feminine pair of sets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetCounts {
    /// Size of the masculine set
    pub masculine: usize,
    /// Size of the feminine set
    pub feminine: usize,
}

impl std::fmt::Display for SetCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "nb of masc_gram: {}   |  nb of fem_gram: {}",
            self.masculine, self.feminine
        )
    }
}

/// Lemmas to leave out of the extracted sets, by gender
///
/// The default value excludes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclusions {
    /// Lemmas never added to the masculine set
    pub masculine: WordSet,
    /// Lemmas never added to the feminine set
    pub feminine: WordSet,
}

impl Exclusions {
    /// Exclude nothing
    pub fn none() -> Self {
        Self::default()
    }

    /// Build from explicit masculine and feminine exclusion sets
    pub fn new(masculine: WordSet, feminine: WordSet) -> Self {
        Self {
            masculine,
            feminine,
        }
    }

    /// Whether `lemma` is excluded for `gender`
    pub fn contains(&self, gender: Gender, lemma: &str) -> bool {
        match gender {
            Gender::Masculine => self.masculine.contains(lemma),
            Gender::Feminine => self.feminine.contains(lemma),
        }
    }

    /// Number of excluded masculine and feminine lemmas
    pub fn counts(&self) -> SetCounts {
        SetCounts {
            masculine: self.masculine.len(),
            feminine: self.feminine.len(),
        }
    }
}

/// Extract gendered noun lemmas from in-memory CoNLL-U rows
pub fn extract_gender_sets<I, S>(rows: I, exclusions: &Exclusions) -> Result<GenderSets>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extract_labeled(rows, exclusions, "<rows>")
}

/// Extract gendered noun lemmas from a CoNLL-U file
pub fn extract_gender_sets_from_path<P: AsRef<Path>>(
    path: P,
    exclusions: &Exclusions,
) -> Result<GenderSets> {
    let path = path.as_ref();
    let rows = read_lines(path)?;
    debug!("Read {} corpus rows from {:?}", rows.len(), path);
    extract_labeled(&rows, exclusions, &path.display().to_string())
}

pub(crate) fn extract_labeled<I, S>(
    rows: I,
    exclusions: &Exclusions,
    source_name: &str,
) -> Result<GenderSets>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sets = GenderSets::default();

    for (i, row) in rows.into_iter().enumerate() {
        let line = i + 1;
        let fields: Vec<&str> = row.as_ref().split('\t').collect();

        if !is_data_index(fields[INDEX_FIELD]) {
            continue;
        }
        if fields.len() < MIN_FIELDS {
            return Err(LexiconError::malformed(
                source_name,
                line,
                format!("expected at least {MIN_FIELDS} fields, found {}", fields.len()),
            ));
        }
        if fields[UPOS_FIELD] != NOUN_TAG {
            continue;
        }

        let lemma = fields[LEMMA_FIELD];
        for feature in fields[FEATS_FIELD].split('|') {
            // substring match: `Gender[psor]=Masc` counts too
            if !feature.contains(GENDER_FEATURE) {
                continue;
            }
            let value = feature.split('=').nth(1).ok_or_else(|| {
                LexiconError::malformed(
                    source_name,
                    line,
                    format!("feature `{feature}` has no value"),
                )
            })?;
            if let Some(gender) = Gender::from_feature_value(value) {
                if !exclusions.contains(gender, lemma) {
                    sets.get_mut(gender).insert(lemma.to_string());
                }
            }
        }
    }

    Ok(sets)
}

fn is_data_index(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTENCE: &[&str] = &[
        "# sent_id = fr-ud-dev_00001",
        "# text = Les maisons du village.",
        "1\tLes\tle\tDET\t_\tDefinite=Def|Number=Plur|PronType=Art\t2\tdet\t_\t_",
        "2\tmaisons\tmaison\tNOUN\t_\tGender=Fem|Number=Plur\t0\troot\t_\t_",
        "3-4\tdu\t_\t_\t_\t_\t_\t_\t_\t_",
        "3\tde\tde\tADP\t_\t_\t5\tcase\t_\t_",
        "4\tle\tle\tDET\t_\tDefinite=Def|Gender=Masc|Number=Sing\t5\tdet\t_\t_",
        "5\tvillage\tvillage\tNOUN\t_\tGender=Masc|Number=Sing\t2\tnmod\t_\tSpaceAfter=No",
        "6\t.\t.\tPUNCT\t_\t_\t2\tpunct\t_\t_",
        "",
    ];

    fn words(items: &[&str]) -> WordSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_nouns_split_by_gender() {
        let sets = extract_gender_sets(SENTENCE, &Exclusions::none()).unwrap();
        assert_eq!(sets.get(Gender::Masculine), &words(&["village"]));
        assert_eq!(sets.get(Gender::Feminine), &words(&["maison"]));
    }

    #[test]
    fn test_non_noun_rows_contribute_nothing() {
        // the determiner carries Gender=Masc but is not a NOUN
        let rows = ["4\tle\tle\tDET\t_\tGender=Masc|Number=Sing\t5\tdet\t_\t_"];
        let sets = extract_gender_sets(rows, &Exclusions::none()).unwrap();
        assert!(sets.masculine.is_empty());
        assert!(sets.feminine.is_empty());
    }

    #[test]
    fn test_non_numeric_index_rows_skipped() {
        let rows = [
            "5.1\tmaison\tmaison\tNOUN\t_\tGender=Fem\t_\t_\t_\t_",
            "1-2\tmaison\tmaison\tNOUN\t_\tGender=Fem\t_\t_\t_\t_",
            "#\tmaison\tmaison\tNOUN\t_\tGender=Fem\t_\t_\t_\t_",
            "\tmaison\tmaison\tNOUN\t_\tGender=Fem\t_\t_\t_\t_",
        ];
        let sets = extract_gender_sets(rows, &Exclusions::none()).unwrap();
        assert!(sets.feminine.is_empty());
    }

    #[test]
    fn test_exclusions_apply_per_gender() {
        let rows = [
            "1\thomme\thomme\tNOUN\t_\tGender=Masc|Number=Sing\t0\troot\t_\t_",
            "2\tlivre\tlivre\tNOUN\t_\tGender=Masc|Number=Sing\t1\tnmod\t_\t_",
            "3\tfemme\tfemme\tNOUN\t_\tGender=Fem|Number=Sing\t1\tnmod\t_\t_",
        ];
        // "homme" listed as feminine only: no effect on the masculine set
        let exclusions = Exclusions::new(words(&["livre"]), words(&["homme", "femme"]));
        let sets = extract_gender_sets(rows, &exclusions).unwrap();
        assert_eq!(sets.masculine, words(&["homme"]));
        assert!(sets.feminine.is_empty());
    }

    #[test]
    fn test_exclusions_never_grow_sets() {
        let before = extract_gender_sets(SENTENCE, &Exclusions::none()).unwrap();
        let exclusions = Exclusions::new(words(&["village", "absent"]), words(&["absent"]));
        let after = extract_gender_sets(SENTENCE, &exclusions).unwrap();
        assert!(after.masculine.is_subset(&before.masculine));
        assert!(after.feminine.is_subset(&before.feminine));
        assert_eq!(after.counts(), SetCounts { masculine: 0, feminine: 1 });
    }

    #[test]
    fn test_conflicting_annotations_land_in_both_sets() {
        let rows = [
            "1\taprès-midi\taprès-midi\tNOUN\t_\tGender=Masc|Number=Sing\t0\troot\t_\t_",
            "1\taprès-midi\taprès-midi\tNOUN\t_\tGender=Fem|Number=Sing\t0\troot\t_\t_",
        ];
        let sets = extract_gender_sets(rows, &Exclusions::none()).unwrap();
        assert!(sets.masculine.contains("après-midi"));
        assert!(sets.feminine.contains("après-midi"));
    }

    #[test]
    fn test_gender_substring_matches_possessor_feature() {
        let rows = ["1\tmaison\tmaison\tNOUN\t_\tGender=Fem|Gender[psor]=Masc\t0\troot\t_\t_"];
        let sets = extract_gender_sets(rows, &Exclusions::none()).unwrap();
        assert!(sets.feminine.contains("maison"));
        assert!(sets.masculine.contains("maison"));
    }

    #[test]
    fn test_short_data_row_reports_line() {
        let rows = ["# comment", "", "1\tmaison\tmaison\tNOUN"];
        let err = extract_gender_sets(rows, &Exclusions::none()).unwrap_err();
        match err {
            LexiconError::MalformedRow { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_gender_feature_without_value_is_malformed() {
        let rows = ["1\tmaison\tmaison\tNOUN\t_\tGender\t0\troot\t_\t_"];
        let err = extract_gender_sets(rows, &Exclusions::none()).unwrap_err();
        assert!(matches!(err, LexiconError::MalformedRow { line: 1, .. }));
    }

    #[test]
    fn test_counts_display() {
        let counts = SetCounts {
            masculine: 12,
            feminine: 7,
        };
        assert_eq!(
            counts.to_string(),
            "nb of masc_gram: 12   |  nb of fem_gram: 7"
        );
    }
}
