//! Keyword search over patient records.
//!
//! A search is a [`KeywordPredicate`]: a [`SearchMode`] plus the keywords the
//! user typed. The model holds the active search as a [`PatientFilter`] and
//! re-applies it every time the filtered view is read.

use std::fmt;

use crate::models::Patient;

/// A boolean test over a patient record.
pub trait PatientPredicate {
    fn apply(&self, patient: &Patient) -> bool;
}

impl<F> PatientPredicate for F
where
    F: Fn(&Patient) -> bool,
{
    fn apply(&self, patient: &Patient) -> bool {
        self(patient)
    }
}

/// Which part of the record keywords are matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMode {
    /// Whole-token, case-insensitive match against the name's words.
    ByName,
    /// Case-insensitive match against the full Id.
    ById,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::ByName => f.write_str("name"),
            SearchMode::ById => f.write_str("id"),
        }
    }
}

/// Matches records against any of a list of keywords.
///
/// An empty keyword list matches nothing. Two predicates are equal when they
/// share a mode and hold the same keywords in any order.
#[derive(Debug, Clone)]
pub struct KeywordPredicate {
    mode: SearchMode,
    keywords: Vec<String>,
}

impl KeywordPredicate {
    /// Create a predicate for the given mode.
    pub fn new<I, S>(mode: SearchMode, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode,
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// Match any of the keywords against name tokens.
    pub fn by_name<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(SearchMode::ByName, keywords)
    }

    /// Match any of the keywords against the Id.
    pub fn by_id<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(SearchMode::ById, keywords)
    }

    /// Which field the keywords apply to.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Keywords in the order given.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn sorted_keywords(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.keywords.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted
    }
}

impl PatientPredicate for KeywordPredicate {
    fn apply(&self, patient: &Patient) -> bool {
        match self.mode {
            SearchMode::ByName => patient.name().tokens().any(|token| {
                self.keywords
                    .iter()
                    .any(|keyword| token.to_lowercase() == keyword.trim().to_lowercase())
            }),
            SearchMode::ById => patient.id().is_some_and(|id| {
                self.keywords
                    .iter()
                    .any(|keyword| id.matches_keyword(keyword))
            }),
        }
    }
}

impl PartialEq for KeywordPredicate {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode && self.sorted_keywords() == other.sorted_keywords()
    }
}

impl Eq for KeywordPredicate {}

impl fmt::Display for KeywordPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in [{}]", self.mode, self.keywords.join(", "))
    }
}

/// The filter currently applied to the model's view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PatientFilter {
    /// Show every record.
    #[default]
    All,
    Keywords(KeywordPredicate),
}

impl PatientPredicate for PatientFilter {
    fn apply(&self, patient: &Patient) -> bool {
        match self {
            PatientFilter::All => true,
            PatientFilter::Keywords(predicate) => predicate.apply(patient),
        }
    }
}

impl From<KeywordPredicate> for PatientFilter {
    fn from(predicate: KeywordPredicate) -> Self {
        PatientFilter::Keywords(predicate)
    }
}
