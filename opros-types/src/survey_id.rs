use std::fmt;

/// A survey identifier, e.g. `"food_survey"`.
///
/// Used as the key type in [`Registry`](crate::Registry). Identifiers are
/// opaque strings - no structure or format is imposed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SurveyId {
    id: String,
}

impl SurveyId {
    /// Create a new identifier from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for SurveyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl From<&str> for SurveyId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SurveyId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for SurveyId {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}
