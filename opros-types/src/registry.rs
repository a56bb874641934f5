use std::collections::HashMap;

use crate::{RegistryError, Survey, SurveyId};

/// The top-level mapping from survey identifier to [`Survey`].
///
/// A registry is populated once at startup and treated as read-only for the
/// rest of the process. Nothing enforces that convention - `insert` stays
/// available - but no other mutation exists.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    surveys: HashMap<SurveyId, Survey>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            surveys: HashMap::new(),
        }
    }

    /// Insert a survey under the given identifier.
    ///
    /// An existing survey under the same identifier is replaced.
    pub fn insert(&mut self, id: impl Into<SurveyId>, survey: Survey) {
        self.surveys.insert(id.into(), survey);
    }

    /// Insert a survey, returning the registry for chaining.
    pub fn with_survey(mut self, id: impl Into<SurveyId>, survey: Survey) -> Self {
        self.insert(id, survey);
        self
    }

    /// Get the survey registered under the given identifier.
    pub fn get(&self, id: &SurveyId) -> Option<&Survey> {
        self.surveys.get(id)
    }

    /// Look up a survey, failing with [`RegistryError::UnknownSurvey`] if the
    /// identifier is not registered.
    pub fn lookup(&self, id: &SurveyId) -> Result<&Survey, RegistryError> {
        self.surveys
            .get(id)
            .ok_or_else(|| RegistryError::UnknownSurvey(id.clone()))
    }

    /// Check if a survey is registered under the given identifier.
    pub fn contains(&self, id: &SurveyId) -> bool {
        self.surveys.contains_key(id)
    }

    /// Get an iterator over all id-survey pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&SurveyId, &Survey)> {
        self.surveys.iter()
    }

    /// Get the number of registered surveys.
    pub fn len(&self) -> usize {
        self.surveys.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.surveys.is_empty()
    }
}

impl IntoIterator for Registry {
    type Item = (SurveyId, Survey);
    type IntoIter = std::collections::hash_map::IntoIter<SurveyId, Survey>;

    fn into_iter(self) -> Self::IntoIter {
        self.surveys.into_iter()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = (&'a SurveyId, &'a Survey);
    type IntoIter = std::collections::hash_map::Iter<'a, SurveyId, Survey>;

    fn into_iter(self) -> Self::IntoIter {
        self.surveys.iter()
    }
}
