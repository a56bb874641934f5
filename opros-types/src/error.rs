use crate::SurveyId;

/// Error type for registry lookups.
///
/// Survey and question construction never fail - the registry is the only
/// fallible surface in this crate.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No survey is registered under the given identifier.
    #[error("No survey registered under id: {0}")]
    UnknownSurvey(SurveyId),
}
