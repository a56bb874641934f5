//! Core types for the opros crate.
//!
//! This crate provides the foundational types for defining surveys:
//! - `Survey` - A titled, ordered collection of questions
//! - `Question` - A prompt with its fixed list of answer options
//! - `SurveyId` and `Registry` - String identifiers and the id-to-survey map
//!
//! Surveys here are pure definitions. Collecting answers, scoring, and
//! presentation are out of scope and live elsewhere.

mod question;
pub use question::Question;

mod survey;
pub use survey::Survey;

mod survey_id;
pub use survey_id::SurveyId;

mod registry;
pub use registry::Registry;

mod error;
pub use error::RegistryError;
