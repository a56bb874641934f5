/// A single question in a survey.
///
/// Questions are immutable after construction: both the prompt text and the
/// answer options are stored verbatim, with no normalization or validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// The prompt text shown to the respondent.
    text: String,

    /// The selectable answer options, in display order.
    options: Vec<String>,
}

impl Question {
    /// Create a new question from a prompt and its answer options.
    pub fn new<I, S>(text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the answer options in display order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Check whether this question has at least one answer option.
    ///
    /// A question with no options cannot be answered. Construction does not
    /// enforce this, so callers that care should ask.
    pub fn is_answerable(&self) -> bool {
        !self.options.is_empty()
    }
}
