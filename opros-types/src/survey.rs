use crate::Question;

/// A titled, ordered collection of questions.
///
/// Questions are append-only: insertion order is display order, and there is
/// no removal or reordering. Two surveys never share questions - cloning a
/// survey yields a fully independent copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Survey {
    /// The survey title shown to the respondent.
    title: String,

    /// All questions, in display order.
    questions: Vec<Question>,
}

impl Survey {
    /// Create a new survey with the given title and no questions.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            questions: Vec::new(),
        }
    }

    /// Append a question built from the given prompt and answer options.
    ///
    /// Accepts the arguments as-is: duplicate prompts, empty text, and empty
    /// option lists are all allowed.
    pub fn add_question<I, S>(&mut self, text: impl Into<String>, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.questions.push(Question::new(text, options));
    }

    /// Append a question, returning the survey for chaining.
    pub fn with_question<I, S>(mut self, text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_question(text, options);
        self
    }

    /// Get the survey title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the questions in display order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the survey has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
