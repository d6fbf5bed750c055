//! The generic quiz page controller.
//!
//! One controller drives every (topic, mode) page: it holds the transient
//! per-question answer state, grades on demand, and folds correctness into
//! the topic's stored percentage. Answer state lives only for the request
//! that carries it; nothing per-question is ever persisted.

use crate::db::{ProgressStore, StoreError};
use crate::quiz::{QuizPage, fold_topic_percent, local_percentage};
use crate::validation::AnswerResult;

/// Transient state of one question on a rendered page.
#[derive(Debug, Clone, Default)]
pub struct QuestionState {
    /// Current user input (or selected option token)
    pub input: String,
    /// Feedback from the last grading, if the question was submitted
    pub feedback: Option<&'static str>,
    /// Result of the last grading
    pub result: Option<AnswerResult>,
}

impl QuestionState {
    pub fn is_correct(&self) -> bool {
        self.result.is_some_and(|r| r.is_correct())
    }
}

/// In-memory controller for one quiz page.
///
/// Questions are indefinitely re-submittable; re-answering a question can
/// flip it back to incorrect. The store handle is passed in at persist
/// time, never imported ambiently.
pub struct QuizController<'a> {
    page: &'a QuizPage,
    states: Vec<QuestionState>,
}

impl<'a> QuizController<'a> {
    pub fn new(page: &'a QuizPage) -> Self {
        Self {
            page,
            states: vec![QuestionState::default(); page.questions.len()],
        }
    }

    pub fn page(&self) -> &QuizPage {
        self.page
    }

    pub fn states(&self) -> &[QuestionState] {
        &self.states
    }

    /// Grade one question against the current input.
    pub fn submit(&mut self, index: usize, input: &str) {
        let Some(question) = self.page.questions.get(index) else {
            return;
        };
        let state = &mut self.states[index];
        state.input = input.trim().to_string();

        if state.input.is_empty() {
            // Unanswered questions stay ungraded rather than showing
            // "wrong" feedback for a blank field.
            state.feedback = None;
            state.result = None;
            return;
        }

        let (result, feedback) = question.grade(&state.input);
        state.result = Some(result);
        state.feedback = Some(feedback);
    }

    /// Grade every question against the submitted form values.
    pub fn submit_all(&mut self, answers: &[String]) {
        for (index, answer) in answers.iter().enumerate() {
            self.submit(index, answer);
        }
    }

    /// Count of currently-correct questions (not cumulative attempts).
    pub fn correct_count(&self) -> usize {
        self.states.iter().filter(|s| s.is_correct()).count()
    }

    /// Page-local percentage: round(correct / total * 100).
    pub fn local_percentage(&self) -> u8 {
        local_percentage(self.correct_count(), self.page.questions.len())
    }

    /// Fold the local percentage into the topic's stored percentage and
    /// persist it. Returns the new stored value.
    ///
    /// Callers are expected to treat a failure as non-fatal: the page keeps
    /// working with in-memory state and only cross-session persistence is
    /// lost.
    pub fn persist(&self, store: &ProgressStore) -> Result<f64, StoreError> {
        let stored = store.get()?.topic(self.page.topic);
        let folded = fold_topic_percent(stored, self.local_percentage());
        store.save(self.page.topic, folded)?;
        Ok(folded)
    }
}
