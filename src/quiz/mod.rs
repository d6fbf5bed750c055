//! Quiz pages: question definitions and progress folding.
//!
//! Every page is one (topic, mode) pair with exactly three questions. The
//! same generic controller drives all of them; pages differ only in their
//! static configuration in [`content`].

pub mod content;
pub mod controller;

use crate::domain::{Mode, Topic};
use crate::validation::{AnswerResult, Matcher};

pub use controller::{QuestionState, QuizController};

/// Every quiz page has exactly this many questions.
pub const QUESTIONS_PER_PAGE: usize = 3;

/// One selectable option of a multiple-choice question.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceOption {
    /// Token submitted by the form
    pub token: &'static str,
    /// Label shown to the user
    pub label: &'static str,
}

/// How a question is answered.
#[derive(Debug, Clone, Copy)]
pub enum QuestionKind {
    /// Free-text input
    Text { placeholder: &'static str },
    /// Multi-line input for configuration commands
    TextArea { placeholder: &'static str },
    /// Fixed set of options
    Choice { options: &'static [ChoiceOption] },
}

/// A single quiz question with its fixed grading rule and feedback.
#[derive(Debug, Clone)]
pub struct Question {
    pub prompt: &'static str,
    pub kind: QuestionKind,
    pub matcher: Matcher,
    pub correct_feedback: &'static str,
    /// Shown for near misses; falls back to `incorrect_feedback`.
    pub close_feedback: Option<&'static str>,
    pub incorrect_feedback: &'static str,
}

impl Question {
    /// Grade one answer, returning the result and the feedback to display.
    ///
    /// Only the result's correctness feeds progress; the feedback string is
    /// purely presentational.
    pub fn grade(&self, input: &str) -> (AnswerResult, &'static str) {
        let result = self.matcher.grade(input);
        let feedback = match result {
            AnswerResult::Correct => self.correct_feedback,
            AnswerResult::Close => self.close_feedback.unwrap_or(self.incorrect_feedback),
            AnswerResult::Incorrect => self.incorrect_feedback,
        };
        (result, feedback)
    }
}

/// Static definition of one quiz page.
#[derive(Debug)]
pub struct QuizPage {
    pub topic: Topic,
    pub mode: Mode,
    pub title: &'static str,
    pub intro: &'static str,
    pub hint: &'static str,
    pub questions: [Question; QUESTIONS_PER_PAGE],
}

/// Fold per-question correctness into one page-local percentage.
///
/// With three questions the possible values are {0, 33, 67, 100}.
pub fn local_percentage(correct_count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((correct_count as f64 / total as f64) * 100.0).round() as u8
}

/// Combine a page-local percentage into the topic's stored percentage.
///
/// Convention: a topic's percentage is the best page-local score achieved
/// across its learn and challenge pages. Monotone, order-independent, and
/// applied uniformly to every page; revisiting a page and doing worse never
/// lowers the stored value (the live page still shows the lower local
/// score).
pub fn fold_topic_percent(stored: f64, local_percent: u8) -> f64 {
    stored.max(local_percent as f64).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folding_law_for_three_questions() {
        assert_eq!(local_percentage(0, 3), 0);
        assert_eq!(local_percentage(1, 3), 33);
        assert_eq!(local_percentage(2, 3), 67);
        assert_eq!(local_percentage(3, 3), 100);
    }

    #[test]
    fn test_local_percentage_empty_page_is_zero() {
        assert_eq!(local_percentage(0, 0), 0);
    }

    #[test]
    fn test_fold_keeps_best_score() {
        assert_eq!(fold_topic_percent(0.0, 67), 67.0);
        assert_eq!(fold_topic_percent(67.0, 33), 67.0);
        assert_eq!(fold_topic_percent(67.0, 100), 100.0);
        assert_eq!(fold_topic_percent(100.0, 0), 100.0);
    }

    #[test]
    fn test_question_feedback_tracks_result() {
        let q = Question {
            prompt: "vlan id?",
            kind: QuestionKind::Text { placeholder: "" },
            matcher: Matcher::ExactWithNear { answer: "20", near: &["10"] },
            correct_feedback: "yes",
            close_feedback: Some("almost"),
            incorrect_feedback: "no",
        };
        assert_eq!(q.grade("20"), (AnswerResult::Correct, "yes"));
        assert_eq!(q.grade("10"), (AnswerResult::Close, "almost"));
        assert_eq!(q.grade("99"), (AnswerResult::Incorrect, "no"));
    }
}
