//! Answer grading for quiz questions.
//!
//! Each question carries one fixed matching rule:
//! - exact string match (optionally case-insensitive)
//! - exact match with "near miss" alternatives that earn encouragement
//! - prefix match (right network, wrong host)
//! - selected option token
//! - host address inside a given /24
//! - integer range check
//! - case-insensitive substring (configuration fragments)
//! - regular expression (configuration-command shape)

use regex::Regex;

// ============================================================================
// Result type
// ============================================================================

/// Result of grading one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerResult {
    /// Full match
    Correct,
    /// Wrong, but recognizably on the right track
    Close,
    /// Wrong answer (or no answer)
    Incorrect,
}

impl AnswerResult {
    /// Only a full match feeds progress; `Close` is presentational.
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

// ============================================================================
// Matchers
// ============================================================================

/// Fixed matching rule for one question.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Trimmed input equals the expected answer.
    Exact {
        answer: &'static str,
        ignore_case: bool,
    },
    /// Exact match, with a list of near misses that grade as `Close`
    /// (e.g. another department's VLAN id).
    ExactWithNear {
        answer: &'static str,
        near: &'static [&'static str],
    },
    /// Exact match; sharing only the prefix grades as `Close`
    /// (right network, wrong host).
    Prefix {
        answer: &'static str,
        prefix: &'static str,
    },
    /// Selected option token equals the expected token.
    Choice { token: &'static str },
    /// Dotted-quad host address inside `prefix`, with the last octet in
    /// `min..=max`. An address in the wrong network grades `Incorrect`;
    /// the right network with a reserved host grades `Close`.
    HostInNet {
        prefix: &'static str,
        min: u8,
        max: u8,
    },
    /// Input parses as an integer in `min..=max`.
    IntRange { min: i64, max: i64 },
    /// Case-insensitive substring match.
    Contains { needle: &'static str },
    /// Input matches a regular expression (configuration-command shape).
    Pattern { regex: &'static str },
}

impl Matcher {
    pub fn grade(&self, input: &str) -> AnswerResult {
        let input = input.trim();
        if input.is_empty() {
            return AnswerResult::Incorrect;
        }

        match self {
            Matcher::Exact { answer, ignore_case } => {
                let matched = if *ignore_case {
                    input.eq_ignore_ascii_case(answer)
                } else {
                    input == *answer
                };
                if matched { AnswerResult::Correct } else { AnswerResult::Incorrect }
            }
            Matcher::ExactWithNear { answer, near } => {
                if input == *answer {
                    AnswerResult::Correct
                } else if near.contains(&input) {
                    AnswerResult::Close
                } else {
                    AnswerResult::Incorrect
                }
            }
            Matcher::Prefix { answer, prefix } => {
                if input == *answer {
                    AnswerResult::Correct
                } else if input.starts_with(prefix) {
                    AnswerResult::Close
                } else {
                    AnswerResult::Incorrect
                }
            }
            Matcher::Choice { token } => {
                if input == *token { AnswerResult::Correct } else { AnswerResult::Incorrect }
            }
            Matcher::HostInNet { prefix, min, max } => {
                let Some(host) = input.strip_prefix(prefix) else {
                    return AnswerResult::Incorrect;
                };
                match host.parse::<u8>() {
                    Ok(n) if (*min..=*max).contains(&n) => AnswerResult::Correct,
                    Ok(_) => AnswerResult::Close,
                    Err(_) => AnswerResult::Incorrect,
                }
            }
            Matcher::IntRange { min, max } => match input.parse::<i64>() {
                Ok(n) if (*min..=*max).contains(&n) => AnswerResult::Correct,
                _ => AnswerResult::Incorrect,
            },
            Matcher::Contains { needle } => {
                if input.to_lowercase().contains(&needle.to_lowercase()) {
                    AnswerResult::Correct
                } else {
                    AnswerResult::Incorrect
                }
            }
            Matcher::Pattern { regex } => match Regex::new(regex) {
                Ok(re) if re.is_match(input) => AnswerResult::Correct,
                Ok(_) => AnswerResult::Incorrect,
                Err(e) => {
                    tracing::warn!("invalid answer pattern {:?}: {}", regex, e);
                    AnswerResult::Incorrect
                }
            },
        }
    }
}
