//! Quiz page rendering and grading.
//!
//! One pair of handlers serves every (mode, topic) page; the page
//! definition comes from the static question banks and the grading runs
//! through the generic controller. A storage failure during save is
//! logged and swallowed: the page keeps working with in-memory state and
//! only cross-session persistence is lost.

use askama::Template;
use axum::{
  Form,
  extract::{Path, State},
  http::StatusCode,
  response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::db::{LogOnError, ProgressStore};
use crate::domain::{Mode, Topic};
use crate::quiz::{QuestionKind, QuizController, content};

pub struct OptionView {
  pub token: &'static str,
  pub label: &'static str,
  pub selected: bool,
}

pub struct QuestionView {
  /// Form field name (q1, q2, q3)
  pub name: String,
  pub prompt: &'static str,
  pub is_choice: bool,
  pub is_area: bool,
  pub options: Vec<OptionView>,
  pub placeholder: &'static str,
  pub value: String,
  /// Empty when the question has not been graded yet
  pub feedback: String,
  pub correct: bool,
}

#[derive(Template)]
#[template(path = "quiz.html")]
pub struct QuizTemplate {
  pub title: &'static str,
  pub mode_title: &'static str,
  pub back_href: String,
  pub intro: &'static str,
  pub hint: &'static str,
  pub action: String,
  pub questions: Vec<QuestionView>,
  pub submitted: bool,
  pub local_percent: u8,
  pub topic_percent: String,
}

#[derive(Deserialize)]
pub struct QuizForm {
  #[serde(default)]
  pub q1: String,
  #[serde(default)]
  pub q2: String,
  #[serde(default)]
  pub q3: String,
}

fn parse_page(mode: &str, topic: &str) -> Option<(Mode, Topic)> {
  Some((Mode::parse_slug(mode)?, Topic::parse_slug(topic)?))
}

pub async fn quiz_page(
  State(store): State<ProgressStore>,
  Path((mode, topic)): Path<(String, String)>,
) -> Response {
  let Some((mode, topic)) = parse_page(&mode, &topic) else {
    return StatusCode::NOT_FOUND.into_response();
  };

  let page = content::page(mode, topic);
  let controller = QuizController::new(page);

  let topic_percent = store
    .get()
    .log_warn_default("Failed to load progress")
    .topic(topic);

  render(&controller, false, topic_percent).into_response()
}

pub async fn quiz_submit(
  State(store): State<ProgressStore>,
  Path((mode, topic)): Path<(String, String)>,
  Form(form): Form<QuizForm>,
) -> Response {
  let Some((mode, topic)) = parse_page(&mode, &topic) else {
    return StatusCode::NOT_FOUND.into_response();
  };

  let page = content::page(mode, topic);
  let mut controller = QuizController::new(page);
  controller.submit_all(&[form.q1, form.q2, form.q3]);

  // Persist best-effort; the graded page is served either way.
  let topic_percent = match controller.persist(&store) {
    Ok(folded) => folded,
    Err(e) => {
      tracing::warn!("Failed to persist progress for {:?}: {}", topic, e);
      controller.local_percentage() as f64
    }
  };

  render(&controller, true, topic_percent).into_response()
}

fn render(controller: &QuizController<'_>, submitted: bool, topic_percent: f64) -> Html<String> {
  let page = controller.page();

  let questions = page
    .questions
    .iter()
    .zip(controller.states())
    .enumerate()
    .map(|(i, (question, state))| {
      let (is_choice, is_area, options, placeholder) = match question.kind {
        QuestionKind::Choice { options } => (
          true,
          false,
          options
            .iter()
            .map(|o| OptionView {
              token: o.token,
              label: o.label,
              selected: state.input == o.token,
            })
            .collect(),
          "",
        ),
        QuestionKind::TextArea { placeholder } => (false, true, Vec::new(), placeholder),
        QuestionKind::Text { placeholder } => (false, false, Vec::new(), placeholder),
      };

      QuestionView {
        name: format!("q{}", i + 1),
        prompt: question.prompt,
        is_choice,
        is_area,
        options,
        placeholder,
        value: state.input.clone(),
        feedback: state.feedback.unwrap_or_default().to_string(),
        correct: state.is_correct(),
      }
    })
    .collect();

  let template = QuizTemplate {
    title: page.title,
    mode_title: page.mode.title(),
    back_href: format!("/{}", page.mode.as_slug()),
    intro: page.intro,
    hint: page.hint,
    action: format!("/{}/{}", page.mode.as_slug(), page.topic.as_slug()),
    questions,
    submitted,
    local_percent: controller.local_percentage(),
    topic_percent: format!("{:.0}", topic_percent),
  };

  Html(template.render().unwrap_or_default())
}
