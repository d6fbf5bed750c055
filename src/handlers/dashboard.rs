use askama::Template;
use axum::{
  extract::State,
  response::{Html, Redirect},
};

use crate::db::{LogOnError, ProgressStore};
use crate::domain::Topic;

pub struct TopicRow {
  pub title: &'static str,
  pub percent: String,
  /// Progress bar width, 0-100
  pub width: u8,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
  pub overall: String,
  pub overall_width: u8,
  pub rows: Vec<TopicRow>,
}

pub async fn dashboard(State(store): State<ProgressStore>) -> Html<String> {
  let record = store.get().log_warn_default("Failed to load progress");

  let rows = Topic::ALL
    .iter()
    .map(|topic| {
      let value = record.topic(*topic);
      TopicRow {
        title: topic.title(),
        percent: format!("{:.0}", value),
        width: value.round() as u8,
      }
    })
    .collect();

  let template = DashboardTemplate {
    overall: format!("{:.0}", record.overall()),
    overall_width: record.overall().round() as u8,
    rows,
  };

  Html(template.render().unwrap_or_default())
}

pub async fn reset_progress(State(store): State<ProgressStore>) -> Redirect {
  if let Err(e) = store.reset() {
    tracing::warn!("Failed to reset progress: {}", e);
  }
  Redirect::to("/dashboard")
}
