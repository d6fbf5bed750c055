pub mod dashboard;
pub mod lab;
pub mod quiz;

use askama::Template;
use axum::{extract::State, response::Html};

use crate::db::{LogOnError, ProgressStore};
use crate::domain::{Mode, Topic};

pub use dashboard::{dashboard, reset_progress};
pub use lab::router_lab;
pub use quiz::{quiz_page, quiz_submit};

/// One topic entry on a menu page.
pub struct TopicCard {
  pub title: &'static str,
  pub description: &'static str,
  pub href: String,
  pub percent: String,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
  pub overall: String,
  pub topics: Vec<TopicCard>,
}

pub async fn index(State(store): State<ProgressStore>) -> Html<String> {
  let record = store.get().log_warn_default("Failed to load progress");

  let topics = Topic::ALL
    .iter()
    .map(|topic| TopicCard {
      title: topic.title(),
      description: topic.description(),
      href: format!("/learn/{}", topic.as_slug()),
      percent: format!("{:.0}", record.topic(*topic)),
    })
    .collect();

  let template = IndexTemplate {
    overall: format!("{:.0}", record.overall()),
    topics,
  };

  Html(template.render().unwrap_or_default())
}

#[derive(Template)]
#[template(path = "menu.html")]
pub struct MenuTemplate {
  pub mode_title: &'static str,
  pub topics: Vec<TopicCard>,
}

fn mode_menu(store: &ProgressStore, mode: Mode) -> MenuTemplate {
  let record = store.get().log_warn_default("Failed to load progress");

  let topics = Topic::ALL
    .iter()
    .map(|topic| TopicCard {
      title: topic.title(),
      description: topic.description(),
      href: format!("/{}/{}", mode.as_slug(), topic.as_slug()),
      percent: format!("{:.0}", record.topic(*topic)),
    })
    .collect();

  MenuTemplate {
    mode_title: mode.title(),
    topics,
  }
}

pub async fn learn_menu(State(store): State<ProgressStore>) -> Html<String> {
  Html(mode_menu(&store, Mode::Learn).render().unwrap_or_default())
}

pub async fn challenge_menu(State(store): State<ProgressStore>) -> Html<String> {
  Html(mode_menu(&store, Mode::Challenge).render().unwrap_or_default())
}
