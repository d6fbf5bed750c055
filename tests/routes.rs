//! Integration tests for the HTTP surface: menus, quiz grading, progress
//! persistence across requests, and the reset flow.

use axum::http::StatusCode;
use axum_test::TestServer;
use tempfile::TempDir;

use net_tutor::db::{self, ProgressStore};

/// Spin up the full app against a throwaway database.
fn test_server() -> (TestServer, TempDir) {
  let temp = TempDir::new().expect("create temp dir");
  let pool = db::init_db(&temp.path().join("test.db")).expect("init db");
  let server = TestServer::new(net_tutor::app(ProgressStore::new(pool))).expect("start server");
  (server, temp)
}

#[tokio::test]
async fn test_index_lists_every_topic() {
  let (server, _temp) = test_server();

  let response = server.get("/").await;
  response.assert_status_ok();

  let body = response.text();
  for title in [
    "Network Basics",
    "IP Addressing",
    "Routing",
    "VLANs",
    "Wireless",
  ] {
    assert!(body.contains(title), "missing topic card: {}", title);
  }
}

#[tokio::test]
async fn test_menus_link_to_their_mode() {
  let (server, _temp) = test_server();

  let learn = server.get("/learn").await;
  learn.assert_status_ok();
  assert!(learn.text().contains("/learn/vlan"));

  let challenge = server.get("/challenge").await;
  challenge.assert_status_ok();
  assert!(challenge.text().contains("/challenge/vlan"));
}

#[tokio::test]
async fn test_quiz_page_renders_three_questions() {
  let (server, _temp) = test_server();

  let response = server.get("/learn/vlan").await;
  response.assert_status_ok();

  let body = response.text();
  assert!(body.contains("name=\"q1\""));
  assert!(body.contains("name=\"q2\""));
  assert!(body.contains("name=\"q3\""));
}

#[tokio::test]
async fn test_unknown_mode_or_topic_is_404() {
  let (server, _temp) = test_server();

  server
    .get("/learn/quantum")
    .await
    .assert_status(StatusCode::NOT_FOUND);
  server
    .get("/practice/vlan")
    .await
    .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_submit_grades_and_reports_local_percentage() {
  let (server, _temp) = test_server();

  // Two of three correct on the VLAN learn page
  let response = server
    .post("/learn/vlan")
    .form(&[("q1", "20"), ("q2", "security"), ("q3", "a")])
    .await;
  response.assert_status_ok();

  let body = response.text();
  assert!(body.contains("This page: 67%"));
}

#[tokio::test]
async fn test_submitted_progress_survives_across_requests() {
  let (server, _temp) = test_server();

  server
    .post("/learn/vlan")
    .form(&[("q1", "20"), ("q2", "security"), ("q3", "b")])
    .await
    .assert_status_ok();

  // A fresh GET of the same page shows the persisted topic percentage
  let page = server.get("/learn/vlan").await;
  assert!(page.text().contains("Topic progress: 100%"));

  // And the dashboard reflects the stored value too
  let dashboard = server.get("/dashboard").await;
  assert!(dashboard.text().contains("100%"));
}

#[tokio::test]
async fn test_retaking_a_page_never_lowers_stored_progress() {
  let (server, _temp) = test_server();

  server
    .post("/learn/routing")
    .form(&[("q1", "10.0.0.1"), ("q2", "b"), ("q3", "c")])
    .await
    .assert_status_ok();

  // All blank on the retake: page-local 0%, stored stays 100%
  let retake = server
    .post("/learn/routing")
    .form(&[("q1", ""), ("q2", ""), ("q3", "")])
    .await;
  let body = retake.text();
  assert!(body.contains("This page: 0%"));
  assert!(body.contains("Topic progress: 100%"));
}

#[tokio::test]
async fn test_blank_fields_get_no_feedback() {
  let (server, _temp) = test_server();

  let response = server
    .post("/learn/wireless")
    .form(&[("q1", "MyHomeWifi"), ("q2", ""), ("q3", "")])
    .await;
  let body = response.text();
  assert!(body.contains("This page: 33%"));
  // One graded question means exactly one feedback paragraph
  assert_eq!(body.matches("class=\"feedback").count(), 1);
}

#[tokio::test]
async fn test_reset_zeroes_the_dashboard() {
  let (server, _temp) = test_server();

  server
    .post("/learn/vlan")
    .form(&[("q1", "20"), ("q2", "security"), ("q3", "b")])
    .await
    .assert_status_ok();

  let response = server.post("/reset").await;
  response.assert_status(StatusCode::SEE_OTHER);

  let dashboard = server.get("/dashboard").await;
  assert!(dashboard.text().contains("Overall: 0%"));
}

#[tokio::test]
async fn test_router_lab_renders_without_live_api() {
  let (server, _temp) = test_server();

  let response = server.get("/router-lab").await;
  response.assert_status_ok();

  let body = response.text();
  assert!(body.contains("simulated router"));
  assert!(body.contains("GigabitEthernet0/0"));
  assert!(body.contains("192.168.3.10"));
}
