use askama::Template;
use axum::response::Html;

use crate::config;
use crate::routerlab::{InterfaceInfo, LiveApi, RouteEntry, snapshot_with_fallback};

#[derive(Template)]
#[template(path = "router_lab.html")]
pub struct RouterLabTemplate {
  pub source_label: &'static str,
  pub hostname: String,
  pub model: String,
  pub ios_version: String,
  pub uptime: String,
  pub ip: String,
  pub interfaces: Vec<InterfaceInfo>,
  pub routes: Vec<RouteEntry>,
  pub ping_target: String,
  pub ping_ok: bool,
  pub ping_rtt: String,
}

pub async fn router_lab() -> Html<String> {
  let live = LiveApi::new(config::router_api_url());
  let snapshot = snapshot_with_fallback(&live, config::LAB_ROUTER_IP).await;

  let template = RouterLabTemplate {
    source_label: snapshot.source.label(),
    hostname: snapshot.info.hostname,
    model: snapshot.info.model,
    ios_version: snapshot.info.ios_version,
    uptime: snapshot.info.uptime,
    ip: snapshot.info.ip,
    interfaces: snapshot.interfaces,
    routes: snapshot.routes,
    ping_target: snapshot.ping.target,
    ping_ok: snapshot.ping.success,
    ping_rtt: format!("{:.1}", snapshot.ping.rtt_avg_ms),
  };

  Html(template.render().unwrap_or_default())
}
