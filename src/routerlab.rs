//! Router lab data sources.
//!
//! The lab page shows one router's interfaces, routing table and a
//! diagnostic ping. Data comes from a [`RouterDataSource`]: either a live
//! management API or canned values. The page always tries live first and
//! falls back to canned, labelling which one it got.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where a snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotSource {
    Live,
    Simulated,
}

impl SnapshotSource {
    pub fn label(&self) -> &'static str {
        match self {
            SnapshotSource::Live => "live router",
            SnapshotSource::Simulated => "simulated router",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterInfo {
    pub hostname: String,
    pub model: String,
    pub ios_version: String,
    pub uptime: String,
    pub ip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceInfo {
    pub name: String,
    pub ip: String,
    pub status: String,
    pub protocol: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteEntry {
    pub destination: String,
    pub next_hop: String,
    pub interface: String,
    pub protocol: String,
    pub metric: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResult {
    pub target: String,
    pub success: bool,
    pub packet_loss: f64,
    pub rtt_avg_ms: f64,
}

/// Everything the lab page renders in one go.
#[derive(Debug, Clone)]
pub struct RouterSnapshot {
    pub source: SnapshotSource,
    pub info: RouterInfo,
    pub interfaces: Vec<InterfaceInfo>,
    pub routes: Vec<RouteEntry>,
    pub ping: PingResult,
}

#[derive(Debug)]
pub enum LabError {
    Network(String),
    Decode(String),
}

impl std::fmt::Display for LabError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabError::Network(e) => write!(f, "router API unreachable: {}", e),
            LabError::Decode(e) => write!(f, "router API response malformed: {}", e),
        }
    }
}

impl std::error::Error for LabError {}

/// A source of router telemetry.
pub trait RouterDataSource {
    fn snapshot(
        &self,
        router_ip: &str,
    ) -> impl Future<Output = Result<RouterSnapshot, LabError>> + Send;
}

// ============================================================================
// Live source
// ============================================================================

/// Talks to a router-management HTTP API.
pub struct LiveApi {
    client: reqwest::Client,
    base_url: String,
}

impl LiveApi {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap_or_default();
        Self { client, base_url }
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, LabError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LabError::Network(e.to_string()))?
            .error_for_status()
            .map_err(|e| LabError::Network(e.to_string()))?;

        response
            .json::<T>()
            .await
            .map_err(|e| LabError::Decode(e.to_string()))
    }
}

impl RouterDataSource for LiveApi {
    async fn snapshot(&self, router_ip: &str) -> Result<RouterSnapshot, LabError> {
        let info: RouterInfo = self.fetch(&format!("/router/{}/info", router_ip)).await?;
        let interfaces: Vec<InterfaceInfo> =
            self.fetch(&format!("/router/{}/interfaces", router_ip)).await?;
        let routes: Vec<RouteEntry> =
            self.fetch(&format!("/router/{}/routes", router_ip)).await?;
        let ping: PingResult = self.fetch(&format!("/router/{}/ping", router_ip)).await?;

        Ok(RouterSnapshot {
            source: SnapshotSource::Live,
            info,
            interfaces,
            routes,
            ping,
        })
    }
}

// ============================================================================
// Canned source
// ============================================================================

/// Fixed demonstration data, used when no real router is reachable.
pub struct Canned;

impl RouterDataSource for Canned {
    async fn snapshot(&self, router_ip: &str) -> Result<RouterSnapshot, LabError> {
        Ok(canned_snapshot(router_ip))
    }
}

pub fn canned_snapshot(router_ip: &str) -> RouterSnapshot {
    RouterSnapshot {
        source: SnapshotSource::Simulated,
        info: RouterInfo {
            hostname: "R1".to_string(),
            model: "Cisco 892".to_string(),
            ios_version: "15.7(3)M2".to_string(),
            uptime: "3 days, 4 hours".to_string(),
            ip: router_ip.to_string(),
        },
        interfaces: vec![
            InterfaceInfo {
                name: "GigabitEthernet0/0".to_string(),
                ip: "192.168.1.1".to_string(),
                status: "up".to_string(),
                protocol: "up".to_string(),
            },
            InterfaceInfo {
                name: "GigabitEthernet0/1".to_string(),
                ip: "192.168.2.1".to_string(),
                status: "up".to_string(),
                protocol: "up".to_string(),
            },
        ],
        routes: vec![
            RouteEntry {
                destination: "192.168.1.0/24".to_string(),
                next_hop: "Connected".to_string(),
                interface: "GigabitEthernet0/0".to_string(),
                protocol: "C".to_string(),
                metric: 0,
            },
            RouteEntry {
                destination: "192.168.2.0/24".to_string(),
                next_hop: "Connected".to_string(),
                interface: "GigabitEthernet0/1".to_string(),
                protocol: "C".to_string(),
                metric: 0,
            },
            RouteEntry {
                destination: "192.168.3.0/24".to_string(),
                next_hop: "192.168.2.2".to_string(),
                interface: "GigabitEthernet0/1".to_string(),
                protocol: "S".to_string(),
                metric: 1,
            },
        ],
        ping: PingResult {
            target: "192.168.3.10".to_string(),
            success: true,
            packet_loss: 0.0,
            rtt_avg_ms: 1.8,
        },
    }
}

/// Try the live API, fall back to canned data.
pub async fn snapshot_with_fallback(live: &LiveApi, router_ip: &str) -> RouterSnapshot {
    match live.snapshot(router_ip).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::debug!("falling back to simulated router data: {}", e);
            canned_snapshot(router_ip)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_canned_source_is_always_available() {
        let snapshot = Canned.snapshot("192.168.1.1").await.unwrap();
        assert_eq!(snapshot.source, SnapshotSource::Simulated);
        assert_eq!(snapshot.info.ip, "192.168.1.1");
        assert_eq!(snapshot.interfaces.len(), 2);
        assert_eq!(snapshot.routes.len(), 3);
    }

    #[tokio::test]
    async fn test_unreachable_api_falls_back_to_canned() {
        // Port 9 (discard) on localhost should refuse quickly
        let live = LiveApi::new("http://127.0.0.1:9".to_string());
        let snapshot = snapshot_with_fallback(&live, "10.0.0.1").await;
        assert_eq!(snapshot.source, SnapshotSource::Simulated);
    }

    #[test]
    fn test_canned_routes_include_a_static_route() {
        let snapshot = canned_snapshot("192.168.1.1");
        assert!(snapshot.routes.iter().any(|r| r.protocol == "S"));
    }
}
