//! Network flow event types
//!
//! Passive shapes only: flow events are collected and enriched on the
//! backend. `protocol` is the raw IP protocol number.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Enriched network flow record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowEvent {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub collector_id: String,
    pub source_ip: String,
    pub dest_ip: String,
    pub source_port: u16,
    pub dest_port: u16,
    pub protocol: u8,
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub packets_sent: u64,
    pub packets_received: u64,
    pub duration: f64,
    pub tcp_flags: u8,
    pub tos: u8,
    pub enrichment: FlowEnrichment,
}

/// Backend-computed enrichment attached to a flow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowEnrichment {
    pub source_asset: AssetInfo,
    pub dest_asset: AssetInfo,
    pub geolocation: GeoPair,
    pub threat_intel: ThreatIntelPair,
}

/// Asset criticality grades (severity grades plus unknown)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AssetCriticality {
    Low,
    Medium,
    High,
    Critical,
    Unknown,
}

/// Inventory data for a flow endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetInfo {
    pub hostname: Option<String>,
    pub os: Option<String>,
    pub owner: Option<String>,
    pub department: Option<String>,
    pub criticality: AssetCriticality,
}

/// Geolocation for both ends of a flow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoPair {
    pub source: GeoInfo,
    pub dest: GeoInfo,
}

/// Geolocation lookup result for one address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoInfo {
    pub country: String,
    pub region: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub asn: String,
    pub organization: String,
}

/// Threat-intel reputation for both ends of a flow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThreatIntelPair {
    pub source_reputation: ReputationInfo,
    pub dest_reputation: ReputationInfo,
}

/// Aggregated reputation verdict for one address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReputationInfo {
    pub score: f64,
    pub categories: Vec<String>,
    pub sources: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_criticality_includes_unknown() {
        let parsed: AssetCriticality = serde_json::from_str(r#""unknown""#).unwrap();
        assert_eq!(parsed, AssetCriticality::Unknown);
    }
}
