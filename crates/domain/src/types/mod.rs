//! Domain types and models
//!
//! Typed contracts for every entity the backend exchanges with the client.
//! All enums use snake_case wire form; partial-update records omit unset
//! fields so the backend sees exclude-unset PATCH semantics.

pub mod alert;
pub mod dashboard;
pub mod flow;
pub mod incident;
pub mod notifications;
pub mod user;

use serde::{Deserialize, Serialize};

// Re-export entity types for convenience
pub use alert::{Alert, AlertListQuery, AlertStats, AlertStatus, AlertUpdate};
pub use dashboard::{DashboardKpis, DashboardSnapshot, RecentAlert};
pub use flow::{
    AssetCriticality, AssetInfo, FlowEnrichment, FlowEvent, GeoInfo, GeoPair, ReputationInfo,
    ThreatIntelPair,
};
pub use incident::{
    Incident, IncidentNote, IncidentNoteKind, IncidentStatus, IndicatorSet, MitreAttackMapping,
    Priority, TimelineEvent,
};
pub use notifications::{NotificationSettings, NotificationSettingsUpdate};
pub use user::{ProfileUpdate, SessionUser, User};

/// Alert/incident severity grades, ordered from least to most severe
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// Paginated response envelope used by list endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_low_to_critical() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn severity_uses_snake_case_wire_form() {
        assert_eq!(serde_json::to_string(&Severity::Critical).unwrap(), r#""critical""#);
        let parsed: Severity = serde_json::from_str(r#""low""#).unwrap();
        assert_eq!(parsed, Severity::Low);
    }
}
