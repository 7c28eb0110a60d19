//! Incident types
//!
//! Passive shapes only: incidents are created and correlated entirely on the
//! backend. The client decodes them for display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Severity;

/// Incident lifecycle states
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    New,
    Investigating,
    Contained,
    Resolved,
    Closed,
}

/// Incident triage priority
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

/// Correlated incident record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Incident {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: IncidentStatus,
    pub priority: Priority,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub assigned_to: Option<String>,
    pub created_by: String,
    pub source_alerts: Vec<Uuid>,
    pub mitre_attack: MitreAttackMapping,
    pub risk_score: f64,
    pub affected_assets: Vec<String>,
    pub indicators: IndicatorSet,
    pub timeline: Vec<TimelineEvent>,
    pub tags: Vec<String>,
    pub notes: Vec<IncidentNote>,
}

/// MITRE ATT&CK classification attached to an incident
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MitreAttackMapping {
    pub tactics: Vec<String>,
    pub techniques: Vec<String>,
    pub sub_techniques: Vec<String>,
}

/// Indicators of compromise extracted from the incident's source alerts
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndicatorSet {
    pub ips: Vec<String>,
    pub domains: Vec<String>,
    pub hashes: Vec<String>,
    pub urls: Vec<String>,
}

/// Single entry in an incident's investigation timeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineEvent {
    pub timestamp: DateTime<Utc>,
    pub event_type: String,
    pub description: String,
    pub user: String,
}

/// Analyst note kinds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IncidentNoteKind {
    Note,
    Action,
    Observation,
}

/// Analyst note attached to an incident
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncidentNote {
    pub timestamp: DateTime<Utc>,
    pub user: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: IncidentNoteKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_kind_uses_type_wire_key() {
        let note = IncidentNote {
            timestamp: Utc::now(),
            user: "analyst".to_string(),
            content: "Blocked at the perimeter".to_string(),
            kind: IncidentNoteKind::Action,
        };
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["type"], "action");
    }

    #[test]
    fn status_round_trips() {
        let parsed: IncidentStatus = serde_json::from_str(r#""contained""#).unwrap();
        assert_eq!(parsed, IncidentStatus::Contained);
    }
}
