//! Dashboard KPI types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Severity;

/// Aggregate alert counters shown on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardKpis {
    pub total_alerts: u64,
    pub new_alerts: u64,
    pub critical_alerts: u64,
    pub high_alerts: u64,
    pub alerts_today: u64,
    pub alerts_this_week: u64,
}

/// Trimmed alert list item on the dashboard (most recent first, max 10)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentAlert {
    pub id: Uuid,
    pub title: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}

/// Full payload of `GET /api/dashboard/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSnapshot {
    pub kpis: DashboardKpis,
    pub recent_alerts: Vec<RecentAlert>,
}
