//! Admin-facing rows and status payloads

use serde::{Deserialize, Serialize};

/// Project row in the admin table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminProject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub location: u64,
    #[serde(default)]
    pub group: u64,
    /// Hidden projects are not assigned to judges
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub prioritized: bool,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub seen: u32,
}

/// Judge row in the admin table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminJudge {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub group: u64,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub seen: u32,
}

fn default_active() -> bool {
    true
}

/// Aggregate numbers shown on the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    #[serde(default)]
    pub projects: u64,
    #[serde(default)]
    pub avg_project_seen: f64,
    #[serde(default)]
    pub avg_judge_seen: f64,
    #[serde(default)]
    pub judges: u64,
}

/// Server clock snapshot, `time` in milliseconds of elapsed judging time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockState {
    pub running: bool,
    pub time: u64,
}
