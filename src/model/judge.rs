//! Judge profile as returned by the judge profile fetch

use serde::{Deserialize, Serialize};

use super::{JudgedProject, ProjectId};

/// The logged-in judge with everything needed to build the sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Seen projects, oldest view first
    #[serde(default)]
    pub seen_projects: Vec<JudgedProject>,
    /// Last saved ranking, best first
    #[serde(default)]
    pub rankings: Vec<ProjectId>,
    #[serde(default)]
    pub group: u64,
}
