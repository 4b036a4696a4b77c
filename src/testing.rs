//! Fixtures shared by the unit tests

use crate::model::{JudgedProject, SortableJudgedProject};

pub(crate) fn project(id: &str) -> JudgedProject {
    JudgedProject {
        project_id: id.to_string(),
        name: format!("Project {}", id),
        description: String::new(),
        stars: 0,
        starred: false,
        location: 0,
        notes: String::new(),
    }
}

/// Seen projects in view order (oldest first)
pub(crate) fn seen(ids: &[&str]) -> Vec<JudgedProject> {
    ids.iter().map(|id| project(id)).collect()
}

pub(crate) fn ids(list: &[SortableJudgedProject]) -> Vec<&str> {
    list.iter().map(|i| i.project_id()).collect()
}
