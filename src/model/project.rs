//! Judged project structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-side object id of a project
pub type ProjectId = String;

/// Local drag-and-drop key, assigned by list position at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A project the judge has already seen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgedProject {
    pub project_id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Total stars the project received across all judges
    #[serde(default)]
    pub stars: u32,
    /// Whether this judge starred the project
    #[serde(default)]
    pub starred: bool,
    /// Table number
    #[serde(default)]
    pub location: u64,
    #[serde(default)]
    pub notes: String,
}

/// A judged project with its drag key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortableJudgedProject {
    pub id: ItemId,
    #[serde(flatten)]
    pub project: JudgedProject,
}

impl SortableJudgedProject {
    #[inline]
    pub fn project_id(&self) -> &str {
        &self.project.project_id
    }
}

/// Assign 1-based drag keys by position in the seen list
pub fn assign_item_ids(seen: &[JudgedProject]) -> Vec<SortableJudgedProject> {
    seen.iter()
        .enumerate()
        .map(|(i, project)| SortableJudgedProject {
            id: ItemId(i as u32 + 1),
            project: project.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_project() {
        let json = r#"{"project_id": "abc", "name": "Hydra", "extra": 1}"#;
        let project: JudgedProject = serde_json::from_str(json).unwrap();
        assert_eq!(project.project_id, "abc");
        assert_eq!(project.stars, 0);
        assert!(!project.starred);
        assert!(project.description.is_empty());
    }

    #[test]
    fn test_assign_item_ids_positive_and_ordered() {
        let seen: Vec<JudgedProject> = ["a", "b", "c"]
            .iter()
            .map(|id| JudgedProject {
                project_id: id.to_string(),
                name: id.to_uppercase(),
                description: String::new(),
                stars: 0,
                starred: false,
                location: 0,
                notes: String::new(),
            })
            .collect();

        let sortable = assign_item_ids(&seen);
        let ids: Vec<u32> = sortable.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(sortable[2].project_id(), "c");
    }
}
