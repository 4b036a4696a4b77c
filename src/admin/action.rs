//! Row actions as a closed sum type

use serde::Serialize;
use std::fmt;
use tracing::info;

use crate::api::AdminApi;
use crate::error::Result;

/// Which admin table a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Project,
    Judge,
}

impl RowKind {
    /// Path segment of the table's REST resource
    #[inline]
    pub fn resource(self) -> &'static str {
        match self {
            RowKind::Project => "project",
            RowKind::Judge => "judge",
        }
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectEdit {
    #[serde(skip)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JudgeEdit {
    #[serde(skip)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowEdit {
    Project(ProjectEdit),
    Judge(JudgeEdit),
}

/// Everything the row popups can do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Edit(RowEdit),
    Hide { kind: RowKind, ids: Vec<String> },
    Unhide { kind: RowKind, ids: Vec<String> },
    Prioritize(Vec<String>),
    Unprioritize(Vec<String>),
    MoveTable { project_id: String, location: u64 },
    MoveGroup { kind: RowKind, id: String, group: u64 },
    Delete { kind: RowKind, id: String },
}

impl RowAction {
    /// Table the action applies to
    pub fn kind(&self) -> RowKind {
        match self {
            RowAction::Edit(RowEdit::Project(_)) => RowKind::Project,
            RowAction::Edit(RowEdit::Judge(_)) => RowKind::Judge,
            RowAction::Hide { kind, .. }
            | RowAction::Unhide { kind, .. }
            | RowAction::MoveGroup { kind, .. }
            | RowAction::Delete { kind, .. } => *kind,
            RowAction::Prioritize(_)
            | RowAction::Unprioritize(_)
            | RowAction::MoveTable { .. } => RowKind::Project,
        }
    }

    /// Short name for logs and confirmation prompts
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Edit(_) => "edit",
            RowAction::Hide { .. } => "hide",
            RowAction::Unhide { .. } => "unhide",
            RowAction::Prioritize(_) => "prioritize",
            RowAction::Unprioritize(_) => "unprioritize",
            RowAction::MoveTable { .. } => "move table",
            RowAction::MoveGroup { .. } => "move group",
            RowAction::Delete { .. } => "delete",
        }
    }

    /// Destructive actions need a confirmation step in the UI
    pub fn is_destructive(&self) -> bool {
        matches!(self, RowAction::Delete { .. })
    }
}

/// Send an action to the server
pub async fn dispatch<A>(api: &A, action: &RowAction) -> Result<()>
where
    A: AdminApi + ?Sized,
{
    info!(action = action.label(), kind = %action.kind(), "dispatching row action");
    match action {
        RowAction::Edit(RowEdit::Project(edit)) => api.edit_project(edit).await,
        RowAction::Edit(RowEdit::Judge(edit)) => api.edit_judge(edit).await,
        RowAction::Hide { kind, ids } => api.set_hidden(*kind, ids, true).await,
        RowAction::Unhide { kind, ids } => api.set_hidden(*kind, ids, false).await,
        RowAction::Prioritize(ids) => api.set_prioritized(ids, true).await,
        RowAction::Unprioritize(ids) => api.set_prioritized(ids, false).await,
        RowAction::MoveTable {
            project_id,
            location,
        } => api.move_table(project_id, *location).await,
        RowAction::MoveGroup { kind, id, group } => api.move_group(*kind, id, *group).await,
        RowAction::Delete { kind, id } => api.delete(*kind, id).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::RecordingApi;

    #[test]
    fn test_kind_and_label() {
        let action = RowAction::MoveGroup {
            kind: RowKind::Judge,
            id: "j1".to_string(),
            group: 2,
        };
        assert_eq!(action.kind(), RowKind::Judge);
        assert_eq!(action.label(), "move group");
        assert!(!action.is_destructive());

        let action = RowAction::Delete {
            kind: RowKind::Project,
            id: "p1".to_string(),
        };
        assert!(action.is_destructive());
        assert_eq!(RowAction::Prioritize(vec![]).kind(), RowKind::Project);
    }

    #[test]
    fn test_edit_payload_skips_id() {
        let edit = ProjectEdit {
            id: "p1".to_string(),
            name: "Hydra".to_string(),
            description: "d".to_string(),
            url: "https://devpost.com/hydra".to_string(),
        };
        let json = serde_json::to_value(&edit).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "Hydra");
    }

    #[tokio::test]
    async fn test_dispatch_routes_each_action() {
        let api = RecordingApi::default();
        let actions = vec![
            RowAction::Hide {
                kind: RowKind::Judge,
                ids: vec!["j1".to_string()],
            },
            RowAction::Unprioritize(vec!["p1".to_string(), "p2".to_string()]),
            RowAction::MoveTable {
                project_id: "p1".to_string(),
                location: 12,
            },
            RowAction::Delete {
                kind: RowKind::Project,
                id: "p3".to_string(),
            },
        ];
        for action in &actions {
            dispatch(&api, action).await.unwrap();
        }

        assert_eq!(
            api.calls(),
            vec![
                "hide judge [j1]".to_string(),
                "unprioritize [p1, p2]".to_string(),
                "move table p1 -> 12".to_string(),
                "delete project p3".to_string(),
            ]
        );
    }
}
