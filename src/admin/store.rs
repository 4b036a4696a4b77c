//! Client-side store of fetched admin data

use tracing::debug;

use super::action::{dispatch, RowAction, RowEdit, RowKind};
use crate::api::AdminApi;
use crate::error::Result;
use crate::model::{AdminJudge, AdminProject, AdminStats};

/// Projects, judges and stats as last fetched, patched after each action
#[derive(Debug, Clone, Default)]
pub struct AdminStore {
    projects: Vec<AdminProject>,
    judges: Vec<AdminJudge>,
    stats: Option<AdminStats>,
}

impl AdminStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn projects(&self) -> &[AdminProject] {
        &self.projects
    }

    #[inline]
    pub fn judges(&self) -> &[AdminJudge] {
        &self.judges
    }

    #[inline]
    pub fn stats(&self) -> Option<&AdminStats> {
        self.stats.as_ref()
    }

    pub fn project(&self, id: &str) -> Option<&AdminProject> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn judge(&self, id: &str) -> Option<&AdminJudge> {
        self.judges.iter().find(|j| j.id == id)
    }

    /// Re-fetch everything
    pub async fn refresh<A>(&mut self, api: &A) -> Result<()>
    where
        A: AdminApi + ?Sized,
    {
        let (projects, judges, stats) =
            tokio::try_join!(api.list_projects(), api.list_judges(), api.stats())?;
        debug!(projects = projects.len(), judges = judges.len(), "admin store refreshed");
        self.projects = projects;
        self.judges = judges;
        self.stats = Some(stats);
        Ok(())
    }

    /// Dispatch an action and mirror it locally once the server accepted it
    pub async fn perform<A>(&mut self, api: &A, action: RowAction) -> Result<()>
    where
        A: AdminApi + ?Sized,
    {
        dispatch(api, &action).await?;
        self.apply(&action);
        Ok(())
    }

    /// Mirror an accepted action in the local rows
    pub fn apply(&mut self, action: &RowAction) {
        match action {
            RowAction::Edit(RowEdit::Project(edit)) => {
                if let Some(p) = self.projects.iter_mut().find(|p| p.id == edit.id) {
                    p.name = edit.name.clone();
                    p.description = edit.description.clone();
                    p.url = edit.url.clone();
                }
            }
            RowAction::Edit(RowEdit::Judge(edit)) => {
                if let Some(j) = self.judges.iter_mut().find(|j| j.id == edit.id) {
                    j.name = edit.name.clone();
                    j.email = edit.email.clone();
                    j.notes = edit.notes.clone();
                }
            }
            RowAction::Hide { kind, ids } => self.set_active(*kind, ids, false),
            RowAction::Unhide { kind, ids } => self.set_active(*kind, ids, true),
            RowAction::Prioritize(ids) => self.set_prioritized(ids, true),
            RowAction::Unprioritize(ids) => self.set_prioritized(ids, false),
            RowAction::MoveTable {
                project_id,
                location,
            } => {
                if let Some(p) = self.projects.iter_mut().find(|p| &p.id == project_id) {
                    p.location = *location;
                }
            }
            RowAction::MoveGroup { kind, id, group } => match kind {
                RowKind::Project => {
                    if let Some(p) = self.projects.iter_mut().find(|p| &p.id == id) {
                        p.group = *group;
                    }
                }
                RowKind::Judge => {
                    if let Some(j) = self.judges.iter_mut().find(|j| &j.id == id) {
                        j.group = *group;
                    }
                }
            },
            RowAction::Delete { kind, id } => match kind {
                RowKind::Project => self.projects.retain(|p| &p.id != id),
                RowKind::Judge => self.judges.retain(|j| &j.id != id),
            },
        }
    }

    fn set_active(&mut self, kind: RowKind, ids: &[String], active: bool) {
        match kind {
            RowKind::Project => self
                .projects
                .iter_mut()
                .filter(|p| ids.contains(&p.id))
                .for_each(|p| p.active = active),
            RowKind::Judge => self
                .judges
                .iter_mut()
                .filter(|j| ids.contains(&j.id))
                .for_each(|j| j.active = active),
        }
    }

    fn set_prioritized(&mut self, ids: &[String], prioritized: bool) {
        self.projects
            .iter_mut()
            .filter(|p| ids.contains(&p.id))
            .for_each(|p| p.prioritized = prioritized);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::action::JudgeEdit;
    use crate::api::tests::RecordingApi;

    async fn loaded_store(api: &RecordingApi) -> AdminStore {
        let mut store = AdminStore::new();
        store.refresh(api).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_refresh_loads_everything() {
        let api = RecordingApi::default();
        let store = loaded_store(&api).await;
        assert_eq!(store.projects().len(), 2);
        assert_eq!(store.judges().len(), 1);
        assert_eq!(store.stats().unwrap().projects, 2);
    }

    #[tokio::test]
    async fn test_perform_hide_and_prioritize() {
        let api = RecordingApi::default();
        let mut store = loaded_store(&api).await;

        store
            .perform(
                &api,
                RowAction::Hide {
                    kind: RowKind::Project,
                    ids: vec!["p1".to_string()],
                },
            )
            .await
            .unwrap();
        store
            .perform(&api, RowAction::Prioritize(vec!["p2".to_string()]))
            .await
            .unwrap();

        assert!(!store.project("p1").unwrap().active);
        assert!(store.project("p2").unwrap().active);
        assert!(store.project("p2").unwrap().prioritized);
    }

    #[tokio::test]
    async fn test_failed_action_leaves_store_untouched() {
        let api = RecordingApi::default();
        let mut store = loaded_store(&api).await;
        api.fail_next();

        let result = store
            .perform(
                &api,
                RowAction::Delete {
                    kind: RowKind::Project,
                    id: "p1".to_string(),
                },
            )
            .await;
        assert!(result.is_err());
        assert!(store.project("p1").is_some());
    }

    #[test]
    fn test_apply_edit_move_and_delete() {
        let mut store = AdminStore {
            projects: vec![],
            judges: vec![AdminJudge {
                id: "j1".to_string(),
                name: "Old".to_string(),
                email: String::new(),
                notes: String::new(),
                group: 0,
                active: true,
                seen: 0,
            }],
            stats: None,
        };

        store.apply(&RowAction::Edit(RowEdit::Judge(JudgeEdit {
            id: "j1".to_string(),
            name: "New".to_string(),
            email: "new@example.org".to_string(),
            notes: "late".to_string(),
        })));
        store.apply(&RowAction::MoveGroup {
            kind: RowKind::Judge,
            id: "j1".to_string(),
            group: 3,
        });
        let judge = store.judge("j1").unwrap();
        assert_eq!(judge.name, "New");
        assert_eq!(judge.group, 3);

        store.apply(&RowAction::Delete {
            kind: RowKind::Judge,
            id: "j1".to_string(),
        });
        assert!(store.judges().is_empty());
    }
}
