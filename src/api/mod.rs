//! REST API seams
//!
//! Sessions and stores only talk to the server through these traits, so the
//! HTTP client can be swapped for a test double.

mod http;
mod payload;

pub use http::*;
pub use payload::*;

use async_trait::async_trait;

use crate::admin::{JudgeEdit, ProjectEdit, RowKind};
use crate::error::Result;
use crate::model::{AdminJudge, AdminProject, AdminStats, ClockState, JudgeProfile, ProjectId};

/// Calls made on behalf of a logged-in judge
#[async_trait]
pub trait JudgeApi: Send + Sync {
    /// Judge identity, seen projects (oldest first) and saved ranking
    async fn fetch_profile(&self) -> Result<JudgeProfile>;

    /// Replace the judge's ranking with `ranking`, best first
    async fn submit_ranking(&self, ranking: &[ProjectId]) -> Result<()>;

    async fn set_star(&self, project_id: &str, starred: bool) -> Result<()>;

    /// Whether deliberation has started and judge edits are locked
    async fn deliberation_active(&self) -> Result<bool>;
}

/// Calls made from the admin dashboard
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<AdminProject>>;
    async fn list_judges(&self) -> Result<Vec<AdminJudge>>;
    async fn stats(&self) -> Result<AdminStats>;

    async fn clock(&self) -> Result<ClockState>;
    async fn pause_clock(&self) -> Result<()>;
    async fn unpause_clock(&self) -> Result<()>;
    async fn reset_clock(&self) -> Result<()>;

    async fn edit_project(&self, edit: &ProjectEdit) -> Result<()>;
    async fn edit_judge(&self, edit: &JudgeEdit) -> Result<()>;
    async fn set_hidden(&self, kind: RowKind, ids: &[String], hidden: bool) -> Result<()>;
    async fn set_prioritized(&self, ids: &[String], prioritized: bool) -> Result<()>;
    async fn move_table(&self, project_id: &str, location: u64) -> Result<()>;
    async fn move_group(&self, kind: RowKind, id: &str, group: u64) -> Result<()>;
    async fn delete(&self, kind: RowKind, id: &str) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod tests {
    //! In-memory API double shared by the module tests

    use super::*;
    use crate::error::JuryError;
    use crate::testing::seen;
    use parking_lot::Mutex;
    use std::collections::VecDeque;

    pub(crate) struct RecordingApi {
        calls: Mutex<Vec<String>>,
        failures: Mutex<VecDeque<JuryError>>,
        pub(crate) profile: Mutex<JudgeProfile>,
        pub(crate) deliberation: Mutex<bool>,
        pub(crate) clock: Mutex<ClockState>,
    }

    fn admin_project(id: &str) -> AdminProject {
        AdminProject {
            id: id.to_string(),
            name: format!("Project {}", id),
            description: String::new(),
            url: String::new(),
            location: 0,
            group: 0,
            active: true,
            prioritized: false,
            score: 0,
            stars: 0,
            seen: 0,
        }
    }

    impl Default for RecordingApi {
        /// ranked = [A, B, C], unranked = [D, E]
        fn default() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                failures: Mutex::new(VecDeque::new()),
                profile: Mutex::new(JudgeProfile {
                    id: "j1".to_string(),
                    name: "Ada".to_string(),
                    email: "ada@example.org".to_string(),
                    seen_projects: seen(&["A", "B", "C", "E", "D"]),
                    rankings: vec!["A".to_string(), "B".to_string(), "C".to_string()],
                    group: 0,
                }),
                deliberation: Mutex::new(false),
                clock: Mutex::new(ClockState::default()),
            }
        }
    }

    impl RecordingApi {
        pub(crate) fn calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }

        /// Make the next call fail with a network error
        pub(crate) fn fail_next(&self) {
            self.fail_with(JuryError::Network {
                message: "connection refused".to_string(),
            });
        }

        pub(crate) fn fail_with(&self, err: JuryError) {
            self.failures.lock().push_back(err);
        }

        fn record(&self, call: String) -> Result<()> {
            self.calls.lock().push(call);
            match self.failures.lock().pop_front() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl JudgeApi for RecordingApi {
        async fn fetch_profile(&self) -> Result<JudgeProfile> {
            self.record("profile".to_string())?;
            Ok(self.profile.lock().clone())
        }

        async fn submit_ranking(&self, ranking: &[ProjectId]) -> Result<()> {
            self.record(format!("rank [{}]", ranking.join(", ")))?;
            self.profile.lock().rankings = ranking.to_vec();
            Ok(())
        }

        async fn set_star(&self, project_id: &str, starred: bool) -> Result<()> {
            self.record(format!("star {} {}", project_id, starred))?;
            if let Some(p) = self
                .profile
                .lock()
                .seen_projects
                .iter_mut()
                .find(|p| p.project_id == project_id)
            {
                p.starred = starred;
            }
            Ok(())
        }

        async fn deliberation_active(&self) -> Result<bool> {
            self.record("deliberation".to_string())?;
            Ok(*self.deliberation.lock())
        }
    }

    #[async_trait]
    impl AdminApi for RecordingApi {
        async fn list_projects(&self) -> Result<Vec<AdminProject>> {
            self.record("projects".to_string())?;
            Ok(vec![admin_project("p1"), admin_project("p2")])
        }

        async fn list_judges(&self) -> Result<Vec<AdminJudge>> {
            self.record("judges".to_string())?;
            Ok(vec![AdminJudge {
                id: "j1".to_string(),
                name: "Ada".to_string(),
                email: "ada@example.org".to_string(),
                notes: String::new(),
                group: 0,
                active: true,
                seen: 0,
            }])
        }

        async fn stats(&self) -> Result<AdminStats> {
            self.record("stats".to_string())?;
            Ok(AdminStats {
                projects: 2,
                judges: 1,
                ..AdminStats::default()
            })
        }

        async fn clock(&self) -> Result<ClockState> {
            self.record("clock".to_string())?;
            Ok(*self.clock.lock())
        }

        async fn pause_clock(&self) -> Result<()> {
            self.record("pause clock".to_string())?;
            self.clock.lock().running = false;
            Ok(())
        }

        async fn unpause_clock(&self) -> Result<()> {
            self.record("unpause clock".to_string())?;
            self.clock.lock().running = true;
            Ok(())
        }

        async fn reset_clock(&self) -> Result<()> {
            self.record("reset clock".to_string())?;
            *self.clock.lock() = ClockState::default();
            Ok(())
        }

        async fn edit_project(&self, edit: &ProjectEdit) -> Result<()> {
            self.record(format!("edit project {}", edit.id))
        }

        async fn edit_judge(&self, edit: &JudgeEdit) -> Result<()> {
            self.record(format!("edit judge {}", edit.id))
        }

        async fn set_hidden(&self, kind: RowKind, ids: &[String], hidden: bool) -> Result<()> {
            let verb = if hidden { "hide" } else { "unhide" };
            self.record(format!("{} {} [{}]", verb, kind, ids.join(", ")))
        }

        async fn set_prioritized(&self, ids: &[String], prioritized: bool) -> Result<()> {
            let verb = if prioritized { "prioritize" } else { "unprioritize" };
            self.record(format!("{} [{}]", verb, ids.join(", ")))
        }

        async fn move_table(&self, project_id: &str, location: u64) -> Result<()> {
            self.record(format!("move table {} -> {}", project_id, location))
        }

        async fn move_group(&self, kind: RowKind, id: &str, group: u64) -> Result<()> {
            self.record(format!("move group {} {} -> {}", kind, id, group))
        }

        async fn delete(&self, kind: RowKind, id: &str) -> Result<()> {
            self.record(format!("delete {} {}", kind, id))
        }
    }
}
