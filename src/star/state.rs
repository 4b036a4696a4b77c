//! Star state: starred and unstarred lists, newest first

use serde::Serialize;

use crate::error::{JuryError, Result};
use crate::model::{JudgedProject, ProjectId};

/// A star change to persist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarUpdate {
    pub project_id: ProjectId,
    pub starred: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StarState {
    starred: Vec<JudgedProject>,
    unstarred: Vec<JudgedProject>,
}

impl StarState {
    /// Partition `seen` (oldest view first) into newest-first lists
    pub fn from_seen(seen: &[JudgedProject]) -> Self {
        let (starred, unstarred) = seen.iter().rev().cloned().partition(|p| p.starred);
        Self { starred, unstarred }
    }

    #[inline]
    pub fn starred(&self) -> &[JudgedProject] {
        &self.starred
    }

    #[inline]
    pub fn unstarred(&self) -> &[JudgedProject] {
        &self.unstarred
    }

    pub fn is_starred(&self, project_id: &str) -> Option<bool> {
        if self.starred.iter().any(|p| p.project_id == project_id) {
            Some(true)
        } else if self.unstarred.iter().any(|p| p.project_id == project_id) {
            Some(false)
        } else {
            None
        }
    }

    /// Flip the star of a project, moving it to the front of the other list
    pub fn toggle(&mut self, project_id: &str) -> Result<StarUpdate> {
        let starred = !self
            .is_starred(project_id)
            .ok_or_else(|| JuryError::UnknownProject(project_id.to_string()))?;
        self.set(project_id, starred)?;
        Ok(StarUpdate {
            project_id: project_id.to_string(),
            starred,
        })
    }

    /// Set the star of a project. Setting the current value is a no-op.
    pub fn set(&mut self, project_id: &str, starred: bool) -> Result<()> {
        let (from, to) = if starred {
            (&mut self.unstarred, &mut self.starred)
        } else {
            (&mut self.starred, &mut self.unstarred)
        };
        match from.iter().position(|p| p.project_id == project_id) {
            Some(pos) => {
                let mut project = from.remove(pos);
                project.starred = starred;
                to.insert(0, project);
                Ok(())
            }
            None if to.iter().any(|p| p.project_id == project_id) => Ok(()),
            None => Err(JuryError::UnknownProject(project_id.to_string())),
        }
    }
}
