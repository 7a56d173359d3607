//! In-memory project repository.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::{
    domain::{NewProject, Project, ProjectId, ProjectName},
    ports::{ProjectRepository, RepositoryError, RepositoryResult},
};

use super::{IdSequence, lock_poisoned};

/// Thread-safe in-memory project repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<InMemoryProjectState>>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    ids: IdSequence,
    projects: BTreeMap<ProjectId, Project>,
    name_index: HashMap<ProjectName, ProjectId>,
}

impl InMemoryProjectRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn insert(&self, project: &NewProject) -> RepositoryResult<Project> {
        let mut state = self.state.write().map_err(lock_poisoned)?;

        if state.name_index.contains_key(project.name()) {
            return Err(RepositoryError::DuplicateName(project.name().clone()));
        }

        let id = ProjectId::new(state.ids.next_value()).map_err(RepositoryError::persistence)?;
        let stored = project.clone().into_project(id);
        state.name_index.insert(stored.name().clone(), id);
        state.projects.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, project: &Project) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;

        let old_name = state
            .projects
            .get(&project.id())
            .ok_or(RepositoryError::NotFound(project.id().into()))?
            .name()
            .clone();

        if *project.name() != old_name {
            if let Some(&indexed_id) = state.name_index.get(project.name())
                && indexed_id != project.id()
            {
                return Err(RepositoryError::DuplicateName(project.name().clone()));
            }
            state.name_index.remove(&old_name);
            state
                .name_index
                .insert(project.name().clone(), project.id());
        }

        state.projects.insert(project.id(), project.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.projects.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &ProjectName) -> RepositoryResult<Option<Project>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let project = state
            .name_index
            .get(name)
            .and_then(|id| state.projects.get(id))
            .cloned();
        Ok(project)
    }

    async fn exists_by_id(&self, id: ProjectId) -> RepositoryResult<bool> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.projects.contains_key(&id))
    }

    async fn exists_by_name(&self, name: &ProjectName) -> RepositoryResult<bool> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.name_index.contains_key(name))
    }

    async fn delete_by_id(&self, id: ProjectId) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let removed = state
            .projects
            .remove(&id)
            .ok_or(RepositoryError::NotFound(id.into()))?;
        state.name_index.remove(removed.name());
        Ok(())
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Project>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.projects.values().cloned().collect())
    }
}
