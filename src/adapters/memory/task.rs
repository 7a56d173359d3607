//! In-memory task repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::{
    domain::{DeveloperId, NewTask, ProjectId, Task, TaskId, TaskStatus},
    ports::{RepositoryError, RepositoryResult, TaskRepository},
};

use super::{IdSequence, count_of, lock_poisoned};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    ids: IdSequence,
    tasks: BTreeMap<TaskId, Task>,
}

impl InMemoryTaskState {
    fn filtered(&self, predicate: impl Fn(&Task) -> bool) -> Vec<Task> {
        self.tasks
            .values()
            .filter(|task| predicate(task))
            .cloned()
            .collect()
    }

    fn count(&self, predicate: impl Fn(&Task) -> bool) -> u64 {
        count_of(self.tasks.values().filter(|task| predicate(task)).count())
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: &NewTask) -> RepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let id = TaskId::new(state.ids.next_value()).map_err(RepositoryError::persistence)?;
        let stored = task.clone().into_task(id);
        state.tasks.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, task: &Task) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let slot = state
            .tasks
            .get_mut(&task.id())
            .ok_or(RepositoryError::NotFound(task.id().into()))?;
        *slot = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: TaskId) -> RepositoryResult<bool> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.contains_key(&id))
    }

    async fn delete_by_id(&self, id: TaskId) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id.into()))
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn list_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.filtered(|task| task.project_id() == project_id))
    }

    async fn list_by_developer(&self, developer_id: DeveloperId) -> RepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.filtered(|task| task.assigned_to() == Some(developer_id)))
    }

    async fn list_by_status(&self, status: TaskStatus) -> RepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.filtered(|task| task.status() == status))
    }

    async fn list_by_project_and_status(
        &self,
        project_id: ProjectId,
        status: TaskStatus,
    ) -> RepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.filtered(|task| task.project_id() == project_id && task.status() == status))
    }

    async fn count_by_project(&self, project_id: ProjectId) -> RepositoryResult<u64> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.count(|task| task.project_id() == project_id))
    }

    async fn count_by_developer(&self, developer_id: DeveloperId) -> RepositoryResult<u64> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.count(|task| task.assigned_to() == Some(developer_id)))
    }
}
