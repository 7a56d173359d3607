//! In-memory developer repository.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::{
    domain::{Developer, DeveloperId, EmailAddress, NewDeveloper, ProjectId},
    ports::{DeveloperRepository, RepositoryError, RepositoryResult},
};

use super::{IdSequence, count_of, lock_poisoned};

/// Thread-safe in-memory developer repository.
///
/// Project references are not checked against any project store; the
/// services verify them before writing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDeveloperRepository {
    state: Arc<RwLock<InMemoryDeveloperState>>,
}

#[derive(Debug, Default)]
struct InMemoryDeveloperState {
    ids: IdSequence,
    developers: BTreeMap<DeveloperId, Developer>,
    email_index: HashMap<EmailAddress, DeveloperId>,
}

impl InMemoryDeveloperState {
    fn filtered(&self, predicate: impl Fn(&Developer) -> bool) -> Vec<Developer> {
        self.developers
            .values()
            .filter(|developer| predicate(developer))
            .cloned()
            .collect()
    }
}

impl InMemoryDeveloperRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DeveloperRepository for InMemoryDeveloperRepository {
    async fn insert(&self, developer: &NewDeveloper) -> RepositoryResult<Developer> {
        let mut state = self.state.write().map_err(lock_poisoned)?;

        if state.email_index.contains_key(developer.email()) {
            return Err(RepositoryError::DuplicateEmail(developer.email().clone()));
        }

        let id = DeveloperId::new(state.ids.next_value()).map_err(RepositoryError::persistence)?;
        let stored = developer.clone().into_developer(id);
        state.email_index.insert(stored.email().clone(), id);
        state.developers.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, developer: &Developer) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;

        let old_email = state
            .developers
            .get(&developer.id())
            .ok_or(RepositoryError::NotFound(developer.id().into()))?
            .email()
            .clone();

        if *developer.email() != old_email {
            if let Some(&indexed_id) = state.email_index.get(developer.email())
                && indexed_id != developer.id()
            {
                return Err(RepositoryError::DuplicateEmail(developer.email().clone()));
            }
            state.email_index.remove(&old_email);
            state
                .email_index
                .insert(developer.email().clone(), developer.id());
        }

        state.developers.insert(developer.id(), developer.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: DeveloperId) -> RepositoryResult<Option<Developer>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.developers.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> RepositoryResult<Option<Developer>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let developer = state
            .email_index
            .get(email)
            .and_then(|id| state.developers.get(id))
            .cloned();
        Ok(developer)
    }

    async fn exists_by_id(&self, id: DeveloperId) -> RepositoryResult<bool> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.developers.contains_key(&id))
    }

    async fn exists_by_email(&self, email: &EmailAddress) -> RepositoryResult<bool> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.email_index.contains_key(email))
    }

    async fn delete_by_id(&self, id: DeveloperId) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let removed = state
            .developers
            .remove(&id)
            .ok_or(RepositoryError::NotFound(id.into()))?;
        state.email_index.remove(removed.email());
        Ok(())
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Developer>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.developers.values().cloned().collect())
    }

    async fn list_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Developer>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.filtered(|developer| developer.project_id() == Some(project_id)))
    }

    async fn list_unassigned(&self) -> RepositoryResult<Vec<Developer>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.filtered(|developer| developer.project_id().is_none()))
    }

    async fn count_by_project(&self, project_id: ProjectId) -> RepositoryResult<u64> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let members = state
            .developers
            .values()
            .filter(|developer| developer.project_id() == Some(project_id))
            .count();
        Ok(count_of(members))
    }
}
