//! `PostgreSQL` repository implementation for projects.

use super::{
    blocking::{PgPool, run_blocking, violated_constraint},
    conversion::{row_to_project, to_new_project_row},
    models::ProjectRow,
    schema::projects,
};
use crate::{
    domain::{NewProject, Project, ProjectId, ProjectName},
    ports::{ProjectRepository, RepositoryError, RepositoryResult},
};
use async_trait::async_trait;
use diesel::dsl::{exists, select};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

const NAME_UNIQUE_INDEX: &str = "idx_projects_name";

/// `PostgreSQL`-backed project repository.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Maps write failures onto the semantic repository errors.
fn map_write_error(err: DieselError, id: Option<ProjectId>, name: &ProjectName) -> RepositoryError {
    match violated_constraint(&err) {
        Some((DatabaseErrorKind::UniqueViolation, NAME_UNIQUE_INDEX)) => {
            RepositoryError::DuplicateName(name.clone())
        }
        Some((DatabaseErrorKind::ForeignKeyViolation, _)) => match id {
            Some(project_id) => RepositoryError::ReferentialIntegrity(project_id.into()),
            None => RepositoryError::persistence(err),
        },
        _ => RepositoryError::persistence(err),
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn insert(&self, project: &NewProject) -> RepositoryResult<Project> {
        let name = project.name().clone();
        let new_row = to_new_project_row(project);

        run_blocking(&self.pool, move |connection| {
            let row = diesel::insert_into(projects::table)
                .values(&new_row)
                .returning(ProjectRow::as_returning())
                .get_result::<ProjectRow>(connection)
                .map_err(|err| map_write_error(err, None, &name))?;
            row_to_project(row)
        })
        .await
    }

    async fn update(&self, project: &Project) -> RepositoryResult<()> {
        let project_id = project.id();
        let name = project.name().clone();
        let description = project.description().map(str::to_owned);
        let updated_at = project.updated_at();

        run_blocking(&self.pool, move |connection| {
            let updated_count =
                diesel::update(projects::table.filter(projects::id.eq(project_id.value())))
                    .set((
                        projects::name.eq(name.as_str()),
                        projects::description.eq(description),
                        projects::updated_at.eq(updated_at),
                    ))
                    .execute(connection)
                    .map_err(|err| map_write_error(err, Some(project_id), &name))?;

            if updated_count == 0 {
                return Err(RepositoryError::NotFound(project_id.into()));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>> {
        run_blocking(&self.pool, move |connection| {
            let row = projects::table
                .filter(projects::id.eq(id.value()))
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_project).transpose()
        })
        .await
    }

    async fn find_by_name(&self, name: &ProjectName) -> RepositoryResult<Option<Project>> {
        let name_str = name.as_str().to_owned();
        run_blocking(&self.pool, move |connection| {
            let row = projects::table
                .filter(projects::name.eq(&name_str))
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_project).transpose()
        })
        .await
    }

    async fn exists_by_id(&self, id: ProjectId) -> RepositoryResult<bool> {
        run_blocking(&self.pool, move |connection| {
            select(exists(projects::table.filter(projects::id.eq(id.value()))))
                .get_result::<bool>(connection)
                .map_err(RepositoryError::persistence)
        })
        .await
    }

    async fn exists_by_name(&self, name: &ProjectName) -> RepositoryResult<bool> {
        let name_str = name.as_str().to_owned();
        run_blocking(&self.pool, move |connection| {
            select(exists(projects::table.filter(projects::name.eq(&name_str))))
                .get_result::<bool>(connection)
                .map_err(RepositoryError::persistence)
        })
        .await
    }

    async fn delete_by_id(&self, id: ProjectId) -> RepositoryResult<()> {
        run_blocking(&self.pool, move |connection| {
            let deleted = diesel::delete(projects::table.filter(projects::id.eq(id.value())))
                .execute(connection)
                .map_err(|err| match violated_constraint(&err) {
                    Some((DatabaseErrorKind::ForeignKeyViolation, _)) => {
                        RepositoryError::ReferentialIntegrity(id.into())
                    }
                    _ => RepositoryError::persistence(err),
                })?;

            if deleted == 0 {
                return Err(RepositoryError::NotFound(id.into()));
            }
            Ok(())
        })
        .await
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Project>> {
        run_blocking(&self.pool, move |connection| {
            let rows = projects::table
                .order(projects::id.asc())
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter().map(row_to_project).collect()
        })
        .await
    }
}
