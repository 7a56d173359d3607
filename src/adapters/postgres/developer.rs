//! `PostgreSQL` repository implementation for developers.

use super::{
    blocking::{PgPool, run_blocking, violated_constraint},
    conversion::{row_to_developer, to_count, to_new_developer_row},
    models::DeveloperRow,
    schema::developers,
};
use crate::{
    domain::{Developer, DeveloperId, EmailAddress, EntityRef, NewDeveloper, ProjectId},
    ports::{DeveloperRepository, RepositoryError, RepositoryResult},
};
use async_trait::async_trait;
use diesel::dsl::{exists, select};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

const EMAIL_UNIQUE_INDEX: &str = "idx_developers_email";

/// `PostgreSQL`-backed developer repository.
#[derive(Debug, Clone)]
pub struct PostgresDeveloperRepository {
    pool: PgPool,
}

impl PostgresDeveloperRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Maps write failures onto the semantic repository errors.
///
/// `referenced` names the record a foreign key violation is reported
/// against.
fn map_write_error(
    err: DieselError,
    email: &EmailAddress,
    referenced: Option<EntityRef>,
) -> RepositoryError {
    match (violated_constraint(&err), referenced) {
        (Some((DatabaseErrorKind::UniqueViolation, EMAIL_UNIQUE_INDEX)), _) => {
            RepositoryError::DuplicateEmail(email.clone())
        }
        (Some((DatabaseErrorKind::ForeignKeyViolation, _)), Some(entity)) => {
            RepositoryError::ReferentialIntegrity(entity)
        }
        _ => RepositoryError::persistence(err),
    }
}

fn load_filtered<F>(
    connection: &mut PgConnection,
    filter: F,
) -> RepositoryResult<Vec<Developer>>
where
    F: FnOnce(developers::BoxedQuery<'static, diesel::pg::Pg>) -> developers::BoxedQuery<'static, diesel::pg::Pg>,
{
    let rows = filter(developers::table.into_boxed())
        .order(developers::id.asc())
        .select(DeveloperRow::as_select())
        .load::<DeveloperRow>(connection)
        .map_err(RepositoryError::persistence)?;
    rows.into_iter().map(row_to_developer).collect()
}

#[async_trait]
impl DeveloperRepository for PostgresDeveloperRepository {
    async fn insert(&self, developer: &NewDeveloper) -> RepositoryResult<Developer> {
        let email = developer.email().clone();
        let project = developer.project_id().map(EntityRef::from);
        let new_row = to_new_developer_row(developer);

        run_blocking(&self.pool, move |connection| {
            let row = diesel::insert_into(developers::table)
                .values(&new_row)
                .returning(DeveloperRow::as_returning())
                .get_result::<DeveloperRow>(connection)
                .map_err(|err| map_write_error(err, &email, project))?;
            row_to_developer(row)
        })
        .await
    }

    async fn update(&self, developer: &Developer) -> RepositoryResult<()> {
        let developer_id = developer.id();
        let name = developer.name().as_str().to_owned();
        let email = developer.email().clone();
        let role = developer.role().map(str::to_owned);
        let project_id = developer.project_id();

        run_blocking(&self.pool, move |connection| {
            let updated_count =
                diesel::update(developers::table.filter(developers::id.eq(developer_id.value())))
                    .set((
                        developers::name.eq(&name),
                        developers::email.eq(email.as_str()),
                        developers::role.eq(role),
                        developers::project_id.eq(project_id.map(ProjectId::value)),
                    ))
                    .execute(connection)
                    .map_err(|err| map_write_error(err, &email, project_id.map(EntityRef::from)))?;

            if updated_count == 0 {
                return Err(RepositoryError::NotFound(developer_id.into()));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: DeveloperId) -> RepositoryResult<Option<Developer>> {
        run_blocking(&self.pool, move |connection| {
            let row = developers::table
                .filter(developers::id.eq(id.value()))
                .select(DeveloperRow::as_select())
                .first::<DeveloperRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_developer).transpose()
        })
        .await
    }

    async fn find_by_email(&self, email: &EmailAddress) -> RepositoryResult<Option<Developer>> {
        let email_str = email.as_str().to_owned();
        run_blocking(&self.pool, move |connection| {
            let row = developers::table
                .filter(developers::email.eq(&email_str))
                .select(DeveloperRow::as_select())
                .first::<DeveloperRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_developer).transpose()
        })
        .await
    }

    async fn exists_by_id(&self, id: DeveloperId) -> RepositoryResult<bool> {
        run_blocking(&self.pool, move |connection| {
            select(exists(developers::table.filter(developers::id.eq(id.value()))))
                .get_result::<bool>(connection)
                .map_err(RepositoryError::persistence)
        })
        .await
    }

    async fn exists_by_email(&self, email: &EmailAddress) -> RepositoryResult<bool> {
        let email_str = email.as_str().to_owned();
        run_blocking(&self.pool, move |connection| {
            select(exists(developers::table.filter(developers::email.eq(&email_str))))
                .get_result::<bool>(connection)
                .map_err(RepositoryError::persistence)
        })
        .await
    }

    async fn delete_by_id(&self, id: DeveloperId) -> RepositoryResult<()> {
        run_blocking(&self.pool, move |connection| {
            let deleted = diesel::delete(developers::table.filter(developers::id.eq(id.value())))
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

    async fn list_all(&self) -> RepositoryResult<Vec<Developer>> {
        run_blocking(&self.pool, move |connection| {
            load_filtered(connection, |query| query)
        })
        .await
    }

    async fn list_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Developer>> {
        run_blocking(&self.pool, move |connection| {
            load_filtered(connection, |query| {
                query.filter(developers::project_id.eq(project_id.value()))
            })
        })
        .await
    }

    async fn list_unassigned(&self) -> RepositoryResult<Vec<Developer>> {
        run_blocking(&self.pool, move |connection| {
            load_filtered(connection, |query| {
                query.filter(developers::project_id.is_null())
            })
        })
        .await
    }

    async fn count_by_project(&self, project_id: ProjectId) -> RepositoryResult<u64> {
        run_blocking(&self.pool, move |connection| {
            let count = developers::table
                .filter(developers::project_id.eq(project_id.value()))
                .count()
                .get_result::<i64>(connection)
                .map_err(RepositoryError::persistence)?;
            to_count(count)
        })
        .await
    }
}
