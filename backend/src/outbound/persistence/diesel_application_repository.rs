//! PostgreSQL-backed `ApplicationRepository` implementation using Diesel ORM.
//!
//! Uniqueness per idea and developer is enforced by the
//! `applications_idea_developer_key` constraint; decisions are a single
//! `UPDATE ... WHERE status = 'pending'` so two founders racing on the same
//! row cannot both succeed.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ApplicationPersistenceError, ApplicationRepository, TransitionOutcome};
use crate::domain::{Application, ApplicationId, ApplicationStatus, IdeaId, UserId};

use super::diesel_error_mapping::{is_unique_violation, map_diesel_error, map_pool_error};
use super::models::ApplicationRow;
use super::pool::DbPool;
use super::schema::applications;

const IDEA_DEVELOPER_KEY: &str = "applications_idea_developer_key";
const PENDING: &str = "pending";

/// Diesel-backed implementation of the [`ApplicationRepository`] port.
#[derive(Clone)]
pub struct DieselApplicationRepository {
    pool: DbPool,
}

impl DieselApplicationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_error(error: diesel::result::Error) -> ApplicationPersistenceError {
    map_diesel_error(
        error,
        ApplicationPersistenceError::query,
        ApplicationPersistenceError::connection,
    )
}

fn into_application(row: ApplicationRow) -> Result<Application, ApplicationPersistenceError> {
    Application::try_from(row).map_err(ApplicationPersistenceError::malformed)
}

fn into_applications(
    rows: Vec<ApplicationRow>,
) -> Result<Vec<Application>, ApplicationPersistenceError> {
    rows.into_iter().map(into_application).collect()
}

#[async_trait]
impl ApplicationRepository for DieselApplicationRepository {
    async fn insert_unique(
        &self,
        application: &Application,
    ) -> Result<(), ApplicationPersistenceError> {
        let row =
            ApplicationRow::try_from(application).map_err(ApplicationPersistenceError::malformed)?;
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ApplicationPersistenceError::connection))?;
        match diesel::insert_into(applications::table)
            .values(&row)
            .execute(&mut conn)
            .await
        {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err, IDEA_DEVELOPER_KEY) => {
                Err(ApplicationPersistenceError::duplicate(
                    application.idea_id.to_string(),
                    application.developer_id.to_string(),
                ))
            }
            Err(err) => Err(map_error(err)),
        }
    }

    async fn find_by_id(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<Application>, ApplicationPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ApplicationPersistenceError::connection))?;
        let row: Option<ApplicationRow> = applications::table
            .filter(applications::id.eq(id.as_uuid()))
            .select(ApplicationRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_error)?;
        row.map(into_application).transpose()
    }

    async fn find_by_idea_and_developer(
        &self,
        idea_id: &IdeaId,
        developer_id: &UserId,
    ) -> Result<Option<Application>, ApplicationPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ApplicationPersistenceError::connection))?;
        let row: Option<ApplicationRow> = applications::table
            .filter(applications::idea_id.eq(idea_id.as_uuid()))
            .filter(applications::developer_id.eq(developer_id.as_uuid()))
            .select(ApplicationRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_error)?;
        row.map(into_application).transpose()
    }

    async fn list_by_developer(
        &self,
        developer_id: &UserId,
    ) -> Result<Vec<Application>, ApplicationPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ApplicationPersistenceError::connection))?;
        let rows: Vec<ApplicationRow> = applications::table
            .filter(applications::developer_id.eq(developer_id.as_uuid()))
            .order((applications::created_at.desc(), applications::id.asc()))
            .select(ApplicationRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_error)?;
        into_applications(rows)
    }

    async fn list_by_idea(
        &self,
        idea_id: &IdeaId,
    ) -> Result<Vec<Application>, ApplicationPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ApplicationPersistenceError::connection))?;
        let rows: Vec<ApplicationRow> = applications::table
            .filter(applications::idea_id.eq(idea_id.as_uuid()))
            .order((applications::created_at.desc(), applications::id.asc()))
            .select(ApplicationRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_error)?;
        into_applications(rows)
    }

    async fn transition(
        &self,
        id: &ApplicationId,
        next: &ApplicationStatus,
    ) -> Result<TransitionOutcome, ApplicationPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ApplicationPersistenceError::connection))?;
        let updated: Option<ApplicationRow> = diesel::update(
            applications::table
                .filter(applications::id.eq(id.as_uuid()))
                .filter(applications::status.eq(PENDING)),
        )
        .set((
            applications::status.eq(next.as_str()),
            applications::rejection_reason.eq(next.rejection_reason()),
        ))
        .returning(ApplicationRow::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(map_error)?;

        if let Some(row) = updated {
            return into_application(row).map(TransitionOutcome::Applied);
        }

        // Nothing matched: either the row is gone or it was already decided.
        let current: Option<ApplicationRow> = applications::table
            .filter(applications::id.eq(id.as_uuid()))
            .select(ApplicationRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_error)?;
        match current {
            Some(row) => into_application(row).map(TransitionOutcome::Stale),
            None => Ok(TransitionOutcome::Missing),
        }
    }

    async fn delete(&self, id: &ApplicationId) -> Result<bool, ApplicationPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ApplicationPersistenceError::connection))?;
        let deleted =
            diesel::delete(applications::table.filter(applications::id.eq(id.as_uuid())))
                .execute(&mut conn)
                .await
                .map_err(map_error)?;
        Ok(deleted > 0)
    }
}
