//! PostgreSQL-backed `IdeaRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{IdeaPersistenceError, IdeaRepository};
use crate::domain::{Idea, IdeaId, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::IdeaRow;
use super::pool::DbPool;
use super::schema::ideas;

/// Diesel-backed implementation of the [`IdeaRepository`] port.
#[derive(Clone)]
pub struct DieselIdeaRepository {
    pool: DbPool,
}

impl DieselIdeaRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_error(error: diesel::result::Error) -> IdeaPersistenceError {
    map_diesel_error(
        error,
        IdeaPersistenceError::query,
        IdeaPersistenceError::connection,
    )
}

fn into_ideas(rows: Vec<IdeaRow>) -> Result<Vec<Idea>, IdeaPersistenceError> {
    rows.into_iter()
        .map(|row| Idea::try_from(row).map_err(IdeaPersistenceError::malformed))
        .collect()
}

#[async_trait]
impl IdeaRepository for DieselIdeaRepository {
    async fn insert(&self, idea: &Idea) -> Result<(), IdeaPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, IdeaPersistenceError::connection))?;
        diesel::insert_into(ideas::table)
            .values(IdeaRow::from(idea))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_error)
    }

    async fn find_by_id(&self, id: &IdeaId) -> Result<Option<Idea>, IdeaPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, IdeaPersistenceError::connection))?;
        let row: Option<IdeaRow> = ideas::table
            .filter(ideas::id.eq(id.as_uuid()))
            .select(IdeaRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_error)?;
        row.map(|row| Idea::try_from(row).map_err(IdeaPersistenceError::malformed))
            .transpose()
    }

    async fn update(&self, idea: &Idea) -> Result<bool, IdeaPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, IdeaPersistenceError::connection))?;
        // Owner and creation time are never rewritten.
        let row = IdeaRow::from(idea);
        let updated = diesel::update(ideas::table.filter(ideas::id.eq(row.id)))
            .set((
                ideas::title.eq(&row.title),
                ideas::description.eq(&row.description),
                ideas::equity_range.eq(&row.equity_range),
                ideas::salary_range.eq(&row.salary_range),
                ideas::skills.eq(&row.skills),
            ))
            .execute(&mut conn)
            .await
            .map_err(map_error)?;
        Ok(updated > 0)
    }

    async fn delete(&self, id: &IdeaId) -> Result<bool, IdeaPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, IdeaPersistenceError::connection))?;
        let deleted = diesel::delete(ideas::table.filter(ideas::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_error)?;
        Ok(deleted > 0)
    }

    async fn list_newest_first(&self) -> Result<Vec<Idea>, IdeaPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, IdeaPersistenceError::connection))?;
        let rows: Vec<IdeaRow> = ideas::table
            .order((ideas::created_at.desc(), ideas::id.asc()))
            .select(IdeaRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_error)?;
        into_ideas(rows)
    }

    async fn list_by_founder(
        &self,
        founder_id: &UserId,
    ) -> Result<Vec<Idea>, IdeaPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, IdeaPersistenceError::connection))?;
        let rows: Vec<IdeaRow> = ideas::table
            .filter(ideas::founder_id.eq(founder_id.as_uuid()))
            .order((ideas::created_at.desc(), ideas::id.asc()))
            .select(IdeaRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_error)?;
        into_ideas(rows)
    }
}
