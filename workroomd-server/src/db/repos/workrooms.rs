//! Workroom repository
//!
//! Each operation acquires its own connection from the pool and issues
//! exactly one SQL statement. The connection guard returns to the pool on
//! every exit path, including errors.

use sqlx::PgPool;

use crate::models::{Workroom, WorkroomPayload};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: i32 },
}

/// Workroom repository
pub struct WorkroomRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> WorkroomRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a workroom, returning the record with the store-assigned id.
    ///
    /// The payload's own `id` field is ignored; the serial column decides.
    pub async fn create(&self, payload: WorkroomPayload) -> Result<Workroom, DbError> {
        let mut conn = self.pool.acquire().await?;

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO workrooms (name, description, capacity, project_lead)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.capacity)
        .bind(&payload.project_lead)
        .fetch_one(&mut *conn)
        .await?;

        Ok(payload.into_workroom(id))
    }

    /// List all workrooms, fully materialized, in store scan order.
    pub async fn list(&self) -> Result<Vec<Workroom>, DbError> {
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query_as::<_, Workroom>(
            "SELECT id, name, description, capacity, project_lead FROM workrooms",
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows)
    }

    /// Look up a single workroom by id.
    pub async fn get(&self, id: i32) -> Result<Workroom, DbError> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query_as::<_, Workroom>(
            "SELECT id, name, description, capacity, project_lead FROM workrooms WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or(DbError::NotFound {
            resource: "Workroom",
            id,
        })
    }

    /// Replace all mutable fields of the workroom matching `id`.
    ///
    /// An update that matches no row is rejected as not-found; it must not
    /// silently succeed or insert.
    pub async fn update(&self, id: i32, payload: WorkroomPayload) -> Result<Workroom, DbError> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query(
            r#"
            UPDATE workrooms
            SET name = $1, description = $2, capacity = $3, project_lead = $4
            WHERE id = $5
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.capacity)
        .bind(&payload.project_lead)
        .bind(id)
        .execute(&mut *conn)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "Workroom",
                id,
            });
        }

        Ok(payload.into_workroom(id))
    }

    /// Remove the workroom matching `id`.
    ///
    /// Deleting an absent id reports not-found; the affected-row count is
    /// the only way to tell a zero-row delete from a one-row delete.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("DELETE FROM workrooms WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "Workroom",
                id,
            });
        }

        Ok(())
    }
}
