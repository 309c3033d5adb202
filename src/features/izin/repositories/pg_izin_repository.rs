use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::izin::models::{Izin, IzinCount, IzinStatus, NewIzin};
use crate::features::izin::repositories::IzinRepository;

const IZIN_COLUMNS: &str = "id, nama, absen, kelas, alasan, status, is_archived, archive_date, archived_at, created_at";

/// Postgres-backed izin storage
pub struct PgIzinRepository {
    pool: PgPool,
}

impl PgIzinRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IzinRepository for PgIzinRepository {
    async fn list(&self, archived: bool) -> Result<Vec<Izin>> {
        let sql = format!(
            r#"
            SELECT {IZIN_COLUMNS}
            FROM izin
            WHERE is_archived = $1
            ORDER BY archive_date DESC NULLS LAST, created_at DESC
            "#
        );

        sqlx::query_as::<_, Izin>(&sql)
            .bind(archived)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list izin: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn insert(&self, new: NewIzin) -> Result<Izin> {
        let sql = format!(
            r#"
            INSERT INTO izin (id, nama, absen, kelas, alasan, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {IZIN_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Izin>(&sql)
            .bind(Uuid::now_v7())
            .bind(new.nama)
            .bind(new.absen)
            .bind(new.kelas)
            .bind(new.alasan)
            .bind(IzinStatus::Pending)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert izin: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn approve(&self, id: Uuid) -> Result<Option<Izin>> {
        let sql = format!(
            r#"
            UPDATE izin
            SET status = $2
            WHERE id = $1
            RETURNING {IZIN_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Izin>(&sql)
            .bind(id)
            .bind(IzinStatus::Approved)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to approve izin {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM izin WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete izin {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn archive_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        archive_date: NaiveDate,
        archived_at: DateTime<Utc>,
    ) -> Result<Vec<Izin>> {
        let sql = format!(
            r#"
            UPDATE izin
            SET is_archived = TRUE, archive_date = $3, archived_at = $4
            WHERE created_at >= $1
              AND created_at <= $2
              AND is_archived = FALSE
            RETURNING {IZIN_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Izin>(&sql)
            .bind(start)
            .bind(end)
            .bind(archive_date)
            .bind(archived_at)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to archive izin for {}: {:?}", archive_date, e);
                AppError::Database(e)
            })
    }

    async fn counts(&self) -> Result<Vec<IzinCount>> {
        sqlx::query_as::<_, IzinCount>(
            r#"
            SELECT kelas, status, is_archived, COUNT(*) AS count
            FROM izin
            GROUP BY kelas, status, is_archived
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count izin: {:?}", e);
            AppError::Database(e)
        })
    }
}
