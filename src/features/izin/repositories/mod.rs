//! Storage seam for the `izin` relation.

mod pg_izin_repository;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::izin::models::{Izin, IzinCount, NewIzin};

pub use pg_izin_repository::PgIzinRepository;

#[async_trait]
pub trait IzinRepository: Send + Sync {
    /// Rows with the given archived flag, newest first
    async fn list(&self, archived: bool) -> Result<Vec<Izin>>;

    async fn insert(&self, new: NewIzin) -> Result<Izin>;

    /// Mark as approved; `None` when the id does not exist
    async fn approve(&self, id: Uuid) -> Result<Option<Izin>>;

    /// Returns false when nothing was deleted
    async fn delete(&self, id: Uuid) -> Result<bool>;

    /// Flag every active row created within `[start, end]` as archived.
    ///
    /// Must be a single conditional write: rows that are already archived
    /// are never touched, so repeated calls archive each row once.
    async fn archive_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        archive_date: NaiveDate,
        archived_at: DateTime<Utc>,
    ) -> Result<Vec<Izin>>;

    /// Counts grouped by kelas, status and archived flag
    async fn counts(&self) -> Result<Vec<IzinCount>>;
}
