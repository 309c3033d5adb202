use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::core::error::{AppError, Result};
use crate::features::archive::clock::Clock;
use crate::features::archive::services::export::{render_workbook, ExportFile};
use crate::features::archive::services::read_model::{
    group_batches, select_export_rows, ArchiveBatch, ExportFilter,
};
use crate::features::archive::window::{ArchiveWindow, ReferenceZone};
use crate::features::izin::repositories::IzinRepository;

/// What a single sweep call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepOutcome {
    /// Outside the Friday window; nothing touched
    Skipped,
    Archived {
        archived: usize,
        archive_date: NaiveDate,
    },
}

/// Friday archive sweep, archive read-model and export
pub struct ArchiveService {
    repository: Arc<dyn IzinRepository>,
    clock: Arc<dyn Clock>,
    zone: ReferenceZone,
}

impl ArchiveService {
    pub fn new(
        repository: Arc<dyn IzinRepository>,
        clock: Arc<dyn Clock>,
        zone: ReferenceZone,
    ) -> Self {
        Self {
            repository,
            clock,
            zone,
        }
    }

    pub fn window(&self) -> ArchiveWindow {
        ArchiveWindow::compute(self.clock.now(), &self.zone)
    }

    pub async fn sweep(&self) -> Result<SweepOutcome> {
        self.sweep_at(self.clock.now()).await
    }

    /// Archive active izin created on the local day of `now`.
    ///
    /// No-op outside the window. Inside it, already archived rows are
    /// excluded by the update itself, so calling this repeatedly (or from
    /// concurrent requests) archives each row exactly once.
    pub async fn sweep_at(&self, now: DateTime<Utc>) -> Result<SweepOutcome> {
        let window = ArchiveWindow::compute(now, &self.zone);
        if !window.eligible {
            tracing::debug!("Archive sweep skipped: outside Friday window ({})", window.iso_date);
            return Ok(SweepOutcome::Skipped);
        }

        let archived = self
            .repository
            .archive_created_between(
                window.range_start_utc,
                window.range_end_utc,
                window.iso_date,
                now,
            )
            .await?;

        if !archived.is_empty() {
            tracing::info!(
                "Archived {} izin under {}",
                archived.len(),
                window.iso_date
            );
        }

        Ok(SweepOutcome::Archived {
            archived: archived.len(),
            archive_date: window.iso_date,
        })
    }

    /// Sweep triggered opportunistically by page loads; failures are only logged
    pub async fn sweep_best_effort(&self) {
        if let Err(e) = self.sweep().await {
            tracing::warn!("Opportunistic archive sweep failed: {}", e);
        }
    }

    /// All archived izin grouped by archive date, newest first
    pub async fn batches(&self) -> Result<Vec<ArchiveBatch>> {
        let rows = self.repository.list(true).await?;
        Ok(group_batches(rows))
    }

    /// Render the archive export for an already validated filter
    pub async fn export(&self, filter: &ExportFilter) -> Result<ExportFile> {
        let rows = self.repository.list(true).await?;
        let selected = select_export_rows(rows, filter);

        if selected.is_empty() {
            return Err(match filter.archive_date {
                Some(_) => AppError::NotFound(
                    "Arsip untuk tanggal tersebut tidak ditemukan.".to_string(),
                ),
                None => AppError::NotFound("Belum ada data arsip untuk diunduh.".to_string()),
            });
        }

        let today = self.zone.local_date(self.clock.now());
        render_workbook(&selected, filter, &self.zone, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::izin::models::IzinStatus;
    use crate::shared::test_helpers::{
        active_izin, archived_izin, day, jakarta_time, FixedClock, InMemoryIzinRepository,
    };

    fn service(repo: Arc<InMemoryIzinRepository>, now: DateTime<Utc>) -> ArchiveService {
        ArchiveService::new(repo, Arc::new(FixedClock::at(now)), ReferenceZone::jakarta())
    }

    #[tokio::test]
    async fn test_sweep_skipped_outside_window() {
        let repo = Arc::new(InMemoryIzinRepository::with_rows(vec![active_izin(
            "Ani",
            IzinStatus::Pending,
            jakarta_time(2024, 5, 3, 8, 0, 0),
        )]));
        // Friday before the cutoff
        let service = service(repo.clone(), jakarta_time(2024, 5, 3, 14, 59, 59));

        assert_eq!(service.sweep().await.unwrap(), SweepOutcome::Skipped);
        assert!(repo.snapshot().iter().all(|r| !r.is_archived));
    }

    #[tokio::test]
    async fn test_sweep_archives_only_todays_active_rows() {
        let repo = Arc::new(InMemoryIzinRepository::with_rows(vec![
            active_izin("Hari ini", IzinStatus::Pending, jakarta_time(2024, 5, 3, 7, 0, 0)),
            active_izin("Tengah malam", IzinStatus::Approved, jakarta_time(2024, 5, 3, 0, 0, 0)),
            active_izin("Kemarin", IzinStatus::Approved, jakarta_time(2024, 5, 2, 23, 59, 59)),
        ]));
        let now = jakarta_time(2024, 5, 3, 15, 0, 0);
        let service = service(repo.clone(), now);

        let outcome = service.sweep().await.unwrap();

        assert_eq!(
            outcome,
            SweepOutcome::Archived {
                archived: 2,
                archive_date: day("2024-05-03"),
            }
        );
        for row in repo.snapshot() {
            if row.nama == "Kemarin" {
                assert!(!row.is_archived);
                assert_eq!(row.archive_date, None);
                assert_eq!(row.archived_at, None);
            } else {
                assert!(row.is_archived);
                assert_eq!(row.archive_date, Some(day("2024-05-03")));
                assert_eq!(row.archived_at, Some(now));
            }
        }
    }

    #[tokio::test]
    async fn test_sweep_is_idempotent_within_window() {
        let repo = Arc::new(InMemoryIzinRepository::with_rows(vec![
            active_izin("Ani", IzinStatus::Pending, jakarta_time(2024, 5, 3, 7, 0, 0)),
            active_izin("Budi", IzinStatus::Approved, jakarta_time(2024, 5, 3, 9, 0, 0)),
        ]));
        let first_run = jakarta_time(2024, 5, 3, 15, 5, 0);
        let service = service(repo.clone(), first_run);

        let first = service.sweep().await.unwrap();
        let second = service.sweep_at(jakarta_time(2024, 5, 3, 18, 0, 0)).await.unwrap();

        assert_eq!(
            first,
            SweepOutcome::Archived {
                archived: 2,
                archive_date: day("2024-05-03"),
            }
        );
        assert_eq!(
            second,
            SweepOutcome::Archived {
                archived: 0,
                archive_date: day("2024-05-03"),
            }
        );
        // archived_at still from the first run
        assert!(repo
            .snapshot()
            .iter()
            .all(|r| r.archived_at == Some(first_run)));
    }

    #[tokio::test]
    async fn test_sweep_propagates_backend_errors() {
        let repo = Arc::new(InMemoryIzinRepository::default());
        repo.fail.store(true, std::sync::atomic::Ordering::SeqCst);
        let service = service(repo, jakarta_time(2024, 5, 3, 16, 0, 0));

        assert!(matches!(service.sweep().await, Err(AppError::Database(_))));
        // best-effort variant swallows the same failure
        service.sweep_best_effort().await;
    }

    #[tokio::test]
    async fn test_export_not_found_messages_differ() {
        let repo = Arc::new(InMemoryIzinRepository::with_rows(vec![archived_izin(
            "Ani",
            IzinStatus::Pending,
            "2024-05-03",
            1,
        )]));
        let service = service(repo, jakarta_time(2024, 5, 6, 10, 0, 0));

        let by_date = ExportFilter::parse(Some("2024-05-10"), Some("all")).unwrap();
        let err = service.export(&by_date).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg.contains("tanggal")));

        let approved_only = ExportFilter::parse(None, None).unwrap();
        let err = service.export(&approved_only).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg.contains("Belum ada")));
    }
}
