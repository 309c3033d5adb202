use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::{IntoParams, ToSchema};

use crate::features::archive::services::read_model::ArchiveBatch;
use crate::features::archive::services::SweepOutcome;
use crate::features::archive::window::ArchiveWindow;
use crate::features::izin::dtos::IzinResponseDto;
use crate::features::izin::models::IzinStatus;
use crate::shared::locale::compact_date_label;

fn millis<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Result of `POST /api/archive`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SweepResponseDto {
    /// Rows moved into the archive by this call
    pub archived: usize,
    /// Present (true) when called outside the Friday window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_date: Option<NaiveDate>,
}

impl From<SweepOutcome> for SweepResponseDto {
    fn from(outcome: SweepOutcome) -> Self {
        match outcome {
            SweepOutcome::Skipped => Self {
                archived: 0,
                skipped: Some(true),
                archive_date: None,
            },
            SweepOutcome::Archived {
                archived,
                archive_date,
            } => Self {
                archived,
                skipped: None,
                archive_date: Some(archive_date),
            },
        }
    }
}

/// Current archive window
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveWindowDto {
    pub eligible: bool,
    pub iso_date: NaiveDate,
    #[serde(serialize_with = "millis")]
    pub range_start_utc: DateTime<Utc>,
    #[serde(serialize_with = "millis")]
    pub range_end_utc: DateTime<Utc>,
}

impl From<ArchiveWindow> for ArchiveWindowDto {
    fn from(w: ArchiveWindow) -> Self {
        Self {
            eligible: w.eligible,
            iso_date: w.iso_date,
            range_start_utc: w.range_start_utc,
            range_end_utc: w.range_end_utc,
        }
    }
}

/// Archived izin sharing one archive date
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveBatchDto {
    /// e.g. "Arsip 03 Mei 2024"
    pub label: String,
    pub archive_date: NaiveDate,
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    pub items: Vec<IzinResponseDto>,
}

impl ArchiveBatchDto {
    pub fn from_batch(batch: &ArchiveBatch, status: Option<IzinStatus>) -> Self {
        Self {
            label: format!("Arsip {}", compact_date_label(batch.archive_date)),
            archive_date: batch.archive_date,
            total: batch.total,
            approved: batch.approved,
            pending: batch.pending,
            items: batch
                .visible_items(status)
                .into_iter()
                .map(|i| i.clone().into())
                .collect(),
        }
    }
}

/// Query parameters for `GET /api/arsip`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ArsipQuery {
    /// Only list items with this status (counts still cover the whole batch)
    pub status: Option<IzinStatus>,
}

/// Query parameters for `GET /api/arsip/export`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ExportQuery {
    /// Archive date label, `YYYY-MM-DD`
    pub archive_date: Option<String>,
    /// `approved` (default), `pending` or `all`
    pub status: Option<String>,
}
