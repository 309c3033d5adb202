//! Archived izin grouped into weekly batches.
//!
//! Nothing here is stored: batches are rebuilt from the archived rows on
//! every read.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::core::error::{AppError, Result};
use crate::features::izin::models::{Izin, IzinStatus};
use crate::shared::validation::ARCHIVE_DATE_REGEX;

/// Status selector for archive display and export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Approved,
    Pending,
    All,
}

impl StatusFilter {
    pub fn matches(&self, status: IzinStatus) -> bool {
        match self {
            StatusFilter::Approved => status == IzinStatus::Approved,
            StatusFilter::Pending => status == IzinStatus::Pending,
            StatusFilter::All => true,
        }
    }

    /// Suffix used in export filenames
    pub fn file_suffix(&self) -> &'static str {
        match self {
            StatusFilter::Approved => "approved",
            StatusFilter::Pending => "pending",
            StatusFilter::All => "semua-status",
        }
    }
}

impl FromStr for StatusFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "approved" => Ok(StatusFilter::Approved),
            "pending" => Ok(StatusFilter::Pending),
            "all" => Ok(StatusFilter::All),
            _ => Err(AppError::BadRequest(
                "Parameter status tidak valid.".to_string(),
            )),
        }
    }
}

/// Parse a `YYYY-MM-DD` archive date label.
///
/// Rejects non zero-padded labels and impossible dates.
pub fn parse_archive_date(raw: &str) -> Result<NaiveDate> {
    let invalid = || AppError::BadRequest("Parameter tanggal tidak valid.".to_string());

    if !ARCHIVE_DATE_REGEX.is_match(raw) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())
}

/// Validated export parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportFilter {
    pub archive_date: Option<NaiveDate>,
    pub status: StatusFilter,
}

impl ExportFilter {
    /// Validate raw query values.
    ///
    /// Absent status means approved only; an absent or empty date means every
    /// archive date.
    pub fn parse(archive_date: Option<&str>, status: Option<&str>) -> Result<Self> {
        let status = match status {
            Some(raw) => raw.parse()?,
            None => StatusFilter::default(),
        };
        let archive_date = archive_date
            .filter(|raw| !raw.is_empty())
            .map(parse_archive_date)
            .transpose()?;

        Ok(Self {
            archive_date,
            status,
        })
    }
}

/// Archived izin sharing one archive date
#[derive(Debug, Clone)]
pub struct ArchiveBatch {
    pub archive_date: NaiveDate,
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    /// Approved first, then newest first
    pub items: Vec<Izin>,
}

impl ArchiveBatch {
    /// Items to show under a status filter.
    ///
    /// Without a filter the approved-first order is kept; with one, only
    /// matching rows remain, newest first.
    pub fn visible_items(&self, status: Option<IzinStatus>) -> Vec<&Izin> {
        match status {
            None => self.items.iter().collect(),
            Some(status) => {
                let mut items: Vec<&Izin> =
                    self.items.iter().filter(|i| i.status == status).collect();
                items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                items
            }
        }
    }
}

fn status_rank(status: IzinStatus) -> u8 {
    match status {
        IzinStatus::Approved => 0,
        IzinStatus::Pending => 1,
    }
}

/// Approved before pending, then newest first
fn display_order(a: &Izin, b: &Izin) -> Ordering {
    status_rank(a.status)
        .cmp(&status_rank(b.status))
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Group archived rows by archive date, newest batch first.
///
/// Rows without an archive date (or not archived) are skipped.
pub fn group_batches(rows: Vec<Izin>) -> Vec<ArchiveBatch> {
    let mut grouped: BTreeMap<NaiveDate, Vec<Izin>> = BTreeMap::new();
    for row in rows {
        if !row.is_archived {
            continue;
        }
        if let Some(date) = row.archive_date {
            grouped.entry(date).or_default().push(row);
        }
    }

    grouped
        .into_iter()
        .rev()
        .map(|(archive_date, mut items)| {
            items.sort_by(display_order);
            let approved = items
                .iter()
                .filter(|i| i.status == IzinStatus::Approved)
                .count();
            let pending = items
                .iter()
                .filter(|i| i.status == IzinStatus::Pending)
                .count();

            ArchiveBatch {
                archive_date,
                total: items.len(),
                approved,
                pending,
                items,
            }
        })
        .collect()
}

/// Rows to export for `filter`, in sheet order.
///
/// Newest archive date first; within a date, approved before pending when
/// every status is requested, then newest first.
pub fn select_export_rows(rows: Vec<Izin>, filter: &ExportFilter) -> Vec<Izin> {
    let mut selected: Vec<Izin> = rows
        .into_iter()
        .filter(|i| i.is_archived && i.archive_date.is_some())
        .filter(|i| filter.archive_date.is_none() || i.archive_date == filter.archive_date)
        .filter(|i| filter.status.matches(i.status))
        .collect();

    selected.sort_by(|a, b| {
        b.archive_date
            .cmp(&a.archive_date)
            .then_with(|| display_order(a, b))
    });
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{archived_izin, day};

    #[test]
    fn test_group_batches_counts_and_order() {
        let rows = vec![
            archived_izin("Ani", IzinStatus::Approved, "2024-05-03", 1),
            archived_izin("Budi", IzinStatus::Pending, "2024-05-03", 2),
            archived_izin("Citra", IzinStatus::Approved, "2024-05-03", 3),
            archived_izin("Dewi", IzinStatus::Pending, "2024-05-10", 1),
            archived_izin("Eko", IzinStatus::Pending, "2024-05-10", 2),
        ];

        let batches = group_batches(rows);

        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].archive_date, day("2024-05-10"));
        assert_eq!(batches[0].total, 2);
        assert_eq!(batches[0].approved, 0);
        assert_eq!(batches[0].pending, 2);
        assert_eq!(batches[1].archive_date, day("2024-05-03"));
        assert_eq!(batches[1].total, 3);
        assert_eq!(batches[1].approved, 2);
        assert_eq!(batches[1].pending, 1);
    }

    #[test]
    fn test_group_batches_item_order_approved_first_then_newest() {
        let rows = vec![
            archived_izin("Lama", IzinStatus::Approved, "2024-05-03", 1),
            archived_izin("Tunggu", IzinStatus::Pending, "2024-05-03", 9),
            archived_izin("Baru", IzinStatus::Approved, "2024-05-03", 5),
        ];

        let batches = group_batches(rows);
        let names: Vec<&str> = batches[0].items.iter().map(|i| i.nama.as_str()).collect();

        assert_eq!(names, vec!["Baru", "Lama", "Tunggu"]);
    }

    #[test]
    fn test_group_batches_skips_rows_without_archive_date() {
        let mut orphan = archived_izin("Orphan", IzinStatus::Approved, "2024-05-03", 1);
        orphan.archive_date = None;
        let mut active = archived_izin("Aktif", IzinStatus::Approved, "2024-05-03", 1);
        active.is_archived = false;

        let batches = group_batches(vec![orphan, active]);

        assert!(batches.is_empty());
    }

    #[test]
    fn test_visible_items_with_status_filter() {
        let rows = vec![
            archived_izin("A", IzinStatus::Approved, "2024-05-03", 1),
            archived_izin("B", IzinStatus::Pending, "2024-05-03", 2),
            archived_izin("C", IzinStatus::Pending, "2024-05-03", 3),
        ];
        let batch = &group_batches(rows)[0];

        let pending: Vec<&str> = batch
            .visible_items(Some(IzinStatus::Pending))
            .iter()
            .map(|i| i.nama.as_str())
            .collect();
        assert_eq!(pending, vec!["C", "B"]);
        assert_eq!(batch.visible_items(None).len(), 3);
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!("approved".parse::<StatusFilter>().unwrap(), StatusFilter::Approved);
        assert_eq!("PENDING".parse::<StatusFilter>().unwrap(), StatusFilter::Pending);
        assert_eq!("All".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert!("rejected".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_export_filter_rejects_malformed_date() {
        assert!(matches!(
            ExportFilter::parse(Some("2024-5-3"), None),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            ExportFilter::parse(Some("2024-02-30"), None),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_export_filter_empty_date_means_every_date() {
        let filter = ExportFilter::parse(Some(""), Some("all")).unwrap();
        assert_eq!(filter.archive_date, None);
        assert_eq!(filter.status, StatusFilter::All);
    }

    #[test]
    fn test_export_filter_defaults_to_approved() {
        let filter = ExportFilter::parse(None, None).unwrap();
        assert_eq!(filter.status, StatusFilter::Approved);
        assert_eq!(filter.archive_date, None);
    }

    #[test]
    fn test_select_export_rows_filters_status_and_date() {
        let rows = vec![
            archived_izin("A", IzinStatus::Approved, "2024-05-03", 1),
            archived_izin("B", IzinStatus::Pending, "2024-05-03", 2),
            archived_izin("C", IzinStatus::Approved, "2024-05-10", 1),
        ];

        let filter = ExportFilter {
            archive_date: Some(day("2024-05-03")),
            status: StatusFilter::Approved,
        };
        let selected = select_export_rows(rows.clone(), &filter);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].nama, "A");

        let filter = ExportFilter {
            archive_date: None,
            status: StatusFilter::All,
        };
        let names: Vec<String> = select_export_rows(rows, &filter)
            .into_iter()
            .map(|i| i.nama)
            .collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_select_export_rows_empty_when_nothing_qualifies() {
        let rows = vec![archived_izin("B", IzinStatus::Pending, "2024-05-03", 2)];
        let filter = ExportFilter {
            archive_date: Some(day("2024-05-03")),
            status: StatusFilter::Approved,
        };

        assert!(select_export_rows(rows, &filter).is_empty());
    }
}
