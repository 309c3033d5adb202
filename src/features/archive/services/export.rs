//! XLSX rendering of archived izin.

use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook};

use crate::core::error::Result;
use crate::features::archive::services::read_model::ExportFilter;
use crate::features::archive::window::ReferenceZone;
use crate::features::izin::models::Izin;
use crate::shared::constants::{DEFAULT_SHEET_NAME, MAX_SHEET_NAME_LEN};
use crate::shared::locale::{full_date_label, timestamp_label};

const COLUMNS: [(&str, f64); 9] = [
    ("No", 6.0),
    ("Tanggal Arsip", 28.0),
    ("Nama", 24.0),
    ("Absen", 8.0),
    ("Kelas", 8.0),
    ("Status", 18.0),
    ("Alasan", 45.0),
    ("Dibuat Pada", 26.0),
    ("Diarsipkan Pada", 26.0),
];

/// Rendered spreadsheet ready to send as an attachment
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Worksheet name: the full date label when exporting a single date
pub fn sheet_name(filter: &ExportFilter) -> String {
    let base = filter
        .archive_date
        .map(full_date_label)
        .unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string());
    let name: String = base.chars().take(MAX_SHEET_NAME_LEN).collect();

    if name.trim().is_empty() {
        DEFAULT_SHEET_NAME.to_string()
    } else {
        name
    }
}

/// `arsip-izin-<date>-<status>.xlsx`, or `arsip-izin-<status>-<today>.xlsx` for all dates
pub fn export_filename(filter: &ExportFilter, today: NaiveDate) -> String {
    let suffix = filter.status.file_suffix();
    match filter.archive_date {
        Some(date) => format!("arsip-izin-{}-{}.xlsx", date.format("%Y-%m-%d"), suffix),
        None => format!("arsip-izin-{}-{}.xlsx", suffix, today.format("%Y-%m-%d")),
    }
}

/// Render `rows` (already filtered and ordered) into a single-sheet workbook
pub fn render_workbook(
    rows: &[Izin],
    filter: &ExportFilter,
    zone: &ReferenceZone,
    today: NaiveDate,
) -> Result<ExportFile> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name(filter))?;

    for (col, (title, width)) in COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *title, &header)?;
        worksheet.set_column_width(col, *width)?;
    }

    for (index, izin) in rows.iter().enumerate() {
        let row = (index + 1) as u32;
        let archive_label = izin.archive_date.map(full_date_label).unwrap_or_default();
        let created = timestamp_label(izin.created_at.with_timezone(&zone.offset()));
        let archived = izin
            .archived_at
            .map(|at| timestamp_label(at.with_timezone(&zone.offset())))
            .unwrap_or_default();

        worksheet.write_number(row, 0, (index + 1) as f64)?;
        worksheet.write_string(row, 1, archive_label)?;
        worksheet.write_string(row, 2, izin.nama.as_str())?;
        worksheet.write_number(row, 3, f64::from(izin.absen))?;
        worksheet.write_string(row, 4, izin.kelas.to_string())?;
        worksheet.write_string(row, 5, izin.status.label())?;
        worksheet.write_string(row, 6, izin.alasan.as_str())?;
        worksheet.write_string(row, 7, created)?;
        worksheet.write_string(row, 8, archived)?;
    }

    let bytes = workbook.save_to_buffer()?;

    Ok(ExportFile {
        filename: export_filename(filter, today),
        bytes,
    })
}
