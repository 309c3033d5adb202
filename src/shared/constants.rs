/// MIME type of the archive spreadsheet export
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Worksheet names longer than this are rejected by spreadsheet apps
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Sheet name used when the export spans every archive date
pub const DEFAULT_SHEET_NAME: &str = "Arsip";
