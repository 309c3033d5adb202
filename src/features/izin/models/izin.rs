use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Class enum matching the `izin_kelas` database enum
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Type, ToSchema,
)]
#[sqlx(type_name = "izin_kelas")]
pub enum IzinKelas {
    X1,
    X2,
    X3,
    X4,
    X5,
    X6,
    X7,
    X8,
}

impl IzinKelas {
    pub const ALL: [IzinKelas; 8] = [
        IzinKelas::X1,
        IzinKelas::X2,
        IzinKelas::X3,
        IzinKelas::X4,
        IzinKelas::X5,
        IzinKelas::X6,
        IzinKelas::X7,
        IzinKelas::X8,
    ];
}

impl std::fmt::Display for IzinKelas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IzinKelas::X1 => write!(f, "X1"),
            IzinKelas::X2 => write!(f, "X2"),
            IzinKelas::X3 => write!(f, "X3"),
            IzinKelas::X4 => write!(f, "X4"),
            IzinKelas::X5 => write!(f, "X5"),
            IzinKelas::X6 => write!(f, "X6"),
            IzinKelas::X7 => write!(f, "X7"),
            IzinKelas::X8 => write!(f, "X8"),
        }
    }
}

/// Izin status enum matching the `izin_status` database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "izin_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum IzinStatus {
    Pending,
    Approved,
}

impl IzinStatus {
    /// Label shown in exports
    pub fn label(&self) -> &'static str {
        match self {
            IzinStatus::Approved => "Diizinkan",
            IzinStatus::Pending => "Pending",
        }
    }
}

impl std::fmt::Display for IzinStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IzinStatus::Pending => write!(f, "pending"),
            IzinStatus::Approved => write!(f, "approved"),
        }
    }
}

/// Database model for a leave request
///
/// `archive_date` and `archived_at` are set exactly when `is_archived` is true.
#[derive(Debug, Clone, FromRow)]
pub struct Izin {
    pub id: Uuid,
    pub nama: String,
    pub absen: i32,
    pub kelas: IzinKelas,
    pub alasan: String,
    pub status: IzinStatus,
    pub is_archived: bool,
    pub archive_date: Option<NaiveDate>,
    pub archived_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a public submission
#[derive(Debug, Clone)]
pub struct NewIzin {
    pub nama: String,
    pub absen: i32,
    pub kelas: IzinKelas,
    pub alasan: String,
}

/// Row count per (kelas, status, archived) bucket
#[derive(Debug, Clone, FromRow)]
pub struct IzinCount {
    pub kelas: IzinKelas,
    pub status: IzinStatus,
    pub is_archived: bool,
    pub count: i64,
}
