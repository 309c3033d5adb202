use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::izin::models::{Izin, IzinKelas, IzinStatus};

/// Request DTO for a public leave request submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateIzinDto {
    /// Member name
    #[validate(length(min = 1, max = 100, message = "Nama wajib diisi (maksimal 100 karakter)"))]
    pub nama: String,

    /// Roll number within the class
    #[validate(range(min = 1, max = 99, message = "Nomor absen harus antara 1 dan 99"))]
    pub absen: i32,

    pub kelas: IzinKelas,

    /// Reason for the leave
    #[validate(length(min = 1, max = 500, message = "Alasan wajib diisi (maksimal 500 karakter)"))]
    pub alasan: String,
}

/// Query parameters for listing izin
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListIzinQuery {
    /// List archived rows instead of active ones (default: false)
    #[serde(default)]
    pub archived: bool,
}

/// Response DTO for izin
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IzinResponseDto {
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

impl From<Izin> for IzinResponseDto {
    fn from(i: Izin) -> Self {
        Self {
            id: i.id,
            nama: i.nama,
            absen: i.absen,
            kelas: i.kelas,
            alasan: i.alasan,
            status: i.status,
            is_archived: i.is_archived,
            archive_date: i.archive_date,
            archived_at: i.archived_at,
            created_at: i.created_at,
        }
    }
}

/// Active izin count for one class
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct KelasCountDto {
    pub kelas: IzinKelas,
    pub total: i64,
}

/// Dashboard summary of leave requests
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IzinSummaryDto {
    pub total: i64,
    /// Active rows awaiting approval
    pub pending: i64,
    /// Active rows already approved
    pub approved: i64,
    pub archived: i64,
    /// Active rows per class, always all eight classes
    pub per_kelas: Vec<KelasCountDto>,
}

/// Response for a successful delete
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteIzinResponseDto {
    pub id: Uuid,
}
