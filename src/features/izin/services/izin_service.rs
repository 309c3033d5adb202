use std::collections::BTreeMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::izin::dtos::{
    CreateIzinDto, IzinResponseDto, IzinSummaryDto, KelasCountDto,
};
use crate::features::izin::models::{IzinCount, IzinKelas, IzinStatus, NewIzin};
use crate::features::izin::repositories::IzinRepository;

/// Service for leave request operations
pub struct IzinService {
    repository: Arc<dyn IzinRepository>,
}

impl IzinService {
    pub fn new(repository: Arc<dyn IzinRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, archived: bool) -> Result<Vec<IzinResponseDto>> {
        let rows = self.repository.list(archived).await?;
        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// Store a new submission as pending
    pub async fn create(&self, dto: CreateIzinDto) -> Result<IzinResponseDto> {
        let nama = dto.nama.trim().to_string();
        let alasan = dto.alasan.trim().to_string();

        if nama.is_empty() {
            return Err(AppError::Validation("Nama wajib diisi".to_string()));
        }
        if alasan.is_empty() {
            return Err(AppError::Validation("Alasan wajib diisi".to_string()));
        }

        let izin = self
            .repository
            .insert(NewIzin {
                nama,
                absen: dto.absen,
                kelas: dto.kelas,
                alasan,
            })
            .await?;

        tracing::info!("Izin {} submitted for kelas {}", izin.id, izin.kelas);
        Ok(izin.into())
    }

    pub async fn approve(&self, id: Uuid) -> Result<IzinResponseDto> {
        self.repository
            .approve(id)
            .await?
            .map(|i| i.into())
            .ok_or_else(|| AppError::NotFound("Izin tidak ditemukan".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound("Izin tidak ditemukan".to_string()));
        }
        tracing::info!("Izin {} deleted", id);
        Ok(())
    }

    pub async fn summary(&self) -> Result<IzinSummaryDto> {
        let counts = self.repository.counts().await?;
        Ok(summarize(&counts))
    }
}

fn summarize(counts: &[IzinCount]) -> IzinSummaryDto {
    let mut per_kelas: BTreeMap<IzinKelas, i64> =
        IzinKelas::ALL.iter().map(|k| (*k, 0)).collect();
    let mut summary = IzinSummaryDto {
        total: 0,
        pending: 0,
        approved: 0,
        archived: 0,
        per_kelas: Vec::new(),
    };

    for c in counts {
        summary.total += c.count;
        if c.is_archived {
            summary.archived += c.count;
            continue;
        }
        match c.status {
            IzinStatus::Pending => summary.pending += c.count,
            IzinStatus::Approved => summary.approved += c.count,
        }
        *per_kelas.entry(c.kelas).or_insert(0) += c.count;
    }

    summary.per_kelas = per_kelas
        .into_iter()
        .map(|(kelas, total)| KelasCountDto { kelas, total })
        .collect();
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(kelas: IzinKelas, status: IzinStatus, is_archived: bool, count: i64) -> IzinCount {
        IzinCount {
            kelas,
            status,
            is_archived,
            count,
        }
    }

    #[test]
    fn test_summarize_splits_active_and_archived() {
        let summary = summarize(&[
            count(IzinKelas::X1, IzinStatus::Pending, false, 3),
            count(IzinKelas::X1, IzinStatus::Approved, false, 2),
            count(IzinKelas::X4, IzinStatus::Approved, false, 1),
            count(IzinKelas::X4, IzinStatus::Approved, true, 5),
        ]);

        assert_eq!(summary.total, 11);
        assert_eq!(summary.pending, 3);
        assert_eq!(summary.approved, 3);
        assert_eq!(summary.archived, 5);
        assert_eq!(summary.per_kelas.len(), 8);
        assert_eq!(summary.per_kelas[0].kelas, IzinKelas::X1);
        assert_eq!(summary.per_kelas[0].total, 5);
        assert_eq!(summary.per_kelas[3].kelas, IzinKelas::X4);
        assert_eq!(summary.per_kelas[3].total, 1);
        assert_eq!(summary.per_kelas[7].total, 0);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.per_kelas.iter().all(|k| k.total == 0));
    }
}
