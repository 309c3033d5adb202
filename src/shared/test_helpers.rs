#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Utc};
#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::core::error::Result;
#[cfg(test)]
use crate::features::archive::Clock;
#[cfg(test)]
use crate::features::izin::models::{Izin, IzinCount, IzinKelas, IzinStatus, NewIzin};
#[cfg(test)]
use crate::features::izin::repositories::IzinRepository;

#[cfg(test)]
pub fn day(label: &str) -> NaiveDate {
    NaiveDate::parse_from_str(label, "%Y-%m-%d").unwrap()
}

/// UTC instant for a Jakarta wall-clock time
#[cfg(test)]
pub fn jakarta_time(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    FixedOffset::east_opt(7 * 3600)
        .unwrap()
        .with_ymd_and_hms(y, m, d, h, min, s)
        .unwrap()
        .with_timezone(&Utc)
}

/// Active izin in kelas X1
#[cfg(test)]
pub fn active_izin(nama: &str, status: IzinStatus, created_at: DateTime<Utc>) -> Izin {
    Izin {
        id: Uuid::new_v4(),
        nama: nama.to_string(),
        absen: 7,
        kelas: IzinKelas::X1,
        alasan: "Sakit".to_string(),
        status,
        is_archived: false,
        archive_date: None,
        archived_at: None,
        created_at,
    }
}

/// Archived izin created `minute` minutes after 07:00 Jakarta on the archive day
#[cfg(test)]
pub fn archived_izin(nama: &str, status: IzinStatus, archive_date: &str, minute: i64) -> Izin {
    let date = day(archive_date);
    let morning = FixedOffset::east_opt(7 * 3600)
        .unwrap()
        .from_local_datetime(&date.and_hms_opt(7, 0, 0).unwrap())
        .unwrap()
        .with_timezone(&Utc);

    Izin {
        is_archived: true,
        archive_date: Some(date),
        archived_at: Some(morning + Duration::hours(9)),
        ..active_izin(nama, status, morning + Duration::minutes(minute))
    }
}

/// Clock frozen at one instant
#[cfg(test)]
pub struct FixedClock(pub Mutex<DateTime<Utc>>);

#[cfg(test)]
impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.0.lock().unwrap() = now;
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

/// In-memory izin storage with the same filtering rules as Postgres
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryIzinRepository {
    rows: Mutex<Vec<Izin>>,
    /// Fail every call with a database error
    pub fail: std::sync::atomic::AtomicBool,
}

#[cfg(test)]
impl InMemoryIzinRepository {
    pub fn with_rows(rows: Vec<Izin>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Default::default()
        }
    }

    pub fn snapshot(&self) -> Vec<Izin> {
        self.rows.lock().unwrap().clone()
    }

    fn check(&self) -> Result<()> {
        if self.fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut.into());
        }
        Ok(())
    }
}

#[cfg(test)]
#[async_trait]
impl IzinRepository for InMemoryIzinRepository {
    async fn list(&self, archived: bool) -> Result<Vec<Izin>> {
        self.check()?;
        let mut rows: Vec<Izin> = self
            .snapshot()
            .into_iter()
            .filter(|r| r.is_archived == archived)
            .collect();
        rows.sort_by(|a, b| {
            b.archive_date
                .cmp(&a.archive_date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(rows)
    }

    async fn insert(&self, new: NewIzin) -> Result<Izin> {
        self.check()?;
        let izin = Izin {
            id: Uuid::now_v7(),
            nama: new.nama,
            absen: new.absen,
            kelas: new.kelas,
            alasan: new.alasan,
            status: IzinStatus::Pending,
            is_archived: false,
            archive_date: None,
            archived_at: None,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(izin.clone());
        Ok(izin)
    }

    async fn approve(&self, id: Uuid) -> Result<Option<Izin>> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|r| r.id == id).map(|r| {
            r.status = IzinStatus::Approved;
            r.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() < before)
    }

    async fn archive_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        archive_date: NaiveDate,
        archived_at: DateTime<Utc>,
    ) -> Result<Vec<Izin>> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let mut archived = Vec::new();
        for row in rows
            .iter_mut()
            .filter(|r| !r.is_archived && r.created_at >= start && r.created_at <= end)
        {
            row.is_archived = true;
            row.archive_date = Some(archive_date);
            row.archived_at = Some(archived_at);
            archived.push(row.clone());
        }
        Ok(archived)
    }

    async fn counts(&self) -> Result<Vec<IzinCount>> {
        self.check()?;
        let mut counts: Vec<IzinCount> = Vec::new();
        for row in self.snapshot() {
            match counts.iter_mut().find(|c| {
                c.kelas == row.kelas && c.status == row.status && c.is_archived == row.is_archived
            }) {
                Some(c) => c.count += 1,
                None => counts.push(IzinCount {
                    kelas: row.kelas,
                    status: row.status,
                    is_archived: row.is_archived,
                    count: 1,
                }),
            }
        }
        Ok(counts)
    }
}
