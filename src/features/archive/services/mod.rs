mod archive_service;
pub mod export;
pub mod read_model;

pub use archive_service::{ArchiveService, SweepOutcome};
