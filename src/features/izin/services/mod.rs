mod izin_service;

pub use izin_service::IzinService;
