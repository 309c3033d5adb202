mod izin_dto;

pub use izin_dto::*;
