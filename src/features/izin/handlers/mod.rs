mod izin_handler;

pub use izin_handler::*;
