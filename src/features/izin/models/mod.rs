mod izin;

pub use izin::{Izin, IzinCount, IzinKelas, IzinStatus, NewIzin};
