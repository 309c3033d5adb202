pub mod archive;
pub mod auth;
pub mod izin;
