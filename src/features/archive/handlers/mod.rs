mod archive_handler;
mod arsip_handler;

pub use archive_handler::*;
pub use arsip_handler::*;
