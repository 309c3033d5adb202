//! Friday archive of leave requests.
//!
//! Once per week, from Friday 15:00 (Asia/Jakarta) onward, active izin created
//! that day are flagged as archived under the day's date label. Archived rows
//! are grouped back into weekly batches for the timeline and the XLSX export.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/archive` | No | Run the sweep (no-op outside the window) |
//! | GET | `/api/archive/window` | No | Current window state |
//! | GET | `/api/arsip` | No | Archived izin grouped by archive date |
//! | GET | `/api/arsip/export` | No | Download archived izin as XLSX |

pub mod clock;
pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod window;

pub use clock::{Clock, SystemClock};
pub use services::ArchiveService;
