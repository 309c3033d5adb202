//! Leave requests ("izin") submitted by members and managed by admins.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/izin` | No | List active (or archived) izin |
//! | POST | `/api/izin` | No | Submit a leave request |
//! | GET | `/api/izin/summary` | No | Counts for dashboard cards |
//! | PATCH | `/api/izin/{id}` | Action token | Approve |
//! | DELETE | `/api/izin/{id}` | Action token | Delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{IzinRepository, PgIzinRepository};
pub use services::IzinService;
