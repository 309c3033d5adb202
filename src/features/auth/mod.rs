//! Admin token verification.
//!
//! | Method | Path                | Description                          |
//! |--------|---------------------|--------------------------------------|
//! | POST   | `/api/token/verify` | Check a token before admin actions   |

pub mod dtos;
pub mod handlers;
pub mod routes;
