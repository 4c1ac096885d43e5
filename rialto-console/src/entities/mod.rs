//! Per-entity table configurations.
//!
//! Each module wires one domain table into the generic engine: the row type,
//! its endpoint and envelope shape, the actions the table offers, and the
//! export columns. Configuration only - control flow lives in `table`.

pub mod admins;
pub mod announcements;
pub mod articles;
pub mod bookings;
pub mod broadcasts;
pub mod kyc;
pub mod products;
pub mod reviews;
pub mod settlements;
pub mod transactions;
pub mod users;
