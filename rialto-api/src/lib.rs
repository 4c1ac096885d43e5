//! Rialto API - Wire Types
//!
//! Request and response types exchanged with the marketplace admin API.
//! This is the client's copy of the contract: the server itself is a
//! separate system. Response envelopes vary by endpoint generation, so the
//! console normalizes them (see `rialto-console`); the types here describe
//! the payloads once unwrapped.

pub mod error;
pub mod types;

pub use error::{ApiError, ErrorCode};
pub use types::*;
