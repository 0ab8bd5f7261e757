//! # User API
//!
//! RPC routes for the user service: request decoding, status mapping, health probes.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
