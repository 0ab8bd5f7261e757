//! # User Core
//!
//! Domain entity, repository port, and the user service operations.

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
