//! # User Proto
//!
//! Wire contract shared by the user service and its clients: request and
//! response messages, RPC method paths and status codes.

pub mod messages;
pub mod methods;
pub mod status;

pub use messages::*;
pub use methods::Method;
pub use status::{Code, Status};
