//! Store module
//!
//! This module provides the session entity store:
//! - Model definitions
//! - SessionStore holding the authoritative collections
//! - The fixed demo seed snapshot

pub mod models;
pub mod seed;
pub mod session;

pub use models::*;
pub use session::SessionStore;
