//! SimplyNu admin core
//!
//! This library exposes the in-memory quote/client lifecycle model the
//! SimplyNu administration frontend programs against: the session store,
//! the lifecycle services, and the pure pricing and intake helpers.

pub mod app;
pub mod config;
pub mod error;
pub mod intake;
pub mod pricing;
pub mod services;
pub mod store;
