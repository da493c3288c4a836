//! Services module
//!
//! Business logic services that coordinate between the view layer and the
//! session store.

pub mod clients;
pub mod quotes;

pub use clients::ClientsService;
pub use quotes::QuotesService;
