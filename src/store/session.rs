//! Session store
//!
//! The single source of truth for one session's clients and quotes.
//! External code reads snapshots; mutation goes through the crate-internal
//! entry points reserved for the lifecycle operations in `services`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::models::{Client, Quote};
use crate::error::{AppError, Result};

#[derive(Debug, Default)]
struct Collections {
    clients: Vec<Client>,
    quotes: Vec<Quote>,
}

/// Cheaply cloneable handle to the session's entity collections
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<Collections>>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with a fixed snapshot. This is the
    /// bootstrap interface that stands in for a persistence layer: a
    /// restarted session always begins from such a snapshot.
    pub fn with_snapshot(clients: Vec<Client>, quotes: Vec<Quote>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Collections { clients, quotes })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Collections> {
        // A poisoned lock still holds usable state
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the client directory, in onboarding order
    pub fn clients(&self) -> Vec<Client> {
        self.lock().clients.clone()
    }

    /// Snapshot of all quotes, most recently created first
    pub fn quotes(&self) -> Vec<Quote> {
        self.lock().quotes.clone()
    }

    /// Number of onboarded customers in the directory
    pub fn client_count(&self) -> usize {
        self.lock().clients.len()
    }

    /// Look up a client by directory id
    pub fn find_client(&self, id: &str) -> Result<Client> {
        self.lock()
            .clients
            .iter()
            .find(|client| client.id == id)
            .cloned()
            .ok_or_else(|| AppError::ClientNotFound(id.to_string()))
    }

    /// Look up a quote by id
    pub fn find_quote(&self, id: &str) -> Result<Quote> {
        self.lock()
            .quotes
            .iter()
            .find(|quote| quote.id == id)
            .cloned()
            .ok_or_else(|| AppError::QuoteNotFound(id.to_string()))
    }

    /// Prepend a newly created quote so the list stays most-recent-first
    pub(crate) fn prepend_quote(&self, quote: Quote) {
        let mut guard = self.lock();
        guard.quotes.insert(0, quote);
        tracing::debug!("Quote count is now {}", guard.quotes.len());
    }

    /// Append the synthesized client and flip the onboarded flag on its
    /// source quote, atomically. The quote's status is left untouched, so
    /// it never moves out of its tab. Rejects a quote whose customer is
    /// already onboarded.
    pub(crate) fn complete_onboarding(&self, client: Client, quote_id: &str) -> Result<Quote> {
        let mut guard = self.lock();
        let inner = &mut *guard;

        let quote = inner
            .quotes
            .iter_mut()
            .find(|quote| quote.id == quote_id)
            .ok_or_else(|| AppError::QuoteNotFound(quote_id.to_string()))?;

        if quote.is_client_onboarded {
            return Err(AppError::ClientAlreadyOnboarded(quote.client_name.clone()));
        }

        quote.is_client_onboarded = true;
        let updated = quote.clone();

        inner.clients.push(client);
        tracing::debug!(
            "Onboarded client from quote: {} ({} clients total)",
            quote_id,
            inner.clients.len()
        );

        Ok(updated)
    }
}
