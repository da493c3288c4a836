//! Clients service
//!
//! Read-side logic for the client directory: listing, counting and the
//! search box filter.

use crate::error::Result;
use crate::store::{Client, SessionStore};

/// Service for the client directory
#[derive(Clone)]
pub struct ClientsService {
    store: SessionStore,
}

impl ClientsService {
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    /// Get a client by ID
    pub fn get_client(&self, id: &str) -> Result<Client> {
        self.store.find_client(id)
    }

    /// List all clients in onboarding order
    pub fn list_clients(&self) -> Vec<Client> {
        self.store.clients()
    }

    /// Number of onboarded customers
    pub fn client_count(&self) -> usize {
        self.store.client_count()
    }

    /// Search clients by name or address.
    ///
    /// Case-insensitive substring match; an empty term returns the whole
    /// directory and no match returns an empty list, never an error.
    pub fn search_clients(&self, query: &str) -> Vec<Client> {
        let query_lower = query.to_lowercase();

        self.list_clients()
            .into_iter()
            .filter(|client| {
                client.name.to_lowercase().contains(&query_lower)
                    || client.address.to_lowercase().contains(&query_lower)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    fn create_test_service() -> ClientsService {
        ClientsService::new(seed::seeded_store())
    }

    #[test]
    fn test_search_matches_by_name() {
        let service = create_test_service();

        let results = service.search_clients("amit");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "amit g");
    }

    #[test]
    fn test_search_matches_by_address() {
        let service = create_test_service();

        let results = service.search_clients("croydon");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "amanda test");
    }

    #[test]
    fn test_empty_term_returns_all_clients() {
        let service = create_test_service();

        assert_eq!(service.search_clients("").len(), service.client_count());
    }

    #[test]
    fn test_no_match_returns_empty() {
        let service = create_test_service();

        assert!(service.search_clients("zzz-no-match").is_empty());
    }
}
