//! Quotes service
//!
//! High-level business logic for the quote lifecycle.
//! Handles quote creation, client onboarding and the convert-to-job gate.

use chrono::Utc;
use uuid::Uuid;

use crate::config::{DEFAULT_QUOTE_NAME, MISSING_CONTACT_PLACEHOLDER, SCHEDULED_DATE_FORMAT};
use crate::error::Result;
use crate::store::{
    Client, CreateQuoteRequest, CustomerType, JobConversion, OnboardingOutcome, Quote,
    QuoteStatus, SessionStore,
};

/// Service for managing the quote lifecycle
#[derive(Clone)]
pub struct QuotesService {
    store: SessionStore,
}

impl QuotesService {
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    /// Create a new quote and prepend it to the session's quote list.
    ///
    /// The entry path decides the tab: a quote for an onboarded customer is
    /// `scheduled`, one for a non-onboarded customer is `sent`. No Client
    /// record is created here even on the onboarded path; the caller has
    /// already resolved one.
    pub fn create_quote(&self, req: CreateQuoteRequest, customer_type: CustomerType) -> Quote {
        tracing::info!("Creating new quote: {}", req.name);

        let name = if req.name.trim().is_empty() {
            DEFAULT_QUOTE_NAME.to_string()
        } else {
            req.name
        };

        let status = match customer_type {
            CustomerType::Onboarded => QuoteStatus::Scheduled,
            CustomerType::NonOnboarded => QuoteStatus::Sent,
        };

        let quote = Quote {
            id: Uuid::new_v4().to_string(),
            name,
            client_name: req.client.name,
            client_address: req.client.address,
            client_email: req.client.email,
            client_phone: req.client.phone,
            client_id: req.client_id,
            scheduled_date: Utc::now().format(SCHEDULED_DATE_FORMAT).to_string(),
            amount: if req.amount.is_finite() {
                req.amount.max(0.0)
            } else {
                0.0
            },
            status,
            is_client_onboarded: customer_type == CustomerType::Onboarded,
        };

        self.store.prepend_quote(quote.clone());

        tracing::info!("Quote created successfully: {}", quote.id);

        quote
    }

    /// Get a quote by ID
    pub fn get_quote(&self, id: &str) -> Result<Quote> {
        self.store.find_quote(id)
    }

    /// List all quotes, most recently created first
    pub fn list_quotes(&self) -> Vec<Quote> {
        self.store.quotes()
    }

    /// Quotes in the requested tab, preserving store ordering
    pub fn quotes_with_status(&self, status: QuoteStatus) -> Vec<Quote> {
        self.list_quotes()
            .into_iter()
            .filter(|quote| quote.status == status)
            .collect()
    }

    /// Onboard the customer behind a sent quote into the client directory.
    ///
    /// Synthesizes a Client from the quote's denormalized snapshot, with the
    /// "N/A" sentinel standing in for missing contact fields, then flips the
    /// onboarded flag on that quote only. The quote's status is untouched:
    /// it stays in the sent tab. Onboarding the same quote twice is rejected.
    pub fn onboard_client(&self, quote_id: &str) -> Result<OnboardingOutcome> {
        tracing::info!("Onboarding client from quote: {}", quote_id);

        let quote = self.store.find_quote(quote_id)?;

        let client = Client {
            id: Uuid::new_v4().to_string(),
            name: quote.client_name.clone(),
            address: quote.client_address.clone(),
            email: quote
                .client_email
                .unwrap_or_else(|| MISSING_CONTACT_PLACEHOLDER.to_string()),
            phone: quote
                .client_phone
                .unwrap_or_else(|| MISSING_CONTACT_PLACEHOLDER.to_string()),
        };

        self.store.complete_onboarding(client.clone(), quote_id)?;

        tracing::info!("Client onboarded successfully: {}", client.id);

        let message = format!(
            "{} has been onboarded successfully! They are now in your client list, \
             and you can now convert this quote to a job.",
            client.name
        );

        Ok(OnboardingOutcome { client, message })
    }

    /// Attempt to convert a quote to a job.
    ///
    /// The conversion is gated on the customer being onboarded; a refused
    /// attempt is a `Restricted` value, never an error. No Job entity exists
    /// yet, so a permitted conversion only reports that it started.
    pub fn convert_to_job(&self, quote_id: &str) -> Result<JobConversion> {
        let quote = self.store.find_quote(quote_id)?;

        if !quote.can_convert_to_job() {
            tracing::debug!("Convert to job refused for quote: {}", quote_id);
            return Ok(JobConversion::Restricted {
                reason: "Admin must onboard this customer before converting to a job."
                    .to_string(),
            });
        }

        tracing::info!("Converting quote to job: {}", quote_id);

        Ok(JobConversion::Started {
            message: format!(
                "Converting {} for {} to a Job...",
                quote.name, quote.client_name
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ClientSnapshot;

    fn create_test_service() -> QuotesService {
        QuotesService::new(SessionStore::new())
    }

    fn sample_request(name: &str, amount: f64) -> CreateQuoteRequest {
        CreateQuoteRequest {
            name: name.to_string(),
            client: ClientSnapshot {
                name: "Test Client".to_string(),
                address: "1 Test Street".to_string(),
                email: Some("test@example.com".to_string()),
                phone: Some("000".to_string()),
            },
            amount,
            client_id: None,
        }
    }

    #[test]
    fn test_onboarded_path_sets_scheduled_status() {
        let service = create_test_service();

        let quote = service.create_quote(sample_request("Office clean", 220.0), CustomerType::Onboarded);

        assert_eq!(quote.status, QuoteStatus::Scheduled);
        assert!(quote.is_client_onboarded);
    }

    #[test]
    fn test_non_onboarded_path_sets_sent_status() {
        let service = create_test_service();

        let quote =
            service.create_quote(sample_request("Office clean", 220.0), CustomerType::NonOnboarded);

        assert_eq!(quote.status, QuoteStatus::Sent);
        assert!(!quote.is_client_onboarded);
    }

    #[test]
    fn test_create_quote_prepends_with_fresh_ids() {
        let service = create_test_service();

        let first = service.create_quote(sample_request("First", 100.0), CustomerType::NonOnboarded);
        let second = service.create_quote(sample_request("Second", 200.0), CustomerType::NonOnboarded);

        let quotes = service.list_quotes();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].id, second.id);
        assert_eq!(quotes[1].id, first.id);
        assert_ne!(first.id, second.id);

        // The earlier quote is untouched
        assert_eq!(quotes[1].name, "First");
        assert_eq!(quotes[1].amount, 100.0);
    }

    #[test]
    fn test_blank_name_gets_fallback_label() {
        let service = create_test_service();

        let quote = service.create_quote(sample_request("   ", 50.0), CustomerType::NonOnboarded);

        assert_eq!(quote.name, DEFAULT_QUOTE_NAME);
    }

    #[test]
    fn test_bad_amount_is_coerced_to_zero() {
        let service = create_test_service();

        let negative = service.create_quote(sample_request("A", -10.0), CustomerType::NonOnboarded);
        let nan = service.create_quote(sample_request("B", f64::NAN), CustomerType::NonOnboarded);

        assert_eq!(negative.amount, 0.0);
        assert_eq!(nan.amount, 0.0);
    }

    #[test]
    fn test_status_filter_partitions_quotes() {
        let service = create_test_service();

        service.create_quote(sample_request("A", 1.0), CustomerType::Onboarded);
        service.create_quote(sample_request("B", 2.0), CustomerType::NonOnboarded);
        service.create_quote(sample_request("C", 3.0), CustomerType::Onboarded);

        let scheduled = service.quotes_with_status(QuoteStatus::Scheduled);
        let sent = service.quotes_with_status(QuoteStatus::Sent);

        assert_eq!(scheduled.len() + sent.len(), service.list_quotes().len());
        assert!(scheduled.iter().all(|q| q.status == QuoteStatus::Scheduled));
        assert!(sent.iter().all(|q| q.status == QuoteStatus::Sent));
        // Ordering within a tab follows the store's most-recent-first order
        assert_eq!(scheduled[0].name, "C");
        assert_eq!(scheduled[1].name, "A");
    }

    #[test]
    fn test_onboard_client_from_sent_quote() {
        let service = create_test_service();

        let quote =
            service.create_quote(sample_request("Window Cleaning", 150.0), CustomerType::NonOnboarded);

        let outcome = service.onboard_client(&quote.id).unwrap();

        assert_eq!(outcome.client.name, "Test Client");
        assert_eq!(outcome.client.address, "1 Test Street");
        assert_eq!(outcome.client.email, "test@example.com");
        assert!(outcome.message.contains("Test Client"));

        let updated = service.get_quote(&quote.id).unwrap();
        assert!(updated.is_client_onboarded);
        // Onboarding does not move the quote out of the sent tab
        assert_eq!(updated.status, QuoteStatus::Sent);
    }

    #[test]
    fn test_onboarding_substitutes_missing_contact_fields() {
        let service = create_test_service();

        let mut req = sample_request("Quote", 10.0);
        req.client.email = None;
        req.client.phone = None;
        let quote = service.create_quote(req, CustomerType::NonOnboarded);

        let outcome = service.onboard_client(&quote.id).unwrap();

        assert_eq!(outcome.client.email, MISSING_CONTACT_PLACEHOLDER);
        assert_eq!(outcome.client.phone, MISSING_CONTACT_PLACEHOLDER);
    }

    #[test]
    fn test_repeat_onboarding_is_rejected() {
        let service = create_test_service();

        let quote = service.create_quote(sample_request("Quote", 10.0), CustomerType::NonOnboarded);

        service.onboard_client(&quote.id).unwrap();
        let repeat = service.onboard_client(&quote.id);

        assert!(repeat.is_err());
    }

    #[test]
    fn test_convert_to_job_gate() {
        let service = create_test_service();

        let quote = service.create_quote(sample_request("Quote", 10.0), CustomerType::NonOnboarded);

        let refused = service.convert_to_job(&quote.id).unwrap();
        assert!(matches!(refused, JobConversion::Restricted { .. }));

        service.onboard_client(&quote.id).unwrap();

        let permitted = service.convert_to_job(&quote.id).unwrap();
        assert!(matches!(permitted, JobConversion::Started { .. }));
    }
}
