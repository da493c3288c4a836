//! Demo seed data
//!
//! The fixed snapshot a fresh session boots from. This stands in for a
//! persistence layer: state always resets to this data on restart.

use super::models::{Client, Quote, QuoteStatus};
use super::session::SessionStore;

/// The clients present in the directory at session start
pub fn initial_clients() -> Vec<Client> {
    vec![
        client("1", "amit g", "Surbiton, UK", "amit.g@example.com", "+44 123 456 789"),
        client(
            "2",
            "sachin Chauhan",
            "43 New Cross Rd, London SE14 5FP, UK",
            "sachin.c@example.com",
            "+44 987 654 321",
        ),
        client(
            "3",
            "amanda test",
            "16 Croham Road South Croydon",
            "amanda.t@example.com",
            "+44 555 000 111",
        ),
    ]
}

/// The quotes present at session start, most recent first
pub fn initial_quotes() -> Vec<Quote> {
    vec![
        scheduled(
            "0",
            "Office maintenance",
            "Aditya Rajput",
            "26 Geoffrey Close, Coventry, West Mi...",
            None,
            "Mon, 2 Feb 2026",
            220.00,
        ),
        scheduled(
            "1",
            "House cleaning",
            "amit g",
            "Surbiton, UK",
            Some("1"),
            "Fri, Jan 30, 2026",
            660.00,
        ),
        scheduled(
            "2",
            "Test Location",
            "sachin Chauhan",
            "43 New Cross Rd, London SE14 5FP, UK",
            Some("2"),
            "Thu, Nov 20, 2025",
            1100.00,
        ),
        // Sent quotes for non-onboarded customers
        sent(
            "sent-1",
            "Window Cleaning",
            "Michael Scott",
            "1725 Slough Avenue, Scranton, PA",
            "michael.scott@dundermifflin.com",
            "570-555-0123",
            "Mon, 10 Nov 2025",
            150.00,
        ),
        sent(
            "sent-2",
            "Deep Kitchen Clean",
            "Gordon Ramsay",
            "15 Royal Hospital Rd, London, UK",
            "gordon.r@restaurant.com",
            "+44 20 7352 4441",
            "Wed, 12 Nov 2025",
            450.00,
        ),
        sent(
            "sent-3",
            "Office Sanitization",
            "Elon Musk",
            "1 Rocket Rd, Hawthorne, CA",
            "elon@spacex.com",
            "310-363-6000",
            "Fri, 14 Nov 2025",
            800.00,
        ),
        sent(
            "sent-4",
            "Post-Renovation Clean",
            "Joanna Gaines",
            "601 Webster Ave, Waco, TX",
            "joanna@magnolia.com",
            "254-235-0603",
            "Sun, 16 Nov 2025",
            1200.00,
        ),
        sent(
            "sent-5",
            "Carpet Steam Clean",
            "Jeff Bezos",
            "1200 12th Ave S, Seattle, WA",
            "jeff@amazon.com",
            "206-266-1000",
            "Tue, 18 Nov 2025",
            300.00,
        ),
        sent(
            "sent-6",
            "Regular Maintenance",
            "Bill Gates",
            "1835 73rd Ave NE, Medina, WA",
            "bill@gatesfoundation.org",
            "425-882-8080",
            "Thu, 20 Nov 2025",
            200.00,
        ),
        sent(
            "sent-7",
            "Gutter Cleaning",
            "Mark Zuckerberg",
            "1 Hacker Way, Menlo Park, CA",
            "zuck@meta.com",
            "650-543-4800",
            "Sat, 22 Nov 2025",
            175.00,
        ),
    ]
}

/// A store loaded with the demo snapshot
pub fn seeded_store() -> SessionStore {
    SessionStore::with_snapshot(initial_clients(), initial_quotes())
}

fn client(id: &str, name: &str, address: &str, email: &str, phone: &str) -> Client {
    Client {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
    }
}

fn scheduled(
    id: &str,
    name: &str,
    client_name: &str,
    client_address: &str,
    client_id: Option<&str>,
    scheduled_date: &str,
    amount: f64,
) -> Quote {
    Quote {
        id: id.to_string(),
        name: name.to_string(),
        client_name: client_name.to_string(),
        client_address: client_address.to_string(),
        client_email: None,
        client_phone: None,
        client_id: client_id.map(str::to_string),
        scheduled_date: scheduled_date.to_string(),
        amount,
        status: QuoteStatus::Scheduled,
        is_client_onboarded: true,
    }
}

#[allow(clippy::too_many_arguments)]
fn sent(
    id: &str,
    name: &str,
    client_name: &str,
    client_address: &str,
    client_email: &str,
    client_phone: &str,
    scheduled_date: &str,
    amount: f64,
) -> Quote {
    Quote {
        id: id.to_string(),
        name: name.to_string(),
        client_name: client_name.to_string(),
        client_address: client_address.to_string(),
        client_email: Some(client_email.to_string()),
        client_phone: Some(client_phone.to_string()),
        client_id: None,
        scheduled_date: scheduled_date.to_string(),
        amount,
        status: QuoteStatus::Sent,
        is_client_onboarded: false,
    }
}
