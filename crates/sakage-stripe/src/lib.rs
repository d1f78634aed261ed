//! Stripe Checkout integration for the Sakage ordering backend.
//!
//! Builds priced line items from the authoritative menu catalog and creates
//! hosted Checkout Sessions through the Stripe REST API. The client takes a
//! base-URL override so tests can point it at a wiremock server.

pub mod client;
pub mod error;
pub mod form;
pub mod session;
pub mod types;

pub use client::StripeClient;
pub use error::{CheckoutError, StripeError};
pub use session::build_line_items;
pub use types::{CheckoutSession, CustomerDetails, LineItem, SessionRequest};
