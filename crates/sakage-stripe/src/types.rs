use serde::Deserialize;

/// One priced line of a checkout session, already converted to minor units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub name: String,
    /// Cents. Stripe only accepts integer amounts.
    pub unit_amount: i64,
    pub quantity: u32,
}

/// Contact details carried into Stripe metadata for manual fulfillment.
#[derive(Debug, Clone)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub instructions: Option<String>,
}

/// Everything Stripe needs to host a checkout page for one order.
#[derive(Debug, Clone)]
pub struct SessionRequest {
    pub line_items: Vec<LineItem>,
    pub success_url: String,
    pub cancel_url: String,
    pub allowed_countries: Vec<String>,
    pub customer: CustomerDetails,
    /// Forwarded as the `Idempotency-Key` header so a double-submitted order
    /// resolves to one session instead of two charges.
    pub idempotency_key: Option<String>,
}

/// The provider-issued session handle. Owned by Stripe once created; the
/// client only ever redirects with the id.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}
