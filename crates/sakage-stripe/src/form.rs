//! Form encoding for the Stripe REST API.
//!
//! Stripe takes `application/x-www-form-urlencoded` bodies with bracketed
//! keys for nested structures (`line_items[0][price_data][unit_amount]`).
//! Building the pairs by hand keeps the mapping explicit; `reqwest::form`
//! handles the percent-encoding.

use crate::types::SessionRequest;

/// Flattens a session request into ordered form pairs for
/// `POST /v1/checkout/sessions`.
#[must_use]
pub fn session_form(request: &SessionRequest) -> Vec<(String, String)> {
    let mut form = vec![
        ("mode".to_string(), "payment".to_string()),
        ("payment_method_types[0]".to_string(), "card".to_string()),
        ("success_url".to_string(), request.success_url.clone()),
        ("cancel_url".to_string(), request.cancel_url.clone()),
        (
            "customer_email".to_string(),
            request.customer.email.clone(),
        ),
    ];

    for (i, country) in request.allowed_countries.iter().enumerate() {
        form.push((
            format!("shipping_address_collection[allowed_countries][{i}]"),
            country.clone(),
        ));
    }

    for (i, line) in request.line_items.iter().enumerate() {
        form.push((
            format!("line_items[{i}][price_data][currency]"),
            "usd".to_string(),
        ));
        form.push((
            format!("line_items[{i}][price_data][product_data][name]"),
            line.name.clone(),
        ));
        form.push((
            format!("line_items[{i}][price_data][unit_amount]"),
            line.unit_amount.to_string(),
        ));
        form.push((format!("line_items[{i}][quantity]"), line.quantity.to_string()));
    }

    form.push((
        "metadata[customer_name]".to_string(),
        request.customer.name.clone(),
    ));
    form.push((
        "metadata[customer_phone]".to_string(),
        request.customer.phone.clone(),
    ));
    form.push((
        "metadata[delivery_address]".to_string(),
        request.customer.address.clone(),
    ));
    form.push((
        "metadata[delivery_instructions]".to_string(),
        request.customer.instructions.clone().unwrap_or_default(),
    ));

    form
}

#[cfg(test)]
mod tests {
    use crate::types::{CustomerDetails, LineItem};

    use super::*;

    fn request() -> SessionRequest {
        SessionRequest {
            line_items: vec![
                LineItem {
                    name: "BBQ Pork Sandwich".to_string(),
                    unit_amount: 1499,
                    quantity: 1,
                },
                LineItem {
                    name: "Delivery Fee".to_string(),
                    unit_amount: 799,
                    quantity: 1,
                },
            ],
            success_url: "https://sakage.online/success".to_string(),
            cancel_url: "https://sakage.online/order".to_string(),
            allowed_countries: vec!["US".to_string()],
            customer: CustomerDetails {
                name: "Felisa R".to_string(),
                email: "felisa@example.com".to_string(),
                phone: "555-0100".to_string(),
                address: "12 Main St, Columbia".to_string(),
                instructions: None,
            },
            idempotency_key: None,
        }
    }

    fn value_of<'a>(form: &'a [(String, String)], key: &str) -> Option<&'a str> {
        form.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn encodes_payment_mode_and_redirects() {
        let form = session_form(&request());
        assert_eq!(value_of(&form, "mode"), Some("payment"));
        assert_eq!(value_of(&form, "payment_method_types[0]"), Some("card"));
        assert_eq!(
            value_of(&form, "success_url"),
            Some("https://sakage.online/success")
        );
        assert_eq!(
            value_of(&form, "cancel_url"),
            Some("https://sakage.online/order")
        );
        assert_eq!(
            value_of(&form, "shipping_address_collection[allowed_countries][0]"),
            Some("US")
        );
    }

    #[test]
    fn encodes_each_line_item_with_index() {
        let form = session_form(&request());
        assert_eq!(
            value_of(&form, "line_items[0][price_data][product_data][name]"),
            Some("BBQ Pork Sandwich")
        );
        assert_eq!(
            value_of(&form, "line_items[0][price_data][unit_amount]"),
            Some("1499")
        );
        assert_eq!(value_of(&form, "line_items[0][quantity]"), Some("1"));
        assert_eq!(
            value_of(&form, "line_items[1][price_data][product_data][name]"),
            Some("Delivery Fee")
        );
        assert_eq!(
            value_of(&form, "line_items[1][price_data][unit_amount]"),
            Some("799")
        );
    }

    #[test]
    fn missing_instructions_encode_as_empty_metadata() {
        let form = session_form(&request());
        assert_eq!(value_of(&form, "metadata[customer_name]"), Some("Felisa R"));
        assert_eq!(value_of(&form, "metadata[delivery_instructions]"), Some(""));
    }
}
