use sakage_core::{MenuCatalog, Money};

use crate::error::CheckoutError;
use crate::types::LineItem;

/// Resolves ordered item ids into priced checkout lines.
///
/// Every id must resolve against the authoritative catalog; one unknown id
/// fails the whole order. A synthetic `Delivery Fee` line is always appended,
/// and a `Tip` line only when the tip is strictly positive. All quantities
/// are 1 (the storefront adds an item id once per unit).
///
/// # Errors
///
/// - [`CheckoutError::EmptyOrder`] when no item ids were given.
/// - [`CheckoutError::Menu`] naming the first unresolvable id.
/// - [`CheckoutError::NegativeAmount`] for a negative tip or delivery fee.
/// - [`CheckoutError::Money`] if an amount cannot be converted to cents.
pub fn build_line_items(
    catalog: &MenuCatalog,
    item_ids: &[u32],
    delivery_fee: Money,
    tip: Option<Money>,
) -> Result<Vec<LineItem>, CheckoutError> {
    if item_ids.is_empty() {
        return Err(CheckoutError::EmptyOrder);
    }
    if delivery_fee.is_negative() {
        return Err(CheckoutError::NegativeAmount {
            field: "delivery fee",
        });
    }
    if tip.is_some_and(|t| t.is_negative()) {
        return Err(CheckoutError::NegativeAmount { field: "tip" });
    }

    let mut lines = Vec::with_capacity(item_ids.len() + 2);
    for &id in item_ids {
        let item = catalog.resolve(id)?;
        lines.push(LineItem {
            name: item.name.clone(),
            unit_amount: item.price.minor_units()?,
            quantity: 1,
        });
    }

    lines.push(LineItem {
        name: "Delivery Fee".to_string(),
        unit_amount: delivery_fee.minor_units()?,
        quantity: 1,
    });

    if let Some(tip) = tip.filter(Money::is_positive) {
        lines.push(LineItem {
            name: "Tip".to_string(),
            unit_amount: tip.minor_units()?,
            quantity: 1,
        });
    }

    Ok(lines)
}
