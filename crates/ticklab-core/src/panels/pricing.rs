//! Price calculator panel.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Default tax rate (8%).
pub const DEFAULT_TAX_RATE: f64 = 0.08;

/// Total price including tax.
pub fn total_price(price: f64, quantity: u32, tax_rate: f64) -> f64 {
    let subtotal = price * quantity as f64;
    subtotal + subtotal * tax_rate
}

/// Result of one checkout calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub price: f64,
    pub quantity: u32,
    pub tax_rate: f64,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    /// Panel text, e.g. `Total (including 8% tax): $21.60`
    pub summary: String,
}

impl Receipt {
    pub fn new(price: f64, quantity: u32, tax_rate: f64) -> Self {
        let subtotal = price * quantity as f64;
        let tax = subtotal * tax_rate;
        let total = subtotal + tax;
        Self {
            price,
            quantity,
            tax_rate,
            subtotal,
            tax,
            total,
            summary: format!(
                "Total (including {:.0}% tax): ${:.2}",
                tax_rate * 100.0,
                total
            ),
        }
    }
}

/// Parse raw panel inputs and compute the receipt.
///
/// Price must be a positive number. An unparseable quantity falls back
/// to 1, mirroring the panel's behavior.
pub fn checkout(price_input: &str, quantity_input: &str) -> Result<Receipt, ValidationError> {
    let price: f64 = price_input
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber {
            field: "price".into(),
        })?;
    if !price.is_finite() || price <= 0.0 {
        return Err(ValidationError::NonPositive {
            field: "price".into(),
        });
    }
    let quantity: u32 = quantity_input.trim().parse().unwrap_or(1);
    Ok(Receipt::new(price, quantity, DEFAULT_TAX_RATE))
}
