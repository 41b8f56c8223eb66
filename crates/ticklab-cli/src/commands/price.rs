use ticklab_core::panels::pricing::{self, Receipt};

pub fn run(
    price: &str,
    quantity: &str,
    tax_rate: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let receipt = pricing::checkout(price, quantity)?;
    let receipt = match tax_rate {
        Some(rate) => Receipt::new(receipt.price, receipt.quantity, rate),
        None => receipt,
    };
    println!("{}", serde_json::to_string_pretty(&receipt)?);
    Ok(())
}
