//! Formatting helpers shared by the views

/// Format a price in dollars with two decimals, e.g. `$12.99`
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
