pub mod price_calculator;
pub mod receipt;
pub mod shopping_cart;

pub use price_calculator::*;
pub use receipt::{ReceiptEntry, TOTAL_LABEL};
pub use shopping_cart::*;

/// Accumulates line items and renders them as a receipt
pub trait Cart {
    fn add_item(&mut self, product_code: &str, quantity: i64);

    /// Ordered receipt lines, the last one being the total line
    fn print_receipt(&mut self) -> Vec<String>;
}
