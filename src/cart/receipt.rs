// Receipt line rendering
//
// Entry:  "{code} - {quantity} - {currency}{subtotal:.2}"
// Total:  "TOTAL - - - {currency}{total:.2}"

use crate::cart::PriceCalculator;
use crate::models::Currency;
use rust_decimal::Decimal;

/// Label of the final receipt line
pub const TOTAL_LABEL: &str = "TOTAL";

/// One priced product line of a receipt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReceiptEntry<'a> {
    pub product_code: &'a str,
    pub quantity: i128,
    pub subtotal: Decimal,
}

impl ReceiptEntry<'_> {
    pub fn render(&self, currency: &Currency) -> String {
        format!(
            "{} - {} - {}",
            self.product_code,
            self.quantity,
            format_amount(currency, self.subtotal)
        )
    }
}

/// Currency symbol followed by the amount with exactly two decimals
pub fn format_amount(currency: &Currency, amount: Decimal) -> String {
    format!(
        "{}{:.2}",
        currency,
        PriceCalculator::round_for_display(amount)
    )
}

pub fn total_line(currency: &Currency, total: Decimal) -> String {
    format!("{} - - - {}", TOTAL_LABEL, format_amount(currency, total))
}
