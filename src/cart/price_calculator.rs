use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places shown on a receipt
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Service for calculating line subtotals and cart totals
pub struct PriceCalculator;

impl PriceCalculator {
    /// Calculate subtotal for a line item
    ///
    /// # Arguments
    /// * `quantity` - Accumulated quantity for the product (may be negative)
    /// * `unit_price` - Price per item from the catalog
    ///
    /// # Returns
    /// Subtotal as Decimal (quantity * unit_price), unrounded. A product
    /// outside Decimal's range saturates to `Decimal::MAX` or `Decimal::MIN`.
    pub fn calculate_subtotal(quantity: i128, unit_price: Decimal) -> Decimal {
        if quantity == 0 || unit_price.is_zero() {
            return Decimal::ZERO;
        }

        Decimal::from_i128(quantity)
            .and_then(|quantity| quantity.checked_mul(unit_price))
            .unwrap_or_else(|| Self::saturate((quantity < 0) != unit_price.is_sign_negative()))
    }

    /// Calculate total price for a cart
    ///
    /// Sums the unrounded subtotals; rounding only happens at display time.
    /// A running sum that leaves Decimal's range saturates in the direction
    /// of the subtotal that overflowed it.
    pub fn calculate_total(subtotals: &[Decimal]) -> Decimal {
        subtotals.iter().fold(Decimal::ZERO, |total, &subtotal| {
            total
                .checked_add(subtotal)
                .unwrap_or_else(|| Self::saturate(subtotal.is_sign_negative()))
        })
    }

    fn saturate(negative: bool) -> Decimal {
        if negative {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    }

    /// Round an amount to two places, half away from zero
    ///
    /// A result that rounds to zero is returned as positive zero so it never
    /// renders as "-0.00".
    pub fn round_for_display(amount: Decimal) -> Decimal {
        let rounded = amount
            .round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            Decimal::ZERO
        } else {
            rounded
        }
    }
}
