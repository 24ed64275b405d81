use crate::cart::receipt::{self, ReceiptEntry};
use crate::cart::{Cart, PriceCalculator};
use crate::models::{Currency, PriceCatalog};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::sync::Arc;

/// One shopper's cart
///
/// Quantities are kept per product code in first-add order, widened to i128 so
/// any run of i64 adds sums exactly. The receipt and total are a cache that
/// `print_receipt` rebuilds from scratch every call.
#[derive(Debug, Clone)]
pub struct ShoppingCart {
    items: IndexMap<String, i128>,
    receipt: Vec<String>,
    total_price: Decimal,
    currency: Currency,
    prices: Arc<PriceCatalog>,
}

impl ShoppingCart {
    /// Create an empty cart over its own catalog
    pub fn new(prices: PriceCatalog, currency: impl Into<Currency>) -> Self {
        Self::with_shared_catalog(Arc::new(prices), currency.into())
    }

    /// Create an empty cart over a catalog shared with other carts
    pub fn with_shared_catalog(prices: Arc<PriceCatalog>, currency: Currency) -> Self {
        Self {
            items: IndexMap::new(),
            receipt: Vec::new(),
            total_price: Decimal::ZERO,
            currency,
            prices,
        }
    }

    /// Add `quantity` of a product, accumulating onto any earlier adds
    ///
    /// A product keeps the position of its first add. Negative quantities
    /// are accepted and reduce the accumulated count.
    pub fn add_item(&mut self, product_code: &str, quantity: i64) {
        // i128 only saturates after 2^64 maximal i64 adds
        match self.items.get_mut(product_code) {
            Some(current) => *current = current.saturating_add(i128::from(quantity)),
            None => {
                self.items.insert(product_code.to_string(), i128::from(quantity));
            }
        }
        tracing::debug!("Added {} x {} to cart", quantity, product_code);
    }

    /// Recompute and return the receipt, one line per product then the total
    pub fn print_receipt(&mut self) -> Vec<String> {
        self.compute_receipt();
        self.receipt.clone()
    }

    fn compute_receipt(&mut self) {
        self.receipt.clear();
        self.total_price = Decimal::ZERO;

        let mut subtotals = Vec::with_capacity(self.items.len());
        for (product_code, &quantity) in &self.items {
            let unit_price = match self.prices.get(product_code) {
                Some(price) => price,
                None => {
                    tracing::debug!("No price for {}, using 0", product_code);
                    Decimal::ZERO
                }
            };
            let entry = ReceiptEntry {
                product_code,
                quantity,
                subtotal: PriceCalculator::calculate_subtotal(quantity, unit_price),
            };
            subtotals.push(entry.subtotal);
            self.receipt.push(entry.render(&self.currency));
        }

        self.total_price = PriceCalculator::calculate_total(&subtotals);
        self.receipt
            .push(receipt::total_line(&self.currency, self.total_price));
    }

    /// Lines from the last `print_receipt`, empty before the first one
    pub fn receipt(&self) -> &[String] {
        &self.receipt
    }

    /// Unrounded total from the last `print_receipt`
    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    /// Accumulated quantities in first-add order
    pub fn items(&self) -> impl Iterator<Item = (&str, i128)> + '_ {
        self.items
            .iter()
            .map(|(code, &quantity)| (code.as_str(), quantity))
    }

    pub fn quantity_of(&self, product_code: &str) -> Option<i128> {
        self.items.get(product_code).copied()
    }

    /// Number of distinct product codes
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn prices(&self) -> &PriceCatalog {
        &self.prices
    }

    pub(crate) fn shared_prices(&self) -> &Arc<PriceCatalog> {
        &self.prices
    }
}

impl Cart for ShoppingCart {
    fn add_item(&mut self, product_code: &str, quantity: i64) {
        ShoppingCart::add_item(self, product_code, quantity);
    }

    fn print_receipt(&mut self) -> Vec<String> {
        ShoppingCart::print_receipt(self)
    }
}
