//! Quantity-keyed line-item accumulation over the product catalog.
//!
//! A cart holds at most one line per distinct product; adding an existing
//! product bumps its quantity instead of appending a duplicate. Each line
//! snapshots the product price at add time so a stored bill's total is
//! immune to later catalog price changes.

use crate::model::bill::CartLine;
use crate::model::notification::Notification;
use crate::model::product::Product;
use crate::notify::Notifier;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds one unit of `product`. An existing line for the product gains a
    /// unit with its price snapshot untouched; otherwise a new line starts at
    /// quantity 1 with the price captured now. Returns the line id.
    pub fn add_item(&mut self, product: &Product) -> Uuid {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity += 1;
            return line.id;
        }
        let line = CartLine {
            id: Uuid::new_v4(),
            product_id: product.id,
            quantity: 1,
            price: product.price,
        };
        let id = line.id;
        self.lines.push(line);
        id
    }

    /// Replaces a line's quantity. Quantities below 1 are rejected silently,
    /// as is an unknown line id.
    pub fn set_quantity(&mut self, line_id: Uuid, quantity: u32) {
        if quantity < 1 {
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == line_id) {
            line.quantity = quantity;
        }
    }

    /// Removes a line unconditionally, returning it when it existed.
    pub fn remove_item(&mut self, line_id: Uuid) -> Option<CartLine> {
        let index = self.lines.iter().position(|l| l.id == line_id)?;
        Some(self.lines.remove(index))
    }

    /// Bill total over the snapshotted line prices, not the live catalog.
    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .map(|l| l.price * l.quantity as f64)
            .sum()
    }

    pub fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }
}

impl From<Vec<CartLine>> for Cart {
    fn from(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }
}

/// Adds a product and raises the "added" toast, as the billing screen does.
pub fn add_to_cart(cart: &mut Cart, product: &Product, notifier: &Notifier) -> Uuid {
    let id = cart.add_item(product);
    notifier.notify(Notification::success(format!(
        "Added {} to cart",
        product.name
    )));
    id
}

/// Removes a line and raises the red-styled toast. The error kind is a UI
/// severity tag, not a failure signal.
pub fn remove_from_cart(cart: &mut Cart, line_id: Uuid, notifier: &Notifier) -> Option<CartLine> {
    let removed = cart.remove_item(line_id);
    notifier.notify(Notification::error("Item removed from cart"));
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::notification::NotificationKind;

    fn product(name: &str, price: f64) -> Product {
        Product::new(name.into(), price, 10, "Pipes".into(), None, None, None).unwrap()
    }

    #[test]
    fn empty_cart_totals_zero() {
        assert_eq!(Cart::new().total(), 0.0);
    }

    #[test]
    fn adding_same_product_twice_merges_into_one_line() {
        let mut cart = Cart::new();
        let pipe = product("Pipe", 49.99);
        cart.add_item(&pipe);
        cart.add_item(&pipe);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total(), 99.98);
    }

    #[test]
    fn distinct_products_get_their_own_lines() {
        let mut cart = Cart::new();
        cart.add_item(&product("Pipe", 10.0));
        cart.add_item(&product("Tape", 2.99));
        assert_eq!(cart.lines().len(), 2);
    }

    #[test]
    fn set_quantity_below_one_is_rejected() {
        let mut cart = Cart::new();
        let id = cart.add_item(&product("Pipe", 10.0));
        cart.set_quantity(id, 0);
        assert_eq!(cart.lines()[0].quantity, 1);
        cart.set_quantity(id, 4);
        assert_eq!(cart.lines()[0].quantity, 4);
    }

    #[test]
    fn total_uses_the_price_snapshot() {
        let mut catalog_product = product("Pipe", 10.0);
        let mut cart = Cart::new();
        cart.add_item(&catalog_product);
        // Catalog price changes after the item was added.
        catalog_product.price = 99.0;
        assert_eq!(cart.total(), 10.0);
    }

    #[test]
    fn merged_line_keeps_the_original_snapshot() {
        let mut catalog_product = product("Pipe", 10.0);
        let mut cart = Cart::new();
        cart.add_item(&catalog_product);
        catalog_product.price = 99.0;
        cart.add_item(&catalog_product);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total(), 20.0);
    }

    #[test]
    fn remove_emits_an_error_styled_toast() {
        let notifier = Notifier::new();
        let mut cart = Cart::new();
        let id = cart.add_item(&product("Pipe", 10.0));
        let removed = remove_from_cart(&mut cart, id, &notifier);
        assert!(removed.is_some());
        assert!(cart.is_empty());
        let toast = notifier.current().unwrap();
        assert_eq!(toast.kind, NotificationKind::Error);
        assert_eq!(toast.message, "Item removed from cart");
    }

    #[test]
    fn add_emits_a_success_toast() {
        let notifier = Notifier::new();
        let mut cart = Cart::new();
        add_to_cart(&mut cart, &product("Pipe", 10.0), &notifier);
        let toast = notifier.current().unwrap();
        assert_eq!(toast.kind, NotificationKind::Success);
        assert_eq!(toast.message, "Added Pipe to cart");
    }
}
