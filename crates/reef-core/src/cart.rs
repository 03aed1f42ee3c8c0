//! # Cart Types
//!
//! The mutable collection of selected items for one buyer session.
//! Adding merges into an existing line item or appends; removing deletes
//! whole line items by product id.

use crate::product::{Price, Product};
use serde::{Deserialize, Serialize};

/// A line item: one product identity with an accumulated quantity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// Product ID
    pub product_id: String,

    /// Product name (denormalized for display and the operator summary)
    pub name: String,

    /// Unit price at the time the item was added
    pub unit_price: Price,

    /// Quantity, always >= 1
    pub quantity: u32,
}

impl CartItem {
    /// Create a line item from a product
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
        }
    }

    /// Line identity is the (product id, name) pair; both must match for
    /// two entries to merge
    pub fn same_line(&self, product: &Product) -> bool {
        self.product_id == product.id && self.name == product.name
    }

    /// Total price for this line
    pub fn line_total(&self) -> Price {
        Price(self.unit_price.amount() * self.quantity as u64)
    }
}

/// Sum of price x quantity over a sequence of line items.
/// Pure; shared by the live cart and captured checkout intents.
pub fn total_price(items: &[CartItem]) -> Price {
    Price(
        items
            .iter()
            .map(|i| i.unit_price.amount() * i.quantity as u64)
            .sum(),
    )
}

/// Insertion-ordered cart owned by a single buyer session
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Merge into an existing line item or append a new one at the end.
    /// Quantity is a caller contract: callers pass a positive count.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.same_line(product)) {
            existing.quantity += quantity;
        } else {
            self.items.push(CartItem::from_product(product, quantity));
        }
    }

    /// Remove every line item with this product id. No-op when absent.
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product_id != product_id);
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Owned copy of the current contents, taken at checkout start so a
    /// captured intent never tracks later cart mutation
    pub fn snapshot(&self) -> Vec<CartItem> {
        self.items.clone()
    }

    /// Sum of quantities across all line items (display badge count)
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Current cart total
    pub fn total(&self) -> Price {
        total_price(&self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
