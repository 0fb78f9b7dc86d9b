//! Cart and registered-events values.

use serde::{Deserialize, Serialize};

use crate::event::CartLineItem;

/// Selected but unconfirmed registrations, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Append `item` unless its id is already in the cart.
    /// Returns true if the cart changed.
    pub fn add(&mut self, item: CartLineItem) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Returns true if the cart changed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn total(&self) -> u64 {
        total(&self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Confirmed registrations, in confirmation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registered {
    items: Vec<CartLineItem>,
}

impl Registered {
    /// Append every item whose id isn't registered yet, keeping the given
    /// order. Returns how many were added.
    pub fn absorb<'a>(&mut self, items: impl IntoIterator<Item = &'a CartLineItem>) -> usize {
        let mut added = 0;
        for item in items {
            if !self.contains(&item.id) {
                self.items.push(item.clone());
                added += 1;
            }
        }
        added
    }

    /// Returns true if the list changed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn total(&self) -> u64 {
        total(&self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn total(items: &[CartLineItem]) -> u64 {
    items.iter().map(|item| u64::from(item.price)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Category;

    fn item(id: &str, price: u32) -> CartLineItem {
        CartLineItem {
            id: id.to_string(),
            name: id.to_string(),
            category: Category::Cultural,
            date: "March 14, 2026".to_string(),
            price,
        }
    }

    #[test]
    fn add_is_idempotent() {
        let mut once = Cart::default();
        once.add(item("fashion-show", 350));

        let mut twice = Cart::default();
        assert!(twice.add(item("fashion-show", 350)));
        assert!(!twice.add(item("fashion-show", 350)));

        assert_eq!(once, twice);
        assert_eq!(twice.len(), 1);
    }

    #[test]
    fn add_keeps_insertion_order() {
        let mut cart = Cart::default();
        cart.add(item("robo-wars", 250));
        cart.add(item("quiz-competition", 100));
        cart.add(item("art-exhibition", 120));

        let ids: Vec<_> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["robo-wars", "quiz-competition", "art-exhibition"]);
        assert_eq!(cart.total(), 470);
    }

    #[test]
    fn remove_absent_id_leaves_cart_unchanged() {
        let mut cart = Cart::default();
        cart.add(item("debate-competition", 100));
        let before = cart.clone();

        assert!(!cart.remove("comedy-show"));
        assert_eq!(cart, before);
    }

    #[test]
    fn absorb_skips_already_registered_ids() {
        let mut registered = Registered::default();
        registered.absorb([&item("hackathon", 200)]);

        let added = registered.absorb([&item("masterchef", 200), &item("hackathon", 200)]);
        assert_eq!(added, 1);

        let ids: Vec<_> = registered.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["hackathon", "masterchef"]);
        assert_eq!(registered.total(), 400);
    }

    #[test]
    fn registered_keeps_price_captured_at_add_time() {
        let mut registered = Registered::default();
        registered.absorb([&item("singing-solo", 150)]);
        registered.absorb([&item("singing-solo", 999)]);
        assert_eq!(registered.total(), 150);
    }

    #[test]
    fn total_does_not_wrap_on_large_prices() {
        let mut cart = Cart::default();
        cart.add(item("hand-edited-a", u32::MAX));
        cart.add(item("hand-edited-b", u32::MAX));
        assert_eq!(cart.total(), 2 * u64::from(u32::MAX));
    }
}
