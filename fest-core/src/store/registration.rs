//! Cart and registered-events store.

use std::sync::Arc;

use crate::error::FestResult;
use crate::event::CartLineItem;
use crate::storage::{self, CART_KEY, KeyValueStore, REGISTERED_KEY};
use crate::store::cart::{Cart, Registered};

/// Owns the cart and the confirmed registrations.
///
/// A line item moves `absent -> in cart -> registered`. Every mutation
/// writes the affected value back to storage before returning.
pub struct RegistrationStore {
    storage: Arc<dyn KeyValueStore>,
    cart: Cart,
    registered: Registered,
}

impl RegistrationStore {
    /// Hydrate both lists from storage. Missing or malformed values start empty.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let cart = storage::load_or_default(storage.as_ref(), CART_KEY);
        let registered = storage::load_or_default(storage.as_ref(), REGISTERED_KEY);

        RegistrationStore {
            storage,
            cart,
            registered,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn registered(&self) -> &Registered {
        &self.registered
    }

    /// No-op if the id is already in the cart.
    pub fn add_to_cart(&mut self, item: CartLineItem) -> FestResult<bool> {
        let id = item.id.clone();
        if !self.cart.add(item) {
            return Ok(false);
        }
        self.save_cart()?;
        log::info!("Added '{}' to cart", id);
        Ok(true)
    }

    /// No-op if the id isn't in the cart.
    pub fn remove_from_cart(&mut self, id: &str) -> FestResult<bool> {
        if !self.cart.remove(id) {
            return Ok(false);
        }
        self.save_cart()?;
        log::info!("Removed '{}' from cart", id);
        Ok(true)
    }

    pub fn is_in_cart(&self, id: &str) -> bool {
        self.cart.contains(id)
    }

    pub fn clear_cart(&mut self) -> FestResult<()> {
        self.cart.clear();
        self.save_cart()
    }

    /// Move every cart item into the registered list, skipping ids that
    /// are already registered, then empty the cart. Returns the number of
    /// newly registered events.
    ///
    /// The registered list is persisted before the cart is cleared, so an
    /// interruption between the two writes can duplicate an item across
    /// both lists but never lose it.
    pub fn confirm_registration(&mut self) -> FestResult<usize> {
        let added = self.registered.absorb(self.cart.items());
        self.save_registered()?;

        self.cart.clear();
        self.save_cart()?;

        log::info!("Confirmed registration of {} event(s)", added);
        Ok(added)
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.registered.contains(id)
    }

    /// Drop a registration, e.g. one confirmed by mistake.
    pub fn remove_from_registered(&mut self, id: &str) -> FestResult<bool> {
        if !self.registered.remove(id) {
            return Ok(false);
        }
        self.save_registered()?;
        log::info!("Removed registration for '{}'", id);
        Ok(true)
    }

    pub fn cart_total(&self) -> u64 {
        self.cart.total()
    }

    pub fn registered_total(&self) -> u64 {
        self.registered.total()
    }

    fn save_cart(&self) -> FestResult<()> {
        storage::save(self.storage.as_ref(), CART_KEY, &self.cart)
    }

    fn save_registered(&self) -> FestResult<()> {
        storage::save(self.storage.as_ref(), REGISTERED_KEY, &self.registered)
    }
}
