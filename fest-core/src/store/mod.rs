//! Session stores backed by durable storage.
//!
//! Each store keeps its value in memory and writes the whole value to its
//! storage key after every mutation. The value types (`Cart`, `Registered`,
//! `Visited`, `UserProfile`) hold the pure transitions and can be used
//! without any storage.

mod cart;
mod profile;
mod registration;
mod visited;

pub use cart::{Cart, Registered};
pub use profile::{ProfilePatch, ProfileStore, UserProfile};
pub use registration::RegistrationStore;
pub use visited::{Visited, VisitedTracker};
