//! Core types for the fest app.
//!
//! This crate provides everything the `fest` CLI works with:
//! - `catalog` with the festival's event records
//! - `store` with the cart, registration, visited and profile stores
//! - `storage` with the durable key-value backends the stores write to
//! - `countdown` and `ticker` for the festival countdown
//! - `preload` for warming up gallery assets

pub mod catalog;
pub mod config;
pub mod countdown;
pub mod error;
pub mod event;
pub mod fest;
pub mod preload;
pub mod storage;
pub mod store;
pub mod ticker;

pub use error::{FestError, FestResult};
pub use event::*;
