pub mod cart;
pub mod checkout;
pub mod countdown;
pub mod events;
pub mod gallery;
pub mod profile;
pub mod show;

/// How often a watched countdown redraws
pub const TICK_PERIOD: std::time::Duration = std::time::Duration::from_secs(1);
