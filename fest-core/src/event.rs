//! Festival event types.
//!
//! `EventRecord` is the catalog's immutable description of an event.
//! `CartLineItem` is the denormalized snapshot stored in the cart and in
//! the registered-events list, so prices are captured when an event is added.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A festival event as declared in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    #[serde(default)]
    pub rules: Vec<String>,

    /// Display string, e.g. "March 13-14, 2026". Not parsed.
    pub date: String,
    pub time: String,
    pub venue: String,

    /// Whole rupees
    pub price: u32,

    #[serde(default = "default_requires_registration")]
    pub requires_registration: bool,
    #[serde(default)]
    pub is_flagship: bool,
    #[serde(default)]
    pub is_external: bool,

    /// First day of the event, used for per-event countdowns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_on: Option<NaiveDate>,

    /// Poster path or URL shown on the detail view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn default_requires_registration() -> bool {
    true
}

impl EventRecord {
    /// Build the cart snapshot for this event.
    pub fn line_item(&self) -> CartLineItem {
        CartLineItem::from(self)
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The closed set of event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Cultural,
    Technical,
    Sports,
    Food,
    Moto,
    Annual,
    AnnualDay,
    CollegeBand,
    Extra,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Cultural,
        Category::Technical,
        Category::Sports,
        Category::Food,
        Category::Moto,
        Category::Annual,
        Category::AnnualDay,
        Category::CollegeBand,
        Category::Extra,
    ];

    /// Key used in catalog files and persisted line items.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Cultural => "cultural",
            Category::Technical => "technical",
            Category::Sports => "sports",
            Category::Food => "food",
            Category::Moto => "moto",
            Category::Annual => "annual",
            Category::AnnualDay => "annual-day",
            Category::CollegeBand => "college-band",
            Category::Extra => "extra",
        }
    }

    /// Human-readable name for listings.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Cultural => "Cultural",
            Category::Technical => "Technical",
            Category::Sports => "Sports",
            Category::Food => "Food Fest",
            Category::Moto => "Moto Mania",
            Category::Annual => "Annual",
            Category::AnnualDay => "Annual Day",
            Category::CollegeBand => "College Band",
            Category::Extra => "Extra",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| format!("Unknown category '{}'", s))
    }
}

/// A cart or registered-events entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub date: String,
    pub price: u32,
}

impl From<&EventRecord> for CartLineItem {
    fn from(event: &EventRecord) -> Self {
        CartLineItem {
            id: event.id.clone(),
            name: event.name.clone(),
            category: event.category,
            date: event.date.clone(),
            price: event.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_keys_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.key().parse::<Category>().unwrap(), category);
        }
        assert!("karaoke".parse::<Category>().is_err());
    }

    #[test]
    fn line_item_serializes_to_flat_json() {
        let item = CartLineItem {
            id: "food-fest".into(),
            name: "Food Fest".into(),
            category: Category::Food,
            date: "March 13-14, 2026".into(),
            price: 100,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "food-fest");
        assert_eq!(json["category"], "food");
        assert_eq!(json["price"], 100);
    }

    #[test]
    fn multi_word_categories_use_kebab_case() {
        let json = serde_json::to_string(&Category::CollegeBand).unwrap();
        assert_eq!(json, "\"college-band\"");
    }
}
