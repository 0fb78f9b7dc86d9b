//! TUI rendering traits for fest types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to fest-core types using owo_colors.

use fest_core::countdown::{CountdownState, CountdownStatus, TimeLeft};
use fest_core::event::{CartLineItem, Category, EventRecord};
use fest_core::store::UserProfile;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

pub fn rupees(amount: u64) -> String {
    format!("₹{}", amount)
}

fn price_tag(price: u32) -> String {
    if price == 0 {
        "Free".green().to_string()
    } else {
        rupees(price.into()).yellow().to_string()
    }
}

impl Render for Category {
    fn render(&self) -> String {
        let label = self.label();
        match self {
            Category::Cultural => label.magenta().to_string(),
            Category::Technical => label.cyan().to_string(),
            Category::Sports => label.green().to_string(),
            Category::Food => label.yellow().to_string(),
            Category::Moto => label.red().to_string(),
            _ => label.blue().to_string(),
        }
    }
}

/// One line in the events listing.
impl Render for EventRecord {
    fn render(&self) -> String {
        let flagship = if self.is_flagship { " ★" } else { "" };
        format!(
            "{}{} {} {} {}",
            self.name.bold(),
            flagship.yellow(),
            format!("({})", self.id).dimmed(),
            self.category.render(),
            format!("· {} {} · {}", self.date, self.time, price_tag(self.price)).dimmed()
        )
    }
}

impl Render for CartLineItem {
    fn render(&self) -> String {
        format!(
            "{} {} {}  {}",
            self.name.bold(),
            format!("({})", self.id).dimmed(),
            self.date.dimmed(),
            price_tag(self.price)
        )
    }
}

/// Full detail view of an event.
pub fn render_event_detail(event: &EventRecord) -> String {
    let mut lines = vec![
        format!("{} {}", event.name.bold(), event.category.render()),
        String::new(),
        format!("   {}", event.description),
        String::new(),
        format!("   {} {}", "Date: ".dimmed(), event.date),
        format!("   {} {}", "Time: ".dimmed(), event.time),
        format!("   {} {}", "Venue:".dimmed(), event.venue),
        format!("   {} {}", "Fee:  ".dimmed(), price_tag(event.price)),
    ];

    if let Some(image) = &event.image {
        lines.push(format!("   {} {}", "Image:".dimmed(), image));
    }

    if !event.rules.is_empty() {
        lines.push(String::new());
        lines.push("   Rules:".dimmed().to_string());
        for rule in &event.rules {
            lines.push(format!("   • {}", rule));
        }
    }

    lines.join("\n")
}

impl Render for UserProfile {
    fn render(&self) -> String {
        let name = if self.name.is_empty() {
            "(no name set)".dimmed().to_string()
        } else {
            self.name.bold().to_string()
        };
        let year = if self.year.is_empty() {
            String::new()
        } else {
            format!(" · {}", self.year)
        };
        format!("👤 {} {}", name, format!("{}{}", self.college, year).dimmed())
    }
}

fn pad(value: i64) -> String {
    format!("{:02}", value)
}

/// Compact countdown, e.g. `03d : 04h : 10m : 59s`.
pub fn render_compact(time_left: &TimeLeft) -> String {
    format!(
        "{}d : {}h : {}m : {}s",
        pad(time_left.days).bold(),
        pad(time_left.hours).bold(),
        pad(time_left.minutes).bold(),
        pad(time_left.seconds).bold()
    )
}

impl Render for CountdownState {
    fn render(&self) -> String {
        match self.status {
            CountdownStatus::Upcoming => render_compact(&self.time_left),
            CountdownStatus::Live => "🔴 LIVE NOW".red().bold().to_string(),
            CountdownStatus::Ended => "Festival Completed".dimmed().to_string(),
        }
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fest_core::catalog::Catalog;

    #[test]
    fn pluralize_only_singular_for_one() {
        assert_eq!(pluralize("event", 1), "event");
        assert_eq!(pluralize("event", 0), "events");
        assert_eq!(pluralize("event", 3), "events");
    }

    #[test]
    fn rupees_formats_whole_amounts() {
        assert_eq!(rupees(0), "₹0");
        assert_eq!(rupees(470), "₹470");
        assert_eq!(rupees(2 * u64::from(u32::MAX)), "₹8589934590");
    }

    #[test]
    fn detail_shows_image_only_when_set() {
        let catalog = Catalog::builtin().unwrap();
        let mut event = catalog.get_by_id("hackathon").unwrap().clone();
        event.image = None;
        assert!(!render_event_detail(&event).contains("Image:"));

        event.image = Some("posters/hackathon.jpg".into());
        assert!(render_event_detail(&event).contains("posters/hackathon.jpg"));
    }
}
