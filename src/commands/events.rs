use anyhow::Result;
use fest_core::catalog::EventFilter;
use fest_core::fest::Fest;
use owo_colors::OwoColorize;

use crate::render::{Render, pluralize};

pub fn run(fest: &Fest, filter: EventFilter) -> Result<()> {
    let events = fest.catalog.filter(filter);

    if events.is_empty() {
        println!("{}", "No events match this filter".dimmed());
        return Ok(());
    }

    for event in &events {
        let marker = if fest.registrations.is_registered(&event.id) {
            "✔".green().to_string()
        } else if fest.registrations.is_in_cart(&event.id) {
            "+".yellow().to_string()
        } else if fest.visited.is_visited(&event.id) {
            "·".dimmed().to_string()
        } else {
            " ".to_string()
        };
        println!("{} {}", marker, event.render());
    }

    println!();
    println!(
        "{}",
        format!(
            "{} {} · {} explored",
            events.len(),
            pluralize("event", events.len()),
            fest.visited.count()
        )
        .dimmed()
    );

    Ok(())
}
