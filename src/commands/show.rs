use anyhow::Result;
use fest_core::countdown;
use fest_core::event::EventRecord;
use fest_core::fest::Fest;
use fest_core::ticker::{Clock, SystemClock};
use owo_colors::OwoColorize;

use crate::render::{Render, render_event_detail};

pub fn run(fest: &mut Fest, id: &str) -> Result<()> {
    visit(fest, id)?;

    let Some(event) = fest.catalog.get_by_id(id) else {
        println!("{}", "Event Not Found".red());
        println!("{}", "See all events with: fest events".dimmed());
        return Ok(());
    };

    println!("{}", render_event_detail(event));
    println!();

    let target = fest.countdown_target(Some(event));
    let state = countdown::classify(
        SystemClock.now(),
        target,
        fest.festival_duration()?,
    );
    println!("   {}", state.render());
    println!();

    println!("{}", registration_hint(fest, event));

    Ok(())
}

/// Opening a detail page counts as a visit, even for unknown ids.
fn visit(fest: &mut Fest, id: &str) -> Result<()> {
    fest.visited.mark_visited(id)?;
    Ok(())
}

fn registration_hint(fest: &Fest, event: &EventRecord) -> String {
    if !event.requires_registration {
        "   No registration needed, just show up!".green().to_string()
    } else if fest.registrations.is_registered(&event.id) {
        "   ✔ You're registered".green().to_string()
    } else if fest.registrations.is_in_cart(&event.id) {
        format!("   In your cart. Remove with: fest remove {}", event.id)
            .yellow()
            .to_string()
    } else {
        format!("   Register with: fest add {}", event.id)
            .dimmed()
            .to_string()
    }
}
