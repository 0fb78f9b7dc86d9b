use anyhow::Result;
use dialoguer::Confirm;
use fest_core::fest::Fest;
use owo_colors::OwoColorize;

use crate::render::{Render, pluralize, rupees};

pub fn run(fest: &mut Fest, yes: bool) -> Result<()> {
    let cart = fest.registrations.cart();

    if cart.is_empty() {
        println!("{}", "🛒 Your cart is empty, nothing to confirm".dimmed());
        return Ok(());
    }

    for item in cart.items() {
        println!("   {}", item.render());
    }
    println!();
    println!("   Total: {}", rupees(cart.total()).yellow().bold());
    println!("{}", "   Payment is collected at the venue on the event day.".dimmed());
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("  Confirm registration?")
            .default(true)
            .interact()?;
        if !confirmed {
            println!("{}", "  Nothing changed".dimmed());
            return Ok(());
        }
    }

    let added = fest.registrations.confirm_registration()?;

    println!(
        "{}",
        format!(
            "  🎉 Registered for {} new {}!",
            added,
            pluralize("event", added)
        )
        .green()
    );
    println!("{}", "   See your registrations with: fest profile".dimmed());

    Ok(())
}
