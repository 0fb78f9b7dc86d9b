use anyhow::Result;
use fest_core::fest::Fest;
use owo_colors::OwoColorize;

use crate::render::{Render, pluralize, rupees};

/// What `fest add` did with an event.
#[derive(Debug, PartialEq, Eq)]
enum AddOutcome {
    /// Walk-in event; the cart is untouched.
    NoRegistration,
    Added,
    AlreadyInCart,
}

pub fn add(fest: &mut Fest, id: &str) -> Result<()> {
    let name = fest.event(id)?.name.clone();

    match add_event(fest, id)? {
        AddOutcome::NoRegistration => {
            println!(
                "{}",
                format!("  {} doesn't need registration, just show up!", name).green()
            );
            return Ok(());
        }
        AddOutcome::Added => println!("{}", format!("  Added: {}", name).green()),
        AddOutcome::AlreadyInCart => {
            println!("{}", format!("  {} is already in your cart", name).dimmed())
        }
    }
    print_total(fest);

    Ok(())
}

/// Registered ids may be added again; checkout skips them.
fn add_event(fest: &mut Fest, id: &str) -> Result<AddOutcome> {
    let event = fest.event(id)?;
    if !event.requires_registration {
        return Ok(AddOutcome::NoRegistration);
    }

    let item = event.line_item();
    if fest.registrations.add_to_cart(item)? {
        Ok(AddOutcome::Added)
    } else {
        Ok(AddOutcome::AlreadyInCart)
    }
}

pub fn remove(fest: &mut Fest, id: &str) -> Result<()> {
    if fest.registrations.remove_from_cart(id)? {
        println!("{}", format!("  Removed: {}", id).yellow());
        print_total(fest);
    } else {
        println!("{}", format!("  {} isn't in your cart", id).dimmed());
    }
    Ok(())
}

pub fn list(fest: &Fest) -> Result<()> {
    let cart = fest.registrations.cart();

    if cart.is_empty() {
        println!("{}", "🛒 Your cart is empty".dimmed());
        println!("{}", "   Browse events with: fest events".dimmed());
        return Ok(());
    }

    println!(
        "🛒 {} {}",
        cart.len(),
        pluralize("event", cart.len())
    );
    for item in cart.items() {
        println!("   {}", item.render());
    }
    println!();
    println!(
        "   Total: {}",
        rupees(fest.registrations.cart_total()).yellow().bold()
    );
    println!("{}", "   Check out with: fest checkout".dimmed());

    Ok(())
}

pub fn clear(fest: &mut Fest) -> Result<()> {
    fest.registrations.clear_cart()?;
    println!("{}", "  Cart cleared".yellow());
    Ok(())
}

fn print_total(fest: &Fest) {
    let cart = fest.registrations.cart();
    println!(
        "{}",
        format!(
            "  Cart: {} {} · {}",
            cart.len(),
            pluralize("event", cart.len()),
            rupees(cart.total())
        )
        .dimmed()
    );
}
