use std::io::Write;

use anyhow::{Context, Result};
use fest_core::countdown::{self, CountdownStatus};
use fest_core::fest::Fest;
use fest_core::ticker::{Clock, SystemClock, Ticker};
use owo_colors::OwoColorize;

use super::TICK_PERIOD;
use crate::render::Render;
use crate::utils::tui::clear_line;

static FESTIVAL_NAME: &str = "Varnothsava 2026";

pub async fn run(fest: &Fest, event_id: Option<&str>, watch: bool, json: bool) -> Result<()> {
    let event = event_id.map(|id| fest.event(id)).transpose()?;
    let title = event.map(|e| e.name.as_str()).unwrap_or(FESTIVAL_NAME);
    let target = fest.countdown_target(event);
    let duration = fest.festival_duration()?;

    if json {
        let state = countdown::classify(SystemClock.now(), target, duration);
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    println!("{}", title.bold());

    if !watch {
        let state = countdown::classify(SystemClock.now(), target, duration);
        println!("   {}", state.render());
        if state.status == CountdownStatus::Upcoming {
            println!("{}", format!("   until {}", target.format("%B %-d, %Y %-I:%M %p")).dimmed());
        }
        return Ok(());
    }

    let ticker = Ticker::start(SystemClock, target, duration, TICK_PERIOD, |state| {
        let mut stdout = std::io::stdout();
        let _ = write!(stdout, "{}   {}", clear_line(), state.render());
        let _ = stdout.flush();
    });

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C")?;
    ticker.stop();
    println!();

    Ok(())
}
