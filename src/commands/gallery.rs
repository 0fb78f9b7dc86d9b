use anyhow::Result;
use fest_core::fest::Fest;
use owo_colors::OwoColorize;

use crate::render::pluralize;
use crate::utils::tui::create_spinner;

pub async fn run(fest: &Fest, preload: bool) -> Result<()> {
    let Some(dir) = fest.config.gallery_path() else {
        println!("{}", "No gallery configured.".dimmed());
        println!(
            "{}",
            "   Set gallery_dir in ~/.config/fest/config.toml".dimmed()
        );
        return Ok(());
    };

    let preloader = fest.gallery_preloader()?;
    let images = preloader.assets();

    println!(
        "🖼  {} {} in {}",
        images.len(),
        pluralize("image", images.len()),
        dir.display()
    );
    for image in images {
        if let Some(name) = image.file_name() {
            println!("   {}", name.to_string_lossy());
        }
    }

    if preload && !images.is_empty() {
        let spinner = create_spinner("   Warming up".to_string());
        preloader.run().await;
        spinner.finish_and_clear();

        let loaded = preloader.loaded_count();
        let summary = format!("   Warmed up {} of {}", loaded, images.len());
        if loaded == images.len() {
            println!("{}", summary.green());
        } else {
            println!("{}", summary.yellow());
        }
    }

    Ok(())
}
