use anyhow::Result;
use dialoguer::Input;
use fest_core::fest::Fest;
use fest_core::store::ProfilePatch;
use owo_colors::OwoColorize;

use crate::render::{Render, pluralize, rupees};

pub fn show(fest: &Fest) -> Result<()> {
    println!("{}", fest.profile.profile().render());
    println!();

    let registered = fest.registrations.registered();
    if registered.is_empty() {
        println!("{}", "   No registrations yet".dimmed());
    } else {
        println!(
            "   {} {}",
            registered.len(),
            pluralize("registered event", registered.len())
        );
        for item in registered.items() {
            println!("   {} {}", "✔".green(), item.render());
        }
        println!();
        println!(
            "   Total to pay on the event day: {}",
            rupees(registered.total()).yellow().bold()
        );
    }

    println!(
        "{}",
        format!(
            "   {} {} explored",
            fest.visited.count(),
            pluralize("event", fest.visited.count())
        )
        .dimmed()
    );

    Ok(())
}

pub fn edit(
    fest: &mut Fest,
    name: Option<String>,
    college: Option<String>,
    year: Option<String>,
) -> Result<()> {
    let patch = match patch_from_flags(name, college, year) {
        Some(patch) => patch,
        None => prompt_patch(fest)?,
    };

    fest.profile.update_profile(patch)?;
    println!("{}", "  Profile saved".green());
    println!("{}", fest.profile.profile().render());

    Ok(())
}

/// The patch given on the command line, or `None` when no flag was set and
/// the fields should be prompted for.
fn patch_from_flags(
    name: Option<String>,
    college: Option<String>,
    year: Option<String>,
) -> Option<ProfilePatch> {
    let patch = ProfilePatch {
        name,
        college,
        year,
    };
    (!patch.is_empty()).then_some(patch)
}

/// Ask for each field, prefilled with the current value.
fn prompt_patch(fest: &Fest) -> Result<ProfilePatch> {
    let current = fest.profile.profile();

    let name: String = Input::new()
        .with_prompt("  Name")
        .with_initial_text(current.name.clone())
        .allow_empty(true)
        .interact_text()?;
    let college: String = Input::new()
        .with_prompt("  College")
        .with_initial_text(current.college.clone())
        .allow_empty(true)
        .interact_text()?;
    let year: String = Input::new()
        .with_prompt("  Year")
        .with_initial_text(current.year.clone())
        .allow_empty(true)
        .interact_text()?;

    Ok(ProfilePatch {
        name: Some(name),
        college: Some(college),
        year: Some(year),
    })
}

pub fn unregister(fest: &mut Fest, id: &str) -> Result<()> {
    if fest.registrations.remove_from_registered(id)? {
        println!("{}", format!("  Registration for {} removed", id).yellow());
    } else {
        println!("{}", format!("  You aren't registered for {}", id).dimmed());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fest_core::config::FestConfig;
    use fest_core::storage::MemoryStore;
    use std::sync::Arc;

    #[test]
    fn no_flags_means_prompt() {
        assert!(patch_from_flags(None, None, None).is_none());
    }

    #[test]
    fn flags_patch_only_the_given_fields() {
        let mut fest = Fest::open(FestConfig::default(), Arc::new(MemoryStore::new())).unwrap();
        fest.profile
            .update_profile(ProfilePatch {
                name: Some("Asha".into()),
                college: None,
                year: Some("2nd".into()),
            })
            .unwrap();

        let patch = patch_from_flags(None, None, Some("3rd".into())).unwrap();
        fest.profile.update_profile(patch).unwrap();

        let profile = fest.profile.profile();
        assert_eq!(profile.name, "Asha");
        assert_eq!(profile.college, "SMVITM");
        assert_eq!(profile.year, "3rd");
    }

    #[test]
    fn empty_flag_value_still_counts_as_given() {
        let patch = patch_from_flags(Some(String::new()), None, None).unwrap();
        assert_eq!(patch.name.as_deref(), Some(""));
    }
}
