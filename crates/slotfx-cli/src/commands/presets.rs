//! Preset management commands.

use anyhow::Context;
use clap::{Args, Subcommand};
use slotfx_config::{
    Preset, factory_presets, find_preset, get_factory_preset, list_user_presets,
    preset_name_from_path, user_presets_dir,
};
use slotfx_host::EffectSlot;

#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: PresetsCommand,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List available presets (factory and user)
    List {
        /// Show only factory presets
        #[arg(long)]
        factory: bool,

        /// Show only user presets
        #[arg(long)]
        user: bool,
    },

    /// Show a preset and the block it produces
    Show {
        /// Factory preset name, user preset name, or path
        name: String,
    },

    /// Apply a preset to a fresh slot of its effect
    Apply {
        /// Factory preset name, user preset name, or path
        name: String,
    },

    /// Show the user preset directory
    Paths,
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command {
        PresetsCommand::List { factory, user } => list_presets(factory, user),
        PresetsCommand::Show { name } => show_preset(&name),
        PresetsCommand::Apply { name } => apply_preset(&name),
        PresetsCommand::Paths => {
            println!("User presets: {}", user_presets_dir().display());
            Ok(())
        }
    }
}

/// Resolve a preset from a path, a user preset name, or a factory name.
fn load_preset(name: &str) -> anyhow::Result<Preset> {
    if let Some(path) = find_preset(name) {
        return Preset::load(&path).with_context(|| format!("loading {}", path.display()));
    }
    get_factory_preset(name).with_context(|| format!("preset not found: {name}"))
}

fn list_presets(factory_only: bool, user_only: bool) -> anyhow::Result<()> {
    if !user_only {
        println!("Factory Presets:");
        println!("================");
        for preset in factory_presets() {
            let desc = preset.description.as_deref().unwrap_or("");
            println!("  {:16} {:18} {}", preset.name, preset.effect, desc);
        }
        println!();
    }

    if !factory_only {
        println!("User Presets:");
        println!("=============");
        let user_presets = list_user_presets();
        if user_presets.is_empty() {
            println!("  (none)");
        }
        for path in user_presets {
            let name = preset_name_from_path(&path).unwrap_or_else(|| "unknown".to_string());
            match Preset::load(&path) {
                Ok(preset) => println!(
                    "  {:16} {:18} {}",
                    name,
                    preset.effect,
                    preset.description.as_deref().unwrap_or("")
                ),
                Err(_) => println!("  {name:16} (error loading)"),
            }
        }
        println!();
    }

    Ok(())
}

fn show_preset(name: &str) -> anyhow::Result<()> {
    let preset = load_preset(name)?;
    print!("{}", preset.to_toml()?);
    println!();
    let block = preset.to_block().context("preset does not validate")?;
    println!("{block}");
    Ok(())
}

fn apply_preset(name: &str) -> anyhow::Result<()> {
    let preset = load_preset(name)?;
    let mut slot = EffectSlot::new(preset.effect_type()?);
    preset
        .apply(&mut slot)
        .with_context(|| format!("applying '{}'", preset.name))?;
    println!("applied '{}' (version {})", preset.name, slot.version());
    println!("{}", slot.block());
    Ok(())
}
