//! slotfx CLI - inspect and drive effect slots from the command line.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "slotfx")]
#[command(author, version, about = "Effect slot parameter tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List effects, or one effect's native and legacy fields
    Fields(commands::fields::FieldsArgs),

    /// Print an effect's default parameter block
    Defaults(commands::defaults::DefaultsArgs),

    /// Apply native parameter sets to a fresh slot
    Set(commands::set::SetArgs),

    /// Stage legacy property sets and commit them
    Legacy(commands::legacy::LegacyArgs),

    /// List, show and apply presets
    Presets(commands::presets::PresetsArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fields(args) => commands::fields::run(args),
        Commands::Defaults(args) => commands::defaults::run(args),
        Commands::Set(args) => commands::set::run(args),
        Commands::Legacy(args) => commands::legacy::run(args),
        Commands::Presets(args) => commands::presets::run(args),
    }
}
