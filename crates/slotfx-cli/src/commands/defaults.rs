//! Default block command.

use clap::Args;
use slotfx_effects::{LegacyBlock, make_defaults};

use super::common::parse_effect;

#[derive(Args)]
pub struct DefaultsArgs {
    /// Effect name
    #[arg(value_name = "EFFECT")]
    effect: String,

    /// Also print the legacy record defaults
    #[arg(long)]
    legacy: bool,
}

pub fn run(args: DefaultsArgs) -> anyhow::Result<()> {
    let effect = parse_effect(&args.effect)?;
    println!("{}", make_defaults(effect));
    if args.legacy {
        println!();
        println!("{}", LegacyBlock::defaults(effect));
    }
    Ok(())
}
