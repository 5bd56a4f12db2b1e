//! Native parameter set command.
//!
//! Values are parsed the same way preset values are, then applied to a fresh
//! slot as one batch.

use anyhow::Context;
use clap::Args;
use slotfx_config::parse_field_value;
use slotfx_effects::EffectType;
use slotfx_host::EffectSlot;

use super::common::{find_field, parse_effect, split_assignment};

#[derive(Args)]
pub struct SetArgs {
    /// Effect name
    #[arg(value_name = "EFFECT")]
    effect: String,

    /// Field assignments (e.g. low_gain=2.0, 0x0002=150, left_direction=up)
    #[arg(value_name = "NAME=VALUE")]
    assignments: Vec<String>,
}

pub fn run(args: SetArgs) -> anyhow::Result<()> {
    let effect = parse_effect(&args.effect)?;
    let mut slot = EffectSlot::new(effect);

    let values = args
        .assignments
        .iter()
        .map(|arg| -> anyhow::Result<_> {
            let (key, raw) = split_assignment(arg)?;
            let desc = find_field(
                effect,
                key,
                EffectType::native_field_by_name,
                EffectType::native_field,
            )?;
            let value = parse_field_value(desc, raw)?;
            Ok((desc.id, value))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    slot.set_values(&values)
        .with_context(|| format!("{effect} slot left unchanged"))?;

    println!("published version {}", slot.version());
    println!("{}", slot.block());
    Ok(())
}
