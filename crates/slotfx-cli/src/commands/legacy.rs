//! Legacy property command.
//!
//! Each assignment is a legacy property call. By default every call commits
//! on its own, the way legacy clients drive a slot; `--batch` stages them all
//! and commits once.

use anyhow::{Context, bail};
use clap::Args;
use slotfx_config::parse_field_value;
use slotfx_core::PROPERTY_NONE;
use slotfx_effects::EffectType;
use slotfx_host::{EffectSlot, LegacyCall, LegacyValue};

use super::common::{find_field, parse_effect, parse_field_id, split_assignment};

#[derive(Args)]
pub struct LegacyArgs {
    /// Effect name
    #[arg(value_name = "EFFECT")]
    effect: String,

    /// Property assignments (e.g. low_gain=-600, 3=150, left_direction=1)
    #[arg(value_name = "PROP=VALUE")]
    assignments: Vec<String>,

    /// Stage every assignment and commit once at the end
    #[arg(long)]
    batch: bool,
}

pub fn run(args: LegacyArgs) -> anyhow::Result<()> {
    let effect = parse_effect(&args.effect)?;
    let mut slot = EffectSlot::new(effect);

    for arg in &args.assignments {
        let (call, value) = parse_call(effect, arg)?;
        if args.batch {
            slot.legacy_set(call, value)
                .with_context(|| format!("rejected '{arg}'"))?;
        } else {
            let changed = slot
                .legacy_set_and_commit(call, value)
                .with_context(|| format!("rejected '{arg}'"))?;
            println!("{arg}: {}", if changed { "changed" } else { "unchanged" });
        }
    }

    if args.batch || args.assignments.is_empty() {
        let changed = slot.commit()?;
        println!("commit: {}", if changed { "changed" } else { "unchanged" });
    }

    println!("published version {}", slot.version());
    println!("{}", slot.block());
    Ok(())
}

fn parse_call(effect: EffectType, arg: &str) -> anyhow::Result<(LegacyCall, LegacyValue)> {
    let (key, raw) = split_assignment(arg)?;

    if key.eq_ignore_ascii_case("none") || parse_field_id(key) == Some(PROPERTY_NONE) {
        return Ok((LegacyCall::new(effect, PROPERTY_NONE), LegacyValue::Long(0)));
    }

    let desc = find_field(
        effect,
        key,
        EffectType::legacy_field_by_name,
        EffectType::legacy_field,
    )?;
    let Some(value) = LegacyValue::from_field_value(parse_field_value(desc, raw)?) else {
        bail!("{effect} property '{key}' has no legacy scalar type");
    };
    Ok((LegacyCall::new(effect, desc.id), value))
}
