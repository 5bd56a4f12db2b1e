//! Effect and field listing command.

use clap::Args;
use slotfx_core::{PROPERTY_ALL_PARAMETERS, PROPERTY_NONE};
use slotfx_effects::EffectType;

use super::common::{parse_effect, print_field_header, print_field_row};

#[derive(Args)]
pub struct FieldsArgs {
    /// Show fields for a specific effect
    #[arg(value_name = "EFFECT")]
    effect: Option<String>,
}

pub fn run(args: FieldsArgs) -> anyhow::Result<()> {
    let Some(name) = args.effect else {
        println!("Available Effects");
        println!("=================");
        println!();
        for effect in EffectType::ALL {
            println!(
                "  {:18} {} native fields, {} legacy properties",
                effect.name(),
                effect.native_fields().count(),
                effect.legacy_fields().count()
            );
        }
        println!();
        println!("Use 'slotfx fields <effect>' for field details.");
        return Ok(());
    };

    let effect = parse_effect(&name)?;

    println!("{effect}");
    println!("{}", "=".repeat(effect.name().len()));
    println!();
    println!("Native fields:");
    print_field_header();
    for desc in effect.native_fields() {
        print_field_row(desc);
    }

    println!();
    println!("Legacy properties:");
    print_field_header();
    println!("  {:<8} {:<16} no-op", PROPERTY_NONE.to_string(), "none");
    println!("  {:<8} {:<16} whole record", PROPERTY_ALL_PARAMETERS.to_string(), "all");
    for desc in effect.legacy_fields() {
        print_field_row(desc);
    }
    Ok(())
}
