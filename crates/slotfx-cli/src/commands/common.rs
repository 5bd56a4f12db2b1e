//! Helpers shared by several commands.

use anyhow::{Context, anyhow, bail};
use slotfx_core::{FieldDescriptor, FieldId};
use slotfx_effects::EffectType;

/// Parse an effect name or alias.
pub fn parse_effect(name: &str) -> anyhow::Result<EffectType> {
    EffectType::from_name(name).ok_or_else(|| {
        let known: Vec<_> = EffectType::ALL.iter().map(|t| t.name()).collect();
        anyhow!("unknown effect '{name}' (expected one of: {})", known.join(", "))
    })
}

/// Split `KEY=VALUE`.
pub fn split_assignment(arg: &str) -> anyhow::Result<(&str, &str)> {
    match arg.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => bail!("expected NAME=VALUE, got '{arg}'"),
    }
}

/// Parse a numeric field id: decimal or `0x` hex.
pub fn parse_field_id(key: &str) -> Option<FieldId> {
    let raw = match key.strip_prefix("0x").or_else(|| key.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => key.parse().ok()?,
    };
    Some(FieldId(raw))
}

/// Find a field by string id or numeric id.
///
/// `by_name` and `by_id` are the effect's lookups for one protocol.
pub fn find_field(
    effect: EffectType,
    key: &str,
    by_name: fn(EffectType, &str) -> Option<&'static FieldDescriptor>,
    by_id: fn(EffectType, FieldId) -> Option<&'static FieldDescriptor>,
) -> anyhow::Result<&'static FieldDescriptor> {
    by_name(effect, key)
        .or_else(|| parse_field_id(key).and_then(|id| by_id(effect, id)))
        .with_context(|| format!("{effect} has no field '{key}'"))
}

/// Print one row of a field table.
pub fn print_field_row(desc: &FieldDescriptor) {
    println!(
        "  {:<8} {:<16} {:<14} {:<8} {:<22} {}{}",
        desc.id.to_string(),
        desc.string_id,
        desc.name,
        desc.kind().to_string(),
        desc.bounds.to_string(),
        desc.default,
        desc.unit.suffix()
    );
}

/// Print the header of a field table.
pub fn print_field_header() {
    println!(
        "  {:<8} {:<16} {:<14} {:<8} {:<22} {}",
        "Id", "Key", "Name", "Kind", "Range", "Default"
    );
    println!(
        "  {:<8} {:<16} {:<14} {:<8} {:<22} {}",
        "--", "---", "----", "----", "-----", "-------"
    );
}
