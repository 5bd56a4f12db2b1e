//! Integration tests for the `slotfx` binary.

use std::process::{Command, Output};

use tempfile::TempDir;

/// Helper to get the path to the `slotfx` binary built by cargo.
fn slotfx_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_slotfx"))
}

fn run(args: &[&str]) -> Output {
    slotfx_bin()
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run slotfx {args:?}: {e}"))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// fields / defaults
// ---------------------------------------------------------------------------

#[test]
fn fields_lists_every_effect() {
    let output = run(&["fields"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Available Effects"));
    for effect in ["equalizer", "frequency_shifter", "pitch_shifter"] {
        assert!(out.contains(effect), "missing {effect}:\n{out}");
    }
}

#[test]
fn fields_detail_shows_both_protocols() {
    let output = run(&["fields", "eq"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Native fields"));
    assert!(out.contains("Legacy properties"));
    assert!(out.contains("mid2_width"));
    assert!(out.contains("[-1800, 1800]"), "{out}");
}

#[test]
fn fields_unknown_effect_fails() {
    let output = run(&["fields", "reverb"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown effect"));
}

#[test]
fn defaults_print_canonical_block() {
    let output = run(&["defaults", "pitch_shifter", "--legacy"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("coarse_tune"));
    assert!(out.contains("12 st"), "{out}");
    assert!(out.contains("(legacy)"));
}

// ---------------------------------------------------------------------------
// set
// ---------------------------------------------------------------------------

#[test]
fn set_publishes_batch() {
    let output = run(&["set", "frequency_shifter", "frequency=440", "left_direction=up"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("published version 1"));
    assert!(out.contains("440 Hz"), "{out}");
    assert!(out.contains("up"));
}

#[test]
fn set_by_numeric_id() {
    let output = run(&["set", "eq", "0x0002=150"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("150 Hz"));
}

#[test]
fn set_out_of_range_fails() {
    let output = run(&["set", "eq", "low_cutoff=150", "mid1_width=1.5"]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("slot left unchanged"), "{err}");
    assert!(err.contains("Mid1 Width"), "{err}");
}

#[test]
fn set_rejects_unknown_direction_code() {
    let output = run(&["set", "fshifter", "right_direction=999"]);
    assert!(!output.status.success());
}

// ---------------------------------------------------------------------------
// legacy
// ---------------------------------------------------------------------------

#[test]
fn legacy_commit_reports_change_once() {
    let output = run(&["legacy", "eq", "low_gain=-600", "low_gain=-600"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("low_gain=-600: changed"), "{out}");
    assert!(out.contains("low_gain=-600: unchanged"), "{out}");
    assert!(out.contains("published version 1"), "{out}");
}

#[test]
fn legacy_without_sets_is_unchanged() {
    let output = run(&["legacy", "pitch_shifter"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("commit: unchanged"));
    assert!(out.contains("published version 0"));
}

#[test]
fn legacy_batch_is_all_or_nothing() {
    let output = run(&["legacy", "--batch", "pitch_shifter", "2=3", "3=99"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("rejected '3=99'"));
}

#[test]
fn legacy_direction_out_of_set_rejected() {
    let output = run(&["legacy", "frequency_shifter", "left_direction=3"]);
    assert!(!output.status.success());
}

// ---------------------------------------------------------------------------
// presets
// ---------------------------------------------------------------------------

#[test]
fn presets_list_shows_factory() {
    let output = run(&["presets", "list", "--factory"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Bass Lift"));
    assert!(out.contains("Barber Pole"));
}

#[test]
fn presets_show_factory() {
    let output = run(&["presets", "show", "octave_up"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("name = \"Octave Up\""));
    assert!(out.contains("pitch_shifter"));
}

#[test]
fn presets_apply_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("wide.toml");
    std::fs::write(
        &path,
        "name = \"Wide\"\neffect = \"frequency_shifter\"\n[params]\nfrequency = \"12\"\nright_direction = \"off\"\n",
    )
    .unwrap();

    let output = run(&["presets", "apply", path.to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("applied 'Wide' (version 1)"), "{out}");
    assert!(out.contains("12 Hz"));
    assert!(out.contains("off"));
}

#[test]
fn presets_apply_invalid_file_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.toml");
    std::fs::write(
        &path,
        "name = \"Bad\"\neffect = \"pitch_shifter\"\n[params]\nfine_tune = \"80\"\n",
    )
    .unwrap();

    let output = run(&["presets", "apply", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("applying 'Bad'"));
}

#[test]
fn presets_unknown_name_fails() {
    let output = run(&["presets", "show", "no_such_preset_anywhere"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("preset not found"));
}
