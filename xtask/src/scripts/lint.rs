use crate::cli::LintArgs;
use color_eyre::eyre::{eyre, Result};
use duct::cmd;

// ---------------------------------------------------------------------------
// Functional Core
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Fmt,
    Clippy,
    Test,
}

const STEPS: &[Step] = &[Step::Fmt, Step::Clippy, Step::Test];

/// Arguments passed to `cargo` for a step.
fn step_args(step: Step, fix: bool) -> Vec<&'static str> {
    match (step, fix) {
        (Step::Fmt, false) => vec!["fmt", "--all", "--check"],
        (Step::Fmt, true) => vec!["fmt", "--all"],
        (Step::Clippy, false) => vec!["clippy", "--all-targets", "--", "-D", "warnings"],
        (Step::Clippy, true) => vec![
            "clippy",
            "--all-targets",
            "--fix",
            "--allow-dirty",
            "--",
            "-D",
            "warnings",
        ],
        (Step::Test, _) => vec!["test", "--all-targets"],
    }
}

fn is_skipped(step: Step, args: &LintArgs) -> bool {
    match step {
        Step::Fmt => args.no_fmt,
        Step::Clippy => args.no_clippy,
        Step::Test => args.no_test,
    }
}

fn plan(args: &LintArgs) -> Vec<Vec<&'static str>> {
    STEPS
        .iter()
        .filter(|step| !is_skipped(**step, args))
        .map(|step| step_args(*step, args.fix))
        .collect()
}

// ---------------------------------------------------------------------------
// Imperative Shell
// ---------------------------------------------------------------------------

pub fn run(args: &LintArgs) -> Result<()> {
    for step in plan(args) {
        let name = format!("cargo {}", step.join(" "));
        println!("==> {name}");

        let output = cmd("cargo", &step).unchecked().run()?;
        if !output.status.success() {
            return Err(eyre!("lint failed at: {name}"));
        }
    }

    println!("lint passed");
    Ok(())
}
