//! Thin wrappers around the `git` binary
//!
//! The save/publish flows shell out to git the same way a designer would at
//! the terminal. Each call is a single subprocess with an exit-status check;
//! there is no retry logic and no libgit dependency.

use anyhow::{Context, Result};
use std::process::{Command, Stdio};

/// Fail unless the working directory is inside a git repository.
///
/// # Errors
///
/// Returns an error when `git rev-parse --git-dir` fails, i.e. the current
/// directory is not under version control (or git is not installed).
pub fn ensure_repository() -> Result<()> {
    if probe(&["rev-parse", "--git-dir"]) {
        Ok(())
    } else {
        anyhow::bail!("Git is not initialized here. Run `git init` first.")
    }
}

/// Run a git subcommand with inherited stdio, returning whether it succeeded.
///
/// # Errors
///
/// Returns an error only when the `git` binary itself cannot be spawned.
pub fn run(args: &[&str]) -> Result<bool> {
    let status = Command::new("git")
        .args(args)
        .status()
        .with_context(|| format!("Failed to run: git {}", args.join(" ")))?;
    Ok(status.success())
}

/// Run a git subcommand silently, returning whether it exited successfully.
#[must_use]
pub fn probe(args: &[&str]) -> bool {
    Command::new("git")
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Whether the index holds staged changes waiting to be committed.
#[must_use]
pub fn has_staged_changes() -> bool {
    // `diff --cached --quiet` exits nonzero when the index differs from HEAD
    !probe(&["diff", "--cached", "--quiet"])
}

/// The branch HEAD currently points at, if any.
#[must_use]
pub fn current_branch() -> Option<String> {
    let output = Command::new("git")
        .args(["branch", "--show-current"])
        .stderr(Stdio::null())
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!name.is_empty()).then_some(name)
}
