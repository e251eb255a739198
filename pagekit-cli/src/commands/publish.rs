//! Version snapshot command
//!
//! Captures the current prototype state on a named branch and pushes it, so
//! the hosting provider keeps a permanent preview URL for that version while
//! day-to-day work continues on the main branch.

use anyhow::{Context, Result};
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use pagekit::PageName;

use crate::git;

/// Snapshot the prototype on a version branch and push it.
pub struct PublishCommand {
    version: Option<String>,
}

impl PublishCommand {
    /// Create a new command instance
    #[must_use]
    pub const fn new(version: Option<String>) -> Self {
        Self { version }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error when the working directory is not a git repository,
    /// the version name is unusable, the branch already exists, or any git
    /// step fails.
    pub fn execute(&self) -> Result<()> {
        println!(
            "\n{} {}",
            style("Creating").green().bold(),
            style("a version snapshot...").bold()
        );
        println!(
            "{}",
            style("This makes a permanent preview URL for the current state of your prototype.")
                .dim()
        );
        println!();

        git::ensure_repository()?;

        let raw = match &self.version {
            Some(version) => version.clone(),
            None => Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Version name (e.g. \"user-testing-v1\", \"client-review\")")
                .interact_text()
                .context("Failed to read version name")?,
        };

        // Branch names follow the same normalization as page slugs.
        let branch = PageName::parse(&raw)
            .context("Version name must contain at least one letter or digit")?
            .slug()
            .to_string();

        println!(
            "\n{} {}",
            style("Version:").bold(),
            style(&branch).cyan().bold()
        );
        println!();

        println!("{} Saving current work...", style("1.").cyan());
        if !git::run(&["add", "-A"])? {
            anyhow::bail!("Failed to stage changes");
        }
        if git::has_staged_changes() {
            let message = format!("Version: {branch}");
            if !git::run(&["commit", "-m", &message])? {
                anyhow::bail!("Failed to commit changes");
            }
        } else {
            println!("   {}", style("No changes to save").dim());
        }

        println!("{} Creating branch: {branch}...", style("2.").cyan());
        if !git::run(&["branch", &branch])? {
            anyhow::bail!("Failed to create branch. \"{branch}\" may already exist.");
        }

        println!("{} Pushing...", style("3.").cyan());
        if !git::run(&["push", "-u", "origin", &branch])? {
            println!();
            println!(
                "{} Push failed. Make sure your remote is set up:",
                style("!").yellow().bold()
            );
            println!(
                "   {} {}",
                style("$").dim(),
                style("git remote add origin <your-repo-url>").cyan()
            );
            anyhow::bail!("Push failed");
        }

        println!();
        println!("{}", style("✓ Version published!").green().bold());
        println!("  {} {}", style("Branch:").bold(), style(&branch).cyan());
        println!(
            "{}",
            style("If connected to a hosting provider, a preview URL for this branch appears on its dashboard.")
                .dim()
        );

        // `git branch` does not switch; the checkout is a safety net in case
        // the snapshot was taken from a detached or feature branch.
        if let Some(current) = git::current_branch() {
            if current != "main" && current != "master" {
                println!();
                println!("{}", style("Returning to main branch...").dim());
                if !git::run(&["checkout", "main"])? {
                    let _ = git::run(&["checkout", "master"])?;
                }
            }
        }

        println!();
        println!(
            "{}",
            style("Tip: create as many versions as you have stakeholders.").dim()
        );

        Ok(())
    }
}
