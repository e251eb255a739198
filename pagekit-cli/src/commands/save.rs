//! Save-and-push command
//!
//! Stages everything, commits with a message (typed or timestamped), and
//! pushes so a connected hosting provider redeploys the preview.

use anyhow::{Context, Result};
use chrono::Local;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::git;

/// Commit current work and push it to the remote.
pub struct SaveCommand {
    message: Option<String>,
}

impl SaveCommand {
    /// Create a new command instance
    #[must_use]
    pub const fn new(message: Option<String>) -> Self {
        Self { message }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error when the working directory is not a git repository,
    /// or when staging, committing, or pushing fails.
    pub fn execute(&self) -> Result<()> {
        println!(
            "\n{} {}",
            style("Saving").green().bold(),
            style("your changes...").bold()
        );
        println!();

        git::ensure_repository()?;

        let message = match &self.message {
            Some(message) => message.clone(),
            None => {
                let typed: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt("What did you change? (press Enter to skip)")
                    .allow_empty(true)
                    .interact_text()
                    .context("Failed to read commit message")?;
                if typed.trim().is_empty() {
                    default_message()
                } else {
                    typed.trim().to_string()
                }
            }
        };

        println!("{} Staging changes...", style("1.").cyan());
        if !git::run(&["add", "-A"])? {
            anyhow::bail!("Failed to stage changes");
        }

        println!("{} Committing...", style("2.").cyan());
        if !git::has_staged_changes() {
            println!();
            println!("{}", style("Nothing to commit, working tree is clean.").dim());
            return Ok(());
        }
        if !git::run(&["commit", "-m", &message])? {
            anyhow::bail!("Failed to commit changes");
        }

        println!("{} Pushing...", style("3.").cyan());
        if !git::run(&["push"])? {
            println!();
            println!(
                "{} Push failed. You might need to set up your remote:",
                style("!").yellow().bold()
            );
            println!(
                "   {} {}",
                style("$").dim(),
                style("git remote add origin <your-repo-url>").cyan()
            );
            println!(
                "   {} {}",
                style("$").dim(),
                style("git push -u origin main").cyan()
            );
            anyhow::bail!("Push failed");
        }

        println!();
        println!("{}", style("✓ Changes saved and pushed!").green().bold());
        println!(
            "{}",
            style("If the repo is connected to a hosting provider, the preview redeploys automatically.")
                .dim()
        );

        Ok(())
    }
}

/// Timestamped fallback used when the user skips the message prompt.
#[must_use]
pub fn default_message() -> String {
    format!(
        "Update prototype - {}",
        Local::now().format("%Y-%m-%d %H:%M")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message_shape() {
        let message = default_message();
        assert!(message.starts_with("Update prototype - "));
        // Timestamp suffix: "YYYY-MM-DD HH:MM"
        let suffix = message.trim_start_matches("Update prototype - ");
        assert_eq!(suffix.len(), 16);
        assert_eq!(&suffix[4..5], "-");
        assert_eq!(&suffix[10..11], " ");
    }
}
