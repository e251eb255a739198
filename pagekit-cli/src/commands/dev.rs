//! Development server command

use anyhow::{Context, Result};
use console::style;
use std::path::Path;
use std::process::{Command, Stdio};

/// Start the prototype's dev server.
pub struct DevCommand;

impl DevCommand {
    /// Create a new command instance
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error when the working directory is not a prototype root,
    /// npm is unavailable, or the dev server exits with a failure.
    pub fn execute() -> Result<()> {
        if !Path::new("package.json").exists() {
            anyhow::bail!(
                "No package.json in the current directory. Run this from the prototype root."
            );
        }

        if !Self::is_npm_installed() {
            println!("{} is not installed.", style("npm").yellow().bold());
            println!();
            println!("Install Node.js (which bundles npm) and try again.");
            anyhow::bail!("npm not found");
        }

        println!(
            "{} {}",
            style("Starting").green().bold(),
            style("dev server...").bold()
        );
        println!(
            "   {}",
            style("http://localhost:3000").cyan().underlined()
        );
        println!();

        let mut child = Command::new("npm")
            .args(["run", "dev"])
            .spawn()
            .context("Failed to start dev server")?;

        let status = child.wait().context("Failed to wait for dev server")?;

        if !status.success() {
            anyhow::bail!("Dev server exited with error");
        }

        Ok(())
    }

    /// Check if npm is installed
    fn is_npm_installed() -> bool {
        Command::new("npm")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

impl Default for DevCommand {
    fn default() -> Self {
        Self::new()
    }
}
