//! Template catalog listing command

use anyhow::{Context, Result};
use console::style;
use pagekit::list_templates;

/// Print the available page templates.
pub struct TemplatesCommand {
    json: bool,
}

impl TemplatesCommand {
    /// Create a new command instance
    #[must_use]
    pub const fn new(json: bool) -> Self {
        Self { json }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error only when JSON serialization of the catalog fails.
    pub fn execute(&self) -> Result<()> {
        if self.json {
            let catalog: Vec<_> = list_templates().collect();
            let rendered = serde_json::to_string_pretty(&catalog)
                .context("Failed to serialize template catalog")?;
            println!("{rendered}");
            return Ok(());
        }

        println!("{}", style("Available templates:").bold());
        println!();
        for descriptor in list_templates() {
            println!(
                "  {}  {}",
                style(format!("{:<8}", descriptor.id)).cyan().bold(),
                style(descriptor.name).bold()
            );
            println!("            {}", style(descriptor.description).dim());
        }
        println!();
        println!(
            "Scaffold one with: {}",
            style("pagekit new <name> --template <id>").cyan()
        );

        Ok(())
    }
}
