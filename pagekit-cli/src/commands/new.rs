//! Prototype page scaffolding command

use anyhow::{Context, Result};
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use pagekit::{GeneratedFile, PageGenerator, PageName, RenderedPage, TemplateKind};
use std::fs;
use std::path::{Path, PathBuf};

/// Filename used when a template renders a single bare page body.
const SINGLE_FILE_NAME: &str = "page.tsx";

/// Scaffold a new prototype page under the pages root.
pub struct NewCommand {
    name: PageName,
    kind: TemplateKind,
    page_dir: PathBuf,
}

impl NewCommand {
    /// Resolve CLI arguments into a ready-to-run command, prompting for
    /// whatever was not supplied.
    ///
    /// # Errors
    ///
    /// Returns an error when the page name normalizes to nothing, when a
    /// prompt cannot be read, or when the destination directory already
    /// exists.
    pub fn resolve(name: Option<String>, template: Option<String>, root: &Path) -> Result<Self> {
        let raw = match name {
            Some(raw) => raw,
            None => Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Page name")
                .interact_text()
                .context("Failed to read page name")?,
        };
        let name = PageName::parse(&raw)?;

        let kind = match template {
            Some(id) => resolve_template_id(&id),
            None => prompt_template()?,
        };

        let page_dir = root.join(name.slug());
        if page_dir.exists() {
            anyhow::bail!(
                "Page \"{}\" already exists at {}. Pick a different name or remove the directory.",
                name.slug(),
                page_dir.display()
            );
        }

        Ok(Self {
            name,
            kind,
            page_dir,
        })
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error when rendering fails or the page directory/files
    /// cannot be written.
    pub fn execute(&self) -> Result<()> {
        println!(
            "{} {} {}",
            style("Creating").green().bold(),
            style("prototype page:").bold(),
            style(self.name.slug()).cyan().bold()
        );
        println!();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        spinner.set_message("Rendering template...");
        let generator = PageGenerator::new();
        let rendered = generator.render(self.kind, &self.name)?;
        let files = materialize(rendered);

        spinner.set_message("Writing files...");
        write_files(&self.page_dir, &files)?;

        spinner.finish_and_clear();

        self.print_success(&files);

        Ok(())
    }

    /// Print success message with next steps
    fn print_success(&self, files: &[GeneratedFile]) {
        println!("{}", style("✓ Prototype page created!").green().bold());
        println!();
        println!("   {}", style(format!("{}/", self.page_dir.display())).cyan());
        for file in files {
            println!("     {}", style(&file.filename).dim());
        }
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!("  {} Start the dev server:", style("1.").cyan());
        println!("     {} {}", style("$").dim(), style("pagekit dev").cyan());
        println!();
        println!("  {} Open your page:", style("2.").cyan());
        println!(
            "     {}",
            style(format!("http://localhost:3000/{}", self.name.slug()))
                .cyan()
                .underlined()
        );
        println!();
    }
}

/// Resolve a user-supplied template id, surfacing typos without failing.
fn resolve_template_id(id: &str) -> TemplateKind {
    let kind = TemplateKind::from_id(id);
    // Unknown ids degrade to the empty template by design; say so anyway
    // because the id may just be misspelled.
    if kind == TemplateKind::Empty && id != kind.id() {
        println!(
            "{}",
            style(format!("Unknown template '{id}', using 'empty'")).dim()
        );
    }
    kind
}

/// Ask the user to pick a template kind, defaulting to the empty page.
fn prompt_template() -> Result<TemplateKind> {
    let items: Vec<String> = TemplateKind::ALL
        .iter()
        .map(|kind| {
            let descriptor = kind.descriptor();
            format!("{} - {}", descriptor.name, descriptor.description)
        })
        .collect();
    let default_index = TemplateKind::ALL
        .iter()
        .position(|kind| *kind == TemplateKind::Empty)
        .unwrap_or(0);

    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Template")
        .items(&items)
        .default(default_index)
        .interact()
        .context("Failed to read template choice")?;

    Ok(TemplateKind::ALL[picked])
}

/// Flatten both render shapes into a list of named files.
#[must_use]
pub fn materialize(rendered: RenderedPage) -> Vec<GeneratedFile> {
    match rendered {
        RenderedPage::Single(content) => vec![GeneratedFile {
            filename: SINGLE_FILE_NAME.to_string(),
            content,
        }],
        RenderedPage::Files(files) => files,
    }
}

/// Create the page directory and write every generated file into it.
///
/// # Errors
///
/// Returns an error when the directory or any file cannot be written.
pub fn write_files(page_dir: &Path, files: &[GeneratedFile]) -> Result<()> {
    fs::create_dir_all(page_dir)
        .with_context(|| format!("Failed to create directory: {}", page_dir.display()))?;

    for file in files {
        let path = page_dir.join(&file.filename);
        fs::write(&path, &file.content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_rejects_existing_destination() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("checkout-flow")).unwrap();

        let result = NewCommand::resolve(
            Some("Checkout Flow".to_string()),
            Some("empty".to_string()),
            temp.path(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_rejects_invalid_name() {
        let temp = TempDir::new().unwrap();
        let result = NewCommand::resolve(
            Some("!!!".to_string()),
            Some("empty".to_string()),
            temp.path(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_accepts_unknown_template_id() {
        let temp = TempDir::new().unwrap();
        let cmd = NewCommand::resolve(
            Some("demo".to_string()),
            Some("nonexistent-kind".to_string()),
            temp.path(),
        )
        .unwrap();
        assert_eq!(cmd.kind, TemplateKind::Empty);
    }

    #[test]
    fn test_materialize_single_uses_page_filename() {
        let files = materialize(RenderedPage::Single("body".to_string()));
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename, "page.tsx");
        assert_eq!(files[0].content, "body");
    }
}
