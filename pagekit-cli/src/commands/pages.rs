//! Existing prototype page listing command

use anyhow::Result;
use console::style;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// List the prototype pages already scaffolded under the pages root.
pub struct PagesCommand {
    root: PathBuf,
}

impl PagesCommand {
    /// Create a new command instance
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error when the pages root does not exist.
    pub fn execute(&self) -> Result<()> {
        if !self.root.is_dir() {
            anyhow::bail!(
                "Pages root {} does not exist. Run this from the prototype root.",
                self.root.display()
            );
        }

        let pages = find_pages(&self.root);
        if pages.is_empty() {
            println!(
                "No prototype pages under {} yet. Create one with {}.",
                style(self.root.display()).cyan(),
                style("pagekit new").cyan()
            );
            return Ok(());
        }

        println!(
            "{} {}",
            style("Prototype pages under").bold(),
            style(self.root.display()).cyan().bold()
        );
        println!();
        for page in &pages {
            println!("  {}", style(format!("/{page}")).cyan());
        }
        println!();
        println!(
            "{} page{}",
            pages.len(),
            if pages.len() == 1 { "" } else { "s" }
        );

        Ok(())
    }
}

/// Collect route paths of every directory under `root` holding a `page.tsx`.
///
/// Paths come back sorted and relative to the root; a `page.tsx` directly in
/// the root is reported as the empty route.
#[must_use]
pub fn find_pages(root: &Path) -> Vec<String> {
    let mut pages = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_map(Result::ok) {
        if entry.file_type().is_file() && entry.file_name() == OsStr::new("page.tsx") {
            if let Some(route) = entry
                .path()
                .parent()
                .and_then(|dir| dir.strip_prefix(root).ok())
            {
                pages.push(route.to_string_lossy().replace('\\', "/"));
            }
        }
    }

    pages.sort();
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_pages_reports_page_directories() {
        let temp = TempDir::new().unwrap();
        for dir in ["gallery", "examples/dashboard", "character"] {
            let path = temp.path().join(dir);
            fs::create_dir_all(&path).unwrap();
            fs::write(path.join("page.tsx"), "export default function Page() {}").unwrap();
        }
        // A directory without a page file is not a page
        fs::create_dir_all(temp.path().join("components")).unwrap();

        let pages = find_pages(temp.path());
        assert_eq!(
            pages,
            vec![
                "character".to_string(),
                "examples/dashboard".to_string(),
                "gallery".to_string()
            ]
        );
    }

    #[test]
    fn test_find_pages_includes_root_page() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("page.tsx"), "export default function Home() {}").unwrap();

        let pages = find_pages(temp.path());
        assert_eq!(pages, vec![String::new()]);
    }

    #[test]
    fn test_find_pages_empty_root() {
        let temp = TempDir::new().unwrap();
        assert!(find_pages(temp.path()).is_empty());
    }
}
