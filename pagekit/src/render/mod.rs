//! Page template rendering
//!
//! Turns a [`TemplateKind`] plus a [`PageName`] into ready-to-write source
//! text. Rendering is pure: the same inputs always produce byte-identical
//! output, and nothing here touches the filesystem.

use handlebars::Handlebars;
use serde_json::json;

use crate::catalog::TemplateKind;
use crate::error::Error;
use crate::name::PageName;

mod empty;
mod gallery;
mod manager;
mod search;

/// One named unit of generated output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Filename relative to the page directory, unique within one render
    pub filename: String,
    /// Full file content
    pub content: String,
}

/// Output of one render.
///
/// The empty template produces a bare page body; the richer templates split
/// the page into an entry point plus a view file. Callers must handle both
/// shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedPage {
    /// A single page body with no fixed filename of its own
    Single(String),
    /// Named files in insertion order
    Files(Vec<GeneratedFile>),
}

/// Renders page templates from the built-in catalog.
pub struct PageGenerator {
    handlebars: Handlebars<'static>,
}

impl PageGenerator {
    /// Create a generator with a registry configured for source output.
    #[must_use]
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);

        Self { handlebars }
    }

    /// Render one template kind for the given page name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if a built-in template fails to render;
    /// this does not happen for any well-formed [`PageName`].
    pub fn render(&self, kind: TemplateKind, name: &PageName) -> Result<RenderedPage, Error> {
        let context = json!({
            "title": name.title(),
            "title_upper": name.title().to_uppercase(),
            "component_name": name.component_name(),
        });

        let rendered = match kind {
            TemplateKind::Search => RenderedPage::Files(vec![
                self.file("page.tsx", search::PAGE_TSX, &context)?,
                self.file("view.tsx", search::VIEW_TSX, &context)?,
            ]),
            TemplateKind::Gallery => RenderedPage::Files(vec![
                self.file("page.tsx", gallery::PAGE_TSX, &context)?,
                self.file("view.tsx", gallery::VIEW_TSX, &context)?,
            ]),
            TemplateKind::Manager => RenderedPage::Files(vec![
                self.file("page.tsx", manager::PAGE_TSX, &context)?,
                self.file("view.tsx", manager::VIEW_TSX, &context)?,
            ]),
            TemplateKind::Empty => {
                RenderedPage::Single(self.render_template(empty::PAGE_TSX, &context)?)
            }
        };

        Ok(rendered)
    }

    fn file(
        &self,
        filename: &str,
        template: &str,
        context: &serde_json::Value,
    ) -> Result<GeneratedFile, Error> {
        Ok(GeneratedFile {
            filename: filename.to_string(),
            content: self.render_template(template, context)?,
        })
    }

    fn render_template(
        &self,
        template: &str,
        context: &serde_json::Value,
    ) -> Result<String, Error> {
        Ok(self.handlebars.render_template(template, context)?)
    }
}

impl Default for PageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name() -> PageName {
        PageName::parse("Checkout Flow").unwrap()
    }

    #[test]
    fn test_empty_embeds_title_and_component() {
        let rendered = PageGenerator::new()
            .render(TemplateKind::Empty, &name())
            .unwrap();

        let RenderedPage::Single(content) = rendered else {
            panic!("empty template should render a single body");
        };
        assert!(content.contains("Checkout Flow"));
        assert!(content.contains("export default function CheckoutFlowPage()"));
    }

    #[test]
    fn test_multi_file_kinds_split_page_and_view() {
        let generator = PageGenerator::new();
        for kind in [
            TemplateKind::Search,
            TemplateKind::Gallery,
            TemplateKind::Manager,
        ] {
            let RenderedPage::Files(files) = generator.render(kind, &name()).unwrap() else {
                panic!("{} should render multiple files", kind.id());
            };
            let filenames: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
            assert_eq!(filenames, vec!["page.tsx", "view.tsx"]);
        }
    }

    #[test]
    fn test_gallery_files_cross_reference_the_same_component() {
        let RenderedPage::Files(files) = PageGenerator::new()
            .render(TemplateKind::Gallery, &name())
            .unwrap()
        else {
            panic!("gallery should render multiple files");
        };

        let page = &files[0].content;
        let view = &files[1].content;
        assert!(page.contains("import { CheckoutFlowView } from './view'"));
        assert!(page.contains("<CheckoutFlowView"));
        assert!(view.contains("export function CheckoutFlowView"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let generator = PageGenerator::new();
        for kind in TemplateKind::ALL {
            let first = generator.render(kind, &name()).unwrap();
            let second = generator.render(kind, &name()).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_unknown_id_renders_like_empty() {
        let generator = PageGenerator::new();
        let fallback = generator
            .render(TemplateKind::from_id("nonexistent-kind"), &name())
            .unwrap();
        let empty = generator.render(TemplateKind::Empty, &name()).unwrap();
        assert_eq!(fallback, empty);
    }

    #[test]
    fn test_no_placeholders_survive_rendering() {
        let generator = PageGenerator::new();
        for kind in TemplateKind::ALL {
            match generator.render(kind, &name()).unwrap() {
                RenderedPage::Single(content) => assert!(!content.contains("{{")),
                RenderedPage::Files(files) => {
                    for file in files {
                        assert!(!file.content.contains("{{"), "{}", file.filename);
                    }
                }
            }
        }
    }
}
