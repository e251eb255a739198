//! Integration tests for page generation

use pagekit::{PageGenerator, PageName, RenderedPage, TemplateKind};
use pagekit_cli_lib::commands::new::{materialize, write_files};
use pagekit_cli_lib::commands::pages::find_pages;
use pagekit_cli_lib::NewCommand;
use std::fs;
use tempfile::TempDir;

/// Scaffolding a multi-file template writes every artifact to the page directory
#[test]
fn test_gallery_scaffold_writes_page_and_view() {
    let temp_dir = TempDir::new().unwrap();
    let name = PageName::parse("Asset Library").unwrap();
    let page_dir = temp_dir.path().join(name.slug());

    let rendered = PageGenerator::new()
        .render(TemplateKind::Gallery, &name)
        .unwrap();
    let files = materialize(rendered);
    write_files(&page_dir, &files).unwrap();

    let page = fs::read_to_string(page_dir.join("page.tsx")).unwrap();
    let view = fs::read_to_string(page_dir.join("view.tsx")).unwrap();

    // Entry point and view agree on the derived component token
    assert!(page.contains("import { AssetLibraryView } from './view'"));
    assert!(page.contains("<AssetLibraryView title=\"Asset Library\""));
    assert!(view.contains("export function AssetLibraryView"));
}

/// The single-artifact form lands on disk as page.tsx
#[test]
fn test_empty_scaffold_writes_single_page_file() {
    let temp_dir = TempDir::new().unwrap();
    let name = PageName::parse("checkout flow").unwrap();
    let page_dir = temp_dir.path().join(name.slug());

    let rendered = PageGenerator::new()
        .render(TemplateKind::Empty, &name)
        .unwrap();
    assert!(matches!(rendered, RenderedPage::Single(_)));

    let files = materialize(rendered);
    write_files(&page_dir, &files).unwrap();

    let page = fs::read_to_string(page_dir.join("page.tsx")).unwrap();
    assert!(page.contains("Checkout Flow"));
    assert!(page.contains("export default function CheckoutFlowPage()"));
    assert!(!page_dir.join("view.tsx").exists());
}

/// Every catalog kind renders with names derived from the same input
#[test]
fn test_all_kinds_embed_consistent_names() {
    let name = PageName::parse("Brand  Review!!").unwrap();
    assert_eq!(name.slug(), "brand-review");

    let generator = PageGenerator::new();
    for kind in TemplateKind::ALL {
        let files = materialize(generator.render(kind, &name).unwrap());
        for file in &files {
            assert!(
                file.content.contains("BrandReview"),
                "{} artifact {} should embed the component token",
                kind.id(),
                file.filename
            );
        }
    }
}

/// A destination that already exists is rejected before anything is rendered
#[test]
fn test_new_command_rejects_existing_page() {
    let temp_dir = TempDir::new().unwrap();

    let first = NewCommand::resolve(
        Some("settings".to_string()),
        Some("empty".to_string()),
        temp_dir.path(),
    );
    assert!(first.is_ok());

    fs::create_dir_all(temp_dir.path().join("settings")).unwrap();
    let second = NewCommand::resolve(
        Some("Settings".to_string()),
        Some("empty".to_string()),
        temp_dir.path(),
    );
    assert!(second.is_err());
}

/// Scaffolded pages show up in the pages listing
#[test]
fn test_scaffolded_pages_are_listed() {
    let temp_dir = TempDir::new().unwrap();
    let generator = PageGenerator::new();

    for (raw, kind) in [
        ("Asset Library", TemplateKind::Gallery),
        ("Search Home", TemplateKind::Search),
        ("Scratch", TemplateKind::Empty),
    ] {
        let name = PageName::parse(raw).unwrap();
        let files = materialize(generator.render(kind, &name).unwrap());
        write_files(&temp_dir.path().join(name.slug()), &files).unwrap();
    }

    let pages = find_pages(temp_dir.path());
    assert_eq!(
        pages,
        vec![
            "asset-library".to_string(),
            "scratch".to_string(),
            "search-home".to_string()
        ]
    );
}

/// An unrecognized template id scaffolds the empty layout
#[test]
fn test_unknown_template_id_scaffolds_empty_layout() {
    let name = PageName::parse("landing").unwrap();
    let generator = PageGenerator::new();

    let fallback = materialize(
        generator
            .render(TemplateKind::from_id("definitely-not-a-template"), &name)
            .unwrap(),
    );
    let empty = materialize(generator.render(TemplateKind::Empty, &name).unwrap());

    assert_eq!(fallback, empty);
}
