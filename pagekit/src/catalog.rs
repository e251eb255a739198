//! Template catalog
//!
//! The fixed set of page patterns the generator knows how to produce. The
//! catalog is static data: four kinds, stable presentation order, no runtime
//! registration.

use serde::Serialize;

/// One of the fixed set of page-pattern generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateKind {
    /// Centered search input with recent/suggested content
    Search,
    /// Asset browsing with a grid/list view toggle
    Gallery,
    /// Sidebar tree navigation plus a file table
    Manager,
    /// Minimal header/content starter
    #[default]
    Empty,
}

/// Catalog metadata for one template kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateDescriptor {
    /// Unique key used to select the template
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Human-readable description shown when listing templates
    pub description: &'static str,
}

impl TemplateKind {
    /// All kinds in catalog (presentation) order.
    pub const ALL: [Self; 4] = [Self::Search, Self::Gallery, Self::Manager, Self::Empty];

    /// Resolve a template id.
    ///
    /// Unknown ids deliberately fall back to [`TemplateKind::Empty`] rather
    /// than failing; the empty template is the universal starting point, so a
    /// selection the catalog does not know still produces a usable page.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        match id {
            "search" => Self::Search,
            "gallery" => Self::Gallery,
            "manager" => Self::Manager,
            _ => Self::Empty,
        }
    }

    /// The unique catalog id for this kind.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Gallery => "gallery",
            Self::Manager => "manager",
            Self::Empty => "empty",
        }
    }

    /// Catalog metadata for this kind.
    #[must_use]
    pub const fn descriptor(self) -> TemplateDescriptor {
        match self {
            Self::Search => TemplateDescriptor {
                id: "search",
                name: "Search Center",
                description:
                    "Centralized search with recent history (Best for: Homepages, Discovery)",
            },
            Self::Gallery => TemplateDescriptor {
                id: "gallery",
                name: "Asset Gallery",
                description: "Media collection with Grid/List toggle (Best for: Browsing assets)",
            },
            Self::Manager => TemplateDescriptor {
                id: "manager",
                name: "File Manager",
                description: "Tree navigation and file table (Best for: Organizing files)",
            },
            Self::Empty => TemplateDescriptor {
                id: "empty",
                name: "Empty Page",
                description: "Blank canvas",
            },
        }
    }
}

/// The template catalog in stable presentation order.
pub fn list_templates() -> impl Iterator<Item = TemplateDescriptor> {
    TemplateKind::ALL.into_iter().map(TemplateKind::descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_is_stable() {
        let ids: Vec<&str> = list_templates().map(|d| d.id).collect();
        assert_eq!(ids, vec!["search", "gallery", "manager", "empty"]);
    }

    #[test]
    fn test_catalog_ids_are_unique_and_roundtrip() {
        for kind in TemplateKind::ALL {
            assert_eq!(TemplateKind::from_id(kind.id()), kind);
            assert_eq!(kind.descriptor().id, kind.id());
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_empty() {
        assert_eq!(TemplateKind::from_id("nonexistent-kind"), TemplateKind::Empty);
        assert_eq!(TemplateKind::from_id(""), TemplateKind::Empty);
        assert_eq!(TemplateKind::from_id("Search"), TemplateKind::Empty);
    }
}
