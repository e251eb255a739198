//! Page name normalization
//!
//! Free-text input ("Asset Library", "checkout flow v2") is reduced to three
//! derived forms that generated artifacts embed: a path-safe slug, a display
//! title, and a single-token component name. All three come from the same
//! slug, so every artifact produced for one page agrees on the names it uses.

use convert_case::{Case, Casing};

use crate::error::Error;

/// Naming forms derived from one piece of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageName {
    slug: String,
    title: String,
    component_name: String,
}

impl PageName {
    /// Normalize raw input into a [`PageName`].
    ///
    /// Lowercases the input, collapses every run of characters outside
    /// `[a-z0-9]` into a single hyphen, and strips leading/trailing hyphens.
    /// The title and component forms are derived from the resulting slug
    /// segments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] when nothing usable is left after
    /// normalization (empty input, punctuation-only input).
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let slug = slugify(raw);
        if slug.is_empty() {
            return Err(Error::InvalidName {
                input: raw.to_string(),
            });
        }

        // Split on hyphens only, so digit runs stay attached to their segment
        // ("plan-b2" -> "Plan B2", not "Plan B 2").
        let title = slug.from_case(Case::Kebab).to_case(Case::Title);
        let component_name = slug.from_case(Case::Kebab).to_case(Case::Pascal);

        Ok(Self {
            slug,
            title,
            component_name,
        })
    }

    /// Path-safe lowercase identifier, e.g. `asset-library`.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Word-capitalized display form, e.g. `Asset Library`.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Single-token identifier form, e.g. `AssetLibrary`.
    #[must_use]
    pub fn component_name(&self) -> &str {
        &self.component_name
    }
}

/// Reduce raw input to a slug of lowercase alphanumerics and single hyphens.
fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    for c in raw.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_words() {
        let name = PageName::parse("Asset Library").unwrap();
        assert_eq!(name.slug(), "asset-library");
        assert_eq!(name.title(), "Asset Library");
        assert_eq!(name.component_name(), "AssetLibrary");
    }

    #[test]
    fn test_parse_strips_punctuation_runs() {
        let name = PageName::parse("  ---Foo_Bar!!--").unwrap();
        assert_eq!(name.slug(), "foo-bar");
        assert_eq!(name.title(), "Foo Bar");
        assert_eq!(name.component_name(), "FooBar");
    }

    #[test]
    fn test_parse_single_word() {
        let name = PageName::parse("dashboard").unwrap();
        assert_eq!(name.slug(), "dashboard");
        assert_eq!(name.title(), "Dashboard");
        assert_eq!(name.component_name(), "Dashboard");
    }

    #[test]
    fn test_parse_keeps_digits_in_segment() {
        let name = PageName::parse("checkout flow v2").unwrap();
        assert_eq!(name.slug(), "checkout-flow-v2");
        assert_eq!(name.title(), "Checkout Flow V2");
        assert_eq!(name.component_name(), "CheckoutFlowV2");
    }

    #[test]
    fn test_parse_rejects_empty_and_punctuation_only() {
        assert!(PageName::parse("").is_err());
        assert!(PageName::parse("   ").is_err());
        assert!(PageName::parse("!!!---___").is_err());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let a = PageName::parse("My  Fancy--Page").unwrap();
        let b = PageName::parse("My  Fancy--Page").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_slug_shape_for_arbitrary_input() {
        for raw in ["a", "A!B", "9 lives", "über page", "x__y..z"] {
            let slug = PageName::parse(raw).unwrap().slug().to_string();
            assert!(!slug.is_empty());
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            assert!(!slug.contains("--"));
            assert!(slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }
}
