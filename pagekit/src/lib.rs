//! pagekit: page template catalog and generator for design-system prototypes
//!
//! The core of the prototyping toolkit: a fixed catalog of page patterns
//! (search, gallery, manager, empty), normalization of free-text page names
//! into the derived forms embedded in generated source, and pure rendering of
//! template boilerplate into filename/content pairs.
//!
//! Everything here is side-effect free. Writing files, prompting the user,
//! and talking to git belong to the CLI crate.
//!
//! # Quick Start
//!
//! ```rust
//! use pagekit::{PageGenerator, PageName, TemplateKind};
//!
//! # fn main() -> Result<(), pagekit::Error> {
//! let name = PageName::parse("Asset Library")?;
//! let generator = PageGenerator::new();
//! let rendered = generator.render(TemplateKind::Gallery, &name)?;
//! # let _ = rendered;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
pub mod error;
pub mod name;
pub mod render;

pub use catalog::{list_templates, TemplateDescriptor, TemplateKind};
pub use error::Error;
pub use name::PageName;
pub use render::{GeneratedFile, PageGenerator, RenderedPage};
