//! Error types for the page generator

use thiserror::Error;

/// Core generator error type
#[derive(Debug, Error)]
pub enum Error {
    /// Page name input with no usable characters left after normalization
    #[error("invalid page name {input:?}: must contain at least one letter or digit")]
    InvalidName {
        /// The raw input as the user supplied it
        input: String,
    },

    /// A built-in template failed to render
    #[error("template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),
}
