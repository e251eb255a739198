//! pagekit CLI library
//!
//! Command implementations for the `pagekit` binary. Kept as a library target
//! so integration tests can drive command internals without spawning the
//! binary.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod git;

pub use commands::{
    DevCommand, NewCommand, PagesCommand, PublishCommand, SaveCommand, TemplatesCommand,
};
