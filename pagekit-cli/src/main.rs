//! pagekit CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use pagekit_cli_lib::{
    DevCommand, NewCommand, PagesCommand, PublishCommand, SaveCommand, TemplatesCommand,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagekit")]
#[command(version)]
#[command(about = "Rapid-prototyping toolkit for design-system pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a new prototype page
    New {
        /// Page name (free text; prompted for when omitted)
        name: Option<String>,
        /// Template id (see `pagekit templates`); unknown ids use the empty template
        #[arg(short, long)]
        template: Option<String>,
        /// Directory pages are scaffolded under
        #[arg(long, default_value = "src/app")]
        root: PathBuf,
    },
    /// List available page templates
    Templates {
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// List existing prototype pages
    Pages {
        /// Directory pages live under
        #[arg(long, default_value = "src/app")]
        root: PathBuf,
    },
    /// Commit current work and push it to the remote
    Save {
        /// Commit message (prompted for when omitted)
        #[arg(short, long)]
        message: Option<String>,
    },
    /// Snapshot the prototype on a version branch and push it
    Publish {
        /// Version name, e.g. "user-testing-v1" or "client-review"
        version: Option<String>,
    },
    /// Start the prototype dev server
    Dev,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::New {
            name,
            template,
            root,
        } => {
            let cmd = NewCommand::resolve(name, template, &root)?;
            cmd.execute()?;
        }
        Commands::Templates { json } => {
            TemplatesCommand::new(json).execute()?;
        }
        Commands::Pages { root } => {
            PagesCommand::new(root).execute()?;
        }
        Commands::Save { message } => {
            SaveCommand::new(message).execute()?;
        }
        Commands::Publish { version } => {
            PublishCommand::new(version).execute()?;
        }
        Commands::Dev => {
            DevCommand::execute()?;
        }
    }

    Ok(())
}
