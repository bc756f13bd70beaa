mod config;
mod content;
mod controller;
mod export;
mod highlight;
mod registry;
mod typewriter;
mod view;

use clap::{Parser, Subcommand};
use config::RcLoader;
use controller::Controller;
use registry::Registry;
use std::path::PathBuf;

/// Terminal documentation browser for the BlockDAG SDK.
#[derive(Parser)]
#[command(name = "bdag-docs", version, about)]
struct Cli {
    /// Documentation page to open; unknown pages fall back to the overview
    page: Option<String>,

    /// Disable the typewriter reveal animation
    #[arg(long)]
    no_typing: bool,

    /// Hide code line numbers
    #[arg(long)]
    plain: bool,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Write the documentation as static HTML files
    Export {
        /// Output directory (created if missing)
        dir: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(CliCommand::Export { dir }) = cli.command {
        let registry = Registry::new();
        let written = export::export_site(&dir, &registry)?;
        println!("Exported {} files to {}", written.len(), dir.display());
        return Ok(());
    }

    // Load RC configuration; command-line flags win.
    let mut config = RcLoader::load_config();
    if cli.no_typing {
        config.typing = false;
    }
    if cli.plain {
        config.show_line_numbers = false;
    }

    let mut controller = Controller::new(config, cli.page.as_deref());
    controller.run()
}
