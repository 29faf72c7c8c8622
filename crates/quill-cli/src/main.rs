//! Quill CLI Application
//!
//! Command-line interface for inspecting, transforming, and walking
//! branching questionnaire templates.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();
    let cli = Cli::new(TerminalRenderer::new(!no_color));

    info!("Quill started");

    match command {
        Inspect(args) => cli.inspect(&args),
        Group(args) => cli.group(&args),
        Flatten(args) => cli.flatten(&args),
        Walk(args) => cli.walk(&args),
    }
}
