use crate::config::Config;
use crate::menu::Session;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::Level;

mod config;
mod display;
mod error;
mod grade;
mod menu;
mod model;
mod table;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Use FILE for display settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Set verbosity level (repeat for more)
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    // Logs go to stderr: stdout carries the menu.
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .init();
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    tracing::debug!(?config, "starting session");
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Session::new(stdin, stdout, &config).run()?;
    Ok(())
}
