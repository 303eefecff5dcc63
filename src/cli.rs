use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// HYFI Launcher - bootstrap and run the flood monitoring dashboard
#[derive(Parser, Debug)]
#[command(name = "hyfi-launcher")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'hyfi-launcher' without arguments to set up and start the dashboard.")]
pub struct Cli {
    /// Machine-readable output where supported
    #[arg(long, global = true)]
    pub json: bool,

    /// Assume yes; never pause or prompt
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project root (defaults to the current directory)
    #[arg(short = 'C', long, global = true)]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set up if needed, then start the dashboard (the default)
    Run {
        /// Server port passed to streamlit (overrides [app].port)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Create the environment and install dependencies without starting
    Setup,

    /// Report launch prerequisites without changing anything
    Check,

    /// Remove the virtual environment
    Clean,
}
