// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use std::path::PathBuf;

/// How `bizchat parse` prints the parsed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormatArg {
    /// Styled terminal output with list glyphs, attribution badges and
    /// preview footnotes.
    #[default]
    Pretty,
    /// Unstyled text: emphasis unwrapped, attributions spelled out.
    Plain,
    /// The segment list as JSON.
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "bizchat",
    about = "Parse and render business-intelligence chat answers",
    version,
    long_about = None,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (overrides auto-discovery)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Use plain ASCII glyphs for bullets and badges
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Disable ANSI styling
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase verbosity (-v = debug, -vv = trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse an answer (from a file or stdin) and print it
    Parse {
        /// Answer text file; stdin when omitted
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,
        /// Output format (pretty | plain | json)
        #[arg(long, value_enum, default_value = "pretty")]
        format: OutputFormatArg,
        /// Business directory for preview footnotes (overrides config)
        #[arg(long, short = 'd')]
        directory: Option<PathBuf>,
        /// Do not append preview footnotes
        #[arg(long)]
        no_previews: bool,
    },
    /// List the distinct businesses an answer attributes to our database
    Names {
        /// Answer text file; stdin when omitted
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,
    },
    /// Look up the preview record for one business name
    Preview {
        /// Business name, markup and attribution phrase are ignored
        name: String,
        /// Business directory (overrides config)
        #[arg(long, short = 'd')]
        directory: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration and exit
    ShowConfig,
    /// Generate shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "bizchat", &mut std::io::stdout());
}
