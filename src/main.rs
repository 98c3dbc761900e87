// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
mod cli;
mod render;

use std::io::{self, IsTerminal, Read};
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use bizchat_config::Config;
use bizchat_message::MessageParser;
use bizchat_preview::{CachedLookup, PreviewDirectory, PreviewLookup};
use cli::{Cli, Commands, OutputFormatArg};
use render::{render_footnotes, render_message, render_preview, RenderOptions};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Completions need no config.
    if let Commands::Completions { shell } = &cli.command {
        cli::print_completions(*shell);
        return Ok(());
    }

    let config = bizchat_config::load(cli.config.as_deref())?;
    let opts = RenderOptions {
        ascii: cli.ascii || config.render.ascii,
        color: !cli.no_color && config.render.color && io::stdout().is_terminal(),
    };

    match &cli.command {
        Commands::Parse { file, format, directory, no_previews } => {
            let input = read_input(file.as_deref())?;
            let show_previews = !*no_previews && config.render.show_previews;
            let lookup = if show_previews && *format == OutputFormatArg::Pretty {
                open_lookup(&config, directory.as_deref())?
            } else {
                None
            };
            parse_cmd(&input, *format, lookup.as_ref().map(|l| l as &dyn PreviewLookup), opts)
        }
        Commands::Names { file } => {
            let input = read_input(file.as_deref())?;
            let msg = MessageParser::new().parse(&input);
            for name in msg.database_business_names() {
                println!("{name}");
            }
            Ok(())
        }
        Commands::Preview { name, directory, json } => {
            let lookup = open_lookup(&config, directory.as_deref())?
                .context("no business directory configured (use --directory or [preview] directory)")?;
            preview_cmd(&lookup, name, *json, opts)
        }
        Commands::ShowConfig => {
            println!("{}", toml::to_string_pretty(&config).context("serialising config")?);
            Ok(())
        }
        Commands::Completions { .. } => Ok(()),
    }
}

fn parse_cmd(
    input: &str,
    format: OutputFormatArg,
    lookup: Option<&dyn PreviewLookup>,
    opts: RenderOptions,
) -> anyhow::Result<()> {
    let msg = MessageParser::new().parse(input);
    match format {
        OutputFormatArg::Json => {
            println!("{}", serde_json::to_string_pretty(&msg).context("serialising segments")?);
        }
        OutputFormatArg::Plain => println!("{}", msg.to_plain_text()),
        OutputFormatArg::Pretty => {
            println!("{}", render_message(&msg, opts));
            if let Some(notes) = lookup.and_then(|l| render_footnotes(&msg, l, opts)) {
                println!("\n{notes}");
            }
        }
    }
    Ok(())
}

fn preview_cmd(
    lookup: &dyn PreviewLookup,
    name: &str,
    as_json: bool,
    opts: RenderOptions,
) -> anyhow::Result<()> {
    let Some(preview) = lookup.lookup(name) else {
        anyhow::bail!("no business matching {name:?}");
    };
    if as_json {
        println!("{}", serde_json::to_string_pretty(&preview).context("serialising preview")?);
    } else {
        println!("{}", render_preview(&preview, opts));
    }
    Ok(())
}

/// Business directory from `--directory`, else from config.  `None` when
/// neither names one.
fn open_lookup(
    config: &Config,
    directory: Option<&Path>,
) -> anyhow::Result<Option<CachedLookup<PreviewDirectory>>> {
    let Some(path) = directory.map(Path::to_path_buf).or_else(|| config.preview.directory_path())
    else {
        debug!("no business directory configured");
        return Ok(None);
    };
    let dir = PreviewDirectory::load(&path)
        .with_context(|| format!("loading business directory {}", path.display()))?;
    Ok(Some(CachedLookup::with_limits(
        dir,
        config.preview.cache_capacity,
        Duration::from_secs(config.preview.cache_ttl_secs),
    )))
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading answer file {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
