//! xkbgen CLI - YAML to XKB keymap compiler
//!
//! Usage: xkbgen [OPTIONS] <LAYOUT>
//!
//! ```bash
//! $ xkbgen layout.yaml > mymap.xkb
//! $ xkbcomp mymap.xkb $DISPLAY
//! ```

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use xkbgen::{Config, KeymapPipeline};

/// xkbgen - compile a YAML keyboard layout into an XKB keymap
#[derive(Parser, Debug)]
#[command(name = "xkbgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Layout file (YAML)
    layout: PathBuf,

    /// Emit configuration (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the keymap here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// xkb_keycodes include (overrides config)
    #[arg(long)]
    keycodes: Option<String>,

    /// xkb_types include (overrides config)
    #[arg(long)]
    types: Option<String>,

    /// xkb_compat include (overrides config)
    #[arg(long)]
    compat: Option<String>,

    /// Add an xkb_geometry include
    #[arg(long)]
    geometry: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let (mut config, warnings) = Config::load_or_default(cli.config.as_deref())?;
    for warning in &warnings {
        warn!("{warning}");
    }
    let template = &mut config.template;
    if let Some(keycodes) = cli.keycodes {
        template.keycodes = keycodes;
    }
    if let Some(types) = cli.types {
        template.types = types;
    }
    if let Some(compat) = cli.compat {
        template.compat = compat;
    }
    if let Some(geometry) = cli.geometry {
        template.geometry = Some(geometry);
    }

    let compilation = KeymapPipeline::new(config.template)
        .compile_file(&cli.layout)
        .with_context(|| format!("failed to compile {}", cli.layout.display()))?;
    info!(
        "Compiled {} keys ({} replaced values).",
        compilation.key_count,
        compilation.warnings.len()
    );

    match cli.output {
        Some(path) => fs::write(&path, &compilation.keymap)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(compilation.keymap.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
