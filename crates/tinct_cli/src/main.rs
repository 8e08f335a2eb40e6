//! Tinct CLI
//!
//! - `tinct palette`: export the resolved palette as CSS variables, JSON or TOML
//! - `tinct roles`: list every color role with its light and dark value
//! - `tinct demo`: walk a modal dialog through open, Tab cycling and dismissal
//!   in a headless document

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tinct_theme::{ThemePreference, ThemeScope};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::commands::{Format, SystemScheme};
use crate::config::TinctConfig;

/// Theme tokens and dialog behavior for Tinct
#[derive(Parser, Debug)]
#[command(name = "tinct")]
#[command(about = "Theme tokens and dialog behavior for Tinct")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./tinct.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the palette for a theme preference
    Palette {
        /// light, dark or system (overrides the config file)
        #[arg(short, long)]
        theme: Option<ThemePreference>,

        /// System color scheme to resolve `system` against
        #[arg(long, value_enum, default_value_t = SystemScheme::Detect)]
        system: SystemScheme,

        #[arg(short, long, value_enum, default_value_t = Format::Css)]
        format: Format,
    },

    /// List color roles with light and dark values
    Roles,

    /// Run a scripted modal dialog walkthrough
    Demo {
        /// Let Tab leave the dialog
        #[arg(long)]
        no_trap: bool,

        /// Ignore Escape
        #[arg(long)]
        no_esc: bool,

        /// Ignore clicks on the overlay
        #[arg(long)]
        no_overlay: bool,
    },
}

fn install_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    install_tracing(cli.verbose);

    let config = TinctConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Palette {
            theme,
            system,
            format,
        } => {
            let preference = theme.unwrap_or(config.theme.preference);
            let resolver = commands::resolver(preference, system);
            info!(%preference, mode = %resolver.resolved_mode(), "exporting palette");
            print!("{}", commands::palette(&resolver, format)?);
        }
        Commands::Roles => {
            print!("{}", commands::roles()?);
        }
        Commands::Demo {
            no_trap,
            no_esc,
            no_overlay,
        } => {
            let mut options = config.dialog.options();
            options.trap_focus &= !no_trap;
            options.close_on_esc &= !no_esc;
            options.close_on_overlay &= !no_overlay;

            let scope = ThemeScope::with_resolver(commands::resolver(
                config.theme.preference,
                SystemScheme::Detect,
            ));
            info!(?options, "running dialog walkthrough");
            for line in commands::demo(&scope, options).context("Dialog walkthrough failed")? {
                println!("{line}");
            }
        }
    }

    Ok(())
}
