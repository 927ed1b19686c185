//! Application orchestrator.
//! Loads/merges config, initializes logging, builds the mover from the merged
//! config, runs it once, and maps the report to an exit status.

use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing::{debug, warn};

use file_move::cli::Args;
use file_move::config::{create_template_config, load_config, CONFIG_ENV};
use file_move::output as out;
use file_move::{default_config_path, Config, LogLevel, Mover};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<ExitCode> {
    // Handle --print-config / --init-config before logging init
    if args.print_config {
        print_config_location(&args);
        return Ok(ExitCode::SUCCESS);
    }
    if args.init_config {
        let path = match &args.config {
            Some(p) => p.clone(),
            None => default_config_path()?,
        };
        if path.exists() {
            out::print_info(&format!("A config file already exists at {}", path.display()));
        } else {
            create_template_config(&path)?;
            out::print_success(&format!("A template file_move config was written to: {}", path.display()));
            out::print_info("Edit it to set <source_path>, <target_path> and optionally <filter>, then re-run.");
        }
        return Ok(ExitCode::SUCCESS);
    }

    // Config file first, CLI flags on top.
    let mut cfg: Config = load_config(args.config.as_deref())?.unwrap_or_default();
    args.apply_overrides(&mut cfg);

    let _guard = init_tracing(cfg.log_level, cfg.log_file.as_deref(), args.json).inspect_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {e:#}"));
    })?;

    if let Some(raw) = args.log_level.as_deref() {
        if !args.debug && LogLevel::parse(raw).is_none() {
            warn!(value = raw, "Ignoring unknown --log-level; expected quiet, normal, info or debug");
        }
    }
    debug!(?cfg, "Effective configuration");

    let mover = Mover::from_config(&cfg).inspect_err(|e| {
        out::print_error(&format!("{e:#}"));
    })?;
    let report = mover.execute();

    if cfg.log_level != LogLevel::Quiet {
        out::print_summary(&report);
    }

    if cfg.fail_on_error && !report.is_success() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_config_location(args: &Args) {
    if let Some(p) = &args.config {
        out::print_info(&format!("Using --config (explicit):\n  {}\n", p.display()));
        return;
    }
    if let Ok(cfg_env) = std::env::var(CONFIG_ENV) {
        out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {cfg_env}\n"));
        out::print_info(&format!("To override, unset {CONFIG_ENV} or pass --config."));
        return;
    }
    match default_config_path().context("resolve default config path") {
        Ok(p) => {
            out::print_info(&format!("Default file_move config path:\n  {}\n", p.display()));
            if p.exists() {
                out::print_info("A config file already exists at that location.");
            } else {
                out::print_info("No config file exists there yet. Run with --init-config to create a template.");
            }
        }
        Err(e) => out::print_error(&format!("{e:#}")),
    }
}
