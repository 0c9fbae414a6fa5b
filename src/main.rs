//! fwkit CLI - build tooling for ESP32 PlatformIO firmware
//!
//! Usage: fwkit <COMMAND>
//!
//! Commands:
//!   embed     Compress web assets into C headers
//!   ota       Build and export versioned OTA images
//!   wav2pcm   Convert a mono 16-bit WAV file to raw PCM
//!   stamp     Print firmware version and build time
//!   fs-patch  Let the platform builder accept LittleFS partitions
//!   prebuild  Pre-build hook that runs `embed`

mod cli;
mod commands;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Commands};
use commands::fs_patch::{cmd_fs_patch, FsPatchArgs};
use commands::ota::{cmd_ota, OtaArgs};
use commands::Globals;
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let json = cli.json;
    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            ui::error::print_error(&err, json);
            std::process::exit(ui::error::exit_code(&err));
        }
    }
}

/// `-v` info, `-vv` debug, `-vvv` trace; `RUST_LOG` wins when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// `Ok(false)` means the command ran but the outcome is a failure (`--check`).
fn run(cli: Cli) -> Result<bool> {
    let cwd = std::env::current_dir().context("reading current directory")?;
    let project_dir = match cli.directory {
        Some(dir) if dir.is_absolute() => dir,
        Some(dir) => cwd.join(dir),
        None => cwd,
    };
    let config_path: Option<PathBuf> = cli.config.map(|p| {
        if p.is_absolute() {
            p
        } else {
            project_dir.join(p)
        }
    });

    let globals = Globals {
        ui: UiContext::new(cli.json, cli.verbose),
        project_dir,
        config_path,
    };

    log::debug!(
        "fwkit {} in {}",
        cli.command.name(),
        globals.project_dir.display()
    );

    match cli.command {
        Commands::Embed {
            data_dir,
            output_dir,
            idf,
            check,
        } => commands::embed::cmd_embed(&globals, data_dir, output_dir, idf, check),
        Commands::Ota {
            env,
            prefix,
            fw_version,
            skip_firmware,
            skip_fs,
            dry_run,
        } => cmd_ota(
            &globals,
            OtaArgs {
                env,
                prefix,
                version: fw_version,
                skip_firmware,
                skip_fs,
                dry_run,
            },
        )
        .map(|_| true),
        Commands::Wav2pcm {
            input,
            output,
            expected_rate,
        } => commands::wav2pcm::cmd_wav2pcm(&globals, input, output, expected_rate).map(|_| true),
        Commands::Stamp {
            env,
            format,
            output,
        } => commands::stamp::cmd_stamp(&globals, env, format.into(), output).map(|_| true),
        Commands::FsPatch {
            builder,
            platform_dir,
            targets,
            in_place,
            output,
        } => cmd_fs_patch(
            &globals,
            FsPatchArgs {
                builder,
                platform_dir,
                targets,
                in_place,
                output,
            },
        )
        .map(|_| true),
        Commands::Prebuild { env, timeout } => {
            commands::prebuild::cmd_prebuild(&globals, env, timeout).map(|_| true)
        }
    }
}
