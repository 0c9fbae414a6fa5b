use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use fwkit::application::StampFormat;

/// fwkit - build tooling for ESP32 PlatformIO firmware
#[derive(Parser, Debug)]
#[command(name = "fwkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Run as if started in DIR
    #[arg(short = 'C', long = "directory", value_name = "DIR", global = true)]
    pub directory: Option<PathBuf>,

    /// Config file to use instead of ./fwkit.toml
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compress web assets into C headers for the firmware
    Embed {
        /// Directory holding the web assets [default: embed.data_dir]
        data_dir: Option<PathBuf>,

        /// Directory receiving the generated headers [default: embed.include_dir]
        output_dir: Option<PathBuf>,

        /// Generate plain C headers for ESP-IDF builds
        #[arg(long)]
        idf: bool,

        /// Write nothing; exit 1 if any header is out of date
        #[arg(long)]
        check: bool,
    },

    /// Build firmware and filesystem images and export them for OTA
    Ota {
        /// PlatformIO environment [default: project.env]
        #[arg(short, long)]
        env: Option<String>,

        /// Prefix of exported file names [default: ota.prefix]
        #[arg(long)]
        prefix: Option<String>,

        /// Version to stamp instead of custom_fw_version
        #[arg(long = "version", value_name = "VERSION")]
        fw_version: Option<String>,

        /// Do not build or export firmware.bin
        #[arg(long)]
        skip_firmware: bool,

        /// Do not build or export littlefs.bin
        #[arg(long)]
        skip_fs: bool,

        /// Print the plan without running anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Convert a mono 16-bit WAV file to raw PCM
    Wav2pcm {
        /// Input WAV file
        input: PathBuf,

        /// Output PCM file
        output: PathBuf,

        /// Sample rate the firmware plays at [default: audio.expected_sample_rate]
        #[arg(long, value_name = "HZ")]
        expected_rate: Option<u32>,
    },

    /// Print firmware version and build time for the build
    Stamp {
        /// PlatformIO environment [default: $PIOENV, then project.env]
        #[arg(short, long)]
        env: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = StampFormatArg::BuildFlags)]
        format: StampFormatArg,

        /// Write to FILE (only when changed) instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Let the platform builder accept LittleFS partitions (subtype 0x83)
    #[command(group(ArgGroup::new("source").required(true).args(["builder", "platform_dir"])))]
    #[command(group(ArgGroup::new("dest").required(true).args(["in_place", "output"])))]
    FsPatch {
        /// Builder script to patch
        #[arg(long, value_name = "FILE")]
        builder: Option<PathBuf>,

        /// Platform directory containing builder/main.py
        #[arg(long, value_name = "DIR")]
        platform_dir: Option<PathBuf>,

        /// Build target being run; patch only for buildfs/uploadfs/uploadfsota
        #[arg(short, long = "target", value_name = "TARGET")]
        targets: Vec<String>,

        /// Modify the builder script itself
        #[arg(long)]
        in_place: bool,

        /// Write the patched builder to FILE
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Pre-build hook: embed web assets before compilation
    Prebuild {
        /// PlatformIO environment [default: $PIOENV, then project.env]
        #[arg(short, long)]
        env: Option<String>,

        /// Seconds to wait for the embed step [default: embed.timeout_secs]
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Embed { .. } => "embed",
            Commands::Ota { .. } => "ota",
            Commands::Wav2pcm { .. } => "wav2pcm",
            Commands::Stamp { .. } => "stamp",
            Commands::FsPatch { .. } => "fs-patch",
            Commands::Prebuild { .. } => "prebuild",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StampFormatArg {
    /// -DFW_VERSION=... lines for build_flags
    BuildFlags,
    /// C header with #define lines
    Header,
    Json,
    /// KEY=value lines
    Env,
}

impl From<StampFormatArg> for StampFormat {
    fn from(arg: StampFormatArg) -> Self {
        match arg {
            StampFormatArg::BuildFlags => StampFormat::BuildFlags,
            StampFormatArg::Header => StampFormat::Header,
            StampFormatArg::Json => StampFormat::Json,
            StampFormatArg::Env => StampFormat::Env,
        }
    }
}
