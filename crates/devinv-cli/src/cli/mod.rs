//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use devinv_core::DeviceType;

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].  This avoids stringly-typed handling of the stdin
/// sentinel throughout the codebase.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tabular and tree output (default).
    Human,
    /// Structured JSON output.
    Json,
}

/// Device type argument for the `admit` subcommand.
///
/// Mirrors [`DeviceType`] so that clap can enumerate the accepted values in
/// `--help` output and reject anything outside the closed set.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DeviceTypeArg {
    /// A gateway (topology root tier).
    Gateway,
    /// A switch (distribution tier).
    Switch,
    /// An access point (edge tier; cannot be an uplink).
    AccessPoint,
}

impl From<DeviceTypeArg> for DeviceType {
    fn from(arg: DeviceTypeArg) -> Self {
        match arg {
            DeviceTypeArg::Gateway => DeviceType::Gateway,
            DeviceTypeArg::Switch => DeviceType::Switch,
            DeviceTypeArg::AccessPoint => DeviceType::AccessPoint,
        }
    }
}

/// All top-level subcommands exposed by the `devinv` binary.
#[derive(Subcommand)]
pub enum Command {
    /// List all devices sorted by type priority, then MAC address.
    List {
        /// Path to an inventory file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Print a single device entry looked up by MAC address.
    Show {
        /// Path to an inventory file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// MAC address of the device (format `AA:BB:CC:DD:EE:FF`).
        #[arg(value_name = "MAC")]
        mac_address: String,
    },

    /// Check the inventory topology for uplink cycles.
    Check {
        /// Path to an inventory file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Build and print the full device topology forest.
    Topology {
        /// Path to an inventory file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Print the topology subtree rooted at one device.
    Subtree {
        /// Path to an inventory file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// MAC address of the subtree root (format `AA:BB:CC:DD:EE:FF`).
        #[arg(value_name = "MAC")]
        mac_address: String,
    },

    /// Dry-run the admission rules for a candidate device.
    Admit {
        /// Path to an inventory file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// MAC address of the candidate device.
        #[arg(long, value_name = "MAC")]
        mac: String,
        /// Device type of the candidate.
        #[arg(long, value_enum)]
        device_type: DeviceTypeArg,
        /// MAC address of the candidate's uplink device.
        #[arg(long, value_name = "MAC")]
        uplink: Option<String>,
    },

    /// Scaffold a small example inventory file on stdout.
    Init,
}

/// Root CLI struct for the `devinv` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "devinv",
    version,
    about = "Network device inventory CLI",
    long_about = "Network device inventory command-line tool.\n\
                  Lists, validates, and renders uplink topologies from JSON\n\
                  inventory files, and dry-runs device admission rules."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `DEVINV_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 67108864 (64 MB).
    #[arg(
        long,
        global = true,
        env = "DEVINV_MAX_FILE_SIZE",
        default_value = "67108864"
    )]
    pub max_file_size: u64,
}
