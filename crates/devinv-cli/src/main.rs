//! Entry point for the `devinv` binary.
//!
//! Parses the CLI, reads input through [`io`], dispatches to the matching
//! [`cmd`] module, and converts any [`CliError`] into its exit code after
//! printing the message to stderr.
use clap::Parser as _;

mod cli;
mod cmd;
mod error;
mod format;
mod io;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use error::CliError;

fn main() {
    let args = Cli::parse();
    if let Err(e) = dispatch(&args) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Routes the parsed CLI to the matching command implementation.
///
/// File-reading happens here so every command receives its input as a
/// `&str` and stays trivially unit-testable.
fn dispatch(args: &Cli) -> Result<(), CliError> {
    match &args.command {
        Command::List { file } => {
            let content = io::read_input(file, args.max_file_size)?;
            cmd::list::run(&content, &args.format)
        }
        Command::Show { file, mac_address } => {
            let content = io::read_input(file, args.max_file_size)?;
            cmd::show::run(&content, mac_address, &args.format)
        }
        Command::Check { file } => {
            let content = io::read_input(file, args.max_file_size)?;
            cmd::check::run(&content, &args.format)
        }
        Command::Topology { file } => {
            let content = io::read_input(file, args.max_file_size)?;
            cmd::topology::run(&content, &args.format)
        }
        Command::Subtree { file, mac_address } => {
            let content = io::read_input(file, args.max_file_size)?;
            cmd::subtree::run(&content, mac_address, &args.format)
        }
        Command::Admit {
            file,
            mac,
            device_type,
            uplink,
        } => {
            let content = io::read_input(file, args.max_file_size)?;
            cmd::admit::run(&content, mac, *device_type, uplink.as_deref(), &args.format)
        }
        Command::Init => cmd::init::run(),
    }
}
