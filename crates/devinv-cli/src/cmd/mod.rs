/// Command module for the `devinv` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the parsed arguments and returns `Ok(())` on success or
/// a [`crate::error::CliError`] on failure.
pub mod admit;
pub mod check;
pub mod init;
pub mod list;
pub mod show;
pub mod subtree;
pub mod topology;
