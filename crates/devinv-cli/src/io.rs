/// Input acquisition for the `devinv` binary: disk files and stdin.
///
/// `devinv-core` never touches the filesystem; every byte of inventory JSON
/// enters the process through [`read_input`]. Both sources are size-capped
/// before any unbounded allocation happens — disk files via a metadata
/// pre-check, stdin via a reader capped one byte past the limit — and the
/// bytes must be valid UTF-8, reported with the offset of the first bad
/// sequence.
use std::io::Read as _;
use std::path::Path;

use crate::PathOrStdin;
use crate::error::CliError;

/// Reads the entire contents of `source` into a `String`, enforcing
/// `max_size` and UTF-8 validity.
///
/// # Errors
///
/// All failures carry exit code 2: [`CliError::FileNotFound`],
/// [`CliError::PermissionDenied`], [`CliError::FileTooLarge`],
/// [`CliError::InvalidUtf8`], [`CliError::StdinReadError`], and
/// [`CliError::IoError`] for anything else the OS reports.
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    let (bytes, label) = match source {
        PathOrStdin::Path(path) => (
            read_file_capped(path, max_size)?,
            path.display().to_string(),
        ),
        PathOrStdin::Stdin => (read_stdin_capped(max_size)?, "-".to_owned()),
    };
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        source: label,
        byte_offset: e.utf8_error().valid_up_to(),
    })
}

/// Reads a disk file after checking its reported length against the cap, so
/// an oversized inventory is rejected before a single byte is allocated.
fn read_file_capped(path: &Path, max_size: u64) -> Result<Vec<u8>, CliError> {
    let reported = std::fs::metadata(path)
        .map_err(|e| classify_io_error(&e, path))?
        .len();
    if reported > max_size {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: max_size,
            actual: Some(reported),
        });
    }
    std::fs::read(path).map_err(|e| classify_io_error(&e, path))
}

/// Drains stdin through a reader capped one byte past the limit; landing on
/// that extra byte is the overflow signal, with no second read needed.
fn read_stdin_capped(max_size: u64) -> Result<Vec<u8>, CliError> {
    let mut buf: Vec<u8> = Vec::new();
    std::io::stdin()
        .lock()
        .take(max_size.saturating_add(1))
        .read_to_end(&mut buf)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;
    if buf.len() as u64 > max_size {
        return Err(CliError::FileTooLarge {
            source: "-".to_owned(),
            limit: max_size,
            // The stream was cut off at the cap; the true size is unknown.
            actual: None,
        });
    }
    Ok(buf)
}

/// Maps an OS error to the matching [`CliError`]. Only the two kinds with
/// dedicated variants are picked out; everything else stays generic.
fn classify_io_error(e: &std::io::Error, path: &Path) -> CliError {
    let kind = e.kind();
    if kind == std::io::ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if kind == std::io::ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
