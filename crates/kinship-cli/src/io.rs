/// Input reading with size enforcement and UTF-8 validation.
///
/// `kinship-core` never touches the filesystem; every byte the binary reads
/// comes through [`read_input`]. Disk files are size-checked through their
/// metadata before reading. Stdin is read through a `Read::take` cap plus a
/// one-byte probe, so allocation stays bounded either way.
use std::io::{ErrorKind, Read as _};
use std::path::Path;

use crate::PathOrStdin;
use crate::error::CliError;

/// Reads all of `source` into a `String`, refusing inputs over `max_size`
/// bytes.
///
/// # Errors
///
/// Returns a [`CliError`] with exit code 2 when the input is missing,
/// unreadable, too large or not UTF-8.
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    match source {
        PathOrStdin::Path(path) => read_file(path, max_size),
        PathOrStdin::Stdin => read_stdin(max_size),
    }
}

fn read_file(path: &Path, max_size: u64) -> Result<String, CliError> {
    let file_size = std::fs::metadata(path)
        .map_err(|e| file_error(&e, path))?
        .len();
    if file_size > max_size {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: max_size,
            actual: Some(file_size),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| file_error(&e, path))?;
    utf8(bytes, &path.display().to_string())
}

fn file_error(e: &std::io::Error, path: &Path) -> CliError {
    let kind = e.kind();
    if kind == ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if kind == ErrorKind::PermissionDenied {
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

fn read_stdin(max_size: u64) -> Result<String, CliError> {
    let stdin = std::io::stdin();
    let mut handle = stdin.lock();
    let mut buf: Vec<u8> = Vec::new();

    (&mut handle)
        .take(max_size)
        .read_to_end(&mut buf)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;

    // A full buffer may hide more input; probe one byte past the cap.
    if buf.len() as u64 == max_size {
        let mut probe = [0u8; 1];
        let extra = handle
            .read(&mut probe)
            .map_err(|e| CliError::StdinReadError {
                detail: e.to_string(),
            })?;
        if extra > 0 {
            return Err(CliError::FileTooLarge {
                source: "-".to_owned(),
                limit: max_size,
                actual: None,
            });
        }
    }

    utf8(buf, "-")
}

fn utf8(bytes: Vec<u8>, source: &str) -> Result<String, CliError> {
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        source: source.to_owned(),
        byte_offset: e.utf8_error().valid_up_to(),
    })
}
