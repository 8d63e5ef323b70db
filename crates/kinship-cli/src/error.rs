/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `kinship` binary. Every
/// variant maps to a stable exit code via [`CliError::exit_code`]:
///
/// - Exit code **2**: input failure. The family file could not be read or
///   parsed, so no relationship logic ran.
/// - Exit code **1**: logical failure. The file loaded but the query has no
///   answer (unknown person, no connecting path).
use std::fmt;
use std::path::PathBuf;

use kinship_core::QueryError;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `kinship` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, otherwise the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes; `None` for stdin.
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// `"-"` for stdin, otherwise the filesystem path.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// Any other I/O error, including failures writing to stdout.
    IoError {
        /// The file or stream involved.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The input is not a valid family document.
    ParseFailed {
        /// Parser message, including line and column.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// A person id given on the command line is not in the file.
    PersonNotFound {
        /// The id as typed.
        person_id: String,
    },

    /// The two people are not connected by any chain of links.
    NoPath {
        /// Starting id.
        from: String,
        /// Target id.
        to: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. } => 2,

            Self::PersonNotFound { .. } | Self::NoPath { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::ParseFailed { detail } => format!("error: {detail}"),
            Self::PersonNotFound { person_id } => {
                format!("error: person not found: {person_id:?}")
            }
            Self::NoPath { from, to } => {
                format!("error: no path between {from:?} and {to:?}")
            }
        }
    }

    /// Wraps a failed stdout write.
    pub fn stdout(e: &std::io::Error) -> Self {
        Self::IoError {
            source: "stdout".to_owned(),
            detail: e.to_string(),
        }
    }
}

impl From<QueryError> for CliError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::PersonNotFound(person_id) => Self::PersonNotFound { person_id },
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use std::path::PathBuf;

    use super::*;

    // ── exit_code ────────────────────────────────────────────────────────────

    #[test]
    fn input_failures_are_exit_2() {
        let errors = [
            CliError::FileNotFound {
                path: PathBuf::from("family.json"),
            },
            CliError::PermissionDenied {
                path: PathBuf::from("/root/family.json"),
            },
            CliError::FileTooLarge {
                source: "big.json".to_owned(),
                limit: 1024,
                actual: Some(2048),
            },
            CliError::InvalidUtf8 {
                source: "bad.json".to_owned(),
                byte_offset: 42,
            },
            CliError::StdinReadError {
                detail: "broken pipe".to_owned(),
            },
            CliError::IoError {
                source: "family.json".to_owned(),
                detail: "device full".to_owned(),
            },
            CliError::ParseFailed {
                detail: "invalid family file at line 1, column 1".to_owned(),
            },
        ];
        for e in errors {
            assert_eq!(e.exit_code(), 2, "{e}");
        }
    }

    #[test]
    fn logical_failures_are_exit_1() {
        let not_found = CliError::PersonNotFound {
            person_id: "42".to_owned(),
        };
        let no_path = CliError::NoPath {
            from: "1".to_owned(),
            to: "2".to_owned(),
        };
        assert_eq!(not_found.exit_code(), 1);
        assert_eq!(no_path.exit_code(), 1);
    }

    // ── message content ──────────────────────────────────────────────────────

    #[test]
    fn file_not_found_message_contains_path() {
        let e = CliError::FileNotFound {
            path: PathBuf::from("family-tree.json"),
        };
        let msg = e.message();
        assert!(msg.contains("family-tree.json"), "message: {msg}");
        assert!(msg.contains("not found"), "message: {msg}");
    }

    #[test]
    fn file_too_large_with_actual_mentions_sizes() {
        let e = CliError::FileTooLarge {
            source: "big.json".to_owned(),
            limit: 1_000_000,
            actual: Some(2_000_000),
        };
        let msg = e.message();
        assert!(msg.contains("2000000"), "message: {msg}");
        assert!(msg.contains("1000000"), "message: {msg}");
    }

    #[test]
    fn file_too_large_without_actual_mentions_limit() {
        let e = CliError::FileTooLarge {
            source: "-".to_owned(),
            limit: 512,
            actual: None,
        };
        assert!(e.message().contains("512"));
    }

    #[test]
    fn invalid_utf8_message_contains_offset() {
        let e = CliError::InvalidUtf8 {
            source: "corrupt.json".to_owned(),
            byte_offset: 99,
        };
        let msg = e.message();
        assert!(msg.contains("99"), "message: {msg}");
        assert!(msg.contains("corrupt.json"), "message: {msg}");
    }

    #[test]
    fn no_path_message_names_both_people() {
        let e = CliError::NoPath {
            from: "ada".to_owned(),
            to: "ben".to_owned(),
        };
        let msg = e.message();
        assert!(msg.contains("ada") && msg.contains("ben"), "message: {msg}");
    }

    #[test]
    fn query_error_converts_to_person_not_found() {
        let e = CliError::from(QueryError::PersonNotFound("x-1".to_owned()));
        assert_eq!(e.exit_code(), 1);
        assert!(e.message().contains("x-1"));
    }

    #[test]
    fn display_matches_message() {
        let e = CliError::FileNotFound {
            path: PathBuf::from("x.json"),
        };
        assert_eq!(format!("{e}"), e.message());
    }

    #[test]
    fn error_trait_is_implemented() {
        let e: Box<dyn std::error::Error> = Box::new(CliError::ParseFailed {
            detail: "bad".to_owned(),
        });
        assert!(!e.to_string().is_empty());
    }
}
