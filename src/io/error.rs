//! Error types for file, image and command handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for editor operations
#[derive(Debug)]
pub enum PointyboxError {
    /// Failed to load the guide image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Command or argument validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// User declined to replace an unreadable pointybox file
    Aborted {
        /// File that would have been replaced
        path: PathBuf,
    },

    /// Logger could not be installed
    Logger {
        /// Underlying logger error
        source: log::SetLoggerError,
    },
}

impl fmt::Display for PointyboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "'{}' is not a valid image file: {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Aborted { path } => {
                write!(f, "Aborted, '{}' was left untouched", path.display())
            }
            Self::Logger { source } => write!(f, "Failed to install logger: {source}"),
        }
    }
}

impl std::error::Error for PointyboxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Logger { source } => Some(source),
            Self::InvalidParameter { .. } | Self::Aborted { .. } => None,
        }
    }
}

/// Convenience type alias for editor results
pub type Result<T> = std::result::Result<T, PointyboxError>;

impl From<std::io::Error> for PointyboxError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<log::SetLoggerError> for PointyboxError {
    fn from(err: log::SetLoggerError) -> Self {
        Self::Logger { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PointyboxError {
    PointyboxError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Structural problem found while decoding a pointybox file
///
/// Loading reports these as values; the caller decides whether to fall back
/// to an empty model.
#[derive(Debug)]
pub enum FormatError {
    /// File could not be read at all
    Unreadable {
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// File holds no bytes
    Empty,

    /// Leading bytes are not the pointybox magic
    BadMagic,

    /// Data ended inside a field
    Truncated {
        /// Section being read
        section: &'static str,
        /// Byte offset where the read started
        offset: usize,
    },

    /// Declared record count needs more bytes than remain
    CountExceedsData {
        /// Section whose count is wrong
        section: &'static str,
        /// Declared number of records
        declared: u32,
        /// Bytes left in the file
        remaining: usize,
    },

    /// Bytes remain after the last class slot
    TrailingBytes {
        /// Number of unread bytes
        count: usize,
    },

    /// A record decoded to a value the model cannot hold
    InvalidRecord {
        /// Section holding the record
        section: &'static str,
        /// Why the record was rejected
        reason: &'static str,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { source } => write!(f, "file could not be read: {source}"),
            Self::Empty => write!(f, "file is empty"),
            Self::BadMagic => write!(f, "missing pointybox header"),
            Self::Truncated { section, offset } => {
                write!(f, "data ends inside {section} at byte {offset}")
            }
            Self::CountExceedsData {
                section,
                declared,
                remaining,
            } => {
                write!(
                    f,
                    "{section} count {declared} exceeds the {remaining} remaining bytes"
                )
            }
            Self::TrailingBytes { count } => {
                write!(f, "{count} unexpected bytes after the last tile")
            }
            Self::InvalidRecord { section, reason } => {
                write!(f, "invalid {section} record: {reason}")
            }
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source } => Some(source),
            _ => None,
        }
    }
}
