//! Error types for rules loading and layout export

use std::fmt;
use std::path::PathBuf;

/// Main error type for layout engine operations
#[derive(Debug)]
pub enum MosaicError {
    /// A rules document failed to parse
    RulesDocument {
        /// Where the document came from, a path or `<built-in>`
        source_name: String,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// A rules document parsed but violates a structural requirement
    InvalidRules {
        /// Field that failed validation
        field: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode a layout as JSON
    LayoutEncode {
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Failed to write a layout document to disk
    LayoutExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
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
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RulesDocument {
                source_name,
                source,
            } => {
                write!(f, "Failed to parse rules document '{source_name}': {source}")
            }
            Self::InvalidRules {
                field,
                value,
                reason,
            } => {
                write!(f, "Invalid rules field '{field}' = '{value}': {reason}")
            }
            Self::LayoutEncode { source } => {
                write!(f, "Failed to encode layout as JSON: {source}")
            }
            Self::LayoutExport { path, source } => {
                write!(
                    f,
                    "Failed to export layout to '{}': {source}",
                    path.display()
                )
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
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RulesDocument { source, .. } | Self::LayoutEncode { source } => Some(source),
            Self::LayoutExport { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::InvalidRules { .. } => None,
        }
    }
}

/// Convenience type alias for layout engine results
pub type Result<T> = std::result::Result<T, MosaicError>;

impl From<std::io::Error> for MosaicError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid rules error
pub fn invalid_rules(
    field: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidRules {
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
