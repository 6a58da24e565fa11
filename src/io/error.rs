//! Error types and context management for algorithm operations

use std::fmt;
use std::path::PathBuf;

use crate::analysis::palette::Color;
use crate::spatial::direction::{Direction, Point};

/// Main error type for all algorithm operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Source data doesn't meet algorithm requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Algorithm parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A color was looked up that never appeared in the sample
    ///
    /// Signals an inconsistency between canvas state and the rule table.
    UnknownColor {
        /// The color that was looked up
        color: Color,
    },

    /// A known color has no neighbour recorded in a direction
    ///
    /// Callers treat this as "no constraint" rather than "all forbidden".
    NoRuleForDirection {
        /// The color whose rule was requested
        color: Color,
        /// The direction without sample evidence
        direction: Direction,
    },

    /// Every known color is restricted at a pixel (a contradiction)
    NoColorAvailable {
        /// Canvas coordinate, when known
        position: Option<Point>,
        /// Number of restricted colors
        restricted: usize,
        /// Number of colors in the sample
        known: usize,
    },

    /// Failed to save generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
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

    /// The global logger could not be installed
    Logging {
        /// Underlying logger error
        source: log::SetLoggerError,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnknownColor { color } => {
                write!(f, "Color {color} does not appear in the sample")
            }
            Self::NoRuleForDirection { color, direction } => {
                write!(f, "No neighbour of {color} was observed {direction}")
            }
            Self::NoColorAvailable {
                position,
                restricted,
                known,
            } => match position {
                Some([x, y]) => write!(
                    f,
                    "Contradiction at ({x}, {y}): {restricted} of {known} colors restricted"
                ),
                None => write!(
                    f,
                    "Contradiction: {restricted} of {known} colors restricted"
                ),
            },
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
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
            Self::Logging { source } => write!(f, "Failed to initialise logging: {source}"),
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Logging { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for algorithm results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Canvas coordinates where error occurred
    pub position: Option<Point>,
}

/// Enriches error messages with algorithm state information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the position context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the position applied
    fn at_position(self, position: Point) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<AlgorithmError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only contradictions are attributed to a coordinate
            if let AlgorithmError::NoColorAvailable { position, .. } = &mut error
                && context.position.is_some()
            {
                *position = context.position;
            }
            error
        })
    }

    fn at_position(self, position: Point) -> Result<T> {
        self.with_context(ErrorContext {
            position: Some(position),
        })
    }
}

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<log::SetLoggerError> for AlgorithmError {
    fn from(err: log::SetLoggerError) -> Self {
        Self::Logging { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid source data error
pub fn invalid_source(reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::InvalidSourceData {
        reason: reason.to_string(),
    }
}
