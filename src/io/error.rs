//! Error types and context management for tiling operations

use std::fmt;
use std::path::PathBuf;

/// Why a rule string was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleFailure {
    /// A seed slot names a side count outside the allow-list
    UnsupportedSide(u32),
    /// A fixed transform angle is outside the allow-list
    UnsupportedAngle(u32),
    /// A token could not be parsed at all
    Malformed {
        /// The offending token
        token: String,
        /// What was expected
        reason: String,
    },
}

impl fmt::Display for RuleFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSide(sides) => write!(f, "invalid shape seed: {sides}-gon"),
            Self::UnsupportedAngle(angle) => write!(f, "invalid angle: {angle}°"),
            Self::Malformed { token, reason } => write!(f, "malformed token '{token}': {reason}"),
        }
    }
}

/// Main error type for all tiling operations
#[derive(Debug)]
pub enum TilingError {
    /// Rule string failed validation before any geometry was built
    InvalidRule {
        /// The full rule string
        rule: String,
        /// Seed, angle or syntax failure
        failure: RuleFailure,
    },

    /// A landmark ordinal exceeds the landmarks available
    LandmarkNotFound {
        /// Landmark kind character (`c`, `h` or `v`)
        kind: char,
        /// Requested 1-based ordinal
        ordinal: usize,
        /// Number of distinct landmarks of that kind
        available: usize,
        /// Position of the transform in the rule, when known
        transform_index: Option<usize>,
    },

    /// A seed slot has no free edge to attach to
    SeedPlacement {
        /// Seed layer (0 is the core)
        layer: usize,
        /// Slot within the layer
        slot: usize,
        /// Free edges that were available
        available: usize,
    },

    /// Cundy-Rollett notation could not be parsed
    InvalidNotation {
        /// The notation string
        notation: String,
        /// Description of the problem
        reason: String,
    },

    /// Automaton rule string could not be parsed
    InvalidLifeRule {
        /// The rule string
        rule: String,
        /// Description of the problem
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
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

    /// JSON encoding failed
    Serialization {
        /// Underlying serde error
        source: serde_json::Error,
    },
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRule { rule, failure } => {
                write!(f, "Invalid rule '{rule}': {failure}")
            }
            Self::LandmarkNotFound {
                kind,
                ordinal,
                available,
                transform_index,
            } => {
                write!(
                    f,
                    "Landmark {kind}{ordinal} not found ({available} available)"
                )?;
                if let Some(index) = transform_index {
                    write!(f, " in transform {}", index + 1)?;
                }
                Ok(())
            }
            Self::SeedPlacement {
                layer,
                slot,
                available,
            } => {
                write!(
                    f,
                    "No free edge for seed layer {layer} slot {slot} ({available} free edges)"
                )
            }
            Self::InvalidNotation { notation, reason } => {
                write!(f, "Invalid notation '{notation}': {reason}")
            }
            Self::InvalidLifeRule { rule, reason } => {
                write!(f, "Invalid automaton rule '{rule}': {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
            Self::Serialization { source } => write!(f, "Serialization error: {source}"),
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Position of the transform being executed
    pub transform_index: Option<usize>,
    /// Path being read or written
    pub path: Option<PathBuf>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with pipeline state
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the transform position
    ///
    /// # Errors
    ///
    /// Propagates the original error with the transform index applied
    fn with_transform(self, index: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<TilingError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                TilingError::LandmarkNotFound {
                    transform_index, ..
                } => {
                    if context.transform_index.is_some() {
                        *transform_index = context.transform_index;
                    }
                }
                TilingError::FileSystem {
                    path, operation, ..
                } => {
                    if let Some(context_path) = context.path {
                        *path = context_path;
                    }
                    if let Some(context_operation) = context.operation {
                        *operation = context_operation;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_transform(self, index: usize) -> Result<T> {
        self.with_context(ErrorContext {
            transform_index: Some(index),
            ..Default::default()
        })
    }
}

impl From<std::io::Error> for TilingError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for TilingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid rule error
pub fn invalid_rule(rule: &str, failure: RuleFailure) -> TilingError {
    TilingError::InvalidRule {
        rule: rule.to_string(),
        failure,
    }
}

/// Create a malformed-token rule error
pub fn malformed(rule: &str, token: &str, reason: &impl ToString) -> TilingError {
    invalid_rule(
        rule,
        RuleFailure::Malformed {
            token: token.to_string(),
            reason: reason.to_string(),
        },
    )
}
