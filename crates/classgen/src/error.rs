use classgen_build::{BuildError, render::RenderError};
use classgen_config::ConfigError;
use classgen_schema::SchemaError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type: a stable kind plus the verbatim message.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{kind} error: {message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<SchemaError> for Error {
    fn from(err: SchemaError) -> Self {
        let kind = match err {
            SchemaError::Naming(_) => ErrorKind::Naming,
            SchemaError::Structural(_) => ErrorKind::Structural,
            SchemaError::Reference(_) => ErrorKind::Reference,
        };

        Self::new(kind, err.to_string())
    }
}

// A failed attribute bind is an internal fault.
impl From<RenderError> for Error {
    fn from(err: RenderError) -> Self {
        let kind = match err {
            RenderError::Attribute { .. } => ErrorKind::Internal,
            _ => ErrorKind::Render,
        };

        Self::new(kind, err.to_string())
    }
}

impl From<BuildError> for Error {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::Schema(err) => err.into(),
            BuildError::Render(err) => err.into(),
            BuildError::Emit {
                source: RenderError::Attribute { .. },
                ..
            } => Self::new(ErrorKind::Internal, err.to_string()),
            BuildError::Emit { .. } | BuildError::MissingSkeleton { .. } => {
                Self::new(ErrorKind::Render, err.to_string())
            }
        }
    }
}

// A skeleton that cannot be loaded fails the request like a render fault.
impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorKind::Render, err.to_string())
    }
}

///
/// ErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// An identifier or type name is not valid.
    Naming,

    /// The graph or a class body breaks a per-target rule.
    Structural,

    /// An id does not resolve, or is not unique.
    Reference,

    /// A skeleton could not be loaded or rendered.
    Render,

    /// The caller cannot remediate this, e.g. a view that failed to serialize.
    Internal,
}
