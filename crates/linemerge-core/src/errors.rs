use thiserror::Error;

/// Result type alias using LineMergeError
pub type Result<T> = std::result::Result<T, LineMergeError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// The diff and merge operations themselves cannot fail. Every kind here
/// belongs to the boundary around them: naming a strategy or output format,
/// reading sources, writing exports and encoding JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    InvalidInput,
    InvalidStrategy,
    InvalidFormat,
    Io,
    Serialization,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidStrategy => "ERR_INVALID_STRATEGY",
            ExErrorKind::InvalidFormat => "ERR_INVALID_FORMAT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a stable kind for programmatic handling plus optional context
/// (operation, file path) for humans.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Errors raised around the diff/merge core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineMergeError {
    /// Merge strategy name did not match any known strategy
    #[error("Unknown merge strategy: {name} (expected auto, left or right)")]
    UnknownStrategy { name: String },

    /// Output format name did not match any known format
    #[error("Unknown output format: {name} (expected text, json or summary)")]
    UnknownFormat { name: String },

    /// A left or right source could not be read
    #[error("Cannot read source {path}: {reason}")]
    SourceUnreadable { path: String, reason: String },

    /// Both sides asked for stdin
    #[error("Only one side may be read from stdin")]
    StdinUsedTwice,

    /// The merged document could not be written
    #[error("Cannot write export {path}: {reason}")]
    ExportFailed { path: String, reason: String },

    /// JSON encoding failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<LineMergeError> for ExError {
    fn from(err: LineMergeError) -> Self {
        match err {
            LineMergeError::UnknownStrategy { name } => ExError::new(ExErrorKind::InvalidStrategy)
                .with_op("parse_strategy")
                .with_message(format!("Unknown merge strategy: {}", name)),

            LineMergeError::UnknownFormat { name } => ExError::new(ExErrorKind::InvalidFormat)
                .with_op("parse_format")
                .with_message(format!("Unknown output format: {}", name)),

            LineMergeError::SourceUnreadable { path, reason } => ExError::new(ExErrorKind::Io)
                .with_op("read_source")
                .with_path(path)
                .with_message(reason),

            LineMergeError::StdinUsedTwice => ExError::new(ExErrorKind::InvalidInput)
                .with_op("read_source")
                .with_message("Only one side may be read from stdin"),

            LineMergeError::ExportFailed { path, reason } => ExError::new(ExErrorKind::Io)
                .with_op("export")
                .with_path(path)
                .with_message(reason),

            LineMergeError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for LineMergeError {
    fn from(err: serde_json::Error) -> Self {
        LineMergeError::Serialization {
            message: err.to_string(),
        }
    }
}
