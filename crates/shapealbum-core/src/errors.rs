use thiserror::Error;

/// Result type alias using AlbumError
pub type Result<T> = std::result::Result<T, AlbumError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that hosts can match on without
/// parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaErrorKind {
    // Registry
    DuplicateName,
    UnknownShapeType,
    UnknownShape,

    // History
    UnknownSnapshot,

    // Shape validation
    InvalidColor,
    InvalidDimension,

    // Command protocol
    Format,
    BatchHalted,

    // Export
    Serialization,
}

impl SaErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            SaErrorKind::DuplicateName => "ERR_DUPLICATE_NAME",
            SaErrorKind::UnknownShapeType => "ERR_UNKNOWN_SHAPE_TYPE",
            SaErrorKind::UnknownShape => "ERR_UNKNOWN_SHAPE",
            SaErrorKind::UnknownSnapshot => "ERR_UNKNOWN_SNAPSHOT",
            SaErrorKind::InvalidColor => "ERR_INVALID_COLOR",
            SaErrorKind::InvalidDimension => "ERR_INVALID_DIMENSION",
            SaErrorKind::Format => "ERR_FORMAT",
            SaErrorKind::BatchHalted => "ERR_BATCH_HALTED",
            SaErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus optional context fields. Produced from an
/// [`AlbumError`] at logging and host boundaries.
#[derive(Debug, Clone)]
pub struct SaError {
    kind: SaErrorKind,
    op: Option<String>,
    shape_name: Option<String>,
    snapshot_id: Option<String>,
    line: Option<usize>,
    message: String,
    source: Option<Box<SaError>>,
}

impl SaError {
    /// Create a new error with the specified kind
    pub fn new(kind: SaErrorKind) -> Self {
        Self {
            kind,
            op: None,
            shape_name: None,
            snapshot_id: None,
            line: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add shape name context
    pub fn with_shape_name(mut self, name: impl Into<String>) -> Self {
        self.shape_name = Some(name.into());
        self
    }

    /// Add snapshot ID context
    pub fn with_snapshot_id(mut self, id: impl Into<String>) -> Self {
        self.snapshot_id = Some(id.into());
        self
    }

    /// Add command line number context (1-based)
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: SaError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> SaErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the shape name context, if any
    pub fn shape_name(&self) -> Option<&str> {
        self.shape_name.as_deref()
    }

    /// Get the snapshot ID context, if any
    pub fn snapshot_id(&self) -> Option<&str> {
        self.snapshot_id.as_deref()
    }

    /// Get the line number context, if any
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&SaError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for SaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(name) = &self.shape_name {
            write!(f, " (shape: {})", name)?;
        }
        if let Some(id) = &self.snapshot_id {
            write!(f, " (snapshot: {})", id)?;
        }
        if let Some(line) = self.line {
            write!(f, " (line: {})", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for SaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for album, shape and command operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlbumError {
    /// A live shape already uses this name
    #[error("Shape name already in use: {name}")]
    DuplicateName { name: String },

    /// Shape type label is not one of the supported types
    #[error("Unknown shape type: {shape_type} (expected rectangle or oval)")]
    UnknownShapeType { shape_type: String },

    /// No live shape with this name
    #[error("Shape not found: {name}")]
    UnknownShape { name: String },

    /// No snapshot with this id in the history
    #[error("Snapshot not found: {snapshot_id}")]
    UnknownSnapshot { snapshot_id: String },

    /// At least one color component lies outside [0, 1]
    #[error("Color components must be between 0 and 1, got ({r}, {g}, {b})")]
    InvalidColor { r: f64, g: f64, b: f64 },

    /// At least one dimension is zero or negative
    #[error("Dimensions must be positive, got ({first}, {second})")]
    InvalidDimension { first: f64, second: f64 },

    /// Command line could not be parsed
    #[error("Format error: {reason}")]
    Format { reason: String },

    /// A command batch stopped at the given line
    #[error("line {line_number} `{line}`: {cause}")]
    BatchHalted {
        line_number: usize,
        line: String,
        #[source]
        cause: Box<AlbumError>,
    },

    /// Structured export failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl AlbumError {
    /// Build a format error from any displayable reason
    pub fn format(reason: impl Into<String>) -> Self {
        AlbumError::Format {
            reason: reason.into(),
        }
    }

    /// Classification of this error
    pub fn kind(&self) -> SaErrorKind {
        match self {
            AlbumError::DuplicateName { .. } => SaErrorKind::DuplicateName,
            AlbumError::UnknownShapeType { .. } => SaErrorKind::UnknownShapeType,
            AlbumError::UnknownShape { .. } => SaErrorKind::UnknownShape,
            AlbumError::UnknownSnapshot { .. } => SaErrorKind::UnknownSnapshot,
            AlbumError::InvalidColor { .. } => SaErrorKind::InvalidColor,
            AlbumError::InvalidDimension { .. } => SaErrorKind::InvalidDimension,
            AlbumError::Format { .. } => SaErrorKind::Format,
            AlbumError::BatchHalted { .. } => SaErrorKind::BatchHalted,
            AlbumError::Serialization { .. } => SaErrorKind::Serialization,
        }
    }
}

/// Conversion from AlbumError to the structured SaError
impl From<AlbumError> for SaError {
    fn from(err: AlbumError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        match err {
            AlbumError::DuplicateName { name } | AlbumError::UnknownShape { name } => {
                SaError::new(kind)
                    .with_shape_name(name)
                    .with_message(message)
            }
            AlbumError::UnknownSnapshot { snapshot_id } => SaError::new(kind)
                .with_snapshot_id(snapshot_id)
                .with_message(message),
            AlbumError::BatchHalted {
                line_number, cause, ..
            } => SaError::new(kind)
                .with_op("run_batch")
                .with_line(line_number)
                .with_message(message)
                .with_source((*cause).into()),
            AlbumError::UnknownShapeType { .. }
            | AlbumError::InvalidColor { .. }
            | AlbumError::InvalidDimension { .. }
            | AlbumError::Format { .. }
            | AlbumError::Serialization { .. } => SaError::new(kind).with_message(message),
        }
    }
}

/// Conversion from serde_json::Error to AlbumError
impl From<serde_json::Error> for AlbumError {
    fn from(err: serde_json::Error) -> Self {
        AlbumError::Serialization {
            message: err.to_string(),
        }
    }
}
