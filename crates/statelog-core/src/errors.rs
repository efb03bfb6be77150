use statelog_core_types::RequestId;
use thiserror::Error;

/// Result type alias using JournalError
pub type Result<T> = std::result::Result<T, JournalError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can match on
/// programmatically and that the CLI prints verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Routing/Validation
    InvalidInput,
    InvalidScope,
    UnknownCommand,

    // Resolve
    NoMatchFound,

    // Persistence
    CorruptState,
    WriteFailure,
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidScope => "ERR_INVALID_SCOPE",
            ExErrorKind::UnknownCommand => "ERR_UNKNOWN_COMMAND",
            ExErrorKind::NoMatchFound => "ERR_NO_MATCH_FOUND",
            ExErrorKind::CorruptState => "ERR_CORRUPT_STATE",
            ExErrorKind::WriteFailure => "ERR_WRITE_FAILURE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a stable kind for programmatic handling plus optional context
/// (operation, document, scope, request) for diagnostics.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    document: Option<String>,
    scope: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    candidates: Option<Vec<String>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            document: None,
            scope: None,
            request_id: None,
            message: String::new(),
            candidates: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add document name context
    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.document = Some(document.into());
        self
    }

    /// Add scope context
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add candidate entries (the open questions when a resolve matched nothing)
    pub fn with_candidates(mut self, candidates: Vec<String>) -> Self {
        self.candidates = Some(candidates);
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
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

    /// Get the document name context, if any
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Get the scope context, if any
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get candidate entries, if any
    pub fn candidates(&self) -> Option<&[String]> {
        self.candidates.as_deref()
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
        if let Some(document) = &self.document {
            write!(f, " (document: {})", document)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for journal operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JournalError {
    /// Subsystem token is empty or contains disallowed characters
    #[error("Invalid subsystem scope '{scope}': {reason}")]
    InvalidScope { scope: String, reason: String },

    /// Command token is not one of the known journal commands
    #[error("Unknown command '{command}'")]
    UnknownCommand { command: String },

    /// Operation arguments were rejected before touching any document
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Backing document exists but does not parse as a state document
    #[error("Document {document} is corrupt: {reason}")]
    CorruptState { document: String, reason: String },

    /// Backing document exists but could not be read
    #[error("Could not read document {document}: {reason}")]
    ReadFailure { document: String, reason: String },

    /// Durable write could not complete
    #[error("Could not write document {document}: {reason}")]
    WriteFailure { document: String, reason: String },

    /// Resolve keyword matched no open question
    #[error("No open question matches '{keyword}'")]
    NoMatchFound {
        keyword: String,
        open_questions: Vec<String>,
    },

    /// Serialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from JournalError to ExError
impl From<JournalError> for ExError {
    fn from(err: JournalError) -> Self {
        let message = err.to_string();
        match err {
            JournalError::InvalidScope { scope, .. } => ExError::new(ExErrorKind::InvalidScope)
                .with_scope(scope)
                .with_message(message),

            JournalError::UnknownCommand { .. } => {
                ExError::new(ExErrorKind::UnknownCommand).with_message(message)
            }

            JournalError::InvalidInput { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }

            JournalError::CorruptState { document, .. } => {
                ExError::new(ExErrorKind::CorruptState)
                    .with_document(document)
                    .with_message(message)
            }

            JournalError::ReadFailure { document, .. } => ExError::new(ExErrorKind::Io)
                .with_document(document)
                .with_message(message),

            JournalError::WriteFailure { document, .. } => {
                ExError::new(ExErrorKind::WriteFailure)
                    .with_document(document)
                    .with_message(message)
            }

            JournalError::NoMatchFound { open_questions, .. } => {
                ExError::new(ExErrorKind::NoMatchFound)
                    .with_op("resolve")
                    .with_message(message)
                    .with_candidates(open_questions)
            }

            JournalError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to JournalError
impl From<serde_json::Error> for JournalError {
    fn from(err: serde_json::Error) -> Self {
        JournalError::Serialization {
            message: err.to_string(),
        }
    }
}
