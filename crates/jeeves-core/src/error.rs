//! Error types for jeeves operations.
//!
//! Every variant carries an [`ErrorCode`] so transports can react to a failure
//! without matching on message text.

use thiserror::Error;

/// Result type alias for jeeves operations.
pub type JeevesResult<T> = Result<T, JeevesError>;

/// Main error type for all jeeves operations.
#[derive(Error, Debug)]
pub enum JeevesError {
    /// The memory store could not be reached or rejected an operation.
    #[error("Memory store unavailable: {message}")]
    StoreUnavailable {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The lexical database lookup failed (network, status, timeout, or body).
    #[error("Lexical lookup failed for '{word}': {message}")]
    ExternalLookupFailed {
        word: String,
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A routine command could not be parsed.
    #[error("Invalid routine input: {message}")]
    InvalidRoutineInput {
        message: String,
        code: ErrorCode,
        suggestion: Option<String>,
    },

    /// Required configuration is absent. Fatal at startup.
    #[error("Configuration missing: {message}")]
    ConfigurationMissing { message: String, code: ErrorCode },

    /// A reaction has no responses configured.
    #[error("Reaction '{reaction}' has no responses configured")]
    ReactionNotConfigured { reaction: String, code: ErrorCode },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Store (STORE_xxx)
    StoreConnectionFailed,
    StoreOperationFailed,

    // Lexical lookup (LEX_xxx)
    LexConnectionFailed,
    LexTimeout,
    LexBadStatus,
    LexInvalidResponse,

    // Routine input (ROUTINE_xxx)
    RoutineMissingWords,
    RoutineMissingSeparator,
    RoutineMissingReaction,
    RoutineUnknownRegion,

    // Configuration (CFG_xxx)
    CfgMissingValue,
    CfgInvalidValue,
    CfgUnsupportedFormat,

    // Reactions (REACT_xxx)
    ReactNotConfigured,

    // Internal
    Internal,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::StoreConnectionFailed => "STORE_001",
            ErrorCode::StoreOperationFailed => "STORE_002",
            ErrorCode::LexConnectionFailed => "LEX_001",
            ErrorCode::LexTimeout => "LEX_002",
            ErrorCode::LexBadStatus => "LEX_003",
            ErrorCode::LexInvalidResponse => "LEX_004",
            ErrorCode::RoutineMissingWords => "ROUTINE_001",
            ErrorCode::RoutineMissingSeparator => "ROUTINE_002",
            ErrorCode::RoutineMissingReaction => "ROUTINE_003",
            ErrorCode::RoutineUnknownRegion => "ROUTINE_004",
            ErrorCode::CfgMissingValue => "CFG_001",
            ErrorCode::CfgInvalidValue => "CFG_002",
            ErrorCode::CfgUnsupportedFormat => "CFG_003",
            ErrorCode::ReactNotConfigured => "REACT_001",
            ErrorCode::Internal => "INT_001",
        }
    }
}

impl JeevesError {
    /// Create a store error for a lost or refused connection.
    pub fn store_connection(message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            code: ErrorCode::StoreConnectionFailed,
            source: None,
        }
    }

    /// Create a store error for an operation the backend rejected.
    pub fn store_operation(message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            code: ErrorCode::StoreOperationFailed,
            source: None,
        }
    }

    /// Create a lexical lookup error.
    pub fn lookup(word: impl Into<String>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self::ExternalLookupFailed {
            word: word.into(),
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Create a routine input error with a usage hint.
    pub fn routine_input_with_suggestion(
        code: ErrorCode,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::InvalidRoutineInput {
            message: message.into(),
            code,
            suggestion: Some(suggestion.into()),
        }
    }

    /// Create a missing-configuration error.
    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::ConfigurationMissing {
            message: message.into(),
            code: ErrorCode::CfgMissingValue,
        }
    }

    /// Create an invalid-configuration error.
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigurationMissing {
            message: message.into(),
            code: ErrorCode::CfgInvalidValue,
        }
    }

    /// Create an unconfigured-reaction error.
    pub fn reaction_not_configured(reaction: impl Into<String>) -> Self {
        Self::ReactionNotConfigured {
            reaction: reaction.into(),
            code: ErrorCode::ReactNotConfigured,
        }
    }

    /// Attach the underlying cause to a store or lookup error.
    pub fn with_source(mut self, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        match &mut self {
            Self::StoreUnavailable { source, .. } | Self::ExternalLookupFailed { source, .. } => {
                *source = Some(Box::new(err));
            }
            _ => {}
        }
        self
    }

    /// Whether the memory store failed, for any reason.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable { .. })
    }

    /// Whether the connection to the memory store was lost and should be rebuilt.
    pub fn is_connection_lost(&self) -> bool {
        matches!(
            self,
            Self::StoreUnavailable {
                code: ErrorCode::StoreConnectionFailed,
                ..
            }
        )
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::StoreUnavailable { code, .. } => *code,
            Self::ExternalLookupFailed { code, .. } => *code,
            Self::InvalidRoutineInput { code, .. } => *code,
            Self::ConfigurationMissing { code, .. } => *code,
            Self::ReactionNotConfigured { code, .. } => *code,
            _ => ErrorCode::Internal,
        }
    }

    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::StoreUnavailable { .. } => Some("Please check that the memory store is reachable"),
            Self::ExternalLookupFailed { .. } => Some("Please check the lexical API host and key"),
            Self::InvalidRoutineInput { suggestion, .. } => suggestion.as_deref(),
            Self::ConfigurationMissing { .. } => {
                Some("Please set the required environment variables or config file entries")
            }
            Self::ReactionNotConfigured { .. } => {
                Some("Add at least one response to the reaction before using it")
            }
            _ => None,
        }
    }
}
