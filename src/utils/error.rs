use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimeError {
    #[error("Invalid format '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Arithmetic overflow: {message}")]
    Overflow { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl TimeError {
    pub fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn overflow(message: impl Into<String>) -> Self {
        Self::Overflow {
            message: message.into(),
        }
    }

    /// Errors raised by the value types themselves, as opposed to the
    /// script runner around them.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormat { .. } | Self::InvalidArgument { .. } | Self::Overflow { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => "Use three colon-separated fields, e.g. 08:15:30",
            Self::InvalidArgument { .. } => {
                "Keep hours within 0-23 and minutes/seconds within 0-59, and end after start"
            }
            Self::Overflow { .. } => "Keep duration results below 256 hours and non-negative",
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::TomlError(_) => "Check the script file for TOML syntax errors",
            Self::SerializationError(_) => "Retry with --format text",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the script configuration and run again"
            }
        }
    }

    /// The two lines shown to a CLI user: the error and what to do about it.
    pub fn user_friendly_message(&self) -> String {
        format!("❌ {}\n💡 {}", self, self.recovery_suggestion())
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_domain_error() {
            2
        } else {
            1
        }
    }
}

pub type Result<T> = std::result::Result<T, TimeError>;
