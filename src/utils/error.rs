use thiserror::Error;

#[derive(Error, Debug)]
pub enum SajuError {
    #[error("Invalid birth date: {message}")]
    InvalidBirthDate { message: String },

    #[error("Ambiguous leap month: {message}")]
    AmbiguousLeapMonth { message: String },

    #[error("Calendar oracle contract violation: {message}")]
    OracleContract { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Fixture parse error: {0}")]
    Fixture(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SajuError>;

impl SajuError {
    /// Exit code for the CLI: input/config problems are 2, pipeline failures 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidConfigValue { .. } | Self::MissingConfig { .. } => 2,
            _ => 1,
        }
    }
}
