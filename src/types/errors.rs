use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessonError {
    /// Also raised for empty keys
    #[error("Duplicate or empty lesson key: '{0}'")]
    DuplicateKey(String),

    #[error("Lesson '{key}' has invalid option count {value}; must be at least 1")]
    InvalidOptionCount { key: String, value: u32 },

    #[error("Lesson '{key}' has unknown {field} '{tag}'. Expected one of: {expected}")]
    UnknownFormat {
        key: String,
        field: &'static str,
        tag: String,
        expected: String,
    },

    #[error("Lesson not found: {0}")]
    LessonNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl LessonError {
    /// True for errors a caller can handle by treating the lesson as unavailable.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, LessonError::LessonNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, LessonError>;
