use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum CoreError {
    #[error("Invalid date")]
    #[diagnostic(
        code(wellspring_core::invalid_date),
        help("Dates must be written as YYYY-MM-DD (e.g. 2025-03-05) or as an RFC 3339 timestamp")
    )]
    InvalidDate {
        #[source_code]
        src: String,
        #[label("could not parse this as a calendar date")]
        span: (usize, usize),
        input: String,
    },

    #[error("Invalid value for {field}")]
    #[diagnostic(
        code(wellspring_core::invalid_value),
        help("Expected {expected}, got '{value}'")
    )]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    #[error("Exam not found")]
    #[diagnostic(
        code(wellspring_core::exam_not_found),
        help("Known exam ids: {}", available.join(", "))
    )]
    ExamNotFound { id: String, available: Vec<String> },

    #[error("Data store I/O failed")]
    #[diagnostic(
        code(wellspring_core::store_io_failed),
        help("Failed to {operation} {path}; check that the location exists and is writable")
    )]
    StoreIo {
        operation: String,
        path: String,
        #[source]
        cause: std::io::Error,
    },

    #[error("Serialization error")]
    #[diagnostic(
        code(wellspring_core::serialization_error),
        help("Failed to serialize/deserialize {data_type}")
    )]
    SerializationError {
        data_type: String,
        #[source]
        cause: serde_json::Error,
    },

    #[error("Configuration error")]
    #[diagnostic(
        code(wellspring_core::configuration_error),
        help("Check configuration file at {config_path}")
    )]
    ConfigurationError {
        config_path: String,
        field: String,
        expected: String,
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Low-level configuration failures, boxed into [`CoreError::ConfigurationError`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(String),

    #[error("{0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

// Helper functions for creating common errors with context
impl CoreError {
    pub fn invalid_date(input: impl Into<String>) -> Self {
        let input = input.into();
        Self::InvalidDate {
            src: format!("date: {}", input),
            span: (6, 6 + input.len()),
            input,
        }
    }

    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    pub fn exam_not_found(id: impl Into<String>, available: Vec<String>) -> Self {
        Self::ExamNotFound {
            id: id.into(),
            available,
        }
    }

    pub fn store_io(
        operation: impl Into<String>,
        path: impl Into<String>,
        cause: std::io::Error,
    ) -> Self {
        Self::StoreIo {
            operation: operation.into(),
            path: path.into(),
            cause,
        }
    }

    pub fn config_error(
        config_path: impl Into<String>,
        field: impl Into<String>,
        expected: impl Into<String>,
        cause: ConfigError,
    ) -> Self {
        Self::ConfigurationError {
            config_path: config_path.into(),
            field: field.into(),
            expected: expected.into(),
            cause: Box::new(cause),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Report;

    #[test]
    fn test_invalid_date_error() {
        let error = CoreError::invalid_date("2025-13-40");
        let report = Report::new(error);
        let output = format!("{:?}", report);
        assert!(output.contains("invalid_date"));
        assert!(output.contains("2025-13-40"));
    }

    #[test]
    fn test_exam_not_found_lists_known_ids() {
        let error = CoreError::exam_not_found(
            "missing",
            vec!["calc".to_string(), "bio".to_string()],
        );
        let report = Report::new(error);
        let output = format!("{:?}", report);
        assert!(output.contains("Known exam ids: calc, bio"));
    }

    #[test]
    fn test_config_error_keeps_cause() {
        use std::error::Error;

        let error = CoreError::config_error(
            "wellspring.toml",
            "hydration.glass_size_ml",
            "positive number of millilitres",
            ConfigError::Validation("glass size must be positive".to_string()),
        );
        let source = error.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("glass size must be positive"));
    }
}
