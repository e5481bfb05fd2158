use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    RemoteOperationFailed,
    ValidationFailed,
    TaskNotFound,
    ConfigError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RemoteOperationFailed => "REMOTE_OPERATION_FAILED",
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

/// A form field that failed local validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
        }
    }
}

#[derive(Debug, Error)]
pub enum TaskdeckError {
    /// Any failure talking to the task service: transport, non-2xx, or an
    /// undecodable body. Deliberately not split by cause.
    #[error("{message}")]
    RemoteOperationFailed { message: String },

    #[error("Missing required field: {}", field.as_str())]
    ValidationFailed { field: FormField },

    #[error("Task not found: {reference}")]
    TaskNotFound { reference: String },

    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

impl TaskdeckError {
    pub fn remote(message: impl Into<String>) -> Self {
        Self::RemoteOperationFailed {
            message: message.into(),
        }
    }

    pub fn validation(field: FormField) -> Self {
        Self::ValidationFailed { field }
    }

    pub fn task_not_found(reference: &str) -> Self {
        Self::TaskNotFound {
            reference: reference.to_string(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::RemoteOperationFailed { .. } => ErrorCode::RemoteOperationFailed,
            Self::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            Self::TaskNotFound { .. } => ErrorCode::TaskNotFound,
            Self::Config { .. } => ErrorCode::ConfigError,
        }
    }
}

impl From<reqwest::Error> for TaskdeckError {
    fn from(e: reqwest::Error) -> Self {
        Self::remote(e.to_string())
    }
}

impl From<figment::Error> for TaskdeckError {
    fn from(e: figment::Error) -> Self {
        Self::config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(
            TaskdeckError::remote("boom").code().as_str(),
            "REMOTE_OPERATION_FAILED"
        );
        assert_eq!(
            TaskdeckError::validation(FormField::Name).code().as_str(),
            "VALIDATION_FAILED"
        );
        assert_eq!(TaskdeckError::config("x").code().as_str(), "CONFIG_ERROR");
        assert_eq!(
            TaskdeckError::task_not_found("7").code().as_str(),
            "TASK_NOT_FOUND"
        );
    }

    #[test]
    fn validation_message_names_the_field() {
        let err = TaskdeckError::validation(FormField::Description);
        assert_eq!(err.to_string(), "Missing required field: description");
    }

    #[test]
    fn remote_message_is_passed_through() {
        let err = TaskdeckError::remote("HTTP 500: oops");
        assert_eq!(err.to_string(), "HTTP 500: oops");
    }
}
