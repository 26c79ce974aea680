use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotConfigured,
    ConfigError,
    TransportError,
    InvalidPage,
    TaskNotFound,
    SheetNotFound,
    ValidationError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotConfigured => "NOT_CONFIGURED",
            Self::ConfigError => "CONFIG_ERROR",
            Self::TransportError => "TRANSPORT_ERROR",
            Self::InvalidPage => "INVALID_PAGE",
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::SheetNotFound => "SHEET_NOT_FOUND",
            Self::ValidationError => "VALIDATION_ERROR",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct TaskdeckError {
    pub code: ErrorCode,
    pub message: String,
}

impl TaskdeckError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_configured() -> Self {
        Self::new(
            ErrorCode::NotConfigured,
            "taskdeck is not configured. Run `taskdeck init --url <endpoint>` first.",
        )
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::TransportError, message)
    }

    pub fn invalid_page(page: usize, page_count: usize) -> Self {
        Self::new(
            ErrorCode::InvalidPage,
            format!("Page {page} is out of range (1..={})", page_count.max(1)),
        )
    }

    pub fn task_not_found(id: &str) -> Self {
        Self::new(ErrorCode::TaskNotFound, format!("Task not found: {id}"))
    }

    pub fn sheet_not_found(name: &str) -> Self {
        Self::new(ErrorCode::SheetNotFound, format!("Sheet not found: {name}"))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }
}

impl From<ureq::Error> for TaskdeckError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(code, _) => {
                Self::transport(format!("Endpoint returned HTTP {code}"))
            }
            ureq::Error::Transport(t) => Self::transport(t.to_string()),
        }
    }
}

impl From<serde_json::Error> for TaskdeckError {
    fn from(e: serde_json::Error) -> Self {
        Self::transport(format!("Malformed response from endpoint: {e}"))
    }
}
