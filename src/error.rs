use std::fmt;
use std::time::Duration;

/// Raised when an attribute entry is added under a key that is already
/// present. This is a caller bug and is never worth retrying.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("duplicated key ({key}) provided")]
pub struct DuplicateKeyError {
    key: String,
}

impl DuplicateKeyError {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// The key that was already present.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Which side of the call the service blames for a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    Sender,
    Receiver,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Sender => "Sender",
            ErrorType::Receiver => "Receiver",
        }
    }
}

/// Fault codes the notification service is known to return.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    AuthorizationError,
    EndpointDisabled,
    InternalError,
    InvalidParameter,
    InvalidParameterValue,
    NotFound,
    PlatformApplicationDisabled,
    SubscriptionLimitExceeded,
    Throttled,
    TopicLimitExceeded,
    Other(String),
}

impl ErrorCode {
    /// Maps a code string as it appears in a fault document.
    pub fn from_code(code: &str) -> Self {
        match code {
            "AuthorizationError" => ErrorCode::AuthorizationError,
            "EndpointDisabled" => ErrorCode::EndpointDisabled,
            "InternalError" | "InternalFailure" => ErrorCode::InternalError,
            "InvalidParameter" => ErrorCode::InvalidParameter,
            "ParameterValueInvalid" | "InvalidParameterValue" => ErrorCode::InvalidParameterValue,
            "NotFound" => ErrorCode::NotFound,
            "PlatformApplicationDisabled" => ErrorCode::PlatformApplicationDisabled,
            "SubscriptionLimitExceeded" => ErrorCode::SubscriptionLimitExceeded,
            "Throttled" | "Throttling" => ErrorCode::Throttled,
            "TopicLimitExceeded" => ErrorCode::TopicLimitExceeded,
            other => ErrorCode::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::AuthorizationError => "AuthorizationError",
            ErrorCode::EndpointDisabled => "EndpointDisabled",
            ErrorCode::InternalError => "InternalError",
            ErrorCode::InvalidParameter => "InvalidParameter",
            ErrorCode::InvalidParameterValue => "ParameterValueInvalid",
            ErrorCode::NotFound => "NotFound",
            ErrorCode::PlatformApplicationDisabled => "PlatformApplicationDisabled",
            ErrorCode::SubscriptionLimitExceeded => "SubscriptionLimitExceeded",
            ErrorCode::Throttled => "Throttled",
            ErrorCode::TopicLimitExceeded => "TopicLimitExceeded",
            ErrorCode::Other(code) => code,
        }
    }

    /// The side blamed when the fault document does not say.
    pub fn default_type(&self) -> ErrorType {
        match self {
            ErrorCode::InternalError => ErrorType::Receiver,
            _ => ErrorType::Sender,
        }
    }

    /// True for transient faults. The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCode::InternalError | ErrorCode::Throttled)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fault returned by the remote service.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct ServiceError {
    pub error_type: ErrorType,
    pub code: ErrorCode,
    pub message: String,
    pub request_id: Option<String>,
}

impl ServiceError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error_type: code.default_type(),
            code,
            message: message.into(),
            request_id: None,
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    DuplicateKey(#[from] DuplicateKeyError),

    #[error("service fault {0}")]
    Service(#[from] ServiceError),

    #[error("{action} timed out after {timeout:?}")]
    Timeout {
        action: &'static str,
        timeout: Duration,
    },

    #[error("expected a {expected} response, received {received}")]
    UnexpectedResponse {
        expected: &'static str,
        received: &'static str,
    },

    #[error("failed to render message document: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Transport(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// The service fault, if this error carries one.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            Error::Service(fault) => Some(fault),
            _ => None,
        }
    }
}
