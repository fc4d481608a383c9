use core::fmt::{Display, Formatter};

/// A failed exchange with the analysis service, reduced to one user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request did not complete within the configured timeout.
    Timeout,

    /// HTTP 400, with the server's own explanation when it sent one.
    Validation(Option<String>),

    /// HTTP 403.
    Permission,

    /// HTTP 500.
    Server,

    /// No response was received at all.
    Network,

    /// Any other non-success status.
    Status(u16),

    /// A response arrived but could not be decoded.
    InvalidResponse,
}

impl TransportError {
    /// Classify a non-success HTTP status. `detail` is the `error` field of the body,
    /// if any.
    #[must_use]
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        match status {
            400 => Self::Validation(detail),
            403 => Self::Permission,
            500 => Self::Server,
            other => Self::Status(other),
        }
    }

    #[must_use]
    pub fn from_reqwest(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_decode() {
            Self::InvalidResponse
        } else if let Some(status) = error.status() {
            Self::from_status(status.as_u16(), None)
        } else {
            Self::Network
        }
    }
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Timeout => f.write_str("Request timeout. Please try again."),
            Self::Validation(Some(detail)) => f.write_str(detail),
            Self::Validation(None) => f.write_str("Invalid request. Please check your input."),
            Self::Permission => f.write_str("Permission denied. Please try again."),
            Self::Server => f.write_str("Server error. Please try again later."),
            Self::Network => f.write_str("Network error. Please check your connection and try again."),
            Self::Status(code) => write!(f, "Request failed with status {code}."),
            Self::InvalidResponse => f.write_str("Unexpected response from server. Please try again later."),
        }
    }
}

impl core::error::Error for TransportError {}
