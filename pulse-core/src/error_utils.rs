use crate::error::*;
use tracing::error;

/// Stable machine-readable codes for logs and error response bodies.
pub trait ErrorExt {
    fn log_error(&self) -> &Self;
    fn error_code(&self) -> &'static str;
}

impl ErrorExt for PulseError {
    fn log_error(&self) -> &Self {
        error!("PulseError: {}", self);
        if let PulseError::RedditApi(e) = self {
            error!("Reddit API error details: {:?}", e);
        }
        self
    }

    fn error_code(&self) -> &'static str {
        match self {
            PulseError::RedditApi(e) => e.error_code(),
            PulseError::Config(_) => "CONFIG",
            PulseError::Io(_) => "IO",
            PulseError::Serialization(_) => "SERIALIZATION",
            PulseError::Network(_) => "NETWORK",
            PulseError::InvalidInput { .. } => "INVALID_INPUT",
            PulseError::NoResults => "NO_RESULTS",
            PulseError::Internal { .. } => "INTERNAL",
        }
    }
}

impl ErrorExt for RedditApiError {
    fn log_error(&self) -> &Self {
        error!("RedditApiError: {}", self);
        self
    }

    fn error_code(&self) -> &'static str {
        match self {
            RedditApiError::RateLimitExceeded { .. } => "REDDIT_RATE_LIMIT",
            RedditApiError::Forbidden { .. } => "REDDIT_FORBIDDEN",
            RedditApiError::UpstreamStatus { .. } => "REDDIT_UPSTREAM_STATUS",
            RedditApiError::RequestTimeout => "REDDIT_TIMEOUT",
            RedditApiError::InvalidResponse { .. } => "REDDIT_INVALID_RESPONSE",
        }
    }
}
