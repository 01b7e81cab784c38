use pulse_core::{ConfigError, ErrorExt, PulseError, RedditApiError};

#[test]
fn test_error_codes() {
    let rate_limited = PulseError::RedditApi(RedditApiError::RateLimitExceeded { retry_after: 60 });
    assert_eq!(rate_limited.error_code(), "REDDIT_RATE_LIMIT");

    let upstream = PulseError::RedditApi(RedditApiError::UpstreamStatus { status_code: 503 });
    assert_eq!(upstream.error_code(), "REDDIT_UPSTREAM_STATUS");

    let invalid = PulseError::InvalidInput {
        message: "Query required".to_string(),
    };
    assert_eq!(invalid.error_code(), "INVALID_INPUT");

    assert_eq!(PulseError::NoResults.error_code(), "NO_RESULTS");

    let config = PulseError::Config(ConfigError::InvalidValue {
        field: "search_limit".to_string(),
        value: "0".to_string(),
    });
    assert_eq!(config.error_code(), "CONFIG");
}

#[test]
fn test_error_messages() {
    let rate_limited = PulseError::RedditApi(RedditApiError::RateLimitExceeded { retry_after: 60 });
    assert!(rate_limited.to_string().contains("60 seconds"));

    let upstream = PulseError::RedditApi(RedditApiError::UpstreamStatus { status_code: 503 });
    assert!(upstream.to_string().contains("503"));

    assert_eq!(PulseError::NoResults.to_string(), "No results found");

    let config = PulseError::Config(ConfigError::InvalidValue {
        field: "search_limit".to_string(),
        value: "0".to_string(),
    });
    assert!(config.to_string().contains("search_limit"));
}

#[test]
fn test_nested_errors_convert_to_top_level() {
    let err: PulseError = RedditApiError::RequestTimeout.into();
    assert!(matches!(
        err,
        PulseError::RedditApi(RedditApiError::RequestTimeout)
    ));

    let err: PulseError = ConfigError::FileNotFound {
        path: "redditpulse.toml".to_string(),
    }
    .into();
    assert!(matches!(err, PulseError::Config(_)));
}
