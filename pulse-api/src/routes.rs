use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use pulse_core::{
    aggregate, AnalysisParams, ErrorExt, PulseError, RedditApiError, SentimentReport, Timeframe,
};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/analyze", post(analyze))
        .route("/healthz", get(health))
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub query: String,
    #[serde(default)]
    pub timeframe: Timeframe,
    pub subreddit: Option<String>,
}

/// Handler for `POST /api/analyze`: fetch matching posts and return the
/// categorization report. Responses are all-or-nothing; any failure maps
/// to an error body instead of a partial report.
async fn analyze(State(state): State<AppState>, Json(request): Json<AnalyzeRequest>) -> Response {
    let query = request.query.trim();
    if query.is_empty() {
        return error_response(&PulseError::InvalidInput {
            message: "Query required".to_string(),
        });
    }

    let params = AnalysisParams {
        query: query.to_string(),
        timeframe: request.timeframe,
        subreddit: request.subreddit,
    };

    match run_analysis(&state, &params).await {
        Ok(report) => {
            info!(query = %params.query, total = report.stats.total, "Analysis complete");
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(e) => {
            e.log_error();
            error_response(&e)
        }
    }
}

async fn run_analysis(
    state: &AppState,
    params: &AnalysisParams,
) -> Result<SentimentReport, PulseError> {
    let posts = state
        .reddit
        .search_posts(
            &params.query,
            params.timeframe,
            params.subreddit.as_deref(),
            state.config.search_limit,
        )
        .await?;

    aggregate(params, &posts, Utc::now().timestamp())
}

async fn health() -> &'static str {
    "OK"
}

fn error_response(error: &PulseError) -> Response {
    let status =
        StatusCode::from_u16(status_for(error)).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = json!({
        "error": error.to_string(),
        "code": error.error_code(),
    });
    (status, Json(body)).into_response()
}

/// Map failure modes to response statuses. Upstream non-success statuses
/// pass through unchanged; transport-level failures surface as gateway
/// errors; anything unexpected is a plain 500.
fn status_for(error: &PulseError) -> u16 {
    match error {
        PulseError::InvalidInput { .. } => 400,
        PulseError::NoResults => 404,
        PulseError::RedditApi(RedditApiError::UpstreamStatus { status_code }) => *status_code,
        PulseError::RedditApi(RedditApiError::RateLimitExceeded { .. }) => 429,
        PulseError::RedditApi(RedditApiError::Forbidden { .. }) => 403,
        PulseError::RedditApi(RedditApiError::RequestTimeout) => 504,
        PulseError::Network(_) => 502,
        _ => 500,
    }
}
