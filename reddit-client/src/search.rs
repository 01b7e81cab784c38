use pulse_core::{PulseError, RedditApiError, RedditPost, Timeframe};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};
use url::Url;

const REDDIT_SEARCH_BASE: &str = "https://www.reddit.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListing<T> {
    pub kind: String,
    pub data: RedditListingData<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListingData<T> {
    pub children: Vec<RedditListingChild<T>>,
    pub after: Option<String>,
    pub before: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListingChild<T> {
    pub kind: String,
    pub data: T,
}

/// Wire shape of one search result. Reddit omits several of these fields
/// for some post kinds, hence the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditPostData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub selftext: String,
    #[serde(default)]
    pub subreddit: String,
    #[serde(default)]
    pub permalink: String,
    #[serde(default)]
    pub created_utc: f64,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub num_comments: u64,
}

impl From<RedditPostData> for RedditPost {
    fn from(post_data: RedditPostData) -> Self {
        Self {
            title: post_data.title,
            selftext: post_data.selftext,
            subreddit: post_data.subreddit,
            score: post_data.score,
            num_comments: post_data.num_comments,
            created_utc: post_data.created_utc as i64,
            permalink: post_data.permalink,
        }
    }
}

/// Client for Reddit's public search endpoint. No authentication: the
/// `search.json` listing only needs a descriptive User-Agent.
#[derive(Debug)]
pub struct RedditSearchClient {
    http_client: Client,
    base_url: String,
}

impl RedditSearchClient {
    pub fn new(user_agent: String, timeout: Duration) -> Self {
        let http_client = Client::builder()
            .user_agent(&user_agent)
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            base_url: REDDIT_SEARCH_BASE.to_string(),
        }
    }

    /// Point the client at a different host. Used by tests.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Search posts matching `query`, optionally scoped to one subreddit.
    pub async fn search_posts(
        &self,
        query: &str,
        timeframe: Timeframe,
        subreddit: Option<&str>,
        limit: u32,
    ) -> Result<Vec<RedditPost>, PulseError> {
        let url = self.search_url(query, timeframe, subreddit, limit)?;
        debug!(%url, "Searching Reddit");

        let response = match self.http_client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Network error searching for {query:?}: {e}");
                if e.is_timeout() {
                    return Err(RedditApiError::RequestTimeout.into());
                }
                return Err(PulseError::Network(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!("Search request failed with status {status}");

            if status.as_u16() == 429 {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|value| value.to_str().ok())
                    .and_then(|value| value.parse::<u64>().ok())
                    .unwrap_or(60);
                return Err(RedditApiError::RateLimitExceeded { retry_after }.into());
            }
            if status.as_u16() == 403 {
                return Err(RedditApiError::Forbidden {
                    resource: "search".to_string(),
                }
                .into());
            }
            return Err(RedditApiError::UpstreamStatus {
                status_code: status.as_u16(),
            }
            .into());
        }

        let listing: RedditListing<RedditPostData> = response.json().await.map_err(|e| {
            error!("Failed to parse search results: {e}");
            RedditApiError::InvalidResponse {
                details: "Failed to parse search results".to_string(),
            }
        })?;

        let posts: Vec<RedditPost> = listing
            .data
            .children
            .into_iter()
            .map(|child| child.data.into())
            .collect();

        info!(count = posts.len(), query, "Retrieved search results");
        Ok(posts)
    }

    fn search_url(
        &self,
        query: &str,
        timeframe: Timeframe,
        subreddit: Option<&str>,
        limit: u32,
    ) -> Result<Url, PulseError> {
        let path = match subreddit {
            Some(sub) => format!("/r/{}/search.json", sub.strip_prefix("r/").unwrap_or(sub)),
            None => "/search.json".to_string(),
        };

        let mut url =
            Url::parse(&format!("{}{}", self.base_url, path)).map_err(|e| PulseError::Internal {
                message: format!("Invalid search URL: {e}"),
            })?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("sort", "relevance")
            .append_pair("t", timeframe.as_str())
            .append_pair("limit", &limit.to_string())
            .append_pair("raw_json", "1");
        Ok(url)
    }
}
