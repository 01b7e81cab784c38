use serde::{Deserialize, Serialize};

/// A raw search result as returned by the fetch collaborator.
#[derive(Debug, Clone)]
pub struct RedditPost {
    pub title: String,
    pub selftext: String,
    pub subreddit: String,
    pub score: i64,
    pub num_comments: u64,
    pub created_utc: i64,
    pub permalink: String,
}

/// Sentiment bucket a post can land in. A post that matches no lexicon
/// stays unclassified (`Option::None` from the classifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Benefits,
    PainPoints,
    Suggestions,
}

/// Reddit search window, passed through as the `t` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Day,
    #[default]
    Week,
    Month,
    Year,
    All,
}

impl Timeframe {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::All => "all",
        }
    }
}

/// Caller-supplied parameters echoed back in the report.
#[derive(Debug, Clone)]
pub struct AnalysisParams {
    pub query: String,
    pub timeframe: Timeframe,
    pub subreddit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedPost {
    pub text: String,
    pub subreddit: String,
    pub score: i64,
    pub comments: u64,
    #[serde(rename = "timeAgo")]
    pub time_ago: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub text: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStats {
    pub total: usize,
    pub benefits: usize,
    #[serde(rename = "painPoints")]
    pub pain_points: usize,
    pub suggestions: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordClouds {
    pub benefits: Vec<KeywordEntry>,
    #[serde(rename = "painPoints")]
    pub pain_points: Vec<KeywordEntry>,
    pub suggestions: Vec<KeywordEntry>,
}

/// The complete categorization report for one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    pub query: String,
    pub timeframe: Timeframe,
    pub subreddit: String,
    pub stats: ReportStats,
    pub benefits: Vec<CategorizedPost>,
    #[serde(rename = "painPoints")]
    pub pain_points: Vec<CategorizedPost>,
    pub suggestions: Vec<CategorizedPost>,
    pub clouds: KeywordClouds,
}
