use tracing::debug;

use crate::classify::classify;
use crate::error::PulseError;
use crate::keywords::extract_keywords;
use crate::lexicon::{BENEFIT_TERMS, PAIN_TERMS, SUGGESTION_TERMS};
use crate::types::{
    AnalysisParams, Category, CategorizedPost, KeywordClouds, RedditPost, ReportStats,
    SentimentReport,
};

/// Base joined with a post's permalink to form a full URL.
pub const REDDIT_BASE_URL: &str = "https://reddit.com";

/// Items kept per category after sorting by score.
const MAX_ITEMS_PER_CATEGORY: usize = 20;

/// Display-text budget before the title is cut.
const MAX_TITLE_CHARS: usize = 180;

/// Per-category accumulator keyed by the `Category` enum.
#[derive(Debug, Default)]
struct PerCategory<T> {
    benefits: T,
    pain_points: T,
    suggestions: T,
}

impl<T> PerCategory<T> {
    fn get_mut(&mut self, category: Category) -> &mut T {
        match category {
            Category::Benefits => &mut self.benefits,
            Category::PainPoints => &mut self.pain_points,
            Category::Suggestions => &mut self.suggestions,
        }
    }
}

/// Run the full categorization pass over a snapshot of posts.
///
/// `now_epoch` is injected by the caller so the produced report is a pure
/// function of its inputs. An empty snapshot is the "no results"
/// condition, reported as an error rather than an empty report.
pub fn aggregate(
    params: &AnalysisParams,
    posts: &[RedditPost],
    now_epoch: i64,
) -> Result<SentimentReport, PulseError> {
    if posts.is_empty() {
        return Err(PulseError::NoResults);
    }

    let mut items: PerCategory<Vec<CategorizedPost>> = PerCategory::default();
    let mut texts: PerCategory<Vec<String>> = PerCategory::default();

    for post in posts {
        let full_text = format!("{} {}", post.title, post.selftext);
        let Some(category) = classify(&full_text) else {
            continue;
        };
        items.get_mut(category).push(CategorizedPost {
            text: truncate_title(&post.title),
            subreddit: post.subreddit.clone(),
            score: post.score,
            comments: post.num_comments,
            time_ago: time_ago(now_epoch - post.created_utc),
            url: format!("{REDDIT_BASE_URL}{}", post.permalink),
        });
        texts.get_mut(category).push(full_text);
    }

    for bucket in [
        &mut items.benefits,
        &mut items.pain_points,
        &mut items.suggestions,
    ] {
        // Stable sort: equal scores keep their fetch order.
        bucket.sort_by(|a, b| b.score.cmp(&a.score));
        bucket.truncate(MAX_ITEMS_PER_CATEGORY);
    }

    debug!(
        total = posts.len(),
        benefits = items.benefits.len(),
        pain_points = items.pain_points.len(),
        suggestions = items.suggestions.len(),
        "Categorized posts"
    );

    Ok(SentimentReport {
        query: params.query.clone(),
        timeframe: params.timeframe,
        subreddit: params
            .subreddit
            .clone()
            .unwrap_or_else(|| "All".to_string()),
        stats: ReportStats {
            total: posts.len(),
            benefits: items.benefits.len(),
            pain_points: items.pain_points.len(),
            suggestions: items.suggestions.len(),
        },
        clouds: KeywordClouds {
            benefits: extract_keywords(&texts.benefits, BENEFIT_TERMS),
            pain_points: extract_keywords(&texts.pain_points, PAIN_TERMS),
            suggestions: extract_keywords(&texts.suggestions, SUGGESTION_TERMS),
        },
        benefits: items.benefits,
        pain_points: items.pain_points,
        suggestions: items.suggestions,
    })
}

/// Human label for the time elapsed since a post was created. Largest
/// matching unit wins; a non-positive elapsed time reads "just now".
fn time_ago(elapsed_secs: i64) -> String {
    const YEAR: i64 = 31_536_000;
    const MONTH: i64 = 2_592_000;
    const DAY: i64 = 86_400;
    const HOUR: i64 = 3_600;
    const MINUTE: i64 = 60;

    if elapsed_secs >= YEAR {
        format!("{}y ago", elapsed_secs / YEAR)
    } else if elapsed_secs >= MONTH {
        format!("{}mo ago", elapsed_secs / MONTH)
    } else if elapsed_secs >= DAY {
        format!("{}d ago", elapsed_secs / DAY)
    } else if elapsed_secs >= HOUR {
        format!("{}h ago", elapsed_secs / HOUR)
    } else if elapsed_secs >= MINUTE {
        format!("{}m ago", elapsed_secs / MINUTE)
    } else {
        "just now".to_string()
    }
}

fn truncate_title(title: &str) -> String {
    if title.chars().count() > MAX_TITLE_CHARS {
        let mut text: String = title.chars().take(MAX_TITLE_CHARS).collect();
        text.push_str("...");
        text
    } else {
        title.to_string()
    }
}
