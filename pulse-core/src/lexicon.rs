use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Positive-sentiment terms whose presence signals the benefits bucket.
pub const BENEFIT_TERMS: &[&str] = &[
    "great",
    "awesome",
    "love",
    "excellent",
    "amazing",
    "best",
    "good",
    "helpful",
    "useful",
    "works",
    "easy",
    "fast",
    "reliable",
    "recommend",
    "fantastic",
    "perfect",
    "solid",
    "secure",
    "advantage",
    "benefit",
    "pro",
    "positive",
    "impressive",
    "brilliant",
    "wonderful",
    "efficient",
    "effective",
    "innovative",
    "convenient",
    "valuable",
    "worth",
    "success",
    "profit",
    "gains",
    "bullish",
    "potential",
];

/// Negative-sentiment terms for the pain-points bucket.
pub const PAIN_TERMS: &[&str] = &[
    "issue",
    "problem",
    "bad",
    "hate",
    "terrible",
    "awful",
    "worst",
    "broken",
    "slow",
    "expensive",
    "difficult",
    "hard",
    "confusing",
    "frustrating",
    "annoying",
    "bug",
    "error",
    "fail",
    "crash",
    "risk",
    "concern",
    "worry",
    "downside",
    "con",
    "negative",
    "disappointing",
    "useless",
    "waste",
    "scam",
    "avoid",
    "warning",
    "danger",
    "loss",
    "bearish",
    "volatile",
    "unstable",
    "complicated",
    "risky",
];

/// Recommendation and hedging language for the suggestions bucket.
pub const SUGGESTION_TERMS: &[&str] = &[
    "should",
    "could",
    "would",
    "suggest",
    "recommend",
    "try",
    "consider",
    "instead",
    "alternative",
    "better",
    "improve",
    "wish",
    "hope",
    "idea",
    "tip",
    "advice",
    "maybe",
    "perhaps",
    "option",
    "strategy",
    "approach",
    "solution",
    "fix",
    "upgrade",
    "switch",
    "check",
];

/// Common function words and site-noise tokens suppressed during keyword
/// extraction. Never consulted during classification.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "up", "about", "into", "through", "during", "before", "after", "above", "below",
        "between", "under", "again", "further", "then", "once", "here", "there", "when", "where",
        "why", "how", "all", "each", "few", "more", "most", "other", "some", "such", "no", "nor",
        "not", "only", "own", "same", "so", "than", "too", "very", "can", "will", "just", "should",
        "now", "i", "you", "he", "she", "it", "we", "they", "what", "which", "who", "this", "that",
        "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
        "had", "having", "do", "does", "did", "doing", "would", "could", "might", "must", "shall",
        "as", "if", "because", "until", "while", "my", "your", "his", "her", "its", "our", "their",
        "me", "him", "us", "them", "get", "got", "like", "even", "also", "much", "many", "really",
        "actually", "basically", "probably", "maybe", "any", "dont", "doesnt", "im", "ive",
        "thats", "youre", "theyre", "wont", "cant", "didnt", "isnt", "arent", "wasnt", "werent",
        "havent", "hasnt", "hadnt", "wouldnt", "shouldnt", "couldnt", "cannot", "reddit", "http",
        "https", "www", "com", "org", "deleted", "removed",
    ]
    .into_iter()
    .collect()
});

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}
