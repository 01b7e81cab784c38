use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::lexicon::is_stop_word;
use crate::types::KeywordEntry;

/// Number of keyword entries returned per category.
const MAX_KEYWORDS: usize = 25;

/// Multiplier applied to tokens that also appear in the category's lexicon.
const LEXICON_BOOST: f64 = 1.5;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new("[a-z]{3,}").expect("valid token regex"));

/// Build the ranked keyword cloud for one category.
///
/// Tokens are runs of three or more lowercase letters; stop words are
/// dropped, frequencies are counted in first-seen order, and tokens that
/// appear in `boost_terms` get their count multiplied by 1.5 (rounded to
/// the nearest integer). Ties keep first-seen order.
pub fn extract_keywords(texts: &[String], boost_terms: &[&str]) -> Vec<KeywordEntry> {
    let joined = texts.join(" ").to_lowercase();

    let mut entries: Vec<KeywordEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for token in TOKEN_RE.find_iter(&joined) {
        let token = token.as_str();
        if is_stop_word(token) {
            continue;
        }
        if let Some(&at) = index.get(token) {
            entries[at].count += 1;
        } else {
            index.insert(token.to_string(), entries.len());
            entries.push(KeywordEntry {
                text: token.to_string(),
                count: 1,
            });
        }
    }

    for entry in &mut entries {
        if boost_terms.contains(&entry.text.as_str()) {
            entry.count = (f64::from(entry.count) * LEXICON_BOOST).round() as u32;
        }
    }

    // Stable sort keeps first-seen order on equal counts.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(MAX_KEYWORDS);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    fn entry(text: &str, count: u32) -> KeywordEntry {
        KeywordEntry {
            text: text.to_string(),
            count,
        }
    }

    #[test]
    fn empty_input_yields_empty_cloud() {
        assert!(extract_keywords(&[], &[]).is_empty());
        assert!(extract_keywords(&texts(&["!!! 123 ab"]), &[]).is_empty());
    }

    #[test]
    fn stop_words_and_short_tokens_are_dropped() {
        let cloud = extract_keywords(&texts(&["the bitcoin is great and secure"]), &[]);
        assert_eq!(
            cloud,
            vec![entry("bitcoin", 1), entry("great", 1), entry("secure", 1)]
        );
    }

    #[test]
    fn boost_multiplies_and_rounds_half_up() {
        let cloud = extract_keywords(&texts(&["great great secure"]), &["great", "secure"]);
        assert_eq!(cloud, vec![entry("great", 3), entry("secure", 2)]);
    }

    #[test]
    fn counts_accumulate_across_texts() {
        let cloud = extract_keywords(&texts(&["wallet fees", "wallet support"]), &[]);
        assert_eq!(
            cloud,
            vec![entry("wallet", 2), entry("fees", 1), entry("support", 1)]
        );
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let cloud = extract_keywords(&texts(&["zebra apple zebra apple mango"]), &[]);
        assert_eq!(
            cloud,
            vec![entry("zebra", 2), entry("apple", 2), entry("mango", 1)]
        );
    }

    #[test]
    fn cloud_is_capped_at_25() {
        // 30 distinct tokens, each appearing once.
        let body = (b'a'..=b'z')
            .flat_map(|c| [format!("kw{}x", c as char), format!("kw{}y", c as char)])
            .take(30)
            .collect::<Vec<_>>()
            .join(" ");
        let cloud = extract_keywords(&texts(&[&body]), &[]);
        assert_eq!(cloud.len(), 25);
    }

    #[test]
    fn tokenization_is_lowercased_first() {
        let cloud = extract_keywords(&texts(&["Bitcoin BITCOIN bitcoin"]), &[]);
        assert_eq!(cloud, vec![entry("bitcoin", 3)]);
    }
}
