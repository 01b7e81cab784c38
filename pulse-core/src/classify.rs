use crate::lexicon::{BENEFIT_TERMS, PAIN_TERMS, SUGGESTION_TERMS};
use crate::types::Category;

/// Assign at most one sentiment category to a text.
///
/// Counts, per lexicon, how many distinct terms appear anywhere in the
/// lowercased text (substring containment, not word boundaries). The
/// highest count wins, with an asymmetric tie-break: benefits and pain
/// points each require a strict lead over the other, while suggestions
/// win any remaining tie at the maximum. An exact benefit/pain tie with
/// suggestions strictly lower therefore classifies as `None`.
pub fn classify(text: &str) -> Option<Category> {
    let text = text.to_lowercase();
    let benefit = lexicon_hits(&text, BENEFIT_TERMS);
    let pain = lexicon_hits(&text, PAIN_TERMS);
    let suggestion = lexicon_hits(&text, SUGGESTION_TERMS);

    let max = benefit.max(pain).max(suggestion);
    if max == 0 {
        return None;
    }
    if benefit == max && benefit > pain {
        Some(Category::Benefits)
    } else if pain == max && pain > benefit {
        Some(Category::PainPoints)
    } else if suggestion == max {
        Some(Category::Suggestions)
    } else {
        None
    }
}

/// Number of list terms found in the text. A term occurring several times
/// still counts once.
fn lexicon_hits(text: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|term| text.contains(*term)).count()
}
