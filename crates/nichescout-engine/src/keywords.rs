//! Keyword suggestions mined from competitor titles.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Generic title words that carry no niche signal.
const STOPWORDS: &[&str] = &[
    "the", "and", "for", "with", "your", "how", "guide", "book", "complete", "ultimate",
];

/// How many suggestions to return.
const MAX_SUGGESTIONS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// Suggests niche keywords from a set of successful titles.
///
/// Words of at least three letters are counted case-insensitively, stopwords
/// dropped, and the top twenty returned by frequency with ties broken by
/// first appearance.
#[must_use]
pub fn suggest_keywords(titles: &[String]) -> Vec<KeywordCount> {
    let re = Regex::new(r"[a-zA-Z]{3,}").expect("valid word regex");

    let mut counts: Vec<KeywordCount> = Vec::new();
    for title in titles {
        for m in re.find_iter(title) {
            let word = m.as_str().to_lowercase();
            if STOPWORDS.contains(&word.as_str()) {
                continue;
            }
            match counts.iter_mut().find(|k| k.keyword == word) {
                Some(entry) => entry.count += 1,
                None => counts.push(KeywordCount { keyword: word, count: 1 }),
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(MAX_SUGGESTIONS);
    counts
}
