//! Word counting with the default filtering the renderer applies to text.
//!
//! Tokens are maximal runs of a word character followed by word characters
//! or apostrophes. A trailing `'s` is stripped, numbers are dropped unless
//! requested, default English stopwords are removed, case variants of a word
//! are fused under their most frequent spelling, and simple plurals are folded
//! into their singular when both occur.
//!
//! Adjacent word pairs are scored with Dunning's log-likelihood ratio. A pair
//! scoring above the collocation threshold is counted as a phrase such as
//! `new york`, and its occurrences are taken away from its two words.

mod stopwords;

use std::collections::HashMap;

pub use self::stopwords::{STOPWORDS, is_stopword};
use crate::frequency::FrequencyMap;

/// Score a word pair must exceed to be counted as a phrase.
pub const DEFAULT_COLLOCATION_THRESHOLD: f64 = 30.0;

/// Counts words in whitespace-joined text.
///
/// # Example
///
/// ```
/// use dznodes_wordcloud::WordCounter;
///
/// let counts = WordCounter::new().count("Cats and cat and CAT");
/// assert_eq!(counts.get("cat"), Some(3.0));
/// assert!(counts.get("and").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordCounter {
    include_numbers: bool,
    min_word_length: usize,
    normalize_plurals: bool,
    collocations: bool,
    collocation_threshold: f64,
}

impl Default for WordCounter {
    fn default() -> Self {
        Self {
            include_numbers: false,
            min_word_length: 0,
            normalize_plurals: true,
            collocations: true,
            collocation_threshold: DEFAULT_COLLOCATION_THRESHOLD,
        }
    }
}

impl WordCounter {
    /// Creates a counter with the default filtering.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps purely numeric tokens.
    #[must_use]
    pub const fn with_include_numbers(mut self, include_numbers: bool) -> Self {
        self.include_numbers = include_numbers;
        self
    }

    /// Drops tokens shorter than `min_word_length` characters.
    #[must_use]
    pub const fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }

    /// Enables or disables folding plurals into singulars.
    #[must_use]
    pub const fn with_normalize_plurals(mut self, normalize_plurals: bool) -> Self {
        self.normalize_plurals = normalize_plurals;
        self
    }

    /// Enables or disables counting two-word phrases.
    #[must_use]
    pub const fn with_collocations(mut self, collocations: bool) -> Self {
        self.collocations = collocations;
        self
    }

    /// Sets the score a word pair must exceed to count as a phrase.
    #[must_use]
    pub const fn with_collocation_threshold(mut self, threshold: f64) -> Self {
        self.collocation_threshold = threshold;
        self
    }

    /// Counts the words of `text`.
    #[must_use]
    pub fn count(&self, text: &str) -> FrequencyMap {
        let words: Vec<&str> = tokenize(text)
            .into_iter()
            .map(strip_possessive)
            .filter(|word| self.include_numbers || !is_number(word))
            .filter(|word| word.chars().count() >= self.min_word_length)
            .collect();
        let unigrams = words.iter().copied().filter(|word| !is_common(word));
        let tally = self.tally(unigrams);
        if !self.collocations {
            return tally.into_frequencies();
        }

        let pairs: Vec<String> = words
            .windows(2)
            .filter(|pair| !pair.iter().any(|word| is_common(word)))
            .map(|pair| pair.join(" "))
            .collect();
        let bigrams = self.tally(pairs.iter().map(String::as_str));
        self.merge_collocations(&tally, &bigrams)
    }

    fn tally<'a>(&self, words: impl IntoIterator<Item = &'a str>) -> Tally {
        let mut groups = CaseGroups::default();
        for word in words {
            groups.add(word);
        }
        if self.normalize_plurals {
            groups.fold_plurals();
        }
        groups.fuse()
    }

    fn merge_collocations(&self, unigrams: &Tally, bigrams: &Tally) -> FrequencyMap {
        let total: usize = unigrams.counts.iter().map(|(_, count)| count).sum();
        let original: HashMap<&str, usize> = unigrams
            .counts
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        let mut counts: HashMap<String, i64> = unigrams
            .counts
            .iter()
            .map(|(word, count)| (word.clone(), to_signed(*count)))
            .collect();

        for (phrase, count) in &bigrams.counts {
            let Some((first, second)) = phrase.split_once(' ') else {
                continue;
            };
            let (Some(first), Some(second)) =
                (unigrams.standard(first), unigrams.standard(second))
            else {
                continue;
            };
            let (Some(&first_count), Some(&second_count)) =
                (original.get(first), original.get(second))
            else {
                continue;
            };
            let score = collocation_score(*count, first_count, second_count, total);
            if score <= self.collocation_threshold {
                continue;
            }
            let count = to_signed(*count);
            for word in [first, second] {
                if let Some(remaining) = counts.get_mut(word) {
                    *remaining -= count;
                }
            }
            counts.insert(phrase.clone(), count);
        }

        counts
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(word, count)| (word, to_weight(count)))
            .collect()
    }
}

fn is_common(word: &str) -> bool {
    is_stopword(&word.to_lowercase())
}

fn to_signed(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

#[expect(
    clippy::cast_precision_loss,
    reason = "word counts stay far below 2^52"
)]
fn to_weight(count: i64) -> f64 {
    count as f64
}

/// Dunning's log-likelihood ratio for `second` following `first`.
///
/// Zero when either word makes up the whole text.
#[expect(
    clippy::cast_precision_loss,
    reason = "word counts stay far below 2^52"
)]
fn collocation_score(pair: usize, first: usize, second: usize, total: usize) -> f64 {
    if total <= first || total <= second {
        return 0.0;
    }
    let (c12, c1, c2, n) = (pair as f64, first as f64, second as f64, total as f64);
    let p = c2 / n;
    let p1 = c12 / c1;
    let p2 = (c2 - c12) / (n - c1);
    let null = log_likelihood(c12, c1, p) + log_likelihood(c2 - c12, n - c1, p);
    let alternative = log_likelihood(c12, c1, p1) + log_likelihood(c2 - c12, n - c1, p2);
    -2.0 * (null - alternative)
}

fn log_likelihood(k: f64, n: f64, x: f64) -> f64 {
    let hit = x.max(1e-10).ln();
    let miss = (1.0 - x).max(1e-10).ln();
    hit.mul_add(k, miss * (n - k))
}

/// Case-fused counts in first-seen order, plus the spelling chosen for each
/// lowercase key (folded plurals included).
#[derive(Debug, Default)]
struct Tally {
    counts: Vec<(String, usize)>,
    standard: HashMap<String, String>,
}

impl Tally {
    fn standard(&self, word: &str) -> Option<&str> {
        self.standard.get(&word.to_lowercase()).map(String::as_str)
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "word counts stay far below 2^52"
    )]
    fn into_frequencies(self) -> FrequencyMap {
        self.counts
            .into_iter()
            .map(|(word, count)| (word, count as f64))
            .collect()
    }
}

/// Splits `text` into runs matching `\w[\w']*`.
#[must_use]
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (idx, ch) in text.char_indices() {
        match start {
            None if is_word_char(ch) => start = Some(idx),
            Some(begin) if !is_word_char(ch) && ch != '\'' => {
                tokens.push(&text[begin..idx]);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(begin) = start {
        tokens.push(&text[begin..]);
    }
    tokens
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn is_number(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_numeric)
}

fn strip_possessive(word: &str) -> &str {
    word.strip_suffix("'s")
        .or_else(|| word.strip_suffix("'S"))
        .unwrap_or(word)
}

fn drop_last_char(word: &str) -> &str {
    let mut chars = word.chars();
    chars.next_back();
    chars.as_str()
}

/// Spellings of one lowercase word with their counts, in first-seen order.
#[derive(Debug)]
struct CaseGroup {
    key: String,
    variants: Vec<(String, usize)>,
    merged_into: Option<usize>,
}

impl CaseGroup {
    fn add(&mut self, spelling: &str, count: usize) {
        match self.variants.iter_mut().find(|(seen, _)| seen == spelling) {
            Some((_, total)) => *total += count,
            None => self.variants.push((spelling.to_owned(), count)),
        }
    }

    /// Most frequent spelling; the first seen wins ties.
    fn representative(&self) -> Option<&str> {
        let mut best: Option<&(String, usize)> = None;
        for variant in &self.variants {
            if best.is_none_or(|(_, count)| variant.1 > *count) {
                best = Some(variant);
            }
        }
        best.map(|(spelling, _)| spelling.as_str())
    }

    fn total(&self) -> usize {
        self.variants.iter().map(|(_, count)| count).sum()
    }
}

#[derive(Debug, Default)]
struct CaseGroups {
    groups: Vec<CaseGroup>,
    index: HashMap<String, usize>,
}

impl CaseGroups {
    fn add(&mut self, word: &str) {
        let key = word.to_lowercase();
        let slot = match self.index.get(&key) {
            Some(slot) => *slot,
            None => {
                self.groups.push(CaseGroup {
                    key: key.clone(),
                    variants: Vec::new(),
                    merged_into: None,
                });
                self.index.insert(key, self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        if let Some(group) = self.groups.get_mut(slot) {
            group.add(word, 1);
        }
    }

    fn fold_plurals(&mut self) {
        for slot in 0..self.groups.len() {
            let Some(target) = self.singular_slot(slot) else {
                continue;
            };
            let variants = match self.groups.get_mut(slot) {
                Some(plural) => {
                    plural.merged_into = Some(target);
                    std::mem::take(&mut plural.variants)
                }
                None => continue,
            };
            if let Some(singular) = self.groups.get_mut(target) {
                for (spelling, count) in variants {
                    singular.add(drop_last_char(&spelling), count);
                }
            }
        }
    }

    fn singular_slot(&self, slot: usize) -> Option<usize> {
        let key = self.groups.get(slot)?.key.as_str();
        if !key.ends_with('s') || key.ends_with("ss") {
            return None;
        }
        let target = *self.index.get(drop_last_char(key))?;
        self.groups
            .get(target)
            .filter(|group| group.merged_into.is_none())
            .map(|_| target)
    }

    fn fuse(self) -> Tally {
        let mut tally = Tally::default();
        for group in self.groups.iter().filter(|group| group.merged_into.is_none()) {
            if let Some(spelling) = group.representative() {
                tally.counts.push((spelling.to_owned(), group.total()));
                tally.standard.insert(group.key.clone(), spelling.to_owned());
            }
        }
        for group in &self.groups {
            let Some(target) = group.merged_into else {
                continue;
            };
            let spelling = self
                .groups
                .get(target)
                .and_then(|singular| tally.standard.get(&singular.key))
                .cloned();
            if let Some(spelling) = spelling {
                tally.standard.insert(group.key.clone(), spelling);
            }
        }
        tally
    }
}
