//! The frequency builder.
//!
//! Turns raw caller text into the word to weight mapping handed to the
//! renderer: segment mixed-script text, count words, boost keynote terms,
//! then remove stopwords. Keynotes are applied first, so a term listed as
//! both keynote and stopword ends up absent.

use std::collections::{BTreeMap, BTreeSet};

use dznodes_config::KeynoteStrategy;

use crate::counter::WordCounter;
use crate::segment::Segmenter;

/// Text substituted when the caller supplies none.
pub const FALLBACK_TEXT: &str = "demo of word cloud for ComfyUI by dzNodes";

/// Word to non-negative weight mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyMap {
    weights: BTreeMap<String, f64>,
}

impl FrequencyMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the weight of `word`, replacing any previous weight.
    pub fn insert(&mut self, word: impl Into<String>, weight: f64) {
        self.weights.insert(word.into(), weight);
    }

    /// Removes `word`, returning its weight.
    pub fn remove(&mut self, word: &str) -> Option<f64> {
        self.weights.remove(word)
    }

    /// Returns the weight of `word`.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<f64> {
        self.weights.get(word).copied()
    }

    /// Returns `true` when `word` is present.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.weights.contains_key(word)
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` when no word is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterates words and weights in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights
            .iter()
            .map(|(word, weight)| (word.as_str(), *weight))
    }

    /// Largest weight, or `0.0` for an empty map.
    #[must_use]
    pub fn max_weight(&self) -> f64 {
        self.weights.values().copied().fold(0.0, f64::max)
    }

    /// Sets every keynote term to `keynotes.weight()` plus the current maximum.
    ///
    /// With [`KeynoteStrategy::MaxOnce`] the maximum is sampled before any
    /// term is inserted, so all terms share one weight. With
    /// [`KeynoteStrategy::MaxPerTerm`] it is re-sampled after each insertion
    /// and later terms climb above earlier ones.
    pub fn apply_keynotes(&mut self, keynotes: &Keynotes, strategy: KeynoteStrategy) {
        let base = self.max_weight();
        for term in keynotes.terms() {
            let max = match strategy {
                KeynoteStrategy::MaxOnce => base,
                KeynoteStrategy::MaxPerTerm => self.max_weight(),
            };
            self.insert(term.clone(), keynotes.weight() + max);
        }
    }

    /// Deletes every key present in `stopwords`, returning how many went.
    pub fn remove_stopwords(&mut self, stopwords: &BTreeSet<String>) -> usize {
        let before = self.weights.len();
        self.weights.retain(|word, _| !stopwords.contains(word));
        before - self.weights.len()
    }

    /// Entries by descending weight, ties broken by key.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            weights: iter
                .into_iter()
                .map(|(word, weight)| (word.into(), weight))
                .collect(),
        }
    }
}

/// Splits a term list on `，`, `,`, `*` and whitespace, dropping empties.
///
/// # Example
///
/// ```
/// use dznodes_wordcloud::parse_terms;
///
/// assert_eq!(parse_terms("猫，狗, bird*fish  cow"), ["猫", "狗", "bird", "fish", "cow"]);
/// ```
#[must_use]
pub fn parse_terms(raw: &str) -> Vec<String> {
    raw.split(|ch: char| ch == '，' || ch == ',' || ch == '*' || ch.is_whitespace())
        .filter(|piece| !piece.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parses a stopword list with the same delimiters as [`parse_terms`].
#[must_use]
pub fn parse_stopwords(raw: &str) -> BTreeSet<String> {
    parse_terms(raw).into_iter().collect()
}

/// Keynote terms and the boost applied on top of the maximum weight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Keynotes {
    terms: Vec<String>,
    weight: f64,
}

impl Keynotes {
    /// Parses `raw` into keynote terms boosted by `weight`.
    #[must_use]
    pub fn parse(raw: &str, weight: f64) -> Self {
        Self {
            terms: parse_terms(raw),
            weight,
        }
    }

    /// Terms in the order given.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Boost added to the maximum weight.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns `true` when no term was given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Builds frequency maps from caller text.
#[derive(Debug)]
pub struct FrequencyBuilder<'a, S: ?Sized> {
    segmenter: &'a S,
    counter: WordCounter,
    strategy: KeynoteStrategy,
}

impl<'a, S: Segmenter + ?Sized> FrequencyBuilder<'a, S> {
    /// Creates a builder using `segmenter`, the default counter and
    /// [`KeynoteStrategy::MaxOnce`].
    #[must_use]
    pub fn new(segmenter: &'a S) -> Self {
        Self {
            segmenter,
            counter: WordCounter::default(),
            strategy: KeynoteStrategy::default(),
        }
    }

    /// Replaces the word counter.
    #[must_use]
    pub const fn with_counter(mut self, counter: WordCounter) -> Self {
        self.counter = counter;
        self
    }

    /// Replaces the keynote strategy.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: KeynoteStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Segments and counts `text`, substituting [`FALLBACK_TEXT`] when empty.
    #[must_use]
    pub fn count(&self, text: &str) -> FrequencyMap {
        let text = if text.is_empty() {
            tracing::info!(
                target: "dznodes::wordcloud",
                "text input not found, using demo string"
            );
            FALLBACK_TEXT
        } else {
            text
        };
        let joined = self
            .segmenter
            .segment(text)
            .into_iter()
            .filter(|token| !token.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        self.counter.count(&joined)
    }

    /// Runs the full pipeline: count, boost keynotes, remove stopwords.
    #[must_use]
    pub fn build(
        &self,
        text: &str,
        keynotes: &Keynotes,
        stopwords: &BTreeSet<String>,
    ) -> FrequencyMap {
        let mut frequencies = self.count(text);
        if !keynotes.is_empty() {
            frequencies.apply_keynotes(keynotes, self.strategy);
        }
        tracing::info!(
            target: "dznodes::wordcloud",
            words = frequencies.len(),
            "word frequencies generated"
        );
        let removed = frequencies.remove_stopwords(stopwords);
        if removed > 0 {
            tracing::debug!(
                target: "dznodes::wordcloud",
                removed,
                "stopwords removed from frequencies"
            );
        }
        frequencies
    }
}
