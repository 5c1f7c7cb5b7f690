//! Mixed-script segmentation.
//!
//! Chinese runs carry no word delimiters, so text is segmented with a
//! dictionary plus HMM model before counting. Latin runs pass through with
//! their surrounding whitespace as separate tokens.

use jieba_rs::Jieba;

/// Splits text into tokens.
pub trait Segmenter {
    /// Returns the tokens of `text` in order, whitespace tokens included.
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Segmenter backed by the jieba dictionary in accurate mode with HMM.
pub struct JiebaSegmenter {
    jieba: Jieba,
}

impl JiebaSegmenter {
    /// Loads the bundled dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
        }
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for JiebaSegmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiebaSegmenter").finish_non_exhaustive()
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        self.jieba
            .cut(text, true)
            .into_iter()
            .map(str::to_owned)
            .collect()
    }
}

/// Splits on whitespace only. Useful where no CJK text is expected.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_owned).collect()
    }
}
