//! Nodes provided by the pack.
//!
//! Each node module owns its manifest, schema and provider. [`providers`]
//! lists every provider in registration order.

pub mod load_textfile;
pub mod rgb_picker;
pub mod wordcloud;

use dznodes_plugins::NodeProvider;

pub use self::load_textfile::{LoadTextFileNode, LoadTextFileProvider, TextFileError};
pub use self::rgb_picker::{PickerMode, RgbPickerNode, RgbPickerProvider};
pub use self::wordcloud::{WordCloudNode, WordCloudProvider, WordCloudResources};

/// Menu category of the pack's top-level nodes.
pub const CATEGORY: &str = "😺dzNodes";
/// Menu category of word-cloud helpers.
pub const WORDCLOUD_CATEGORY: &str = "😺dzNodes/WordCloud";

/// Providers for every node in the pack.
#[must_use]
pub fn providers(resources: &WordCloudResources) -> Vec<Box<dyn NodeProvider>> {
    vec![
        Box::new(WordCloudProvider::new(resources.clone())),
        Box::new(LoadTextFileProvider),
        Box::new(RgbPickerProvider),
    ]
}

#[cfg(test)]
mod tests;
