//! Word frequencies and word-cloud rendering for the dzNodes pack.
//!
//! The crate has two halves. The frequency half turns free text into a
//! [`FrequencyMap`]: text is segmented (Chinese-aware through `jieba-rs`),
//! counted by [`WordCounter`], boosted with keynote terms and stripped of
//! user stopwords by [`FrequencyBuilder`]. The rendering half lays the map
//! out as a cloud through the [`CloudRenderer`] seam and draws it to an
//! `image` bitmap.
//!
//! ```
//! use std::collections::BTreeSet;
//!
//! use dznodes_wordcloud::{FrequencyBuilder, Keynotes, WhitespaceSegmenter};
//!
//! let segmenter = WhitespaceSegmenter;
//! let builder = FrequencyBuilder::new(&segmenter);
//! let keynotes = Keynotes::parse("rust", 10.0);
//! let map = builder.build("crab crab shell", &keynotes, &BTreeSet::new());
//!
//! assert_eq!(map.get("crab"), Some(2.0));
//! assert_eq!(map.get("rust"), Some(12.0));
//! ```

mod color;
mod counter;
mod error;
mod fonts;
mod frequency;
mod render;
mod segment;

pub use color::{Colormap, colormap_names, parse_color};
pub use counter::{DEFAULT_COLLOCATION_THRESHOLD, STOPWORDS, WordCounter, is_stopword, tokenize};
pub use error::{FontError, RenderError};
pub use fonts::{DEFAULT_FONT, FontRegistry, ResolvedFont, scan as scan_fonts};
pub use frequency::{
    FALLBACK_TEXT, FrequencyBuilder, FrequencyMap, Keynotes, parse_stopwords, parse_terms,
};
pub use render::{
    Background, CloudRenderer, Contour, CosmicRasterizer, CosmicRasterizerFactory, GlyphMask,
    GlyphRasterizer, LayoutRenderer, Mask, Orientation, PixelMode, PlacedWord, RasterizerFactory,
    RenderConfig, RenderConfigBuilder, Seed, WordCloud,
};
pub use segment::{JiebaSegmenter, Segmenter, WhitespaceSegmenter};
