//! Word-cloud layout and rendering.
//!
//! [`CloudRenderer`] is the seam between the word-cloud node and the
//! renderer. [`LayoutRenderer`] is the built-in implementation: it places
//! words greedily from the heaviest down, choosing a random free position
//! on an occupancy grid for each one and shrinking the font when nothing
//! fits. Rendering happens in two steps. [`CloudRenderer::generate`] produces
//! a [`WordCloud`] layout and [`CloudRenderer::to_image`] draws it, so the
//! layout can be recoloured in between.

mod compose;
mod config;
mod layout;
mod raster;

use std::borrow::Cow;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage, Rgba};

pub use self::config::{
    Background, Contour, Mask, PixelMode, RenderConfig, RenderConfigBuilder, Seed,
};
pub use self::raster::{
    CosmicRasterizer, CosmicRasterizerFactory, GlyphMask, GlyphRasterizer, RasterizerFactory,
};
use crate::error::RenderError;
use crate::frequency::FrequencyMap;

/// Direction a word is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    /// Left to right.
    Horizontal,
    /// Rotated a quarter turn counter-clockwise.
    Vertical,
}

impl Orientation {
    /// The other orientation.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Rotates a horizontally rasterised glyph into this orientation.
    #[must_use]
    pub fn apply(self, glyph: GlyphMask) -> GlyphMask {
        match self {
            Self::Horizontal => glyph,
            Self::Vertical => glyph.rotate_90(),
        }
    }
}

/// A word positioned on the canvas, in layout pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    word: String,
    font_size: u32,
    row: u32,
    col: u32,
    width: u32,
    height: u32,
    orientation: Orientation,
    color: Rgba<u8>,
}

impl PlacedWord {
    /// Places `word` with its top-left ink corner at `(row, col)`.
    #[must_use]
    pub fn new(
        word: impl Into<String>,
        font_size: u32,
        (row, col): (u32, u32),
        (width, height): (u32, u32),
        orientation: Orientation,
        color: Rgba<u8>,
    ) -> Self {
        Self {
            word: word.into(),
            font_size,
            row,
            col,
            width,
            height,
            orientation,
            color,
        }
    }

    /// The word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Font size in layout pixels.
    #[must_use]
    pub const fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Top edge.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Left edge.
    #[must_use]
    pub const fn col(&self) -> u32 {
        self.col
    }

    /// Ink box width after rotation.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Ink box height after rotation.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Drawing direction.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Fill colour.
    #[must_use]
    pub const fn color(&self) -> Rgba<u8> {
        self.color
    }
}

/// A finished layout together with the parameters that produced it.
#[derive(Debug, Clone)]
pub struct WordCloud {
    config: RenderConfig,
    layout: Vec<PlacedWord>,
}

impl WordCloud {
    /// Wraps a layout.
    #[must_use]
    pub const fn new(config: RenderConfig, layout: Vec<PlacedWord>) -> Self {
        Self { config, layout }
    }

    /// Parameters of the render.
    #[must_use]
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Placed words in placement order.
    #[must_use]
    pub fn layout(&self) -> &[PlacedWord] {
        &self.layout
    }

    /// Replaces each word's colour with the mean colour of `reference`
    /// under the word's box.
    ///
    /// The reference is resized to the canvas first when sizes differ. A
    /// box falling entirely outside the reference keeps its colour.
    pub fn recolor(&mut self, reference: &RgbImage) {
        let (width, height) = self.config.canvas_size();
        let reference = if reference.dimensions() == (width, height) {
            Cow::Borrowed(reference)
        } else {
            let resized = imageops::resize(reference, width, height, FilterType::CatmullRom);
            Cow::Owned(resized)
        };
        let mut recoloured = 0_usize;
        for word in &mut self.layout {
            if let Some(color) = mean_color(&reference, word) {
                word.color = color;
                recoloured += 1;
            }
        }
        tracing::debug!(target: "dznodes::render", recoloured, "layout recoloured");
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the mean of u8 samples fits in u8"
)]
fn mean_color(image: &RgbImage, word: &PlacedWord) -> Option<Rgba<u8>> {
    let right = word.col.saturating_add(word.width).min(image.width());
    let bottom = word.row.saturating_add(word.height).min(image.height());
    let mut sums = [0_u64; 3];
    let mut count = 0_u64;
    for y in word.row..bottom {
        for x in word.col..right {
            let pixel = image.get_pixel(x, y);
            for (sum, channel) in sums.iter_mut().zip(pixel.0) {
                *sum += u64::from(channel);
            }
            count += 1;
        }
    }
    if count == 0 {
        return None;
    }
    let [r, g, b] = sums.map(|sum| (sum / count) as u8);
    Some(Rgba([r, g, b, u8::MAX]))
}

/// Lays out and draws word clouds.
pub trait CloudRenderer: Send + Sync {
    /// Places the words of `frequencies` according to `config`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::EmptyFrequencies`] when no word has a positive
    /// weight and font errors when the configured font cannot be loaded.
    fn generate(
        &self,
        frequencies: &FrequencyMap,
        config: &RenderConfig,
    ) -> Result<WordCloud, RenderError>;

    /// Draws `cloud` at its configured scale.
    ///
    /// # Errors
    ///
    /// Returns font errors, or [`RenderError::InvalidParameter`] when the
    /// scale collapses the canvas to nothing.
    fn to_image(&self, cloud: &WordCloud) -> Result<DynamicImage, RenderError>;
}

/// Greedy layout renderer drawing glyphs produced by `F`.
#[derive(Debug, Clone, Default)]
pub struct LayoutRenderer<F = CosmicRasterizerFactory> {
    factory: F,
}

impl<F: RasterizerFactory> LayoutRenderer<F> {
    /// Creates a renderer loading fonts through `factory`.
    #[must_use]
    pub const fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F: RasterizerFactory> CloudRenderer for LayoutRenderer<F> {
    fn generate(
        &self,
        frequencies: &FrequencyMap,
        config: &RenderConfig,
    ) -> Result<WordCloud, RenderError> {
        let mut rasterizer = self.factory.load(config.font())?;
        let layout = layout::place_words(frequencies, config, &mut rasterizer)?;
        Ok(WordCloud::new(config.clone(), layout))
    }

    fn to_image(&self, cloud: &WordCloud) -> Result<DynamicImage, RenderError> {
        let mut rasterizer = self.factory.load(cloud.config().font())?;
        compose::compose(cloud, &mut rasterizer)
    }
}

#[cfg(test)]
mod tests;
