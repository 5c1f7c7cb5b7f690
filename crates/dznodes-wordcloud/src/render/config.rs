//! Rendering parameters.

use camino::{Utf8Path, Utf8PathBuf};
use image::{Rgb, RgbImage, Rgba};

use crate::color::{Colormap, parse_color};
use crate::error::RenderError;

/// Canvas fill behind the words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    /// Fully transparent pixels.
    Transparent,
    /// A solid colour.
    Color(Rgba<u8>),
}

/// Pixel layout of the final bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum PixelMode {
    /// Three channels.
    Rgb,
    /// Four channels.
    Rgba,
}

/// Source of layout randomness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seed {
    /// Fresh entropy on every render.
    #[default]
    Unseeded,
    /// A fixed seed; identical inputs give identical clouds.
    Fixed(u64),
}

impl Seed {
    /// Maps the host's integer seed. Negative values and values beyond
    /// `u64::MAX` mean "unseeded".
    #[must_use]
    pub fn from_raw(value: i128) -> Self {
        u64::try_from(value).map_or(Self::Unseeded, Self::Fixed)
    }
}

/// Shape mask: pure white pixels are off limits to words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    pixels: RgbImage,
}

impl Mask {
    /// Wraps an RGB bitmap.
    #[must_use]
    pub const fn new(pixels: RgbImage) -> Self {
        Self { pixels }
    }

    /// Mask width.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Mask height.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Returns `true` when `(x, y)` is blocked. Out-of-range pixels are free.
    #[must_use]
    pub fn is_blocked(&self, x: u32, y: u32) -> bool {
        self.pixels
            .get_pixel_checked(x, y)
            .is_some_and(|Rgb(channels)| channels.iter().all(|c| *c == u8::MAX))
    }
}

/// Outline drawn along the mask boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contour {
    width: f64,
    color: Rgba<u8>,
}

impl Contour {
    /// Stroke width in pixels.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Stroke colour.
    #[must_use]
    pub const fn color(&self) -> Rgba<u8> {
        self.color
    }
}

/// Validated parameters for one word-cloud render.
///
/// Construct through [`RenderConfig::builder`].
#[derive(Debug, Clone)]
pub struct RenderConfig {
    width: u32,
    height: u32,
    scale: f64,
    margin: u32,
    font: Utf8PathBuf,
    min_font_size: u32,
    max_font_size: Option<u32>,
    font_step: u32,
    relative_scaling: f64,
    colormap: Colormap,
    background: Background,
    mode: PixelMode,
    prefer_horizontal: f64,
    max_words: usize,
    repeat: bool,
    seed: Seed,
    mask: Option<Mask>,
    contour: Option<Contour>,
}

impl RenderConfig {
    /// Starts a builder for a render using `font`.
    #[must_use]
    pub fn builder(font: impl Into<Utf8PathBuf>) -> RenderConfigBuilder {
        RenderConfigBuilder::new(font.into())
    }

    /// Canvas size in layout pixels, taken from the mask when present.
    #[must_use]
    pub const fn canvas_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Output scale factor.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Space reserved around each word.
    #[must_use]
    pub const fn margin(&self) -> u32 {
        self.margin
    }

    /// Font file used for every word.
    #[must_use]
    pub fn font(&self) -> &Utf8Path {
        &self.font
    }

    /// Smallest size a word may shrink to.
    #[must_use]
    pub const fn min_font_size(&self) -> u32 {
        self.min_font_size
    }

    /// Size of the heaviest word; `None` uses the canvas height.
    #[must_use]
    pub const fn max_font_size(&self) -> Option<u32> {
        self.max_font_size
    }

    /// Shrink step when a word does not fit.
    #[must_use]
    pub const fn font_step(&self) -> u32 {
        self.font_step
    }

    /// Influence of relative weight on font size.
    #[must_use]
    pub const fn relative_scaling(&self) -> f64 {
        self.relative_scaling
    }

    /// Colour map for word colours.
    #[must_use]
    pub const fn colormap(&self) -> Colormap {
        self.colormap
    }

    /// Canvas fill.
    #[must_use]
    pub const fn background(&self) -> Background {
        self.background
    }

    /// Output pixel layout.
    #[must_use]
    pub const fn mode(&self) -> PixelMode {
        self.mode
    }

    /// Probability of a horizontal first attempt.
    #[must_use]
    pub const fn prefer_horizontal(&self) -> f64 {
        self.prefer_horizontal
    }

    /// Maximum number of distinct words considered.
    #[must_use]
    pub const fn max_words(&self) -> usize {
        self.max_words
    }

    /// Whether words repeat until `max_words` is reached.
    #[must_use]
    pub const fn repeat(&self) -> bool {
        self.repeat
    }

    /// Layout seed.
    #[must_use]
    pub const fn seed(&self) -> Seed {
        self.seed
    }

    /// Shape mask, if any.
    #[must_use]
    pub const fn mask(&self) -> Option<&Mask> {
        self.mask.as_ref()
    }

    /// Mask outline, present only with a mask and a positive width.
    #[must_use]
    pub const fn contour(&self) -> Option<Contour> {
        self.contour
    }
}

/// Collects raw render parameters and validates them in
/// [`RenderConfigBuilder::build`].
#[derive(Debug, Clone)]
pub struct RenderConfigBuilder {
    width: u32,
    height: u32,
    scale: f64,
    margin: u32,
    font: Utf8PathBuf,
    min_font_size: u32,
    max_font_size: Option<u32>,
    font_step: u32,
    relative_scaling: f64,
    colormap: String,
    background: String,
    transparent: bool,
    prefer_horizontal: f64,
    max_words: usize,
    repeat: bool,
    seed: Seed,
    mask: Option<Mask>,
    contour_width: f64,
    contour_color: String,
}

impl RenderConfigBuilder {
    fn new(font: Utf8PathBuf) -> Self {
        Self {
            width: 512,
            height: 512,
            scale: 1.0,
            margin: 0,
            font,
            min_font_size: 4,
            max_font_size: Some(128),
            font_step: 1,
            relative_scaling: 0.5,
            colormap: "viridis".to_owned(),
            background: "#FFFFFF".to_owned(),
            transparent: false,
            prefer_horizontal: 0.9,
            max_words: 200,
            repeat: false,
            seed: Seed::Unseeded,
            mask: None,
            contour_width: 0.0,
            contour_color: "#000000".to_owned(),
        }
    }

    /// Canvas size; ignored when a mask is set.
    #[must_use]
    pub const fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Output scale factor.
    #[must_use]
    pub const fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Space around each word.
    #[must_use]
    pub const fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Font size bounds. `max = None` starts at the canvas height.
    #[must_use]
    pub const fn font_sizes(mut self, min: u32, max: Option<u32>) -> Self {
        self.min_font_size = min;
        self.max_font_size = max;
        self
    }

    /// Shrink step when a word does not fit.
    #[must_use]
    pub const fn font_step(mut self, step: u32) -> Self {
        self.font_step = step;
        self
    }

    /// Influence of relative weight on font size, in `[0, 1]`.
    #[must_use]
    pub const fn relative_scaling(mut self, value: f64) -> Self {
        self.relative_scaling = value;
        self
    }

    /// Named colour map.
    #[must_use]
    pub fn colormap(mut self, name: impl Into<String>) -> Self {
        self.colormap = name.into();
        self
    }

    /// Background colour string.
    #[must_use]
    pub fn background(mut self, color: impl Into<String>) -> Self {
        self.background = color.into();
        self
    }

    /// Transparent background; forces RGBA output.
    #[must_use]
    pub const fn transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    /// Probability of a horizontal first attempt, in `[0, 1]`.
    #[must_use]
    pub const fn prefer_horizontal(mut self, value: f64) -> Self {
        self.prefer_horizontal = value;
        self
    }

    /// Maximum number of words.
    #[must_use]
    pub const fn max_words(mut self, count: usize) -> Self {
        self.max_words = count;
        self
    }

    /// Repeat words until `max_words` is reached.
    #[must_use]
    pub const fn repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    /// Layout seed.
    #[must_use]
    pub const fn seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    /// Shape mask; its size replaces the canvas size.
    #[must_use]
    pub fn mask(mut self, mask: Option<Mask>) -> Self {
        self.mask = mask;
        self
    }

    /// Mask outline width and colour string.
    #[must_use]
    pub fn contour(mut self, width: f64, color: impl Into<String>) -> Self {
        self.contour_width = width;
        self.contour_color = color.into();
        self
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidParameter`] for out-of-range numbers,
    /// [`RenderError::UnknownColormap`] for an unknown map and
    /// [`RenderError::InvalidColor`] for a malformed colour.
    pub fn build(self) -> Result<RenderConfig, RenderError> {
        let (width, height) = self
            .mask
            .as_ref()
            .map_or((self.width, self.height), |mask| (mask.width(), mask.height()));
        if width == 0 || height == 0 {
            return Err(RenderError::parameter(
                "size",
                format!("canvas must not be empty, got {width}x{height}"),
            ));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(RenderError::parameter(
                "scale",
                format!("must be positive, got {}", self.scale),
            ));
        }
        if let Some(max) = self.max_font_size
            && max < self.min_font_size
        {
            return Err(RenderError::parameter(
                "max_font_size",
                format!("{max} is below min_font_size {}", self.min_font_size),
            ));
        }
        if self.font_step == 0 {
            return Err(RenderError::parameter("font_step", "must be at least 1"));
        }
        unit_interval("relative_scaling", self.relative_scaling)?;
        unit_interval("prefer_horizontal", self.prefer_horizontal)?;
        if self.max_words == 0 {
            return Err(RenderError::parameter("max_words", "must be at least 1"));
        }
        if !(self.contour_width.is_finite() && self.contour_width >= 0.0) {
            return Err(RenderError::parameter(
                "contour_width",
                format!("must be non-negative, got {}", self.contour_width),
            ));
        }

        let colormap = Colormap::named(&self.colormap)?;
        let (background, mode) = if self.transparent {
            (Background::Transparent, PixelMode::Rgba)
        } else {
            (Background::Color(parse_color(&self.background)?), PixelMode::Rgb)
        };
        let contour = if self.mask.is_some() && self.contour_width > 0.0 {
            Some(Contour {
                width: self.contour_width,
                color: parse_color(&self.contour_color)?,
            })
        } else {
            None
        };

        Ok(RenderConfig {
            width,
            height,
            scale: self.scale,
            margin: self.margin,
            font: self.font,
            min_font_size: self.min_font_size,
            max_font_size: self.max_font_size,
            font_step: self.font_step,
            relative_scaling: self.relative_scaling,
            colormap,
            background,
            mode,
            prefer_horizontal: self.prefer_horizontal,
            max_words: self.max_words,
            repeat: self.repeat,
            seed: self.seed,
            mask: self.mask,
            contour,
        })
    }
}

fn unit_interval(name: &'static str, value: f64) -> Result<(), RenderError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(RenderError::parameter(
            name,
            format!("must lie in [0, 1], got {value}"),
        ))
    }
}
