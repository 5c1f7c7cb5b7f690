//! Glyph rasterisation.
//!
//! Layout only needs to know which pixels a word covers at a given size, so
//! rasterisation sits behind [`GlyphRasterizer`]. The production rasteriser
//! shapes text with `cosmic-text` using exactly the selected font file.

use std::sync::Arc;

use camino::Utf8Path;
use cosmic_text::{Attrs, Buffer, Color, Family, FontSystem, Metrics, Shaping, SwashCache, fontdb};

use crate::error::RenderError;

const LINE_HEIGHT: f32 = 1.2;
const LOCALE: &str = "en-US";

/// Coverage bitmap of a rendered word, cropped to its ink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphMask {
    width: u32,
    height: u32,
    coverage: Vec<u8>,
}

impl GlyphMask {
    /// Wraps row-major `coverage`; the buffer is padded or cut to fit.
    #[must_use]
    pub fn new(width: u32, height: u32, mut coverage: Vec<u8>) -> Self {
        coverage.resize(width as usize * height as usize, 0);
        Self {
            width,
            height,
            coverage,
        }
    }

    /// A fully covered rectangle.
    #[must_use]
    pub fn solid(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self::new(width, height, vec![u8::MAX; len])
    }

    /// Crops scattered `(x, y, alpha)` samples to their bounding box.
    #[must_use]
    pub fn from_ink(ink: &[(i32, i32, u8)]) -> Self {
        let (Some(min_x), Some(max_x), Some(min_y), Some(max_y)) = (
            ink.iter().map(|(x, _, _)| *x).min(),
            ink.iter().map(|(x, _, _)| *x).max(),
            ink.iter().map(|(_, y, _)| *y).min(),
            ink.iter().map(|(_, y, _)| *y).max(),
        ) else {
            return Self::default();
        };
        let width = max_x.abs_diff(min_x) + 1;
        let height = max_y.abs_diff(min_y) + 1;
        let mut mask = Self::new(width, height, Vec::new());
        for (x, y, alpha) in ink {
            let index = y.abs_diff(min_y) as usize * width as usize + x.abs_diff(min_x) as usize;
            if let Some(cell) = mask.coverage.get_mut(index) {
                *cell = (*cell).max(*alpha);
            }
        }
        mask
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns `true` when nothing is covered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coverage.iter().all(|alpha| *alpha == 0)
    }

    /// Coverage at `(x, y)`; zero outside the mask.
    #[must_use]
    pub fn coverage(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.coverage
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Rotates a quarter turn counter-clockwise.
    #[must_use]
    pub fn rotate_90(&self) -> Self {
        let (width, height) = (self.height, self.width);
        let mut coverage = Vec::with_capacity(self.coverage.len());
        for y in 0..height {
            for x in 0..width {
                coverage.push(self.coverage(self.width - 1 - y, x));
            }
        }
        Self {
            width,
            height,
            coverage,
        }
    }
}

/// Renders words into coverage masks at a pixel size.
pub trait GlyphRasterizer {
    /// Rasterises `text` horizontally at `size` pixels.
    fn rasterize(&mut self, text: &str, size: u32) -> GlyphMask;
}

/// Builds rasterisers bound to a font file.
pub trait RasterizerFactory: Send + Sync {
    /// Rasteriser produced by this factory.
    type Rasterizer: GlyphRasterizer;

    /// Loads `font` and returns a rasteriser using it.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::FontLoad`] or [`RenderError::EmptyFont`] when
    /// the file cannot be used.
    fn load(&self, font: &Utf8Path) -> Result<Self::Rasterizer, RenderError>;
}

/// Loads fonts into a private `cosmic-text` font system.
#[derive(Debug, Clone, Copy, Default)]
pub struct CosmicRasterizerFactory;

impl RasterizerFactory for CosmicRasterizerFactory {
    type Rasterizer = CosmicRasterizer;

    fn load(&self, font: &Utf8Path) -> Result<Self::Rasterizer, RenderError> {
        let mut db = fontdb::Database::new();
        db.load_font_file(font.as_std_path())
            .map_err(|source| RenderError::FontLoad {
                path: font.to_path_buf(),
                source: Arc::new(source),
            })?;
        let family = db
            .faces()
            .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
            .ok_or_else(|| RenderError::EmptyFont {
                path: font.to_path_buf(),
            })?;
        tracing::debug!(target: "dznodes::render", font = %font, family, "font loaded");
        Ok(CosmicRasterizer {
            font_system: FontSystem::new_with_locale_and_db(LOCALE.to_owned(), db),
            swash_cache: SwashCache::new(),
            family,
        })
    }
}

/// Rasteriser shaping text with one font family.
pub struct CosmicRasterizer {
    font_system: FontSystem,
    swash_cache: SwashCache,
    family: String,
}

impl std::fmt::Debug for CosmicRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmicRasterizer")
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

impl GlyphRasterizer for CosmicRasterizer {
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_wrap,
        reason = "font sizes and glyph extents are small"
    )]
    fn rasterize(&mut self, text: &str, size: u32) -> GlyphMask {
        if size == 0 || text.is_empty() {
            return GlyphMask::default();
        }
        let px = size as f32;
        let mut buffer = Buffer::new(&mut self.font_system, Metrics::new(px, px * LINE_HEIGHT));
        buffer.set_size(&mut self.font_system, None, None);
        let attrs = Attrs::new().family(Family::Name(&self.family));
        buffer.set_text(&mut self.font_system, text, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);

        let mut ink = Vec::new();
        buffer.draw(
            &mut self.font_system,
            &mut self.swash_cache,
            Color::rgb(0xff, 0xff, 0xff),
            |x, y, w, h, color| {
                let alpha = color.a();
                if alpha == 0 {
                    return;
                }
                for dy in 0..h as i32 {
                    for dx in 0..w as i32 {
                        ink.push((x + dx, y + dy, alpha));
                    }
                }
            },
        );
        GlyphMask::from_ink(&ink)
    }
}
