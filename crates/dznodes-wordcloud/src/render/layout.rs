//! Greedy word placement.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::{Mask, RenderConfig, Seed};
use super::raster::{GlyphMask, GlyphRasterizer};
use super::{Orientation, PlacedWord};
use crate::error::RenderError;
use crate::frequency::FrequencyMap;

/// Occupied pixels plus a summed-area table over them.
///
/// `integral` has one extra row and column of zeros so a box sum is four
/// lookups.
#[derive(Debug)]
pub(super) struct OccupancyMap {
    width: usize,
    height: usize,
    occupied: Vec<bool>,
    integral: Vec<u32>,
}

impl OccupancyMap {
    pub(super) fn new(width: u32, height: u32, mask: Option<&Mask>) -> Self {
        let (width, height) = (width as usize, height as usize);
        let mut occupied = vec![false; width * height];
        if let Some(mask) = mask {
            for (index, cell) in occupied.iter_mut().enumerate() {
                let (x, y) = (index % width, index / width);
                *cell = u32::try_from(x)
                    .ok()
                    .zip(u32::try_from(y).ok())
                    .is_some_and(|(x, y)| mask.is_blocked(x, y));
            }
        }
        let mut map = Self {
            width,
            height,
            occupied,
            integral: vec![0; (width + 1) * (height + 1)],
        };
        map.refresh_from(0);
        map
    }

    fn refresh_from(&mut self, row: usize) {
        let stride = self.width + 1;
        for y in row..self.height {
            let mut run = 0;
            for x in 0..self.width {
                run += u32::from(self.occupied[y * self.width + x]);
                self.integral[(y + 1) * stride + x + 1] = self.integral[y * stride + x + 1] + run;
            }
        }
    }

    fn box_sum(&self, row: usize, col: usize, height: usize, width: usize) -> u32 {
        let stride = self.width + 1;
        let (bottom, right) = (row + height, col + width);
        self.integral[bottom * stride + right] + self.integral[row * stride + col]
            - self.integral[row * stride + right]
            - self.integral[bottom * stride + col]
    }

    fn free_positions(
        &self,
        height: usize,
        width: usize,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        let rows = (self.height + 1).saturating_sub(height);
        let cols = (self.width + 1).saturating_sub(width);
        (0..rows)
            .flat_map(move |row| (0..cols).map(move |col| (row, col)))
            .filter(move |(row, col)| self.box_sum(*row, *col, height, width) == 0)
    }

    /// Picks a uniformly random free top-left corner for a box.
    pub(super) fn sample(
        &self,
        height: usize,
        width: usize,
        rng: &mut impl Rng,
    ) -> Option<(usize, usize)> {
        if height == 0 || width == 0 || height > self.height || width > self.width {
            return None;
        }
        let hits = self.free_positions(height, width).count();
        if hits == 0 {
            return None;
        }
        let goal = rng.random_range(0..hits);
        self.free_positions(height, width).nth(goal)
    }

    /// Marks the inked pixels of `glyph` at `(row, col)` as occupied.
    pub(super) fn stamp(&mut self, glyph: &GlyphMask, row: usize, col: usize) {
        for (gy, y) in (0..glyph.height()).zip(row..self.height) {
            for (gx, x) in (0..glyph.width()).zip(col..self.width) {
                if glyph.coverage(gx, gy) > 0 {
                    self.occupied[y * self.width + x] = true;
                }
            }
        }
        self.refresh_from(row.min(self.height));
    }
}

/// Words in placement order with weights normalised to the heaviest.
pub(super) fn prepare_words<'a>(
    frequencies: &'a FrequencyMap,
    config: &RenderConfig,
) -> Result<Vec<(&'a str, f64)>, RenderError> {
    let mut words = frequencies.sorted();
    words.truncate(config.max_words());
    let max = words.first().map_or(0.0, |(_, weight)| *weight);
    if max <= 0.0 || !max.is_finite() {
        return Err(RenderError::EmptyFrequencies);
    }
    for (_, weight) in &mut words {
        *weight /= max;
    }

    let distinct = words.len();
    if config.repeat() && distinct < config.max_words() {
        let rounds = config.max_words().div_ceil(distinct) - 1;
        let downweight = words.last().map_or(1.0, |(_, weight)| *weight);
        let base = words.clone();
        for round in 1..=rounds {
            let factor = downweight.powi(i32::try_from(round).unwrap_or(i32::MAX));
            words.extend(base.iter().map(|(word, weight)| (*word, weight * factor)));
        }
    }
    Ok(words)
}

pub(super) fn seeded_rng(seed: Seed) -> ChaCha8Rng {
    match seed {
        Seed::Fixed(value) => ChaCha8Rng::seed_from_u64(value),
        Seed::Unseeded => ChaCha8Rng::seed_from_u64(rand::random()),
    }
}

enum Attempt {
    Placed {
        row: usize,
        col: usize,
        glyph: GlyphMask,
    },
    Skip,
    Exhausted,
}

/// Places weighted words on the canvas.
pub(super) fn place_words<R: GlyphRasterizer>(
    frequencies: &FrequencyMap,
    config: &RenderConfig,
    rasterizer: &mut R,
) -> Result<Vec<PlacedWord>, RenderError> {
    let words = prepare_words(frequencies, config)?;
    let mut rng = seeded_rng(config.seed());
    let (width, height) = config.canvas_size();
    let mut occupancy = OccupancyMap::new(width, height, config.mask());
    let margin = config.margin() as usize;
    let min_size = i64::from(config.min_font_size());
    let relative_scaling = config.relative_scaling();

    let mut font_size = i64::from(config.max_font_size().unwrap_or(height));
    let mut last_weight = 1.0;
    let mut layout = Vec::new();

    for (word, weight) in words {
        if weight <= 0.0 {
            continue;
        }
        if relative_scaling > 0.0 {
            font_size = scaled_size(font_size, relative_scaling, weight / last_weight);
        }
        let mut orientation = if rng.random::<f64>() < config.prefer_horizontal() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let mut tried_other = false;

        let attempt = loop {
            if font_size < min_size {
                break Attempt::Exhausted;
            }
            let Ok(size) = u32::try_from(font_size) else {
                break Attempt::Exhausted;
            };
            let glyph = orientation.apply(rasterizer.rasterize(word, size));
            if glyph.is_empty() {
                break Attempt::Skip;
            }
            let box_height = glyph.height() as usize + margin;
            let box_width = glyph.width() as usize + margin;
            if let Some((row, col)) = occupancy.sample(box_height, box_width, &mut rng) {
                break Attempt::Placed {
                    row: row + margin / 2,
                    col: col + margin / 2,
                    glyph,
                };
            }
            if !tried_other && config.prefer_horizontal() < 1.0 {
                orientation = orientation.flipped();
                tried_other = true;
            } else {
                font_size -= i64::from(config.font_step());
                orientation = Orientation::Horizontal;
            }
        };

        let (row, col, glyph) = match attempt {
            Attempt::Placed { row, col, glyph } => (row, col, glyph),
            Attempt::Skip => {
                tracing::debug!(target: "dznodes::render", word, "word has no ink, skipped");
                continue;
            }
            Attempt::Exhausted => break,
        };
        occupancy.stamp(&glyph, row, col);
        layout.push(PlacedWord {
            word: word.to_owned(),
            font_size: u32::try_from(font_size).unwrap_or(u32::MAX),
            row: u32::try_from(row).unwrap_or(u32::MAX),
            col: u32::try_from(col).unwrap_or(u32::MAX),
            width: glyph.width(),
            height: glyph.height(),
            orientation,
            color: config.colormap().sample(rng.random::<f64>()),
        });
        last_weight = weight;
    }

    tracing::debug!(
        target: "dznodes::render",
        placed = layout.len(),
        width,
        height,
        "layout finished"
    );
    Ok(layout)
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "font sizes stay far below 2^52"
)]
fn scaled_size(size: i64, relative_scaling: f64, ratio: f64) -> i64 {
    ((relative_scaling * ratio + (1.0 - relative_scaling)) * size as f64).round_ties_even() as i64
}
