//! Named colour maps sampled for word colours.

use image::Rgba;

use super::table::COLORMAPS;
use crate::error::RenderError;

/// Entries in the lookup table of a continuous map.
const LUT_SIZE: usize = 256;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// How anchors of a colour map are turned into colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Interpolation {
    /// Evenly spaced anchors blended linearly.
    Linear,
    /// Discrete colours picked by bucket.
    Listed,
}

#[derive(Debug, PartialEq, Eq)]
pub(super) struct ColormapSpec {
    pub(super) name: &'static str,
    pub(super) kind: Interpolation,
    pub(super) stops: &'static [u32],
}

/// A built-in colour map.
///
/// # Example
///
/// ```
/// use dznodes_wordcloud::Colormap;
///
/// let map = Colormap::named("binary").expect("known map");
/// assert_eq!(map.sample(0.0).0, [255, 255, 255, 255]);
/// assert_eq!(map.sample(1.0).0, [0, 0, 0, 255]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colormap {
    spec: &'static ColormapSpec,
}

impl Colormap {
    /// Looks a colour map up by its exact name.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnknownColormap`] for names outside the table
    /// and for menu entries that carry no colours.
    pub fn named(name: &str) -> Result<Self, RenderError> {
        COLORMAPS
            .iter()
            .find(|spec| spec.name == name && !spec.stops.is_empty())
            .map(|spec| Self { spec })
            .ok_or_else(|| RenderError::UnknownColormap {
                name: name.to_owned(),
            })
    }

    /// Name of the map.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.spec.name
    }

    /// Colour at position `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn sample(&self, t: f64) -> Rgba<u8> {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let stops = self.spec.stops;
        match self.spec.kind {
            Interpolation::Listed => {
                let index = bucket(t, stops.len());
                stops.get(index).map_or(BLACK, |hex| unpack(*hex))
            }
            Interpolation::Linear => blend(stops, lut_level(t)),
        }
    }
}

/// Names of every built-in colour map, in menu order.
#[must_use]
pub fn colormap_names() -> Vec<&'static str> {
    COLORMAPS.iter().map(|spec| spec.name).collect()
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "t is clamped to [0, 1] and n is a small table size"
)]
fn bucket(t: f64, n: usize) -> usize {
    ((t * n as f64) as usize).min(n.saturating_sub(1))
}

#[expect(
    clippy::cast_precision_loss,
    reason = "lookup table indices are below 256"
)]
fn lut_level(t: f64) -> f64 {
    bucket(t, LUT_SIZE) as f64 / (LUT_SIZE - 1) as f64
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "anchor counts are tiny and channels are clamped before casting"
)]
fn blend(stops: &[u32], level: f64) -> Rgba<u8> {
    let segments = stops.len().saturating_sub(1);
    if segments == 0 {
        return stops.first().map_or(BLACK, |hex| unpack(*hex));
    }
    let position = level * segments as f64;
    let lower = (position.floor() as usize).min(segments - 1);
    let frac = position - lower as f64;
    let (Some(from), Some(to)) = (stops.get(lower), stops.get(lower + 1)) else {
        return BLACK;
    };
    let (from, to) = (unpack(*from), unpack(*to));
    let channel = |i: usize| {
        let a = f64::from(from.0[i]);
        let b = f64::from(to.0[i]);
        (a + (b - a) * frac).round().clamp(0.0, 255.0) as u8
    };
    Rgba([channel(0), channel(1), channel(2), 255])
}

const fn unpack(hex: u32) -> Rgba<u8> {
    let [_, r, g, b] = hex.to_be_bytes();
    Rgba([r, g, b, 255])
}
