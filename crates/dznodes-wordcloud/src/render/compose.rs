//! Bitmap composition of a finished layout.

use image::{DynamicImage, Rgba, RgbaImage};

use super::WordCloud;
use super::config::{Background, Contour, Mask, PixelMode};
use super::raster::GlyphRasterizer;
use crate::error::RenderError;

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "scaled values are clamped to the u32 range first"
)]
fn scaled(value: u32, scale: f64) -> u32 {
    (f64::from(value) * scale).clamp(0.0, f64::from(u32::MAX)) as u32
}

/// Draws `cloud` at its configured scale.
pub(super) fn compose<R: GlyphRasterizer>(
    cloud: &WordCloud,
    rasterizer: &mut R,
) -> Result<DynamicImage, RenderError> {
    let config = cloud.config();
    let scale = config.scale();
    let (width, height) = config.canvas_size();
    let (out_width, out_height) = (scaled(width, scale), scaled(height, scale));
    if out_width == 0 || out_height == 0 {
        return Err(RenderError::parameter(
            "scale",
            format!("{scale} collapses a {width}x{height} canvas"),
        ));
    }

    let fill = match config.background() {
        Background::Transparent => Rgba([0, 0, 0, 0]),
        Background::Color(Rgba([r, g, b, a])) => match config.mode() {
            PixelMode::Rgb => Rgba([r, g, b, u8::MAX]),
            PixelMode::Rgba => Rgba([r, g, b, a]),
        },
    };
    let mut canvas = RgbaImage::from_pixel(out_width, out_height, fill);

    for word in cloud.layout() {
        let size = scaled(word.font_size(), scale);
        let glyph = word
            .orientation()
            .apply(rasterizer.rasterize(word.word(), size));
        let (left, top) = (scaled(word.col(), scale), scaled(word.row(), scale));
        for gy in 0..glyph.height() {
            for gx in 0..glyph.width() {
                let coverage = glyph.coverage(gx, gy);
                if coverage == 0 {
                    continue;
                }
                let (x, y) = (left.saturating_add(gx), top.saturating_add(gy));
                if let Some(pixel) = canvas.get_pixel_mut_checked(x, y) {
                    blend(pixel, word.color(), coverage);
                }
            }
        }
    }

    if let (Some(contour), Some(mask)) = (config.contour(), config.mask()) {
        draw_contour(&mut canvas, mask, contour);
    }

    Ok(match config.mode() {
        PixelMode::Rgb => DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(canvas).into_rgb8()),
        PixelMode::Rgba => DynamicImage::ImageRgba8(canvas),
    })
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "blended channels stay within 0..=255"
)]
fn blend(pixel: &mut Rgba<u8>, color: Rgba<u8>, coverage: u8) {
    let alpha = f64::from(coverage) / 255.0 * f64::from(color[3]) / 255.0;
    let mix = |src: u8, dst: u8| {
        f64::from(src)
            .mul_add(alpha, f64::from(dst) * (1.0 - alpha))
            .round()
            .clamp(0.0, 255.0) as u8
    };
    let Rgba([r, g, b, a]) = *pixel;
    *pixel = Rgba([
        mix(color[0], r),
        mix(color[1], g),
        mix(color[2], b),
        mix(u8::MAX, a),
    ]);
}

/// Paints the mask boundary, resized to the canvas, dilated by the stroke
/// width.
fn draw_contour(canvas: &mut RgbaImage, mask: &Mask, contour: Contour) {
    let (width, height) = canvas.dimensions();
    let blocked = |x: u32, y: u32| {
        let mx = u64::from(x) * u64::from(mask.width()) / u64::from(width);
        let my = u64::from(y) * u64::from(mask.height()) / u64::from(height);
        u32::try_from(mx)
            .ok()
            .zip(u32::try_from(my).ok())
            .is_some_and(|(mx, my)| mask.is_blocked(mx, my))
    };

    let mut edges = Vec::new();
    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let here = blocked(x, y);
            let differs = [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
                .into_iter()
                .any(|(nx, ny)| blocked(nx, ny) != here);
            if differs {
                edges.push((x, y));
            }
        }
    }

    let radius = stroke_radius(contour.width());
    let Rgba([r, g, b, _]) = contour.color();
    let paint = Rgba([r, g, b, u8::MAX]);
    for (x, y) in edges {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                let (Some(px), Some(py)) = (x.checked_add_signed(dx), y.checked_add_signed(dy))
                else {
                    continue;
                };
                if let Some(pixel) = canvas.get_pixel_mut_checked(px, py) {
                    *pixel = paint;
                }
            }
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "contour widths are bounded by the node schema"
)]
fn stroke_radius(width: f64) -> i32 {
    (width / 10.0 * 3.0).round().clamp(0.0, f64::from(i32::MAX)) as i32
}
