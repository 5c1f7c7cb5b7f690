//! Colour parsing and colour maps.

mod colormap;
mod names;
mod table;

use image::Rgba;

pub use self::colormap::{Colormap, colormap_names};
use self::names::NAMED_COLORS;
use crate::error::RenderError;

/// Parses a colour string.
///
/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`,
/// `rgb(r%, g%, b%)`, `rgba(r, g, b, a)`, `hsl(h, s%, l%)`,
/// `hsv(h, s%, v%)` (or `hsb`) and the CSS colour names,
/// case-insensitively.
///
/// # Errors
///
/// Returns [`RenderError::InvalidColor`] for anything else.
///
/// # Example
///
/// ```
/// use dznodes_wordcloud::parse_color;
///
/// assert_eq!(parse_color("#FFF").expect("short hex").0, [255, 255, 255, 255]);
/// assert_eq!(parse_color("rgb(1, 2, 3)").expect("rgb").0, [1, 2, 3, 255]);
/// assert_eq!(parse_color("LightGray").expect("name").0, [211, 211, 211, 255]);
/// assert!(parse_color("chartreuse-ish").is_err());
/// ```
pub fn parse_color(value: &str) -> Result<Rgba<u8>, RenderError> {
    let invalid = || RenderError::InvalidColor {
        value: value.to_owned(),
    };
    let trimmed = value.trim().to_ascii_lowercase();

    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(invalid);
    }
    if let Some((function, args)) = split_function(&trimmed) {
        return parse_functional(function, args).ok_or_else(invalid);
    }
    NAMED_COLORS
        .binary_search_by(|(name, _)| name.cmp(&trimmed.as_str()))
        .ok()
        .and_then(|index| NAMED_COLORS.get(index))
        .map(|(_, hex)| {
            let [_, r, g, b] = hex.to_be_bytes();
            Rgba([r, g, b, 255])
        })
        .ok_or_else(invalid)
}

fn parse_hex(hex: &str) -> Option<Rgba<u8>> {
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    let digits: Vec<u8> = hex
        .chars()
        .filter_map(|ch| ch.to_digit(16))
        .filter_map(|digit| u8::try_from(digit).ok())
        .collect();
    let channels: Vec<u8> = match digits.len() {
        3 | 4 => digits.iter().map(|d| d * 17).collect(),
        6 | 8 => digits.chunks(2).map(|p| p[0] * 16 + p[1]).collect(),
        _ => return None,
    };
    match channels.as_slice() {
        [r, g, b] => Some(Rgba([*r, *g, *b, 255])),
        [r, g, b, a] => Some(Rgba([*r, *g, *b, *a])),
        _ => None,
    }
}

/// Splits `name(args)` into its name and argument list.
fn split_function(value: &str) -> Option<(&str, &str)> {
    let (name, rest) = value.split_once('(')?;
    let args = rest.strip_suffix(')')?;
    Some((name.trim_end(), args))
}

fn parse_functional(function: &str, args: &str) -> Option<Rgba<u8>> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    match (function, parts.as_slice()) {
        ("rgb", [r, g, b]) => parse_rgb([*r, *g, *b]),
        ("rgba", [r, g, b, a]) => Some(Rgba([
            r.parse().ok()?,
            g.parse().ok()?,
            b.parse().ok()?,
            a.parse().ok()?,
        ])),
        ("hsl", [h, s, l]) => {
            let [r, g, b] = hls_to_rgb(
                parse_number(h)? / 360.0,
                parse_percent(l)?,
                parse_percent(s)?,
            );
            Some(Rgba([to_channel(r), to_channel(g), to_channel(b), 255]))
        }
        ("hsv" | "hsb", [h, s, v]) => {
            let [r, g, b] = hsv_to_rgb(
                parse_number(h)? / 360.0,
                parse_percent(s)?,
                parse_percent(v)?,
            );
            Some(Rgba([to_channel(r), to_channel(g), to_channel(b), 255]))
        }
        _ => None,
    }
}

/// Channels are either all plain integers or all integer percentages.
fn parse_rgb(parts: [&str; 3]) -> Option<Rgba<u8>> {
    let mut channels = [0_u8; 3];
    if parts.iter().all(|part| part.ends_with('%')) {
        for (channel, part) in channels.iter_mut().zip(parts) {
            let percent: u16 = part.strip_suffix('%')?.parse().ok()?;
            *channel = u8::try_from((u32::from(percent) * 255 * 2 + 100) / 200).ok()?;
        }
    } else {
        for (channel, part) in channels.iter_mut().zip(parts) {
            *channel = part.parse().ok()?;
        }
    }
    let [r, g, b] = channels;
    Some(Rgba([r, g, b, 255]))
}

/// Parses an unsigned decimal such as `12` or `12.5`.
fn parse_number(text: &str) -> Option<f64> {
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
    let digits = |part: &str| part.chars().all(|ch| ch.is_ascii_digit());
    if whole.is_empty() || !digits(whole) || !digits(fraction) {
        return None;
    }
    text.parse().ok()
}

fn parse_percent(text: &str) -> Option<f64> {
    parse_number(text.strip_suffix('%')?).map(|value| value / 100.0)
}

fn hls_to_rgb(hue: f64, lightness: f64, saturation: f64) -> [f64; 3] {
    if saturation <= 0.0 {
        return [lightness; 3];
    }
    let high = if lightness <= 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let low = 2.0_f64.mul_add(lightness, -high);
    [
        hue_channel(low, high, hue + 1.0 / 3.0),
        hue_channel(low, high, hue),
        hue_channel(low, high, hue - 1.0 / 3.0),
    ]
}

fn hue_channel(low: f64, high: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        (high - low).mul_add(hue * 6.0, low)
    } else if hue < 0.5 {
        high
    } else if hue < 2.0 / 3.0 {
        (high - low).mul_add((2.0 / 3.0 - hue) * 6.0, low)
    } else {
        low
    }
}

fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> [f64; 3] {
    if saturation <= 0.0 {
        return [value; 3];
    }
    let scaled = hue * 6.0;
    let fraction = scaled - scaled.floor();
    let p = value * (1.0 - saturation);
    let q = value * saturation.mul_add(-fraction, 1.0);
    let t = value * saturation.mul_add(fraction - 1.0, 1.0);
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the sector is floored into 0..6"
    )]
    let sector = scaled.floor().rem_euclid(6.0) as u8;
    match sector {
        0 => [value, t, p],
        1 => [q, value, p],
        2 => [p, value, t],
        3 => [p, q, value],
        4 => [t, p, value],
        _ => [value, p, q],
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is clamped to the channel range first"
)]
fn to_channel(unit: f64) -> u8 {
    unit.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}
