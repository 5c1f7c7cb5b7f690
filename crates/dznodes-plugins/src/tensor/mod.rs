//! Conversion between host image tensors and `image` bitmaps.
//!
//! The host passes images as `[batch, height, width, channels]` arrays of
//! `f32` samples in `[0, 1]`. Nodes work on `image` bitmaps, so every image
//! crossing the node boundary goes through [`ImageTensor`].

use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use thiserror::Error;

/// Errors raised when a tensor cannot be built or converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TensorError {
    /// The sample buffer does not match the declared shape.
    #[error("tensor shape {shape:?} expects {expected} samples, got {actual}")]
    ShapeMismatch {
        /// Declared `[batch, height, width, channels]` shape.
        shape: [usize; 4],
        /// Number of samples implied by the shape.
        expected: usize,
        /// Number of samples supplied.
        actual: usize,
    },

    /// The shape's sample count does not fit in memory addresses.
    #[error("tensor shape {shape:?} overflows the sample count")]
    ShapeOverflow {
        /// Declared `[batch, height, width, channels]` shape.
        shape: [usize; 4],
    },

    /// The tensor holds no images.
    #[error("tensor batch is empty")]
    EmptyBatch,

    /// Only 1, 3 and 4 channel images convert to bitmaps.
    #[error("unsupported channel count {channels}")]
    UnsupportedChannels {
        /// Channel count found in the tensor.
        channels: usize,
    },

    /// A dimension does not fit in a bitmap.
    #[error("tensor dimension {value} exceeds bitmap limits")]
    DimensionOverflow {
        /// Offending dimension.
        value: usize,
    },
}

/// Batched image in the host's tensor layout.
///
/// # Example
///
/// ```
/// use dznodes_plugins::ImageTensor;
/// use image::{DynamicImage, RgbImage, Rgb};
///
/// let bitmap = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 2, Rgb([255, 0, 0])));
/// let tensor = ImageTensor::from_image(&bitmap);
/// assert_eq!(tensor.shape(), [1, 2, 4, 3]);
/// assert_eq!(tensor.to_image().expect("convert").width(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    shape: [usize; 4],
    data: Vec<f32>,
}

impl ImageTensor {
    /// Wraps `data` laid out as `shape`.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::ShapeOverflow`] when the product of the shape
    /// overflows and [`TensorError::ShapeMismatch`] when the buffer length
    /// differs from it.
    pub fn new(shape: [usize; 4], data: Vec<f32>) -> Result<Self, TensorError> {
        let expected = shape
            .iter()
            .try_fold(1_usize, |total, dim| total.checked_mul(*dim))
            .ok_or(TensorError::ShapeOverflow { shape })?;
        if data.len() != expected {
            return Err(TensorError::ShapeMismatch {
                shape,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Converts a bitmap into a single-image batch.
    ///
    /// Greyscale bitmaps keep one channel, RGB keeps three and everything else
    /// is widened to RGBA.
    #[must_use]
    pub fn from_image(image: &DynamicImage) -> Self {
        let (channels, bytes) = match image.color().channel_count() {
            1 => (1, image.to_luma8().into_raw()),
            3 => (3, image.to_rgb8().into_raw()),
            _ => (4, image.to_rgba8().into_raw()),
        };
        let data = bytes
            .into_iter()
            .map(|sample| f32::from(sample) / 255.0)
            .collect();
        Self {
            shape: [1, image.height() as usize, image.width() as usize, channels],
            data,
        }
    }

    /// Converts the first image of the batch into a bitmap.
    ///
    /// Samples are scaled by 255, clipped to `[0, 255]` and truncated.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty batch, an unsupported channel count or
    /// dimensions beyond `u32`.
    pub fn to_image(&self) -> Result<DynamicImage, TensorError> {
        let [batch, height, width, channels] = self.shape;
        if batch == 0 {
            return Err(TensorError::EmptyBatch);
        }
        let frame_len = height * width * channels;
        let frame = self.data.get(..frame_len).ok_or(TensorError::ShapeMismatch {
            shape: self.shape,
            expected: frame_len,
            actual: self.data.len(),
        })?;
        let bytes: Vec<u8> = frame.iter().copied().map(to_byte).collect();
        let (w, h) = (dimension(width)?, dimension(height)?);

        let image = match channels {
            1 => GrayImage::from_raw(w, h, bytes).map(DynamicImage::ImageLuma8),
            3 => RgbImage::from_raw(w, h, bytes).map(DynamicImage::ImageRgb8),
            4 => RgbaImage::from_raw(w, h, bytes).map(DynamicImage::ImageRgba8),
            other => return Err(TensorError::UnsupportedChannels { channels: other }),
        };
        image.ok_or(TensorError::ShapeMismatch {
            shape: self.shape,
            expected: frame_len,
            actual: self.data.len(),
        })
    }

    /// Returns the `[batch, height, width, channels]` shape.
    #[must_use]
    pub const fn shape(&self) -> [usize; 4] {
        self.shape
    }

    /// Returns the number of images in the batch.
    #[must_use]
    pub const fn batch(&self) -> usize {
        self.shape[0]
    }

    /// Returns the raw samples.
    #[must_use]
    pub fn data(&self) -> &[f32] {
        &self.data
    }
}

/// Composites `image` over an opaque white canvas using its alpha channel.
///
/// Masks arrive either as white-background bitmaps or as cut-outs with
/// transparency; flattening both onto white gives the renderer one form.
#[must_use]
pub fn white_background(image: &DynamicImage) -> RgbImage {
    let rgba = image.to_rgba8();
    let mut out = RgbImage::new(rgba.width(), rgba.height());
    for (src, dst) in rgba.pixels().zip(out.pixels_mut()) {
        let [r, g, b, a] = src.0;
        let alpha = u16::from(a);
        let blend = |channel: u8| -> u8 {
            let mixed = (u16::from(channel) * alpha + 255 * (255 - alpha) + 127) / 255;
            u8::try_from(mixed).unwrap_or(u8::MAX)
        };
        dst.0 = [blend(r), blend(g), blend(b)];
    }
    out
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to the u8 range before casting"
)]
fn to_byte(sample: f32) -> u8 {
    (sample * 255.0).clamp(0.0, 255.0) as u8
}

fn dimension(value: usize) -> Result<u32, TensorError> {
    u32::try_from(value).map_err(|_| TensorError::DimensionOverflow { value })
}
