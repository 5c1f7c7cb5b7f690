//! Errors raised while building frequencies and rendering clouds.

use std::io;
use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised by the renderer.
///
/// These cover malformed rendering parameters and font loading. Every one of
/// them propagates out of the word-cloud node to the host.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    /// The colour map name is not in the built-in table.
    #[error("unknown colormap '{name}'")]
    UnknownColormap {
        /// Requested name.
        name: String,
    },

    /// A colour string could not be parsed.
    #[error("invalid colour '{value}'")]
    InvalidColor {
        /// Offending string.
        value: String,
    },

    /// A numeric parameter is out of range or inconsistent.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the violation.
        message: String,
    },

    /// The font file could not be read.
    #[error("failed to load font '{path}': {source}")]
    FontLoad {
        /// Font file path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<io::Error>,
    },

    /// The font file held no usable face.
    #[error("font '{path}' contains no usable face")]
    EmptyFont {
        /// Font file path.
        path: Utf8PathBuf,
    },

    /// No word had a positive weight.
    #[error("cannot render a word cloud without frequencies")]
    EmptyFrequencies,
}

impl RenderError {
    pub(crate) fn parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}

/// Errors raised while scanning a font directory.
#[derive(Debug, Clone, Error)]
pub enum FontError {
    /// The directory could not be listed.
    #[error("failed to scan font directory '{dir}': {source}")]
    Scan {
        /// Directory that was scanned.
        dir: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<io::Error>,
    },
}
