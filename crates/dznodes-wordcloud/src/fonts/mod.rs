//! Font discovery and resolution.
//!
//! The registry is built once at pack load from the resolved font directory
//! and shared read-only by every word-cloud node. Lookups never fail: an
//! unknown name or a file that has since disappeared resolves to the bundled
//! default font.

use std::collections::BTreeMap;
use std::fs;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::FontError;

/// File name of the font used when a selection cannot be honoured.
pub const DEFAULT_FONT: &str = "Alibaba-PuHuiTi-Heavy.ttf";

const FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

/// Font file chosen for a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFont {
    path: Utf8PathBuf,
    fallback: bool,
}

impl ResolvedFont {
    /// Path of the font file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Returns `true` when the bundled default replaced the selection.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.fallback
    }
}

/// Fonts available to the word-cloud node, keyed by file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontRegistry {
    dir: Utf8PathBuf,
    bundled_dir: Utf8PathBuf,
    fonts: BTreeMap<String, Utf8PathBuf>,
}

impl FontRegistry {
    /// Scans `dir` for fonts, falling back to `bundled_dir` at lookup time.
    ///
    /// A directory that cannot be listed yields an empty registry and a
    /// warning.
    #[must_use]
    pub fn discover(dir: &Utf8Path, bundled_dir: &Utf8Path) -> Self {
        let fonts = match scan(dir) {
            Ok(fonts) => fonts,
            Err(error) => {
                tracing::warn!(
                    target: "dznodes::fonts",
                    error = %error,
                    "font directory could not be scanned"
                );
                BTreeMap::new()
            }
        };
        tracing::info!(
            target: "dznodes::fonts",
            count = fonts.len(),
            dir = %dir,
            "fonts discovered"
        );
        Self {
            dir: dir.to_path_buf(),
            bundled_dir: bundled_dir.to_path_buf(),
            fonts,
        }
    }

    /// Directory that was scanned.
    #[must_use]
    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    /// Font file names in sorted order.
    #[must_use]
    pub fn font_names(&self) -> Vec<&str> {
        self.fonts.keys().map(String::as_str).collect()
    }

    /// Number of discovered fonts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Returns `true` when no font was discovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Path of the bundled default font.
    #[must_use]
    pub fn default_font(&self) -> Utf8PathBuf {
        self.bundled_dir.join(DEFAULT_FONT)
    }

    /// Resolves a font name to a file, falling back to the bundled default.
    #[must_use]
    pub fn resolve(&self, name: &str) -> ResolvedFont {
        match self.fonts.get(name).filter(|path| path.is_file()) {
            Some(path) => {
                tracing::info!(target: "dznodes::fonts", font = %path, "font selected");
                ResolvedFont {
                    path: path.clone(),
                    fallback: false,
                }
            }
            None => {
                let path = self.default_font();
                tracing::warn!(
                    target: "dznodes::fonts",
                    requested = name,
                    font = %path,
                    "font not found, using default"
                );
                ResolvedFont {
                    path,
                    fallback: true,
                }
            }
        }
    }
}

/// Lists `*.ttf` and `*.otf` files directly inside `dir`.
///
/// # Errors
///
/// Returns [`FontError::Scan`] when the directory cannot be read.
pub fn scan(dir: &Utf8Path) -> Result<BTreeMap<String, Utf8PathBuf>, FontError> {
    let entries = dir.read_dir_utf8().map_err(|source| FontError::Scan {
        dir: dir.to_path_buf(),
        source: Arc::new(source),
    })?;
    let mut fonts = BTreeMap::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                tracing::debug!(
                    target: "dznodes::fonts",
                    error = %error,
                    "skipping unreadable directory entry"
                );
                continue;
            }
        };
        let path = entry.path();
        let is_font = path.extension().is_some_and(|ext| {
            FONT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        });
        if is_font && fs::metadata(path).is_ok_and(|meta| meta.is_file()) {
            fonts.insert(entry.file_name().to_owned(), path.to_path_buf());
        }
    }
    Ok(fonts)
}
