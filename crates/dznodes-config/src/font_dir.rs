//! Resolution of the font directory from the optional `font_dir.ini`.
//!
//! The ini file holds a single `key=path` line. Everything after the first
//! `=` (or the whole file when no `=` is present) is trimmed and used as the
//! directory, provided it exists. Any other outcome falls back to the bundled
//! `font/` directory under the pack root.

use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};

use crate::defaults::{BUNDLED_FONT_DIR, FONT_DIR_INI};

/// Where the resolved font directory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontDirSource {
    /// The bundled `font/` directory under the pack root.
    Bundled,
    /// A directory named by `font_dir.ini`.
    Override,
}

/// Font directory chosen for discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDirectory {
    path: Utf8PathBuf,
    source: FontDirSource,
}

impl FontDirectory {
    /// Directory that should be scanned for fonts.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Whether the directory came from the ini override.
    #[must_use]
    pub const fn source(&self) -> FontDirSource {
        self.source
    }
}

/// Returns the bundled font directory under `pack_root`.
#[must_use]
pub fn bundled_font_dir(pack_root: &Utf8Path) -> Utf8PathBuf {
    pack_root.join(BUNDLED_FONT_DIR)
}

/// Resolves the font directory for `pack_root`, honouring `font_dir.ini`.
///
/// Never fails: a missing or unreadable ini file, or an override naming a
/// directory that does not exist, yields the bundled directory and a log line.
#[must_use]
pub fn resolve_font_dir(pack_root: &Utf8Path) -> FontDirectory {
    let bundled = FontDirectory {
        path: bundled_font_dir(pack_root),
        source: FontDirSource::Bundled,
    };
    let ini_path = pack_root.join(FONT_DIR_INI);

    let contents = match fs::read_to_string(&ini_path) {
        Ok(contents) => contents,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(
                target: "dznodes::config",
                ini = %ini_path,
                "no font directory override present"
            );
            return bundled;
        }
        Err(error) => {
            tracing::warn!(
                target: "dznodes::config",
                ini = %ini_path,
                error = %error,
                "failed to read font directory override, default to be used"
            );
            return bundled;
        }
    };

    let candidate = Utf8PathBuf::from(override_value(&contents));
    if candidate.as_str().is_empty() || !candidate.exists() {
        tracing::warn!(
            target: "dznodes::config",
            ini = %ini_path,
            dir = %candidate,
            "invalid font directory, default to be used"
        );
        return bundled;
    }

    FontDirectory {
        path: candidate,
        source: FontDirSource::Override,
    }
}

fn override_value(contents: &str) -> &str {
    contents
        .split_once('=')
        .map_or(contents, |(_, value)| value)
        .trim()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::override_value;

    #[rstest]
    #[case::key_value("font_dir=/usr/share/fonts\n", "/usr/share/fonts")]
    #[case::padded("dir =   C:\\Fonts  \r\n", "C:\\Fonts")]
    #[case::no_key("/opt/fonts", "/opt/fonts")]
    #[case::first_equals_only("dir=/a=b", "/a=b")]
    #[case::empty_value("dir=", "")]
    fn extracts_text_after_first_equals(#[case] contents: &str, #[case] expected: &str) {
        assert_eq!(override_value(contents), expected);
    }
}
