//! Shared configuration for the dzNodes word-cloud pack.
//!
//! Settings are layered by `ortho_config`: built-in defaults, then an
//! optional configuration file, then `DZNODES_*` environment variables. The
//! pack runs inside a host process whose argv belongs to the host, so
//! [`PackConfig::load_embedded`] feeds the loader a synthetic program name
//! instead of the real command line.

mod defaults;
mod font_dir;
mod keynote;
mod logging;

use std::ffi::OsString;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use ortho_config::{OrthoConfig, OrthoError};
use serde::{Deserialize, Serialize};

pub use defaults::{
    BUNDLED_FONT_DIR, BUNDLED_WEB_DIR, DEFAULT_LOG_FILTER, FONT_DIR_INI, WEB_EXTENSIONS_SUBDIR,
    default_keynote_strategy, default_log_color, default_log_filter, default_log_filter_string,
    default_log_format, default_pack_root, default_web_extensions_dir,
};
pub use font_dir::{FontDirSource, FontDirectory, bundled_font_dir, resolve_font_dir};
pub use keynote::{KeynoteStrategy, KeynoteStrategyParseError};
pub use logging::{LogColor, LogFormat};

/// Program name handed to the loader in place of the host's argv.
const PROGRAM_NAME: &str = "dznodes";

/// Configuration shared by every node in the pack.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, OrthoConfig)]
#[ortho_config(prefix = "DZNODES")]
pub struct PackConfig {
    /// `tracing` filter expression.
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,
    /// Output format for log lines.
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
    /// Colour policy for human-readable log lines.
    #[ortho_config(default = default_log_color())]
    pub log_color: LogColor,
    /// Directory holding `font/`, `font_dir.ini` and `web/`.
    pub pack_root: Option<Utf8PathBuf>,
    /// Destination for bundled web assets inside the host's web tree.
    pub web_extensions_dir: Option<Utf8PathBuf>,
    /// How keynote weights sample the frequency maximum.
    #[ortho_config(default = default_keynote_strategy())]
    pub keynote_strategy: KeynoteStrategy,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            log_color: default_log_color(),
            pack_root: None,
            web_extensions_dir: None,
            keynote_strategy: default_keynote_strategy(),
        }
    }
}

impl PackConfig {
    /// Loads configuration from defaults, files and the environment.
    ///
    /// # Errors
    ///
    /// Returns the loader error when a configuration file or environment
    /// variable cannot be parsed.
    pub fn load_embedded() -> Result<Self, Arc<OrthoError>> {
        Self::load_from_iter([OsString::from(PROGRAM_NAME)])
    }

    /// Returns the configured log filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Returns the configured log format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Returns the colour policy for log lines.
    #[must_use]
    pub const fn log_color(&self) -> LogColor {
        self.log_color
    }

    /// Returns the keynote weighting strategy.
    #[must_use]
    pub const fn keynote_strategy(&self) -> KeynoteStrategy {
        self.keynote_strategy
    }

    /// Directory containing the pack's bundled resources.
    #[must_use]
    pub fn pack_root(&self) -> Utf8PathBuf {
        self.pack_root.clone().unwrap_or_else(default_pack_root)
    }

    /// Bundled web asset directory under the pack root.
    #[must_use]
    pub fn bundled_web_dir(&self) -> Utf8PathBuf {
        self.pack_root().join(BUNDLED_WEB_DIR)
    }

    /// Destination directory for asset sync.
    #[must_use]
    pub fn web_extensions_dir(&self) -> Utf8PathBuf {
        self.web_extensions_dir
            .clone()
            .unwrap_or_else(|| default_web_extensions_dir(Utf8Path::new(".")))
    }

    /// Resolves the font directory, honouring `font_dir.ini`.
    #[must_use]
    pub fn font_directory(&self) -> FontDirectory {
        resolve_font_dir(&self.pack_root())
    }
}
