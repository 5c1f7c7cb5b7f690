use camino::{Utf8Path, Utf8PathBuf};

use crate::keynote::KeynoteStrategy;
use crate::logging::{LogColor, LogFormat};

/// Default log filter expression used by the pack.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Directory, relative to the pack root, holding the bundled fonts.
pub const BUNDLED_FONT_DIR: &str = "font";

/// File, relative to the pack root, that may override the font directory.
pub const FONT_DIR_INI: &str = "font_dir.ini";

/// Directory, relative to the pack root, holding the bundled web assets.
pub const BUNDLED_WEB_DIR: &str = "web";

/// Path, relative to the host root, where the pack's web assets are synced.
pub const WEB_EXTENSIONS_SUBDIR: &str = "web/extensions/dzNodes";

/// Default log filter expression used by the pack.
#[must_use]
pub fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the pack.
#[must_use]
pub fn default_log_format() -> LogFormat {
    LogFormat::Json
}

/// Default colour policy for human-readable log lines.
#[must_use]
pub fn default_log_color() -> LogColor {
    LogColor::Auto
}

/// Default keynote weighting strategy.
#[must_use]
pub fn default_keynote_strategy() -> KeynoteStrategy {
    KeynoteStrategy::MaxOnce
}

/// Pack root used when none is configured.
///
/// This is the directory the pack is installed in, two levels above this
/// crate's manifest. The working directory is used if that cannot be
/// derived.
#[must_use]
pub fn default_pack_root() -> Utf8PathBuf {
    Utf8Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map_or_else(|| Utf8PathBuf::from("."), Utf8Path::to_path_buf)
}

/// Asset sync destination derived from the host root.
#[must_use]
pub fn default_web_extensions_dir(host_root: &Utf8Path) -> Utf8PathBuf {
    host_root.join(WEB_EXTENSIONS_SUBDIR)
}
