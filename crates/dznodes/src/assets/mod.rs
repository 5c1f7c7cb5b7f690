//! Synchronises bundled web assets into the host's extension directory.
//!
//! The host serves browser-side scripts from its own web tree, so the pack
//! copies its bundled assets there when it loads. Files are compared by
//! SHA-256 digest; only new or changed files are copied, and a fixed list
//! of obsolete file names is removed first.

use std::fs;
use std::io;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Asset names shipped by earlier releases that must not linger.
pub const OBSOLETE_ASSETS: [&str; 2] = ["wordcloud.js", "dzNodes.js"];

/// Errors raised while synchronising assets.
#[derive(Debug, Clone, Error)]
pub enum AssetSyncError {
    /// The destination directory could not be created.
    #[error("failed to create asset directory '{path}': {source}")]
    CreateDestination {
        /// Destination directory.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<io::Error>,
    },
    /// A directory could not be listed.
    #[error("failed to list assets in '{path}': {source}")]
    List {
        /// Directory that was listed.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<io::Error>,
    },
    /// A file could not be hashed.
    #[error("failed to read asset '{path}': {source}")]
    Read {
        /// File that was read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<io::Error>,
    },
    /// A stale or obsolete file could not be removed.
    #[error("failed to remove asset '{path}': {source}")]
    Remove {
        /// File that was removed.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<io::Error>,
    },
    /// A file could not be copied.
    #[error("failed to copy asset '{from}' to '{to}': {source}")]
    Copy {
        /// Source file.
        from: Utf8PathBuf,
        /// Destination file.
        to: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<io::Error>,
    },
}

/// Outcome of an asset synchronisation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetSyncReport {
    /// Whether the destination directory had to be created.
    pub created_destination: bool,
    /// Obsolete file names removed from the destination.
    pub removed: Vec<String>,
    /// File names copied because they were new or changed.
    pub copied: Vec<String>,
    /// Number of source files already up to date.
    pub unchanged: usize,
}

impl AssetSyncReport {
    /// Returns `true` when the destination was modified.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.created_destination || !self.removed.is_empty() || !self.copied.is_empty()
    }
}

/// Copies new and changed files from `source` into `destination`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSync {
    source: Utf8PathBuf,
    destination: Utf8PathBuf,
    obsolete: Vec<String>,
}

impl AssetSync {
    /// Creates a sync removing [`OBSOLETE_ASSETS`] from `destination`.
    #[must_use]
    pub fn new(source: impl Into<Utf8PathBuf>, destination: impl Into<Utf8PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            obsolete: OBSOLETE_ASSETS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Replaces the obsolete file names.
    #[must_use]
    pub fn with_obsolete<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.obsolete = names.into_iter().map(Into::into).collect();
        self
    }

    /// Bundled asset directory.
    #[must_use]
    pub fn source(&self) -> &Utf8Path {
        &self.source
    }

    /// Host extension directory.
    #[must_use]
    pub fn destination(&self) -> &Utf8Path {
        &self.destination
    }

    /// Runs the synchronisation.
    ///
    /// # Errors
    ///
    /// Returns the first filesystem failure. Files handled before the failure
    /// stay in place.
    pub fn run(&self) -> Result<AssetSyncReport, AssetSyncError> {
        let mut report = AssetSyncReport::default();

        if !self.destination.is_dir() {
            tracing::info!(
                target: "dznodes::assets",
                destination = %self.destination,
                "creating web extensions directory"
            );
            fs::create_dir_all(&self.destination).map_err(|source| {
                AssetSyncError::CreateDestination {
                    path: self.destination.clone(),
                    source: Arc::new(source),
                }
            })?;
            report.created_destination = true;
        }

        for name in &self.obsolete {
            let path = self.destination.join(name);
            if !path.is_file() {
                continue;
            }
            remove(&path)?;
            tracing::info!(target: "dznodes::assets", file = %name, "removed obsolete asset");
            report.removed.push(name.clone());
        }

        let pending = self.pending(&mut report)?;
        if !pending.is_empty() {
            tracing::info!(
                target: "dznodes::assets",
                count = pending.len(),
                "update to web assets detected"
            );
        }
        for name in pending {
            let from = self.source.join(&name);
            let to = self.destination.join(&name);
            if to.exists() {
                remove(&to)?;
            }
            tracing::info!(
                target: "dznodes::assets",
                file = %name,
                destination = %self.destination,
                "copying asset"
            );
            fs::copy(&from, &to).map_err(|source| AssetSyncError::Copy {
                from,
                to,
                source: Arc::new(source),
            })?;
            report.copied.push(name);
        }

        Ok(report)
    }

    /// Names of source files that are missing from, or differ in, the
    /// destination.
    fn pending(&self, report: &mut AssetSyncReport) -> Result<Vec<String>, AssetSyncError> {
        let mut pending = Vec::new();
        for name in list_files(&self.source)? {
            let target = self.destination.join(&name);
            if target.is_file() && digest(&self.source.join(&name))? == digest(&target)? {
                report.unchanged += 1;
            } else {
                pending.push(name);
            }
        }
        Ok(pending)
    }
}

fn list_files(dir: &Utf8Path) -> Result<Vec<String>, AssetSyncError> {
    let list_error = |source: io::Error| AssetSyncError::List {
        path: dir.to_path_buf(),
        source: Arc::new(source),
    };
    let mut names = Vec::new();
    for entry in dir.read_dir_utf8().map_err(list_error)? {
        let entry = entry.map_err(list_error)?;
        if entry.file_type().map_err(list_error)?.is_file() {
            names.push(entry.file_name().to_owned());
        }
    }
    names.sort();
    Ok(names)
}

fn digest(path: &Utf8Path) -> Result<[u8; 32], AssetSyncError> {
    let read_error = |source: io::Error| AssetSyncError::Read {
        path: path.to_path_buf(),
        source: Arc::new(source),
    };
    let mut file = fs::File::open(path).map_err(read_error)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher).map_err(read_error)?;
    Ok(hasher.finalize().into())
}

fn remove(path: &Utf8Path) -> Result<(), AssetSyncError> {
    fs::remove_file(path).map_err(|source| AssetSyncError::Remove {
        path: path.to_path_buf(),
        source: Arc::new(source),
    })
}
