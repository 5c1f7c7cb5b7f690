//! Structured reporting of pack load lifecycle events.

use std::sync::Arc;

use dznodes_plugins::{NodeError, NodeRegistry};
use dznodes_wordcloud::FontRegistry;

use crate::assets::{AssetSyncError, AssetSyncReport};
use crate::bootstrap::BootstrapError;

/// Observer trait used to surface load events to telemetry sinks.
pub trait LoadReporter: Send + Sync {
    /// Invoked before configuration loading begins.
    fn load_starting(&self);

    /// Invoked after web assets were synchronised.
    fn assets_synced(&self, report: &AssetSyncReport);

    /// Invoked when asset synchronisation failed; loading continues.
    fn asset_sync_failed(&self, error: &AssetSyncError);

    /// Invoked after the font directory was scanned.
    fn fonts_discovered(&self, fonts: &FontRegistry);

    /// Invoked once every node is registered.
    fn nodes_registered(&self, registry: &NodeRegistry);

    /// Invoked when loading fails.
    fn load_failed(&self, error: &BootstrapError);

    /// Invoked when a node execution through the pack fails.
    fn node_failed(&self, id: &str, error: &NodeError);
}

impl<T> LoadReporter for Arc<T>
where
    T: LoadReporter,
{
    fn load_starting(&self) {
        (**self).load_starting();
    }

    fn assets_synced(&self, report: &AssetSyncReport) {
        (**self).assets_synced(report);
    }

    fn asset_sync_failed(&self, error: &AssetSyncError) {
        (**self).asset_sync_failed(error);
    }

    fn fonts_discovered(&self, fonts: &FontRegistry) {
        (**self).fonts_discovered(fonts);
    }

    fn nodes_registered(&self, registry: &NodeRegistry) {
        (**self).nodes_registered(registry);
    }

    fn load_failed(&self, error: &BootstrapError) {
        (**self).load_failed(error);
    }

    fn node_failed(&self, id: &str, error: &NodeError) {
        (**self).node_failed(id, error);
    }
}

/// Default reporter that records load events using `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuredLoadReporter;

impl StructuredLoadReporter {
    /// Builds a new reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LoadReporter for StructuredLoadReporter {
    fn load_starting(&self) {
        tracing::info!(
            target: "dznodes::load",
            event = "load_starting",
            "loading dzNodes pack"
        );
    }

    fn assets_synced(&self, report: &AssetSyncReport) {
        tracing::info!(
            target: "dznodes::load",
            event = "assets_synced",
            created_destination = report.created_destination,
            removed = report.removed.len(),
            copied = report.copied.len(),
            unchanged = report.unchanged,
            "web assets synchronised"
        );
    }

    fn asset_sync_failed(&self, error: &AssetSyncError) {
        tracing::warn!(
            target: "dznodes::load",
            event = "asset_sync_failed",
            error = %error,
            "web asset synchronisation failed"
        );
    }

    fn fonts_discovered(&self, fonts: &FontRegistry) {
        tracing::info!(
            target: "dznodes::load",
            event = "fonts_discovered",
            count = fonts.len(),
            dir = %fonts.dir(),
            "fonts discovered"
        );
    }

    fn nodes_registered(&self, registry: &NodeRegistry) {
        tracing::info!(
            target: "dznodes::load",
            event = "nodes_registered",
            count = registry.len(),
            nodes = ?registry.ids(),
            "nodes registered"
        );
    }

    fn load_failed(&self, error: &BootstrapError) {
        tracing::error!(
            target: "dznodes::load",
            event = "load_failed",
            error = %error,
            "dzNodes pack failed to load"
        );
    }

    fn node_failed(&self, id: &str, error: &NodeError) {
        tracing::error!(
            target: "dznodes::load",
            event = "node_failed",
            node = id,
            error = %error,
            "node execution failed"
        );
    }
}
