//! Pack load orchestration.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use dznodes_config::{PackConfig, bundled_font_dir};
use dznodes_plugins::{NodeError, NodeFactory, NodeOutput, NodeRegistry, RawInputs};
use dznodes_wordcloud::{
    CloudRenderer, CosmicRasterizerFactory, FontRegistry, JiebaSegmenter, LayoutRenderer, Segmenter,
};
use ortho_config::OrthoError;
use thiserror::Error;

use crate::assets::{AssetSync, AssetSyncReport};
use crate::nodes::{self, WordCloudResources};
use crate::reporter::{LoadReporter, StructuredLoadReporter};
use crate::telemetry::{self, TelemetryError, TelemetryHandle};

/// Trait abstracting configuration loading for testability.
pub trait ConfigLoader: Send + Sync {
    /// Loads the pack configuration.
    ///
    /// # Errors
    ///
    /// Returns the loader error when configuration sources cannot be parsed.
    fn load(&self) -> Result<PackConfig, Arc<OrthoError>>;
}

/// Loader that delegates to [`PackConfig::load_embedded`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemConfigLoader;

impl ConfigLoader for SystemConfigLoader {
    fn load(&self) -> Result<PackConfig, Arc<OrthoError>> {
        PackConfig::load_embedded()
    }
}

/// Loader returning a fixed configuration.
#[derive(Debug, Clone)]
pub struct StaticConfigLoader {
    config: PackConfig,
}

impl StaticConfigLoader {
    /// Wraps `config`.
    #[must_use]
    pub const fn new(config: PackConfig) -> Self {
        Self { config }
    }
}

impl ConfigLoader for StaticConfigLoader {
    fn load(&self) -> Result<PackConfig, Arc<OrthoError>> {
        Ok(self.config.clone())
    }
}

/// Errors surfaced while loading the pack.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Configuration failed to load.
    #[error("failed to load configuration: {source}")]
    Configuration {
        /// Underlying loader error.
        #[source]
        source: Arc<OrthoError>,
    },
    /// Telemetry initialisation failed.
    #[error("failed to initialise telemetry: {source}")]
    Telemetry {
        /// Underlying telemetry error.
        #[source]
        source: TelemetryError,
    },
    /// A node could not be registered.
    #[error("failed to register nodes: {source}")]
    Registration {
        /// Underlying registry error.
        #[source]
        source: NodeError,
    },
}

/// Segmenter and renderer handed to the word-cloud node.
#[derive(Clone)]
pub struct PackServices {
    segmenter: Arc<dyn Segmenter + Send + Sync>,
    renderer: Arc<dyn CloudRenderer>,
}

impl PackServices {
    /// Bundles custom collaborators.
    #[must_use]
    pub fn new(
        segmenter: Arc<dyn Segmenter + Send + Sync>,
        renderer: Arc<dyn CloudRenderer>,
    ) -> Self {
        Self {
            segmenter,
            renderer,
        }
    }
}

impl Default for PackServices {
    /// `jieba` segmentation and the built-in layout renderer.
    fn default() -> Self {
        Self::new(
            Arc::new(JiebaSegmenter::new()),
            Arc::new(LayoutRenderer::new(CosmicRasterizerFactory)),
        )
    }
}

impl fmt::Debug for PackServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackServices").finish_non_exhaustive()
    }
}

/// The loaded pack: configuration, fonts and registered nodes.
pub struct NodePack {
    config: PackConfig,
    fonts: Arc<FontRegistry>,
    registry: NodeRegistry,
    assets: Option<AssetSyncReport>,
    telemetry: TelemetryHandle,
    reporter: Arc<dyn LoadReporter>,
}

impl NodePack {
    /// Loads the pack with system configuration and structured reporting.
    ///
    /// # Errors
    ///
    /// See [`NodePack::load_with`].
    pub fn load() -> Result<Self, BootstrapError> {
        Self::load_with(&SystemConfigLoader, Arc::new(StructuredLoadReporter::new()))
    }

    /// Loads the pack using the supplied collaborators and default services.
    ///
    /// # Errors
    ///
    /// See [`NodePack::load_with_services`].
    pub fn load_with(
        loader: &dyn ConfigLoader,
        reporter: Arc<dyn LoadReporter>,
    ) -> Result<Self, BootstrapError> {
        Self::load_with_services(loader, reporter, PackServices::default())
    }

    /// Loads configuration, initialises telemetry, synchronises web assets,
    /// discovers fonts and registers every node.
    ///
    /// Asset synchronisation failures are reported and tolerated. A host that
    /// already installed a global tracing subscriber keeps it.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError`] when configuration cannot be loaded, the
    /// log filter is malformed or a node fails to register.
    pub fn load_with_services(
        loader: &dyn ConfigLoader,
        reporter: Arc<dyn LoadReporter>,
        services: PackServices,
    ) -> Result<Self, BootstrapError> {
        reporter.load_starting();

        let config = match loader.load() {
            Ok(config) => config,
            Err(source) => return Err(fail(&*reporter, BootstrapError::Configuration { source })),
        };

        let telemetry = match telemetry::initialise(&config) {
            Ok(handle) => handle,
            Err(source) => return Err(fail(&*reporter, BootstrapError::Telemetry { source })),
        };

        let sync = AssetSync::new(config.bundled_web_dir(), config.web_extensions_dir());
        let assets = match sync.run() {
            Ok(report) => {
                reporter.assets_synced(&report);
                Some(report)
            }
            Err(error) => {
                reporter.asset_sync_failed(&error);
                None
            }
        };

        let font_dir = config.font_directory();
        let bundled = bundled_font_dir(&config.pack_root());
        let fonts = Arc::new(FontRegistry::discover(font_dir.path(), &bundled));
        reporter.fonts_discovered(&fonts);

        let PackServices {
            segmenter,
            renderer,
        } = services;
        let resources = WordCloudResources::new(Arc::clone(&fonts), segmenter, renderer)
            .with_keynote_strategy(config.keynote_strategy());
        let mut registry = NodeRegistry::new();
        for provider in nodes::providers(&resources) {
            if let Err(source) = registry.register_provider(provider.as_ref()) {
                return Err(fail(&*reporter, BootstrapError::Registration { source }));
            }
        }
        reporter.nodes_registered(&registry);

        Ok(Self {
            config,
            fonts,
            registry,
            assets,
            telemetry,
            reporter,
        })
    }

    /// Resolved configuration.
    #[must_use]
    pub const fn config(&self) -> &PackConfig {
        &self.config
    }

    /// Discovered fonts.
    #[must_use]
    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    /// Registered nodes.
    #[must_use]
    pub const fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    /// Outcome of asset synchronisation; `None` when it failed.
    #[must_use]
    pub const fn asset_report(&self) -> Option<&AssetSyncReport> {
        self.assets.as_ref()
    }

    /// Which side owns the global log subscriber.
    #[must_use]
    pub const fn telemetry(&self) -> TelemetryHandle {
        self.telemetry
    }

    /// Node id to factory mapping exported to the host.
    #[must_use]
    pub fn class_mappings(&self) -> BTreeMap<&str, NodeFactory> {
        self.registry.class_mappings()
    }

    /// Node id to display name mapping exported to the host.
    #[must_use]
    pub fn display_name_mappings(&self) -> BTreeMap<&str, &str> {
        self.registry.display_name_mappings()
    }

    /// Object-info JSON for every node.
    #[must_use]
    pub fn object_info(&self) -> serde_json::Value {
        self.registry.object_info()
    }

    /// Resolves `raw` against node `id`'s schema and executes it.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::NotFound`] for unknown ids, input errors from
    /// schema resolution and execution errors from the node.
    pub fn execute(&self, id: &str, raw: RawInputs) -> Result<NodeOutput, NodeError> {
        let result = self.registry.execute(id, raw);
        if let Err(error) = &result {
            self.reporter.node_failed(id, error);
        }
        result
    }
}

impl fmt::Debug for NodePack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodePack")
            .field("config", &self.config)
            .field("fonts", &self.fonts)
            .field("registry", &self.registry)
            .field("assets", &self.assets)
            .finish_non_exhaustive()
    }
}

fn fail(reporter: &dyn LoadReporter, error: BootstrapError) -> BootstrapError {
    reporter.load_failed(&error);
    error
}
