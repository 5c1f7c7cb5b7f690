//! Unit tests for pack loading.

use std::ffi::OsString;
use std::fs;
use std::sync::{Arc, Mutex};

use camino::Utf8PathBuf;
use dznodes_config::PackConfig;
use dznodes_plugins::{NodeError, NodeRegistry, NodeValue, RawInputs};
use dznodes_wordcloud::{
    CosmicRasterizerFactory, FontRegistry, LayoutRenderer, WhitespaceSegmenter,
};
use ortho_config::{OrthoConfig, OrthoError};
use rstest::{fixture, rstest};
use tempfile::TempDir;

use crate::{
    AssetSyncError, AssetSyncReport, BootstrapError, ConfigLoader, LoadReporter, NodePack,
    PackServices, StaticConfigLoader, telemetry,
};

/// Load events tracked during a test.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LoadEvent {
    Starting,
    AssetsSynced { copied: usize },
    AssetSyncFailed,
    FontsDiscovered(usize),
    NodesRegistered(usize),
    Failed(String),
    NodeFailed(String),
}

/// Records load events for assertions.
#[derive(Default)]
struct RecordingLoadReporter {
    events: Mutex<Vec<LoadEvent>>,
}

impl RecordingLoadReporter {
    fn events(&self) -> Vec<LoadEvent> {
        self.events.lock().expect("reporter mutex poisoned").clone()
    }

    fn record(&self, event: LoadEvent) {
        self.events.lock().expect("reporter mutex poisoned").push(event);
    }
}

impl LoadReporter for RecordingLoadReporter {
    fn load_starting(&self) {
        self.record(LoadEvent::Starting);
    }

    fn assets_synced(&self, report: &AssetSyncReport) {
        self.record(LoadEvent::AssetsSynced {
            copied: report.copied.len(),
        });
    }

    fn asset_sync_failed(&self, _error: &AssetSyncError) {
        self.record(LoadEvent::AssetSyncFailed);
    }

    fn fonts_discovered(&self, fonts: &FontRegistry) {
        self.record(LoadEvent::FontsDiscovered(fonts.len()));
    }

    fn nodes_registered(&self, registry: &NodeRegistry) {
        self.record(LoadEvent::NodesRegistered(registry.len()));
    }

    fn load_failed(&self, error: &BootstrapError) {
        self.record(LoadEvent::Failed(error.to_string()));
    }

    fn node_failed(&self, id: &str, _error: &NodeError) {
        self.record(LoadEvent::NodeFailed(id.to_owned()));
    }
}

/// Loader that fails by passing an unknown command-line flag.
struct FailingConfigLoader;

impl ConfigLoader for FailingConfigLoader {
    fn load(&self) -> Result<PackConfig, Arc<OrthoError>> {
        PackConfig::load_from_iter([
            OsString::from("dznodes"),
            OsString::from("--definitely-not-a-flag"),
        ])
    }
}

/// A pack root with a bundled font and web asset, plus a host web tree.
struct TempPack {
    _temp: TempDir,
    root: Utf8PathBuf,
    destination: Utf8PathBuf,
}

impl TempPack {
    fn loader(&self) -> StaticConfigLoader {
        StaticConfigLoader::new(PackConfig {
            pack_root: Some(self.root.clone()),
            web_extensions_dir: Some(self.destination.clone()),
            ..PackConfig::default()
        })
    }
}

#[fixture]
fn temp_pack() -> TempPack {
    let temp = TempDir::new().expect("create temp dir");
    let base = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf-8 temp path");
    let root = base.join("dznodes");
    fs::create_dir_all(root.join("font")).expect("create font dir");
    fs::write(root.join("font").join("Demo.ttf"), b"font bytes").expect("write font");
    fs::create_dir_all(root.join("web")).expect("create web dir");
    fs::write(root.join("web").join("comfy_shared.js"), "export {};").expect("write asset");
    TempPack {
        _temp: temp,
        root,
        destination: base.join("host/web/extensions/dzNodes"),
    }
}

fn services() -> PackServices {
    PackServices::new(
        Arc::new(WhitespaceSegmenter),
        Arc::new(LayoutRenderer::new(CosmicRasterizerFactory)),
    )
}

fn load(pack: &TempPack, reporter: &Arc<RecordingLoadReporter>) -> NodePack {
    NodePack::load_with_services(&pack.loader(), reporter.clone(), services())
        .expect("pack should load")
}

#[rstest]
fn load_reports_each_stage(temp_pack: TempPack) {
    let reporter = Arc::new(RecordingLoadReporter::default());
    let pack = load(&temp_pack, &reporter);

    assert_eq!(
        reporter.events(),
        vec![
            LoadEvent::Starting,
            LoadEvent::AssetsSynced { copied: 1 },
            LoadEvent::FontsDiscovered(1),
            LoadEvent::NodesRegistered(3),
        ]
    );
    assert!(temp_pack.destination.join("comfy_shared.js").is_file());
    assert_eq!(pack.fonts().font_names(), vec!["Demo.ttf"]);
    let report = pack.asset_report().expect("assets synced");
    assert!(report.created_destination);
}

#[rstest]
fn load_exports_host_mappings(temp_pack: TempPack) {
    let reporter = Arc::new(RecordingLoadReporter::default());
    let pack = load(&temp_pack, &reporter);

    let classes: Vec<&str> = pack.class_mappings().keys().copied().collect();
    assert_eq!(
        classes,
        vec!["ComfyWordCloud", "LoadTextFile", "RGB_Picker"]
    );
    assert_eq!(
        pack.display_name_mappings().get("ComfyWordCloud"),
        Some(&"Word Cloud")
    );
    let info = pack.object_info();
    assert_eq!(
        info["ComfyWordCloud"]["input"]["required"]["font_path"],
        serde_json::json!([["Demo.ttf"]])
    );
}

#[rstest]
fn asset_sync_failure_does_not_block_loading(temp_pack: TempPack) {
    fs::remove_dir_all(temp_pack.root.join("web")).expect("remove web dir");
    let reporter = Arc::new(RecordingLoadReporter::default());

    let pack = load(&temp_pack, &reporter);

    assert!(reporter.events().contains(&LoadEvent::AssetSyncFailed));
    assert!(pack.asset_report().is_none());
    assert_eq!(pack.registry().len(), 3);
}

#[rstest]
fn load_records_subscriber_owner(temp_pack: TempPack) {
    let reporter = Arc::new(RecordingLoadReporter::default());

    let pack = load(&temp_pack, &reporter);

    let handle = telemetry::initialise(pack.config()).expect("cached telemetry");
    assert_eq!(pack.telemetry(), handle);
}

#[rstest]
fn configuration_failure_is_reported() {
    let reporter = Arc::new(RecordingLoadReporter::default());

    let error = NodePack::load_with_services(&FailingConfigLoader, reporter.clone(), services())
        .expect_err("configuration should fail");

    assert!(matches!(error, BootstrapError::Configuration { .. }));
    let events = reporter.events();
    assert_eq!(events.first(), Some(&LoadEvent::Starting));
    assert!(matches!(events.last(), Some(LoadEvent::Failed(_))));
}

#[rstest]
fn execute_runs_registered_nodes(temp_pack: TempPack) {
    let reporter = Arc::new(RecordingLoadReporter::default());
    let pack = load(&temp_pack, &reporter);
    let inputs: RawInputs = [
        ("color".to_owned(), NodeValue::from("#0A0B0C")),
        ("mode".to_owned(), NodeValue::from("DEC")),
    ]
    .into_iter()
    .collect();

    let output = pack.execute("RGB_Picker", inputs).expect("execute picker");

    assert_eq!(output.result(), &[NodeValue::from("(10, 11, 12)")]);
}

#[rstest]
fn execute_reports_unknown_nodes(temp_pack: TempPack) {
    let reporter = Arc::new(RecordingLoadReporter::default());
    let pack = load(&temp_pack, &reporter);

    let error = pack
        .execute("Missing", RawInputs::new())
        .expect_err("unknown node");

    assert!(matches!(error, NodeError::NotFound { ref id } if id == "Missing"));
    assert_eq!(
        reporter.events().last(),
        Some(&LoadEvent::NodeFailed("Missing".to_owned()))
    );
}
