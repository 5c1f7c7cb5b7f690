//! Loading the pack and running its nodes through the public API.

use std::fs;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use dznodes::{NodePack, PackServices, StaticConfigLoader, StructuredLoadReporter};
use dznodes_config::PackConfig;
use dznodes_plugins::{NodeError, NodeValue, RawInputs};
use dznodes_wordcloud::{
    GlyphMask, GlyphRasterizer, LayoutRenderer, RasterizerFactory, RenderError, WhitespaceSegmenter,
};
use rstest::{fixture, rstest};
use tempfile::TempDir;

struct Blocks;

impl GlyphRasterizer for Blocks {
    fn rasterize(&mut self, text: &str, size: u32) -> GlyphMask {
        let chars = u32::try_from(text.chars().count()).expect("short word");
        GlyphMask::solid((chars * size / 2).max(1), size.max(1))
    }
}

struct BlockFactory;

impl RasterizerFactory for BlockFactory {
    type Rasterizer = Blocks;

    fn load(&self, _font: &Utf8Path) -> Result<Blocks, RenderError> {
        Ok(Blocks)
    }
}

struct Host {
    _temp: TempDir,
    base: Utf8PathBuf,
    pack: NodePack,
}

#[fixture]
fn host() -> Host {
    let temp = TempDir::new().expect("create temp dir");
    let base = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf-8 temp path");
    let root = base.join("custom_nodes").join("dznodes");
    let fonts = base.join("shared-fonts");
    fs::create_dir_all(root.join("font")).expect("create bundled font dir");
    fs::create_dir_all(root.join("web")).expect("create web dir");
    fs::create_dir_all(&fonts).expect("create shared font dir");
    fs::write(root.join("web").join("wordcloud_ui.js"), "export {};").expect("write asset");
    fs::write(fonts.join("Shared.otf"), b"font bytes").expect("write font");
    fs::write(root.join("font_dir.ini"), format!("FONT_DIR={fonts}\n")).expect("write ini");

    let destination = base.join("web").join("extensions").join("dzNodes");
    fs::create_dir_all(&destination).expect("create destination");
    fs::write(destination.join("wordcloud.js"), "// stale").expect("write obsolete asset");

    let config = PackConfig {
        pack_root: Some(root),
        web_extensions_dir: Some(destination),
        ..PackConfig::default()
    };
    let services = PackServices::new(
        Arc::new(WhitespaceSegmenter),
        Arc::new(LayoutRenderer::new(BlockFactory)),
    );
    let pack = NodePack::load_with_services(
        &StaticConfigLoader::new(config),
        Arc::new(StructuredLoadReporter::new()),
        services,
    )
    .expect("pack should load");
    Host {
        _temp: temp,
        base,
        pack,
    }
}

fn inputs<const N: usize>(pairs: [(&str, NodeValue); N]) -> RawInputs {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_owned(), value))
        .collect()
}

#[rstest]
fn load_syncs_assets_and_discovers_override_fonts(host: Host) {
    let destination = host.base.join("web").join("extensions").join("dzNodes");

    assert!(destination.join("wordcloud_ui.js").is_file());
    assert!(!destination.join("wordcloud.js").exists());
    assert_eq!(host.pack.fonts().font_names(), vec!["Shared.otf"]);
    assert_eq!(host.pack.fonts().dir(), host.base.join("shared-fonts"));
}

#[rstest]
fn word_cloud_renders_through_the_pack(host: Host) {
    let raw = inputs([
        ("text", NodeValue::from("cloud cloud cloud word word node")),
        ("width", NodeValue::from(128_i64)),
        ("height", NodeValue::from(96_i64)),
        ("font_path", NodeValue::from("Shared.otf")),
        ("random_state", NodeValue::from(7_i64)),
    ]);

    let output = host
        .pack
        .execute("ComfyWordCloud", raw)
        .expect("render word cloud");

    let tensor = output.result()[0].as_image().expect("image output");
    assert_eq!(tensor.shape(), [1, 96, 128, 3]);
}

#[rstest]
fn transparent_word_cloud_carries_alpha(host: Host) {
    let raw = inputs([
        ("text", NodeValue::from("alpha beta gamma")),
        ("width", NodeValue::from(64_i64)),
        ("height", NodeValue::from(64_i64)),
        ("transparent_background", NodeValue::from(true)),
    ]);

    let output = host
        .pack
        .execute("ComfyWordCloud", raw)
        .expect("render word cloud");

    let tensor = output.result()[0].as_image().expect("image output");
    assert_eq!(tensor.shape(), [1, 64, 64, 4]);
}

#[rstest]
fn text_file_feeds_the_word_cloud(host: Host) {
    let path = host.base.join("words.txt");
    fs::write(&path, "river stone river").expect("write text");

    let loaded = host
        .pack
        .execute(
            "LoadTextFile",
            inputs([("path", NodeValue::from(path.as_str()))]),
        )
        .expect("load text file");
    let text = loaded.result()[0].clone();
    assert_eq!(text, NodeValue::from("river stone river"));

    let output = host
        .pack
        .execute(
            "ComfyWordCloud",
            inputs([
                ("text", text),
                ("width", NodeValue::from(80_i64)),
                ("height", NodeValue::from(40_i64)),
            ]),
        )
        .expect("render word cloud");
    assert!(output.result()[0].as_image().is_some());
}

#[rstest]
fn blank_text_fails_the_render(host: Host) {
    let error = host
        .pack
        .execute("ComfyWordCloud", inputs([("text", NodeValue::from("   "))]))
        .expect_err("nothing to draw");

    assert!(matches!(error, NodeError::Execution { ref id, .. } if id == "ComfyWordCloud"));
}
