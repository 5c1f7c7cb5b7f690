//! Unit tests for the pack's nodes.

use std::fs;
use std::sync::Arc;

use camino::Utf8PathBuf;
use dznodes_plugins::{ImageTensor, Node, NodeError, NodeOutput, NodeRegistry, NodeValue, RawInputs};
use dznodes_wordcloud::{
    CloudRenderer, DEFAULT_FONT, FontRegistry, FrequencyMap, Orientation, PlacedWord, RenderConfig,
    RenderError, Seed, WhitespaceSegmenter, WordCloud,
};
use image::{DynamicImage, Rgb, RgbImage, Rgba};
use mockall::mock;
use rstest::rstest;
use serde_json::json;
use tempfile::TempDir;

use super::*;

mock! {
    pub Renderer {}
    impl CloudRenderer for Renderer {
        fn generate(
            &self,
            frequencies: &FrequencyMap,
            config: &RenderConfig,
        ) -> Result<WordCloud, RenderError>;
        fn to_image(&self, cloud: &WordCloud) -> Result<DynamicImage, RenderError>;
    }
}

fn raw(pairs: Vec<(&str, NodeValue)>) -> RawInputs {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_owned(), value))
        .collect()
}

fn run(node: &dyn Node, inputs: RawInputs) -> Result<NodeOutput, NodeError> {
    let resolved = node.schema().resolve(inputs)?;
    node.execute(&resolved)
}

fn word_cloud_node(renderer: MockRenderer) -> WordCloudNode {
    WordCloudNode::new(WordCloudResources::new(
        Arc::new(FontRegistry::default()),
        Arc::new(WhitespaceSegmenter),
        Arc::new(renderer),
    ))
}

/// Renderer returning an empty layout and a black bitmap of the canvas size.
fn blank_renderer() -> MockRenderer {
    let mut renderer = MockRenderer::new();
    renderer
        .expect_generate()
        .returning(|_, config| Ok(WordCloud::new(config.clone(), Vec::new())));
    renderer.expect_to_image().returning(|cloud| {
        let (width, height) = cloud.config().canvas_size();
        Ok(DynamicImage::new_rgb8(width, height))
    });
    renderer
}

fn image_input(width: u32, height: u32, color: [u8; 3]) -> NodeValue {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)));
    NodeValue::from(ImageTensor::from_image(&image))
}

// ----------------------------------------------------------------------------
// Word cloud
// ----------------------------------------------------------------------------

#[rstest]
fn word_cloud_schema_matches_host_defaults() {
    let node = word_cloud_node(MockRenderer::new());
    let info = node.schema().to_json(&WordCloudNode::manifest());

    let required = &info["input"]["required"];
    assert_eq!(required["width"], json!(["INT", {"default": 512}]));
    assert_eq!(required["font_path"], json!([[DEFAULT_FONT]]));
    assert_eq!(required["colormap"][0][0], json!("viridis"));
    assert_eq!(required["colormap"][0].as_array().map(Vec::len), Some(84));
    assert_eq!(required["random_state"][1]["max"], json!(u64::MAX));
    assert_eq!(info["input"]["optional"]["keynote_weight"], json!(["INT", {"default": 60}]));
    assert_eq!(info["output"], json!(["IMAGE"]));
    assert_eq!(info["category"], json!("😺dzNodes"));
    assert_eq!(info["output_node"], json!(true));
}

#[rstest]
fn word_cloud_feeds_frequencies_and_parameters_to_renderer() {
    let mut renderer = MockRenderer::new();
    renderer
        .expect_generate()
        .withf(|frequencies: &FrequencyMap, config: &RenderConfig| {
            frequencies.get("crab") == Some(2.0)
                && frequencies.get("ferris") == Some(12.0)
                && !frequencies.contains("shell")
                && config.canvas_size() == (64, 32)
                && config.seed() == Seed::Fixed(3)
                && config.font().as_str() == DEFAULT_FONT
        })
        .once()
        .returning(|_, config| Ok(WordCloud::new(config.clone(), Vec::new())));
    renderer
        .expect_to_image()
        .once()
        .returning(|_| Ok(DynamicImage::new_rgb8(64, 32)));
    let node = word_cloud_node(renderer);

    let output = run(
        &node,
        raw(vec![
            ("text", NodeValue::from("crab crab shell")),
            ("width", NodeValue::from(64_i64)),
            ("height", NodeValue::from(32_i64)),
            ("random_state", NodeValue::from(3_i64)),
            ("stopwords", NodeValue::from("shell")),
            ("keynote_words", NodeValue::from("ferris")),
            ("keynote_weight", NodeValue::from(10_i64)),
        ]),
    )
    .expect("render");

    let tensor = output.result()[0].as_image().expect("image output");
    assert_eq!(tensor.shape(), [1, 32, 64, 3]);
}

#[rstest]
#[case::beyond_64_bits(i128::from(u64::MAX) * 4, 7.378_697_629_483_821e19)]
#[case::beyond_32_bits(i128::from(i32::MAX) + 1, 2_147_483_650.0)]
#[case::negative(-5, -3.0)]
fn keynote_weight_accepts_any_host_integer(#[case] weight: i128, #[case] expected: f64) {
    let mut renderer = MockRenderer::new();
    renderer
        .expect_generate()
        .withf(move |frequencies: &FrequencyMap, _: &RenderConfig| {
            frequencies.get("crab") == Some(2.0) && frequencies.get("ferris") == Some(expected)
        })
        .once()
        .returning(|_, config| Ok(WordCloud::new(config.clone(), Vec::new())));
    renderer
        .expect_to_image()
        .returning(|_| Ok(DynamicImage::new_rgb8(8, 8)));
    let node = word_cloud_node(renderer);

    run(
        &node,
        raw(vec![
            ("text", NodeValue::from("crab crab")),
            ("keynote_words", NodeValue::from("ferris")),
            ("keynote_weight", NodeValue::from(weight)),
        ]),
    )
    .expect("render");
}

#[rstest]
fn mask_image_sets_canvas_size() {
    let node = word_cloud_node(blank_renderer());
    let output = run(
        &node,
        raw(vec![("mask_image", image_input(20, 10, [255, 255, 255]))]),
    )
    .expect("render");
    let tensor = output.result()[0].as_image().expect("image output");
    assert_eq!(tensor.shape(), [1, 10, 20, 3]);
}

#[rstest]
fn color_reference_recolours_layout() {
    let mut renderer = MockRenderer::new();
    renderer.expect_generate().returning(|_, config| {
        let word = PlacedWord::new(
            "crab",
            12,
            (0, 0),
            (8, 8),
            Orientation::Horizontal,
            Rgba([9, 9, 9, 255]),
        );
        Ok(WordCloud::new(config.clone(), vec![word]))
    });
    renderer
        .expect_to_image()
        .withf(|cloud: &WordCloud| cloud.layout()[0].color() == Rgba([0, 255, 0, 255]))
        .once()
        .returning(|_| Ok(DynamicImage::new_rgb8(16, 16)));
    let node = word_cloud_node(renderer);

    run(
        &node,
        raw(vec![
            ("width", NodeValue::from(16_i64)),
            ("height", NodeValue::from(16_i64)),
            ("color_ref_image", image_input(16, 16, [0, 255, 0])),
        ]),
    )
    .expect("render");
}

#[rstest]
fn renderer_failures_surface_as_execution_errors() {
    let mut renderer = MockRenderer::new();
    renderer
        .expect_generate()
        .returning(|_, _| Err(RenderError::EmptyFrequencies));
    let node = word_cloud_node(renderer);

    let error = run(&node, RawInputs::new()).expect_err("render fails");

    assert!(matches!(error, NodeError::Execution { ref id, .. } if id == "ComfyWordCloud"));
}

#[rstest]
#[case("width", -5)]
#[case("max_words", -1)]
#[case("margin", i64::from(u32::MAX) + 1)]
fn out_of_range_integers_are_rejected(#[case] name: &str, #[case] value: i64) {
    let node = word_cloud_node(MockRenderer::new());
    let error = run(&node, raw(vec![(name, NodeValue::from(value))])).expect_err("rejected");
    assert!(matches!(error, NodeError::InvalidInput { name: ref input, .. } if input == name));
}

#[rstest]
fn invalid_render_parameters_are_execution_errors() {
    let node = word_cloud_node(MockRenderer::new());
    let error = run(
        &node,
        raw(vec![("background_color", NodeValue::from("not-a-colour"))]),
    )
    .expect_err("bad colour");
    assert!(matches!(error, NodeError::Execution { .. }));
}

// ----------------------------------------------------------------------------
// Load text file
// ----------------------------------------------------------------------------

#[rstest]
fn load_text_file_returns_contents_and_ui_payload() {
    let temp = TempDir::new().expect("create temp dir");
    let path = Utf8PathBuf::from_path_buf(temp.path().join("words.txt")).expect("utf-8 path");
    fs::write(&path, "词云 word cloud\n").expect("write text");

    let output = run(
        &LoadTextFileNode,
        raw(vec![("path", NodeValue::from(path.as_str()))]),
    )
    .expect("load");

    assert_eq!(output.result(), &[NodeValue::from("词云 word cloud\n")]);
    assert_eq!(output.ui(), Some(&json!({"text": "词云 word cloud\n"})));
}

#[rstest]
fn missing_text_file_yields_empty_string() {
    let temp = TempDir::new().expect("create temp dir");
    let missing = temp.path().join("absent.txt");
    let missing = missing.to_str().expect("utf-8 path");

    let output = run(
        &LoadTextFileNode,
        raw(vec![("path", NodeValue::from(missing))]),
    )
    .expect("load never fails");

    assert_eq!(output.result(), &[NodeValue::from("")]);
    assert_eq!(output.ui(), Some(&json!({"text": ""})));
}

#[rstest]
fn read_text_file_reports_path() {
    let missing = camino::Utf8Path::new("/definitely/not/here.txt");
    let error = load_textfile::read_text_file(missing).expect_err("missing file");
    assert!(matches!(error, TextFileError::Read { path, .. } if path == missing));
}

// ----------------------------------------------------------------------------
// RGB picker
// ----------------------------------------------------------------------------

#[rstest]
#[case("#FF8000", "HEX", "#FF8000")]
#[case("#FF8000", "DEC", "(255, 128, 0)")]
#[case("#00ff7f", "DEC", "(0, 255, 127)")]
#[case("white", "HEX", "white")]
fn rgb_picker_formats_colour(#[case] color: &str, #[case] mode: &str, #[case] expected: &str) {
    let output = run(
        &RgbPickerNode,
        raw(vec![
            ("color", NodeValue::from(color)),
            ("mode", NodeValue::from(mode)),
        ]),
    )
    .expect("pick");
    assert_eq!(output.result(), &[NodeValue::from(expected)]);
}

#[rstest]
#[case("white")]
#[case("#FFF")]
#[case("#GG0000")]
#[case("FF0000")]
fn rgb_picker_rejects_malformed_hex_in_dec_mode(#[case] color: &str) {
    let error = run(
        &RgbPickerNode,
        raw(vec![
            ("color", NodeValue::from(color)),
            ("mode", NodeValue::from("DEC")),
        ]),
    )
    .expect_err("malformed colour");
    assert!(matches!(error, NodeError::InvalidInput { ref name, .. } if name == "color"));
}

#[rstest]
fn rgb_picker_defaults_to_hex_white() {
    let output = run(&RgbPickerNode, RawInputs::new()).expect("pick");
    assert_eq!(output.result(), &[NodeValue::from("white")]);
}

// ----------------------------------------------------------------------------
// Providers
// ----------------------------------------------------------------------------

#[rstest]
fn providers_register_every_node() {
    let resources = WordCloudResources::new(
        Arc::new(FontRegistry::default()),
        Arc::new(WhitespaceSegmenter),
        Arc::new(MockRenderer::new()),
    );
    let mut registry = NodeRegistry::new();
    for provider in providers(&resources) {
        registry
            .register_provider(provider.as_ref())
            .expect("register provider");
    }

    assert_eq!(
        registry.ids(),
        vec!["ComfyWordCloud", "LoadTextFile", "RGB_Picker"]
    );
    let names = registry.display_name_mappings();
    assert_eq!(names.get("RGB_Picker"), Some(&"RGB Color Picker"));
    assert_eq!(registry.find_by_category(WORDCLOUD_CATEGORY).len(), 1);
    assert_eq!(registry.find_by_category(CATEGORY).len(), 2);
}
