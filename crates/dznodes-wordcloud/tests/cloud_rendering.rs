//! Rendering through the public API with stand-in and real-font rasterisers.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use image::{Rgb, RgbImage};
use rstest::{fixture, rstest};
use tempfile::TempDir;

use dznodes_wordcloud::{
    CloudRenderer, CosmicRasterizerFactory, DEFAULT_FONT, FontRegistry, FrequencyMap, GlyphMask,
    GlyphRasterizer, LayoutRenderer, Mask, RasterizerFactory, RenderConfig, RenderError, Seed,
};

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

struct FontDir {
    _temp: TempDir,
    dir: Utf8PathBuf,
}

#[fixture]
fn font_dir() -> FontDir {
    let temp = TempDir::new().expect("create temp dir");
    let dir = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf-8 temp path");
    fs::write(dir.join("Display.TTF"), b"not really a font").expect("write font");
    fs::write(dir.join("Serif.otf"), b"not really a font").expect("write font");
    fs::write(dir.join("readme.txt"), b"ignored").expect("write text");
    FontDir { _temp: temp, dir }
}

fn fixture_font() -> Utf8PathBuf {
    Utf8Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSans.ttf")
}

fn frequencies() -> FrequencyMap {
    [("cloud", 10.0), ("word", 6.0), ("node", 3.0), ("pack", 1.0)]
        .into_iter()
        .collect()
}

#[rstest]
fn registry_feeds_resolved_font_into_render(font_dir: FontDir) {
    let registry = FontRegistry::discover(&font_dir.dir, &font_dir.dir.join("bundled"));
    assert_eq!(registry.font_names(), vec!["Display.TTF", "Serif.otf"]);

    let resolved = registry.resolve("Serif.otf");
    assert!(!resolved.is_fallback());
    let config = RenderConfig::builder(resolved.path())
        .size(120, 80)
        .seed(Seed::Fixed(11))
        .build()
        .expect("config");
    assert_eq!(config.font(), font_dir.dir.join("Serif.otf"));

    let fallback = registry.resolve("Missing.ttf");
    assert!(fallback.is_fallback());
    assert_eq!(
        fallback.path(),
        font_dir.dir.join("bundled").join(DEFAULT_FONT)
    );
}

#[rstest]
fn generated_cloud_renders_and_recolours() {
    let renderer = LayoutRenderer::new(BlockFactory);
    let config = RenderConfig::builder("font.ttf")
        .size(120, 80)
        .font_sizes(4, Some(20))
        .seed(Seed::Fixed(5))
        .background("black")
        .build()
        .expect("config");

    let mut cloud = renderer.generate(&frequencies(), &config).expect("layout");
    assert_eq!(cloud.layout().len(), 4);
    cloud.recolor(&RgbImage::from_pixel(120, 80, Rgb([0, 200, 0])));

    let image = renderer.to_image(&cloud).expect("image").to_rgb8();
    let word = &cloud.layout()[0];
    assert_eq!(image.get_pixel(word.col(), word.row()), &Rgb([0, 200, 0]));
}

#[rstest]
fn masked_render_uses_mask_dimensions() {
    let renderer = LayoutRenderer::new(BlockFactory);
    let mask = Mask::new(RgbImage::new(64, 48));
    let config = RenderConfig::builder("font.ttf")
        .size(500, 500)
        .scale(0.5)
        .mask(Some(mask))
        .seed(Seed::Fixed(9))
        .build()
        .expect("config");
    let cloud = renderer.generate(&frequencies(), &config).expect("layout");
    let image = renderer.to_image(&cloud).expect("image");
    assert_eq!((image.width(), image.height()), (32, 24));
}

#[rstest]
fn cosmic_factory_reports_missing_font(font_dir: FontDir) {
    let missing = font_dir.dir.join("absent.ttf");
    let error = CosmicRasterizerFactory
        .load(&missing)
        .expect_err("missing font file");
    assert!(matches!(error, RenderError::FontLoad { path, .. } if path == missing));
}

#[rstest]
fn cosmic_factory_rejects_files_without_faces(font_dir: FontDir) {
    let bogus = font_dir.dir.join("Serif.otf");
    let error = CosmicRasterizerFactory
        .load(&bogus)
        .expect_err("not a font");
    assert!(matches!(error, RenderError::EmptyFont { path } if path == bogus));
}

#[rstest]
fn cosmic_rasterizer_inks_real_glyphs() {
    let mut rasterizer = CosmicRasterizerFactory
        .load(&fixture_font())
        .expect("fixture font");
    let word = rasterizer.rasterize("cloud", 32);
    assert!(!word.is_empty());
    assert!(
        word.width() > word.height(),
        "{}x{}",
        word.width(),
        word.height()
    );
    assert!(word.height() <= 40);
    assert!(rasterizer.rasterize("", 32).is_empty());
}

#[rstest]
fn cosmic_renderer_places_and_draws_words() {
    let renderer = LayoutRenderer::new(CosmicRasterizerFactory);
    let config = RenderConfig::builder(fixture_font())
        .size(200, 120)
        .font_sizes(6, Some(40))
        .seed(Seed::Fixed(21))
        .background("white")
        .colormap("viridis")
        .build()
        .expect("config");

    let cloud = renderer.generate(&frequencies(), &config).expect("layout");
    assert_eq!(cloud.layout().len(), 4);
    let first = &cloud.layout()[0];
    assert_eq!(first.word(), "cloud");
    assert!(first.width() > 0 && first.height() > 0);

    let image = renderer.to_image(&cloud).expect("image").to_rgb8();
    let inked = image
        .pixels()
        .filter(|pixel| **pixel != Rgb([255, 255, 255]))
        .count();
    assert!(inked > 100, "only {inked} pixels were drawn");
}
