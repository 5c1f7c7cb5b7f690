//! Unit tests for layout and composition.

use camino::Utf8Path;
use image::{ColorType, Rgb, RgbImage, Rgba};
use mockall::mock;
use rstest::{fixture, rstest};

use super::layout::{OccupancyMap, prepare_words};
use super::*;

/// Rasterises every word as a solid block half as wide as its size per
/// character.
#[derive(Debug, Default)]
struct BlockRasterizer;

impl GlyphRasterizer for BlockRasterizer {
    fn rasterize(&mut self, text: &str, size: u32) -> GlyphMask {
        if size == 0 {
            return GlyphMask::default();
        }
        let chars = u32::try_from(text.chars().count()).expect("short word");
        GlyphMask::solid((chars * size / 2).max(1), size)
    }
}

#[derive(Debug, Default)]
struct BlockFactory;

impl RasterizerFactory for BlockFactory {
    type Rasterizer = BlockRasterizer;

    fn load(&self, _font: &Utf8Path) -> Result<BlockRasterizer, RenderError> {
        Ok(BlockRasterizer)
    }
}

mock! {
    Factory {}
    impl RasterizerFactory for Factory {
        type Rasterizer = BlockRasterizer;
        fn load(&self, font: &Utf8Path) -> Result<BlockRasterizer, RenderError>;
    }
}

#[fixture]
fn renderer() -> LayoutRenderer<BlockFactory> {
    LayoutRenderer::new(BlockFactory)
}

#[fixture]
fn frequencies() -> FrequencyMap {
    [("alpha", 8.0), ("beta", 5.0), ("gamma", 3.0), ("delta", 2.0), ("pi", 1.0)]
        .into_iter()
        .collect()
}

fn builder() -> RenderConfigBuilder {
    RenderConfig::builder("font/test.ttf")
        .size(96, 64)
        .font_sizes(4, Some(16))
        .seed(Seed::Fixed(7))
}

fn boxes_overlap(a: &PlacedWord, b: &PlacedWord) -> bool {
    a.col() < b.col() + b.width()
        && b.col() < a.col() + a.width()
        && a.row() < b.row() + b.height()
        && b.row() < a.row() + a.height()
}

// ----------------------------------------------------------------------------
// Configuration
// ----------------------------------------------------------------------------

#[rstest]
#[case(-1, Seed::Unseeded)]
#[case(0, Seed::Fixed(0))]
#[case(42, Seed::Fixed(42))]
#[case(i128::from(u64::MAX), Seed::Fixed(u64::MAX))]
#[case(i128::from(u64::MAX) + 1, Seed::Unseeded)]
fn seed_maps_host_integers(#[case] raw: i128, #[case] expected: Seed) {
    assert_eq!(Seed::from_raw(raw), expected);
}

#[rstest]
#[case(|b: RenderConfigBuilder| b.size(0, 10), "size")]
#[case(|b: RenderConfigBuilder| b.scale(0.0), "scale")]
#[case(|b: RenderConfigBuilder| b.scale(f64::NAN), "scale")]
#[case(|b: RenderConfigBuilder| b.font_sizes(10, Some(5)), "max_font_size")]
#[case(|b: RenderConfigBuilder| b.font_step(0), "font_step")]
#[case(|b: RenderConfigBuilder| b.relative_scaling(1.5), "relative_scaling")]
#[case(|b: RenderConfigBuilder| b.prefer_horizontal(-0.1), "prefer_horizontal")]
#[case(|b: RenderConfigBuilder| b.max_words(0), "max_words")]
#[case(|b: RenderConfigBuilder| b.contour(-1.0, "#000000"), "contour_width")]
fn build_rejects_out_of_range_parameters(
    #[case] adjust: fn(RenderConfigBuilder) -> RenderConfigBuilder,
    #[case] expected: &str,
) {
    let error = adjust(builder())
        .build()
        .expect_err("parameter should be rejected");
    match error {
        RenderError::InvalidParameter { name, .. } => assert_eq!(name, expected),
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
}

#[rstest]
fn build_rejects_unknown_colormap() {
    let error = builder()
        .colormap("sunset")
        .build()
        .expect_err("unknown map");
    assert!(matches!(error, RenderError::UnknownColormap { name } if name == "sunset"));
}

#[rstest]
fn build_rejects_malformed_background() {
    let error = builder().background("#12").build().expect_err("bad colour");
    assert!(matches!(error, RenderError::InvalidColor { .. }));
}

#[rstest]
fn transparent_background_forces_rgba_and_ignores_colour() {
    let config = builder()
        .background("not a colour")
        .transparent(true)
        .build()
        .expect("transparent config");
    assert_eq!(config.mode(), PixelMode::Rgba);
    assert_eq!(config.background(), Background::Transparent);
}

#[rstest]
fn mask_overrides_canvas_size() {
    let mask = Mask::new(RgbImage::new(40, 30));
    let config = builder().mask(Some(mask)).build().expect("masked config");
    assert_eq!(config.canvas_size(), (40, 30));
}

#[rstest]
fn contour_requires_mask_and_width() {
    let unmasked = builder().contour(2.0, "#FF0000").build().expect("config");
    assert!(unmasked.contour().is_none());

    let masked = builder()
        .mask(Some(Mask::new(RgbImage::new(8, 8))))
        .contour(2.0, "#FF0000")
        .build()
        .expect("config");
    let contour = masked.contour().expect("contour");
    assert_eq!(contour.color(), Rgba([255, 0, 0, 255]));
}

#[rstest]
fn pixel_mode_parses_case_insensitively() {
    assert_eq!("rgba".parse::<PixelMode>(), Ok(PixelMode::Rgba));
    assert_eq!(PixelMode::Rgb.to_string(), "RGB");
}

// ----------------------------------------------------------------------------
// Glyph masks and occupancy
// ----------------------------------------------------------------------------

#[rstest]
fn glyph_mask_crops_ink_to_bounding_box() {
    let mask = GlyphMask::from_ink(&[(3, 5, 10), (4, 7, 200), (4, 7, 90)]);
    assert_eq!((mask.width(), mask.height()), (2, 3));
    assert_eq!(mask.coverage(0, 0), 10);
    assert_eq!(mask.coverage(1, 2), 200);
    assert_eq!(mask.coverage(1, 1), 0);
    assert!(GlyphMask::from_ink(&[]).is_empty());
}

#[rstest]
fn rotate_90_turns_counter_clockwise() {
    // 3x2 mask with only the top-right pixel inked.
    let mask = GlyphMask::new(3, 2, vec![0, 0, 9, 0, 0, 0]);
    let rotated = mask.rotate_90();
    assert_eq!((rotated.width(), rotated.height()), (2, 3));
    assert_eq!(rotated.coverage(0, 0), 9);
    assert_eq!(Orientation::Vertical.apply(mask.clone()), rotated);
    assert_eq!(Orientation::Horizontal.apply(mask.clone()), mask);
}

#[rstest]
fn occupancy_sampling_respects_mask_and_stamps() {
    let mut pixels = RgbImage::from_pixel(6, 4, Rgb([255, 255, 255]));
    pixels.put_pixel(5, 3, Rgb([0, 0, 0]));
    let mask = Mask::new(pixels);
    let mut map = OccupancyMap::new(6, 4, Some(&mask));
    let mut rng = layout::seeded_rng(Seed::Fixed(1));

    assert_eq!(map.sample(1, 1, &mut rng), Some((3, 5)));
    assert_eq!(map.sample(1, 2, &mut rng), None);
    assert_eq!(map.sample(5, 1, &mut rng), None);

    map.stamp(&GlyphMask::solid(1, 1), 3, 5);
    assert_eq!(map.sample(1, 1, &mut rng), None);
}

// ----------------------------------------------------------------------------
// Word preparation
// ----------------------------------------------------------------------------

#[rstest]
fn prepare_normalises_and_truncates(frequencies: FrequencyMap) {
    let config = builder().max_words(3).build().expect("config");
    let words = prepare_words(&frequencies, &config).expect("words");
    assert_eq!(
        words,
        vec![("alpha", 1.0), ("beta", 0.625), ("gamma", 0.375)]
    );
}

#[rstest]
fn prepare_repeats_with_downweighting() {
    let frequencies: FrequencyMap = [("big", 4.0), ("small", 2.0)].into_iter().collect();
    let config = builder().max_words(5).repeat(true).build().expect("config");
    let words = prepare_words(&frequencies, &config).expect("words");
    assert_eq!(
        words,
        vec![
            ("big", 1.0),
            ("small", 0.5),
            ("big", 0.5),
            ("small", 0.25),
            ("big", 0.25),
            ("small", 0.125),
        ]
    );
}

#[rstest]
#[case(FrequencyMap::new())]
#[case([("zero", 0.0)].into_iter().collect())]
fn prepare_rejects_weightless_input(#[case] frequencies: FrequencyMap) {
    let config = builder().build().expect("config");
    assert!(matches!(
        prepare_words(&frequencies, &config),
        Err(RenderError::EmptyFrequencies)
    ));
}

// ----------------------------------------------------------------------------
// Layout
// ----------------------------------------------------------------------------

#[rstest]
fn seeded_layouts_are_reproducible(
    renderer: LayoutRenderer<BlockFactory>,
    frequencies: FrequencyMap,
) {
    let config = builder().build().expect("config");
    let first = renderer.generate(&frequencies, &config).expect("first");
    let second = renderer.generate(&frequencies, &config).expect("second");
    assert_eq!(first.layout(), second.layout());
    assert!(!first.layout().is_empty());
}

#[rstest]
fn unseeded_layouts_differ_between_renders(renderer: LayoutRenderer<BlockFactory>) {
    let frequencies: FrequencyMap = (1..=40_u32)
        .map(|rank| (format!("word{rank}"), f64::from(rank)))
        .collect();
    let config = builder()
        .size(240, 160)
        .seed(Seed::Unseeded)
        .build()
        .expect("config");
    let first = renderer.generate(&frequencies, &config).expect("first");
    let second = renderer.generate(&frequencies, &config).expect("second");
    assert!(first.layout().len() > 10);
    assert_ne!(first.layout(), second.layout());
}

#[rstest]
fn placed_words_do_not_overlap(renderer: LayoutRenderer<BlockFactory>, frequencies: FrequencyMap) {
    let config = builder().margin(2).build().expect("config");
    let cloud = renderer.generate(&frequencies, &config).expect("cloud");
    let layout = cloud.layout();
    for (index, word) in layout.iter().enumerate() {
        assert!(
            word.col() + word.width() <= 96,
            "{} leaves the canvas",
            word.word()
        );
        assert!(
            word.row() + word.height() <= 64,
            "{} leaves the canvas",
            word.word()
        );
        for other in &layout[index + 1..] {
            assert!(
                !boxes_overlap(word, other),
                "{} overlaps {}",
                word.word(),
                other.word()
            );
        }
    }
}

#[rstest]
fn heaviest_word_starts_at_max_font_size(
    renderer: LayoutRenderer<BlockFactory>,
    frequencies: FrequencyMap,
) {
    let config = builder().build().expect("config");
    let cloud = renderer.generate(&frequencies, &config).expect("cloud");
    let first = cloud.layout().first().expect("placed word");
    assert_eq!(first.word(), "alpha");
    assert_eq!(first.font_size(), 16);
    for pair in cloud.layout().windows(2) {
        assert!(pair[1].font_size() <= pair[0].font_size());
    }
}

#[rstest]
#[case(1.0, Orientation::Horizontal)]
#[case(0.0, Orientation::Vertical)]
fn prefer_horizontal_extremes_fix_orientation(
    renderer: LayoutRenderer<BlockFactory>,
    #[case] prefer: f64,
    #[case] expected: Orientation,
) {
    let frequencies: FrequencyMap = [("solo", 1.0)].into_iter().collect();
    let config = builder().prefer_horizontal(prefer).build().expect("config");
    let cloud = renderer.generate(&frequencies, &config).expect("cloud");
    let word = cloud.layout().first().expect("placed word");
    assert_eq!(word.orientation(), expected);
}

#[rstest]
fn words_stay_out_of_masked_area(
    renderer: LayoutRenderer<BlockFactory>,
    frequencies: FrequencyMap,
) {
    let mut pixels = RgbImage::from_pixel(80, 48, Rgb([255, 255, 255]));
    for y in 0..48 {
        for x in 0..40 {
            pixels.put_pixel(x, y, Rgb([0, 0, 0]));
        }
    }
    let config = builder()
        .mask(Some(Mask::new(pixels)))
        .build()
        .expect("config");
    let cloud = renderer.generate(&frequencies, &config).expect("cloud");
    assert!(!cloud.layout().is_empty());
    for word in cloud.layout() {
        assert!(
            word.col() + word.width() <= 40,
            "{} entered the mask",
            word.word()
        );
    }
}

#[rstest]
fn words_too_large_for_canvas_are_dropped(renderer: LayoutRenderer<BlockFactory>) {
    let frequencies: FrequencyMap = [("enormous", 1.0)].into_iter().collect();
    let config = RenderConfig::builder("font/test.ttf")
        .size(8, 8)
        .font_sizes(6, Some(6))
        .seed(Seed::Fixed(3))
        .build()
        .expect("config");
    let cloud = renderer.generate(&frequencies, &config).expect("cloud");
    assert!(cloud.layout().is_empty());
}

#[rstest]
fn font_failures_propagate(frequencies: FrequencyMap) {
    let mut factory = MockFactory::new();
    factory.expect_load().once().returning(|font| {
        Err(RenderError::EmptyFont {
            path: font.to_path_buf(),
        })
    });
    let renderer = LayoutRenderer::new(factory);
    let config = builder().build().expect("config");
    let error = renderer
        .generate(&frequencies, &config)
        .expect_err("font error");
    assert!(matches!(error, RenderError::EmptyFont { path } if path == "font/test.ttf"));
}

// ----------------------------------------------------------------------------
// Composition and recolouring
// ----------------------------------------------------------------------------

fn red_block() -> PlacedWord {
    PlacedWord::new(
        "ab",
        4,
        (1, 2),
        (4, 4),
        Orientation::Horizontal,
        Rgba([255, 0, 0, 255]),
    )
}

#[rstest]
fn to_image_scales_and_fills_background(renderer: LayoutRenderer<BlockFactory>) {
    let config = builder()
        .size(16, 8)
        .scale(2.0)
        .background("#0000FF")
        .build()
        .expect("config");
    let image = renderer
        .to_image(&WordCloud::new(config, vec![red_block()]))
        .expect("image");
    assert_eq!(image.color(), ColorType::Rgb8);
    assert_eq!((image.width(), image.height()), (32, 16));
    let pixels = image.to_rgb8();
    assert_eq!(pixels.get_pixel(4, 2), &Rgb([255, 0, 0]));
    assert_eq!(pixels.get_pixel(31, 15), &Rgb([0, 0, 255]));
}

#[rstest]
fn transparent_images_keep_alpha(renderer: LayoutRenderer<BlockFactory>) {
    let config = builder()
        .size(16, 8)
        .transparent(true)
        .build()
        .expect("config");
    let image = renderer
        .to_image(&WordCloud::new(config, vec![red_block()]))
        .expect("image");
    assert_eq!(image.color(), ColorType::Rgba8);
    let pixels = image.to_rgba8();
    assert_eq!(pixels.get_pixel(2, 1), &Rgba([255, 0, 0, 255]));
    assert_eq!(pixels.get_pixel(15, 7), &Rgba([0, 0, 0, 0]));
}

#[rstest]
fn collapsed_scale_is_rejected(renderer: LayoutRenderer<BlockFactory>) {
    let config = builder().size(4, 4).scale(0.1).build().expect("config");
    let error = renderer
        .to_image(&WordCloud::new(config, Vec::new()))
        .expect_err("empty canvas");
    assert!(matches!(
        error,
        RenderError::InvalidParameter { name: "scale", .. }
    ));
}

#[rstest]
fn contour_traces_mask_boundary(renderer: LayoutRenderer<BlockFactory>) {
    let mut pixels = RgbImage::from_pixel(20, 20, Rgb([255, 255, 255]));
    for y in 5..15 {
        for x in 5..15 {
            pixels.put_pixel(x, y, Rgb([0, 0, 0]));
        }
    }
    let config = builder()
        .mask(Some(Mask::new(pixels)))
        .contour(1.0, "#FF0000")
        .build()
        .expect("config");
    let image = renderer
        .to_image(&WordCloud::new(config, Vec::new()))
        .expect("image")
        .to_rgb8();
    assert_eq!(image.get_pixel(5, 5), &Rgb([255, 0, 0]));
    assert_eq!(image.get_pixel(4, 10), &Rgb([255, 0, 0]));
    assert_eq!(image.get_pixel(10, 10), &Rgb([255, 255, 255]));
    assert_eq!(image.get_pixel(0, 0), &Rgb([255, 255, 255]));
}

#[rstest]
fn recolor_takes_mean_of_reference_patch() {
    let config = builder().size(16, 8).build().expect("config");
    let outside = PlacedWord::new(
        "far",
        4,
        (20, 20),
        (2, 2),
        Orientation::Horizontal,
        Rgba([1, 2, 3, 255]),
    );
    let mut cloud = WordCloud::new(config, vec![red_block(), outside]);
    let mut reference = RgbImage::from_pixel(16, 8, Rgb([10, 20, 30]));
    reference.put_pixel(2, 1, Rgb([14, 24, 34]));

    cloud.recolor(&reference);

    assert_eq!(cloud.layout()[0].color(), Rgba([10, 20, 30, 255]));
    assert_eq!(cloud.layout()[1].color(), Rgba([1, 2, 3, 255]));
}
