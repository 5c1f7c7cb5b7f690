//! The word-cloud node.

use std::fmt;
use std::sync::Arc;

use dznodes_config::KeynoteStrategy;
use dznodes_plugins::{
    ImageTensor, InputSpec, Node, NodeError, NodeInputs, NodeManifest, NodeOutput, NodeRegistration,
    NodeProvider, NodeSchema, NodeValue, ValueKind, white_background,
};
use dznodes_wordcloud::{
    CloudRenderer, DEFAULT_FONT, FontRegistry, FrequencyBuilder, Keynotes, Mask, RenderConfig,
    RenderError, Seed, Segmenter, WordCounter, colormap_names, parse_stopwords,
};

use super::CATEGORY;

/// Node id registered with the host.
pub const NODE_ID: &str = "ComfyWordCloud";
/// Label shown by the host.
pub const DISPLAY_NAME: &str = "Word Cloud";

const SEED_MAX: i128 = 0xffff_ffff_ffff_ffff;

/// Collaborators shared by every word-cloud node instance.
#[derive(Clone)]
pub struct WordCloudResources {
    fonts: Arc<FontRegistry>,
    segmenter: Arc<dyn Segmenter + Send + Sync>,
    renderer: Arc<dyn CloudRenderer>,
    strategy: KeynoteStrategy,
}

impl WordCloudResources {
    /// Bundles the font registry, segmenter and renderer.
    #[must_use]
    pub fn new(
        fonts: Arc<FontRegistry>,
        segmenter: Arc<dyn Segmenter + Send + Sync>,
        renderer: Arc<dyn CloudRenderer>,
    ) -> Self {
        Self {
            fonts,
            segmenter,
            renderer,
            strategy: KeynoteStrategy::default(),
        }
    }

    /// Sets how keynote weights are derived.
    #[must_use]
    pub const fn with_keynote_strategy(mut self, strategy: KeynoteStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Discovered fonts.
    #[must_use]
    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }
}

impl fmt::Debug for WordCloudResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordCloudResources")
            .field("fonts", &self.fonts)
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

/// Renders a word cloud image from free text.
#[derive(Debug, Clone)]
pub struct WordCloudNode {
    resources: WordCloudResources,
}

impl WordCloudNode {
    /// Creates a node over shared resources.
    #[must_use]
    pub const fn new(resources: WordCloudResources) -> Self {
        Self { resources }
    }

    /// Manifest registered with the host.
    #[must_use]
    pub fn manifest() -> NodeManifest {
        NodeManifest::new(NODE_ID, DISPLAY_NAME, CATEGORY)
            .with_output_node(true)
            .with_description("Renders weighted words from text as an image.")
    }

    fn font_options(&self) -> Vec<String> {
        let names = self.resources.fonts.font_names();
        if names.is_empty() {
            vec![DEFAULT_FONT.to_owned()]
        } else {
            names.into_iter().map(str::to_owned).collect()
        }
    }

    fn render_config(&self, inputs: &NodeInputs) -> Result<RenderConfig, NodeError> {
        let font = self.resources.fonts.resolve(inputs.string("font_path")?);
        let mask = inputs
            .image("mask_image")?
            .map(|tensor| decode(tensor, "mask_image"))
            .transpose()?
            .map(|image| Mask::new(white_background(&image)));

        RenderConfig::builder(font.path())
            .size(unsigned(inputs, "width")?, unsigned(inputs, "height")?)
            .scale(inputs.float("scale")?)
            .margin(unsigned(inputs, "margin")?)
            .font_sizes(
                unsigned(inputs, "min_font_size")?,
                Some(unsigned(inputs, "max_font_size")?),
            )
            .relative_scaling(inputs.float("relative_scaling")?)
            .colormap(inputs.string("colormap")?)
            .background(inputs.string("background_color")?)
            .transparent(inputs.bool("transparent_background")?)
            .prefer_horizontal(inputs.float("prefer_horizontal")?)
            .max_words(count(inputs, "max_words")?)
            .repeat(inputs.bool("repeat")?)
            .seed(Seed::from_raw(inputs.int("random_state")?))
            .mask(mask)
            .contour(
                inputs.float("contour_width")?,
                inputs.string("contour_color")?,
            )
            .build()
            .map_err(render_failure)
    }
}

impl Node for WordCloudNode {
    fn schema(&self) -> NodeSchema {
        NodeSchema::new()
            .required(InputSpec::string("text", "").multiline())
            .required(InputSpec::int("width", 512))
            .required(InputSpec::int("height", 512))
            .required(
                InputSpec::float("scale", 1.0)
                    .with_float_range(0.1, 1000.0)
                    .with_step(0.01),
            )
            .required(InputSpec::int("margin", 0))
            .required(InputSpec::combo("font_path", self.font_options()))
            .required(InputSpec::int("min_font_size", 4))
            .required(InputSpec::int("max_font_size", 128))
            .required(
                InputSpec::float("relative_scaling", 0.5)
                    .with_float_range(0.01, 1.0)
                    .with_step(0.01),
            )
            .required(InputSpec::combo("colormap", colormap_names()))
            .required(InputSpec::string("background_color", "#FFFFFF"))
            .required(InputSpec::boolean("transparent_background", false))
            .required(
                InputSpec::float("prefer_horizontal", 0.9)
                    .with_float_range(0.0, 1.0)
                    .with_step(0.01),
            )
            .required(InputSpec::int("max_words", 200))
            .required(InputSpec::boolean("repeat", false))
            .required(InputSpec::boolean("include_numbers", false))
            .required(InputSpec::int("random_state", -1).with_int_range(-1, SEED_MAX))
            .required(InputSpec::string("stopwords", ""))
            .optional(InputSpec::image("color_ref_image"))
            .optional(InputSpec::image("mask_image"))
            .optional(
                InputSpec::float("contour_width", 0.0)
                    .with_float_range(0.0, 9999.0)
                    .with_step(0.1),
            )
            .optional(InputSpec::string("contour_color", "#000000"))
            .optional(InputSpec::string("keynote_words", ""))
            .optional(InputSpec::int("keynote_weight", 60))
            .output(ValueKind::Image, "image")
    }

    fn execute(&self, inputs: &NodeInputs) -> Result<NodeOutput, NodeError> {
        let counter = WordCounter::default().with_include_numbers(inputs.bool("include_numbers")?);
        let keynotes = Keynotes::parse(
            inputs.string("keynote_words")?,
            weight(inputs.int("keynote_weight")?),
        );
        let stopwords = parse_stopwords(inputs.string("stopwords")?);
        let frequencies = FrequencyBuilder::new(self.resources.segmenter.as_ref())
            .with_counter(counter)
            .with_strategy(self.resources.strategy)
            .build(inputs.string("text")?, &keynotes, &stopwords);

        let config = self.render_config(inputs)?;
        let renderer = &self.resources.renderer;
        let mut cloud = renderer
            .generate(&frequencies, &config)
            .map_err(render_failure)?;
        if let Some(tensor) = inputs.image("color_ref_image")? {
            cloud.recolor(&decode(tensor, "color_ref_image")?.to_rgb8());
        }
        let image = renderer.to_image(&cloud).map_err(render_failure)?;
        tracing::info!(
            target: "dznodes::wordcloud",
            words = cloud.layout().len(),
            width = image.width(),
            height = image.height(),
            "word cloud rendered"
        );
        let tensor = ImageTensor::from_image(&image);
        Ok(NodeOutput::new(vec![NodeValue::from(tensor)]))
    }
}

fn decode(tensor: &ImageTensor, name: &str) -> Result<image::DynamicImage, NodeError> {
    tensor
        .to_image()
        .map_err(|error| NodeError::invalid_input(name, error.to_string()))
}

#[expect(
    clippy::cast_precision_loss,
    reason = "weights beyond 2^53 only need to dominate the frequency map"
)]
const fn weight(value: i128) -> f64 {
    value as f64
}

fn unsigned(inputs: &NodeInputs, name: &str) -> Result<u32, NodeError> {
    let value = inputs.int(name)?;
    u32::try_from(value).map_err(|_| {
        NodeError::invalid_input(
            name,
            format!("must be a non-negative 32-bit integer, got {value}"),
        )
    })
}

fn count(inputs: &NodeInputs, name: &str) -> Result<usize, NodeError> {
    let value = inputs.int(name)?;
    usize::try_from(value)
        .map_err(|_| NodeError::invalid_input(name, format!("must be non-negative, got {value}")))
}

fn render_failure(error: RenderError) -> NodeError {
    NodeError::execution(NODE_ID, error)
}

/// Registers [`WordCloudNode`].
#[derive(Debug, Clone)]
pub struct WordCloudProvider {
    resources: WordCloudResources,
}

impl WordCloudProvider {
    /// Creates a provider handing `resources` to every node instance.
    #[must_use]
    pub const fn new(resources: WordCloudResources) -> Self {
        Self { resources }
    }
}

impl NodeProvider for WordCloudProvider {
    fn registrations(&self) -> Vec<NodeRegistration> {
        let resources = self.resources.clone();
        vec![NodeRegistration::new(WordCloudNode::manifest(), move || {
            Box::new(WordCloudNode::new(resources.clone()))
        })]
    }
}
