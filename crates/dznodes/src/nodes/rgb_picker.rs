//! The colour picker node.

use dznodes_plugins::{
    InputSpec, Node, NodeError, NodeInputs, NodeManifest, NodeOutput, NodeProvider,
    NodeRegistration, NodeSchema, NodeValue, ValueKind,
};
use strum::VariantNames;

use super::WORDCLOUD_CATEGORY;

/// Node id registered with the host.
pub const NODE_ID: &str = "RGB_Picker";
/// Label shown by the host.
pub const DISPLAY_NAME: &str = "RGB Color Picker";

/// Output notation of the picked colour.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString, strum::VariantNames,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum PickerMode {
    /// The colour string as picked.
    Hex,
    /// Decimal channel triple, for example `(255, 128, 0)`.
    Dec,
}

/// Parses `#RRGGBB` into its decimal channels.
///
/// # Errors
///
/// Returns [`NodeError::InvalidInput`] for anything but a `#` followed by
/// six hexadecimal digits.
pub fn hex_to_dec(color: &str) -> Result<(u8, u8, u8), NodeError> {
    let malformed = || NodeError::invalid_input("color", format!("'{color}' is not #RRGGBB"));
    let digits = color.strip_prefix('#').ok_or_else(malformed)?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(malformed());
    }
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(malformed)
    };
    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Outputs a picked colour as hex or as decimal channels.
#[derive(Debug, Clone, Copy, Default)]
pub struct RgbPickerNode;

impl RgbPickerNode {
    /// Manifest registered with the host.
    #[must_use]
    pub fn manifest() -> NodeManifest {
        NodeManifest::new(NODE_ID, DISPLAY_NAME, WORDCLOUD_CATEGORY)
            .with_output_node(true)
            .with_description("Outputs a picked colour as text.")
    }
}

impl Node for RgbPickerNode {
    fn schema(&self) -> NodeSchema {
        NodeSchema::new()
            .required(InputSpec::color("color", "white"))
            .required(InputSpec::combo(
                "mode",
                PickerMode::VARIANTS.iter().copied(),
            ))
            .output(ValueKind::String, "value")
    }

    fn execute(&self, inputs: &NodeInputs) -> Result<NodeOutput, NodeError> {
        let color = inputs.string("color")?;
        let mode = inputs
            .string("mode")?
            .parse::<PickerMode>()
            .map_err(|error| NodeError::invalid_input("mode", error.to_string()))?;
        let value = match mode {
            PickerMode::Hex => color.to_owned(),
            PickerMode::Dec => {
                let (r, g, b) = hex_to_dec(color)?;
                format!("({r}, {g}, {b})")
            }
        };
        Ok(NodeOutput::new(vec![NodeValue::from(value)]))
    }
}

/// Registers [`RgbPickerNode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RgbPickerProvider;

impl NodeProvider for RgbPickerProvider {
    fn registrations(&self) -> Vec<NodeRegistration> {
        vec![NodeRegistration::new(RgbPickerNode::manifest(), || {
            Box::new(RgbPickerNode)
        })]
    }
}
