//! Values flowing into and out of nodes.
//!
//! Raw caller values arrive as [`NodeValue`]s keyed by input name. After
//! schema resolution they are wrapped in [`NodeInputs`], whose typed getters
//! let a node read its parameters without re-checking kinds.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::NodeError;
use crate::tensor::ImageTensor;

/// Raw input values keyed by input name, as supplied by the host.
pub type RawInputs = BTreeMap<String, NodeValue>;

/// Primitive kinds understood by the host's widget system.
///
/// # Example
///
/// ```
/// use dznodes_plugins::ValueKind;
///
/// assert_eq!(ValueKind::Image.as_str(), "IMAGE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValueKind {
    /// Signed integer widget.
    Int,
    /// Floating-point widget.
    Float,
    /// Toggle widget.
    Boolean,
    /// Text widget.
    String,
    /// Image tensor socket.
    Image,
    /// Colour picker widget; values travel as strings.
    Color,
}

impl ValueKind {
    /// Returns the host's type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Boolean => "BOOLEAN",
            Self::String => "STRING",
            Self::Image => "IMAGE",
            Self::Color => "COLOR",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single value supplied to or produced by a node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    /// Integer value. Wide enough for the full unsigned 64-bit seed range.
    Int(i128),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Text value, also used for combo selections and colours.
    String(String),
    /// Image tensor.
    Image(ImageTensor),
}

impl NodeValue {
    /// Returns the kind of the value as the host would name it.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Bool(_) => ValueKind::Boolean,
            Self::String(_) => ValueKind::String,
            Self::Image(_) => ValueKind::Image,
        }
    }

    /// Returns the text when the value is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Returns the tensor when the value is an image.
    #[must_use]
    pub const fn as_image(&self) -> Option<&ImageTensor> {
        match self {
            Self::Image(tensor) => Some(tensor),
            _ => None,
        }
    }
}

impl From<i128> for NodeValue {
    fn from(value: i128) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for NodeValue {
    fn from(value: i64) -> Self {
        Self::Int(i128::from(value))
    }
}

impl From<f64> for NodeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for NodeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for NodeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for NodeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<ImageTensor> for NodeValue {
    fn from(value: ImageTensor) -> Self {
        Self::Image(value)
    }
}

/// Inputs that have passed schema resolution.
///
/// Every required input is present and every value matches its declared
/// kind, so getters only fail when a node asks for an input it never
/// declared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeInputs {
    values: BTreeMap<String, NodeValue>,
}

impl NodeInputs {
    pub(crate) const fn new(values: BTreeMap<String, NodeValue>) -> Self {
        Self { values }
    }

    /// Returns the raw value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NodeValue> {
        self.values.get(name)
    }

    /// Returns `true` when `name` resolved to a value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Reads an integer input.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::MissingInput`] or [`NodeError::InvalidInput`].
    pub fn int(&self, name: &str) -> Result<i128, NodeError> {
        match self.require(name)? {
            NodeValue::Int(value) => Ok(*value),
            other => Err(kind_mismatch(name, ValueKind::Int, other)),
        }
    }

    /// Reads a floating-point input.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::MissingInput`] or [`NodeError::InvalidInput`].
    pub fn float(&self, name: &str) -> Result<f64, NodeError> {
        match self.require(name)? {
            NodeValue::Float(value) => Ok(*value),
            other => Err(kind_mismatch(name, ValueKind::Float, other)),
        }
    }

    /// Reads a boolean input.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::MissingInput`] or [`NodeError::InvalidInput`].
    pub fn bool(&self, name: &str) -> Result<bool, NodeError> {
        match self.require(name)? {
            NodeValue::Bool(value) => Ok(*value),
            other => Err(kind_mismatch(name, ValueKind::Boolean, other)),
        }
    }

    /// Reads a text input.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::MissingInput`] or [`NodeError::InvalidInput`].
    pub fn string(&self, name: &str) -> Result<&str, NodeError> {
        match self.require(name)? {
            NodeValue::String(value) => Ok(value.as_str()),
            other => Err(kind_mismatch(name, ValueKind::String, other)),
        }
    }

    /// Reads an optional image input; `None` when it was not connected.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::InvalidInput`] when the value is not an image.
    pub fn image(&self, name: &str) -> Result<Option<&ImageTensor>, NodeError> {
        match self.values.get(name) {
            None => Ok(None),
            Some(NodeValue::Image(tensor)) => Ok(Some(tensor)),
            Some(other) => Err(kind_mismatch(name, ValueKind::Image, other)),
        }
    }

    fn require(&self, name: &str) -> Result<&NodeValue, NodeError> {
        self.values.get(name).ok_or_else(|| NodeError::MissingInput {
            name: name.to_owned(),
        })
    }
}

pub(crate) fn kind_mismatch(name: &str, expected: ValueKind, found: &NodeValue) -> NodeError {
    NodeError::invalid_input(name, format!("expected {expected}, got {}", found.kind()))
}

/// Result of executing a node.
///
/// `result` holds one value per declared output. `ui` carries the optional
/// payload the host shows on the node itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeOutput {
    result: Vec<NodeValue>,
    ui: Option<serde_json::Value>,
}

impl NodeOutput {
    /// Creates an output with no UI payload.
    #[must_use]
    pub const fn new(result: Vec<NodeValue>) -> Self {
        Self { result, ui: None }
    }

    /// Attaches a UI payload.
    #[must_use]
    pub fn with_ui(mut self, ui: serde_json::Value) -> Self {
        self.ui = Some(ui);
        self
    }

    /// Returns the output values.
    #[must_use]
    pub fn result(&self) -> &[NodeValue] {
        &self.result
    }

    /// Consumes the output, returning the values.
    #[must_use]
    pub fn into_result(self) -> Vec<NodeValue> {
        self.result
    }

    /// Returns the UI payload, if any.
    #[must_use]
    pub const fn ui(&self) -> Option<&serde_json::Value> {
        self.ui.as_ref()
    }
}
