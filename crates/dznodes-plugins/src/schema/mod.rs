//! Node parameter schemas.
//!
//! A [`NodeSchema`] lists a node's required and optional inputs together with
//! their kinds, defaults and constraints, plus the node's outputs. The same
//! description serves two purposes: it is exported as the host's object-info
//! JSON so the host can build widgets, and it resolves raw caller values into
//! validated [`NodeInputs`] before a node runs.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};

use crate::error::NodeError;
use crate::manifest::NodeManifest;
use crate::value::{NodeInputs, NodeValue, RawInputs, ValueKind, kind_mismatch};

/// Kind, default and constraints of a single input.
#[derive(Debug, Clone, PartialEq)]
pub enum InputKind {
    /// Integer with optional inclusive bounds.
    Int {
        /// Value used when the caller omits the input.
        default: i128,
        /// Inclusive lower bound.
        min: Option<i128>,
        /// Inclusive upper bound.
        max: Option<i128>,
    },
    /// Float with optional inclusive bounds and widget step.
    Float {
        /// Value used when the caller omits the input.
        default: f64,
        /// Inclusive lower bound.
        min: Option<f64>,
        /// Inclusive upper bound.
        max: Option<f64>,
        /// Widget increment.
        step: Option<f64>,
    },
    /// Toggle.
    Boolean {
        /// Value used when the caller omits the input.
        default: bool,
    },
    /// Free text.
    String {
        /// Value used when the caller omits the input.
        default: String,
        /// Whether the widget is a multi-line text area.
        multiline: bool,
    },
    /// Selection from a fixed list; the first option is the default.
    Combo {
        /// Permitted values.
        options: Vec<String>,
    },
    /// Colour picker.
    Color {
        /// Value used when the caller omits the input.
        default: String,
    },
    /// Image socket with no default.
    Image,
}

impl InputKind {
    /// Kind of value the input accepts.
    #[must_use]
    pub const fn value_kind(&self) -> ValueKind {
        match self {
            Self::Int { .. } => ValueKind::Int,
            Self::Float { .. } => ValueKind::Float,
            Self::Boolean { .. } => ValueKind::Boolean,
            Self::String { .. } | Self::Combo { .. } => ValueKind::String,
            Self::Color { .. } => ValueKind::Color,
            Self::Image => ValueKind::Image,
        }
    }
}

/// A named input with its kind.
///
/// # Example
///
/// ```
/// use dznodes_plugins::InputSpec;
///
/// let scale = InputSpec::float("scale", 1.0)
///     .with_float_range(0.1, 1000.0)
///     .with_step(0.01);
/// assert_eq!(scale.name(), "scale");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InputSpec {
    name: String,
    kind: InputKind,
}

impl InputSpec {
    /// Integer input.
    #[must_use]
    pub fn int(name: impl Into<String>, default: i128) -> Self {
        Self::with_kind(
            name,
            InputKind::Int {
                default,
                min: None,
                max: None,
            },
        )
    }

    /// Float input.
    #[must_use]
    pub fn float(name: impl Into<String>, default: f64) -> Self {
        Self::with_kind(
            name,
            InputKind::Float {
                default,
                min: None,
                max: None,
                step: None,
            },
        )
    }

    /// Boolean input.
    #[must_use]
    pub fn boolean(name: impl Into<String>, default: bool) -> Self {
        Self::with_kind(name, InputKind::Boolean { default })
    }

    /// Single-line text input.
    #[must_use]
    pub fn string(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            InputKind::String {
                default: default.into(),
                multiline: false,
            },
        )
    }

    /// Selection input.
    #[must_use]
    pub fn combo<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_kind(
            name,
            InputKind::Combo {
                options: options.into_iter().map(Into::into).collect(),
            },
        )
    }

    /// Colour picker input.
    #[must_use]
    pub fn color(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            InputKind::Color {
                default: default.into(),
            },
        )
    }

    /// Image socket.
    #[must_use]
    pub fn image(name: impl Into<String>) -> Self {
        Self::with_kind(name, InputKind::Image)
    }

    fn with_kind(name: impl Into<String>, kind: InputKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Sets inclusive bounds on an integer input. Ignored for other kinds.
    #[must_use]
    pub fn with_int_range(mut self, lower: i128, upper: i128) -> Self {
        if let InputKind::Int { min, max, .. } = &mut self.kind {
            *min = Some(lower);
            *max = Some(upper);
        }
        self
    }

    /// Sets inclusive bounds on a float input. Ignored for other kinds.
    #[must_use]
    pub fn with_float_range(mut self, lower: f64, upper: f64) -> Self {
        if let InputKind::Float { min, max, .. } = &mut self.kind {
            *min = Some(lower);
            *max = Some(upper);
        }
        self
    }

    /// Sets the widget increment of a float input. Ignored for other kinds.
    #[must_use]
    pub fn with_step(mut self, increment: f64) -> Self {
        if let InputKind::Float { step, .. } = &mut self.kind {
            *step = Some(increment);
        }
        self
    }

    /// Turns a text input into a multi-line text area.
    #[must_use]
    pub fn multiline(mut self) -> Self {
        if let InputKind::String { multiline, .. } = &mut self.kind {
            *multiline = true;
        }
        self
    }

    /// Returns the input name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the input kind.
    #[must_use]
    pub const fn kind(&self) -> &InputKind {
        &self.kind
    }

    /// Value substituted when the caller omits the input.
    #[must_use]
    pub fn default_value(&self) -> Option<NodeValue> {
        match &self.kind {
            InputKind::Int { default, .. } => Some(NodeValue::Int(*default)),
            InputKind::Float { default, .. } => Some(NodeValue::Float(*default)),
            InputKind::Boolean { default } => Some(NodeValue::Bool(*default)),
            InputKind::String { default, .. } | InputKind::Color { default } => {
                Some(NodeValue::String(default.clone()))
            }
            InputKind::Combo { options } => options.first().cloned().map(NodeValue::String),
            InputKind::Image => None,
        }
    }

    /// Checks `value` against the input's kind and constraints.
    ///
    /// Integers supplied for float inputs are widened.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::InvalidInput`] on a kind mismatch, a bound
    /// violation or an unknown combo option.
    pub fn check(&self, value: NodeValue) -> Result<NodeValue, NodeError> {
        let name = self.name();
        match (&self.kind, value) {
            (InputKind::Int { min, max, .. }, NodeValue::Int(v)) => {
                check_bounds(name, v, *min, *max)?;
                Ok(NodeValue::Int(v))
            }
            (InputKind::Float { min, max, .. }, NodeValue::Float(v)) => {
                check_float(name, v, *min, *max)?;
                Ok(NodeValue::Float(v))
            }
            (InputKind::Float { min, max, .. }, NodeValue::Int(v)) => {
                let widened = widen(v);
                check_float(name, widened, *min, *max)?;
                Ok(NodeValue::Float(widened))
            }
            (InputKind::Boolean { .. }, value @ NodeValue::Bool(_))
            | (
                InputKind::String { .. } | InputKind::Color { .. },
                value @ NodeValue::String(_),
            )
            | (InputKind::Image, value @ NodeValue::Image(_)) => Ok(value),
            (InputKind::Combo { options }, NodeValue::String(v)) => {
                if options.iter().any(|option| *option == v) {
                    Ok(NodeValue::String(v))
                } else {
                    Err(NodeError::invalid_input(
                        name,
                        format!("'{v}' is not one of {} permitted options", options.len()),
                    ))
                }
            }
            (kind, other) => Err(kind_mismatch(name, kind.value_kind(), &other)),
        }
    }

    fn to_json(&self) -> Value {
        match &self.kind {
            InputKind::Int { default, min, max } => {
                let mut options = Map::new();
                options.insert("default".into(), int_json(*default));
                if let Some(min) = min {
                    options.insert("min".into(), int_json(*min));
                }
                if let Some(max) = max {
                    options.insert("max".into(), int_json(*max));
                }
                json!([ValueKind::Int.as_str(), options])
            }
            InputKind::Float {
                default,
                min,
                max,
                step,
            } => {
                let mut options = Map::new();
                options.insert("default".into(), json!(default));
                for (key, bound) in [("min", min), ("max", max), ("step", step)] {
                    if let Some(bound) = bound {
                        options.insert(key.into(), json!(bound));
                    }
                }
                json!([ValueKind::Float.as_str(), options])
            }
            InputKind::Boolean { default } => {
                json!([ValueKind::Boolean.as_str(), {"default": default}])
            }
            InputKind::String { default, multiline } => {
                json!([ValueKind::String.as_str(), {"default": default, "multiline": multiline}])
            }
            InputKind::Combo { options } => json!([options]),
            InputKind::Color { default } => {
                json!([ValueKind::Color.as_str(), {"default": default}])
            }
            InputKind::Image => json!([ValueKind::Image.as_str()]),
        }
    }
}

fn check_bounds(
    name: &str,
    value: i128,
    min: Option<i128>,
    max: Option<i128>,
) -> Result<(), NodeError> {
    if let Some(min) = min.filter(|min| value < *min) {
        return Err(NodeError::invalid_input(
            name,
            format!("{value} is below the minimum {min}"),
        ));
    }
    if let Some(max) = max.filter(|max| value > *max) {
        return Err(NodeError::invalid_input(
            name,
            format!("{value} is above the maximum {max}"),
        ));
    }
    Ok(())
}

fn check_float(
    name: &str,
    value: f64,
    min: Option<f64>,
    max: Option<f64>,
) -> Result<(), NodeError> {
    if value.is_nan() {
        return Err(NodeError::invalid_input(name, "value is not a number"));
    }
    if let Some(min) = min.filter(|min| value < *min) {
        return Err(NodeError::invalid_input(
            name,
            format!("{value} is below the minimum {min}"),
        ));
    }
    if let Some(max) = max.filter(|max| value > *max) {
        return Err(NodeError::invalid_input(
            name,
            format!("{value} is above the maximum {max}"),
        ));
    }
    Ok(())
}

#[expect(
    clippy::cast_precision_loss,
    reason = "integer widget values are far below 2^52"
)]
fn widen(value: i128) -> f64 {
    value as f64
}

/// Integers beyond `i64` but within `u64` (seed bounds) stay numeric.
fn int_json(value: i128) -> Value {
    if let Ok(signed) = i64::try_from(value) {
        Value::from(signed)
    } else if let Ok(unsigned) = u64::try_from(value) {
        Value::from(unsigned)
    } else {
        Value::from(value.to_string())
    }
}

fn input_order(specs: &[InputSpec]) -> Vec<&str> {
    specs.iter().map(InputSpec::name).collect()
}

/// A named output socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    kind: ValueKind,
    name: String,
}

impl OutputSpec {
    /// Returns the output kind.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Returns the output name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Inputs and outputs of a node.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use dznodes_plugins::{InputSpec, NodeSchema, NodeValue, ValueKind};
///
/// let schema = NodeSchema::new()
///     .required(InputSpec::string("path", "c:\\text.txt"))
///     .output(ValueKind::String, "text");
/// let inputs = schema.resolve(BTreeMap::new()).expect("defaults apply");
/// assert_eq!(inputs.string("path").expect("path"), "c:\\text.txt");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeSchema {
    required: Vec<InputSpec>,
    optional: Vec<InputSpec>,
    outputs: Vec<OutputSpec>,
}

impl NodeSchema {
    /// Creates a schema with no inputs or outputs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a required input.
    #[must_use]
    pub fn required(mut self, spec: InputSpec) -> Self {
        self.required.push(spec);
        self
    }

    /// Appends an optional input.
    #[must_use]
    pub fn optional(mut self, spec: InputSpec) -> Self {
        self.optional.push(spec);
        self
    }

    /// Appends an output socket.
    #[must_use]
    pub fn output(mut self, kind: ValueKind, name: impl Into<String>) -> Self {
        self.outputs.push(OutputSpec {
            kind,
            name: name.into(),
        });
        self
    }

    /// Returns the required inputs in declaration order.
    #[must_use]
    pub fn required_inputs(&self) -> &[InputSpec] {
        &self.required
    }

    /// Returns the optional inputs in declaration order.
    #[must_use]
    pub fn optional_inputs(&self) -> &[InputSpec] {
        &self.optional
    }

    /// Returns the outputs in declaration order.
    #[must_use]
    pub fn outputs(&self) -> &[OutputSpec] {
        &self.outputs
    }

    /// Resolves raw caller values into validated inputs.
    ///
    /// Omitted inputs take their defaults. Optional inputs without a default
    /// (image sockets) stay absent. Unknown names are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::MissingInput`] when a required input has neither
    /// a value nor a default, and [`NodeError::InvalidInput`] when a value
    /// fails [`InputSpec::check`].
    pub fn resolve(&self, mut raw: RawInputs) -> Result<NodeInputs, NodeError> {
        let mut values = BTreeMap::new();
        for spec in &self.required {
            let value = raw
                .remove(spec.name())
                .or_else(|| spec.default_value())
                .ok_or_else(|| NodeError::MissingInput {
                    name: spec.name().to_owned(),
                })?;
            values.insert(spec.name().to_owned(), spec.check(value)?);
        }
        for spec in &self.optional {
            if let Some(value) = raw.remove(spec.name()).or_else(|| spec.default_value()) {
                values.insert(spec.name().to_owned(), spec.check(value)?);
            }
        }
        if !raw.is_empty() {
            tracing::debug!(
                target: "dznodes::schema",
                ignored = ?raw.keys().collect::<Vec<_>>(),
                "ignoring undeclared inputs"
            );
        }
        Ok(NodeInputs::new(values))
    }

    /// Renders the host's object-info entry for a node with this schema.
    #[must_use]
    pub fn to_json(&self, manifest: &NodeManifest) -> Value {
        let section = |specs: &[InputSpec]| -> Map<String, Value> {
            specs
                .iter()
                .map(|spec| (spec.name().to_owned(), spec.to_json()))
                .collect()
        };

        let mut input = Map::new();
        input.insert("required".into(), Value::Object(section(&self.required)));
        if !self.optional.is_empty() {
            input.insert("optional".into(), Value::Object(section(&self.optional)));
        }

        json!({
            "input": input,
            "input_order": {
                "required": input_order(&self.required),
                "optional": input_order(&self.optional),
            },
            "output": self.outputs.iter().map(|o| o.kind.as_str()).collect::<Vec<_>>(),
            "output_is_list": self.outputs.iter().map(|_| false).collect::<Vec<_>>(),
            "output_name": self.outputs.iter().map(OutputSpec::name).collect::<Vec<_>>(),
            "name": manifest.id(),
            "display_name": manifest.display_name(),
            "description": manifest.description(),
            "category": manifest.category(),
            "output_node": manifest.output_node(),
        })
    }
}
