//! Node registration and execution framework for the dzNodes pack.
//!
//! The `dznodes-plugins` crate models the host's plugin contract. Each node
//! publishes a [`NodeManifest`] (id, display name, category) and a
//! [`NodeSchema`] describing its inputs and outputs. The [`NodeRegistry`]
//! aggregates registrations from the pack's [`NodeProvider`]s, exposes the
//! id to factory and id to display name mappings the host loads, renders
//! the object-info JSON used to build widgets, and executes nodes after
//! resolving raw caller values against their schema.
//!
//! Images cross the boundary as [`ImageTensor`]s in the host's
//! `[batch, height, width, channels]` layout.
//!
//! # Example
//!
//! ```rust
//! use dznodes_plugins::{
//!     InputSpec, Node, NodeError, NodeInputs, NodeManifest, NodeOutput, NodeRegistration,
//!     NodeRegistry, NodeSchema, NodeValue, RawInputs, ValueKind,
//! };
//!
//! struct Echo;
//!
//! impl Node for Echo {
//!     fn schema(&self) -> NodeSchema {
//!         NodeSchema::new()
//!             .required(InputSpec::string("text", "hi"))
//!             .output(ValueKind::String, "text")
//!     }
//!
//!     fn execute(&self, inputs: &NodeInputs) -> Result<NodeOutput, NodeError> {
//!         Ok(NodeOutput::new(vec![NodeValue::from(inputs.string("text")?)]))
//!     }
//! }
//!
//! let mut registry = NodeRegistry::new();
//! registry
//!     .register(NodeRegistration::new(NodeManifest::new("Echo", "Echo", "demo"), || {
//!         Box::new(Echo)
//!     }))
//!     .expect("registration succeeds");
//!
//! let output = registry.execute("Echo", RawInputs::new()).expect("execute");
//! assert_eq!(output.result(), &[NodeValue::from("hi")]);
//! ```

pub mod error;
pub mod manifest;
pub mod node;
pub mod registry;
pub mod schema;
pub mod tensor;
pub mod value;

#[cfg(test)]
mod tests;

pub use self::error::{BoxedSource, NodeError};
pub use self::manifest::NodeManifest;
pub use self::node::Node;
pub use self::registry::{NodeFactory, NodeProvider, NodeRegistration, NodeRegistry};
pub use self::schema::{InputKind, InputSpec, NodeSchema, OutputSpec};
pub use self::tensor::{ImageTensor, TensorError, white_background};
pub use self::value::{NodeInputs, NodeOutput, NodeValue, RawInputs, ValueKind};
