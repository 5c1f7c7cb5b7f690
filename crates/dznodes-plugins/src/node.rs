//! The executable node seam.

use crate::error::NodeError;
use crate::schema::NodeSchema;
use crate::value::{NodeInputs, NodeOutput};

/// A processing node the host can place in a graph.
///
/// Nodes are instantiated per invocation by their registered factory, so
/// implementations hold only shared, read-only collaborators.
pub trait Node: Send + Sync {
    /// Describes the node's inputs and outputs.
    fn schema(&self) -> NodeSchema;

    /// Runs the node on inputs already resolved against [`Node::schema`].
    ///
    /// # Errors
    ///
    /// Returns a [`NodeError`] when the node's collaborators fail.
    fn execute(&self, inputs: &NodeInputs) -> Result<NodeOutput, NodeError>;
}
