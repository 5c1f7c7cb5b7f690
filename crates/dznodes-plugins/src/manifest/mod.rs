//! Node manifests describing identity and placement in the host menu.
//!
//! A [`NodeManifest`] carries everything the host needs to list a node before
//! it is instantiated: its unique class identifier, the human-readable label,
//! the menu category, and whether the node terminates a graph. Manifests are
//! validated at registration time to reject obviously malformed entries.

use serde::{Deserialize, Serialize};

use crate::error::NodeError;

/// Declarative description of a node's identity.
///
/// # Example
///
/// ```
/// use dznodes_plugins::NodeManifest;
///
/// let manifest = NodeManifest::new("RGB_Picker", "RGB Color Picker", "😺dzNodes/WordCloud");
/// assert_eq!(manifest.id(), "RGB_Picker");
/// assert!(!manifest.output_node());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeManifest {
    id: String,
    display_name: String,
    category: String,
    #[serde(default)]
    output_node: bool,
    #[serde(default)]
    description: String,
}

impl NodeManifest {
    /// Creates a manifest for a non-output node with no description.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            category: category.into(),
            output_node: false,
            description: String::new(),
        }
    }

    /// Marks the node as a graph terminal whose UI payload is always shown.
    #[must_use]
    pub const fn with_output_node(mut self, output_node: bool) -> Self {
        self.output_node = output_node;
        self
    }

    /// Attaches a short description shown by the host.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Validates the manifest, returning an error if it is malformed.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::Registration`] if the identifier or display name
    /// is blank, or if the identifier contains whitespace.
    pub fn validate(&self) -> Result<(), NodeError> {
        if self.id.trim().is_empty() {
            return Err(NodeError::Registration {
                message: String::from("node id must not be empty"),
            });
        }
        if self.id.chars().any(char::is_whitespace) {
            return Err(NodeError::Registration {
                message: format!("node id '{}' must not contain whitespace", self.id),
            });
        }
        if self.display_name.trim().is_empty() {
            return Err(NodeError::Registration {
                message: format!("node '{}' must have a display name", self.id),
            });
        }
        Ok(())
    }

    /// Returns the class identifier.
    #[must_use]
    pub const fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Returns the menu category.
    #[must_use]
    pub const fn category(&self) -> &str {
        self.category.as_str()
    }

    /// Returns `true` when the node terminates a graph.
    #[must_use]
    pub const fn output_node(&self) -> bool {
        self.output_node
    }

    /// Returns the description, which may be empty.
    #[must_use]
    pub const fn description(&self) -> &str {
        self.description.as_str()
    }
}
