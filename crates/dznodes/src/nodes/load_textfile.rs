//! The text file loader node.

use std::fs;
use std::io;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use dznodes_plugins::{
    InputSpec, Node, NodeError, NodeInputs, NodeManifest, NodeOutput, NodeProvider,
    NodeRegistration, NodeSchema, NodeValue, ValueKind,
};
use serde_json::json;
use thiserror::Error;

use super::CATEGORY;

/// Node id registered with the host.
pub const NODE_ID: &str = "LoadTextFile";
/// Label shown by the host.
pub const DISPLAY_NAME: &str = "Load Text File";
/// Path offered before the user picks one.
pub const DEFAULT_PATH: &str = r"c:\text.txt";

/// Errors raised while reading a text file.
#[derive(Debug, Clone, Error)]
pub enum TextFileError {
    /// The file could not be read as UTF-8 text.
    #[error("failed to read text file '{path}': {source}")]
    Read {
        /// Requested path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<io::Error>,
    },
}

/// Reads `path` as UTF-8 text.
///
/// # Errors
///
/// Returns [`TextFileError::Read`] when the file is missing, unreadable or
/// not valid UTF-8.
pub fn read_text_file(path: &Utf8Path) -> Result<String, TextFileError> {
    fs::read_to_string(path).map_err(|source| TextFileError::Read {
        path: path.to_path_buf(),
        source: Arc::new(source),
    })
}

/// Loads a UTF-8 text file, yielding an empty string when it cannot be read.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadTextFileNode;

impl LoadTextFileNode {
    /// Manifest registered with the host.
    #[must_use]
    pub fn manifest() -> NodeManifest {
        NodeManifest::new(NODE_ID, DISPLAY_NAME, CATEGORY)
            .with_output_node(true)
            .with_description("Reads a UTF-8 text file.")
    }
}

impl Node for LoadTextFileNode {
    fn schema(&self) -> NodeSchema {
        NodeSchema::new()
            .required(InputSpec::string("path", DEFAULT_PATH))
            .output(ValueKind::String, "Text")
    }

    fn execute(&self, inputs: &NodeInputs) -> Result<NodeOutput, NodeError> {
        let path = Utf8Path::new(inputs.string("path")?);
        let text = match read_text_file(path) {
            Ok(text) => {
                tracing::info!(target: "dznodes::textfile", path = %path, "text file loaded");
                text
            }
            Err(error) => {
                tracing::error!(
                    target: "dznodes::textfile",
                    path = %path,
                    error = %error,
                    "text file could not be loaded"
                );
                String::new()
            }
        };
        Ok(NodeOutput::new(vec![NodeValue::from(text.as_str())]).with_ui(json!({ "text": text })))
    }
}

/// Registers [`LoadTextFileNode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadTextFileProvider;

impl NodeProvider for LoadTextFileProvider {
    fn registrations(&self) -> Vec<NodeRegistration> {
        vec![NodeRegistration::new(LoadTextFileNode::manifest(), || {
            Box::new(LoadTextFileNode)
        })]
    }
}
