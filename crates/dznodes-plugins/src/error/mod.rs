//! Domain errors raised by node registration and execution.
//!
//! All errors use `thiserror`-derived enums with structured context so callers
//! can inspect the failure programmatically. Execution failures keep the
//! underlying error as a boxed source so the host can surface it verbatim.

use thiserror::Error;

/// Boxed error raised by a node's own collaborators.
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors arising from node registration, input resolution, or execution.
#[derive(Debug, Error)]
pub enum NodeError {
    /// The requested node was not found in the registry.
    #[error("node '{id}' not found in registry")]
    NotFound {
        /// Identifier that was looked up.
        id: String,
    },

    /// A node manifest failed validation or collided with another node.
    #[error("registration error: {message}")]
    Registration {
        /// Description of the validation failure.
        message: String,
    },

    /// A required input was absent and has no default.
    #[error("missing required input '{name}'")]
    MissingInput {
        /// Input name.
        name: String,
    },

    /// An input value had the wrong kind or violated its constraints.
    #[error("invalid input '{name}': {message}")]
    InvalidInput {
        /// Input name.
        name: String,
        /// Description of the violation.
        message: String,
    },

    /// The node's collaborators failed while executing.
    #[error("node '{id}' failed: {source}")]
    Execution {
        /// Node identifier.
        id: String,
        /// Underlying failure.
        #[source]
        source: BoxedSource,
    },
}

impl NodeError {
    /// Builds an [`NodeError::InvalidInput`] for `name`.
    #[must_use]
    pub fn invalid_input(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Wraps a collaborator failure raised while executing node `id`.
    #[must_use]
    pub fn execution(
        id: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Execution {
            id: id.into(),
            source: Box::new(source),
        }
    }
}
