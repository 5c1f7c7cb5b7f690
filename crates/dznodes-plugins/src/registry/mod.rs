//! Node registry for manifest storage, lookup and execution.
//!
//! The [`NodeRegistry`] stores validated registrations keyed by node id and
//! produces the two mappings the host's plugin loader expects: id to factory
//! and id to display name. Registrations come from [`NodeProvider`]s, one per
//! node module, so the pack enumerates its modules explicitly instead of
//! discovering them at run time. Duplicate ids are rejected.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::NodeError;
use crate::manifest::NodeManifest;
use crate::node::Node;
use crate::value::{NodeOutput, RawInputs};

/// Builds a fresh node instance.
pub type NodeFactory = Arc<dyn Fn() -> Box<dyn Node> + Send + Sync>;

/// A manifest paired with the factory that instantiates the node.
#[derive(Clone)]
pub struct NodeRegistration {
    manifest: NodeManifest,
    factory: NodeFactory,
}

impl NodeRegistration {
    /// Pairs `manifest` with `factory`.
    #[must_use]
    pub fn new<F>(manifest: NodeManifest, factory: F) -> Self
    where
        F: Fn() -> Box<dyn Node> + Send + Sync + 'static,
    {
        Self {
            manifest,
            factory: Arc::new(factory),
        }
    }

    /// Returns the manifest.
    #[must_use]
    pub const fn manifest(&self) -> &NodeManifest {
        &self.manifest
    }

    /// Returns the factory.
    #[must_use]
    pub const fn factory(&self) -> &NodeFactory {
        &self.factory
    }

    /// Builds a node instance.
    #[must_use]
    pub fn instantiate(&self) -> Box<dyn Node> {
        (self.factory)()
    }
}

impl fmt::Debug for NodeRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRegistration")
            .field("manifest", &self.manifest)
            .finish_non_exhaustive()
    }
}

/// Supplies the registrations of one node module.
pub trait NodeProvider {
    /// Returns the registrations this module contributes.
    fn registrations(&self) -> Vec<NodeRegistration>;
}

/// Registry of available nodes.
///
/// # Example
///
/// ```
/// use dznodes_plugins::{
///     Node, NodeError, NodeInputs, NodeManifest, NodeOutput, NodeRegistration, NodeRegistry,
///     NodeSchema,
/// };
///
/// struct Noop;
///
/// impl Node for Noop {
///     fn schema(&self) -> NodeSchema {
///         NodeSchema::new()
///     }
///
///     fn execute(&self, _inputs: &NodeInputs) -> Result<NodeOutput, NodeError> {
///         Ok(NodeOutput::default())
///     }
/// }
///
/// let mut registry = NodeRegistry::new();
/// let manifest = NodeManifest::new("Noop", "No-op", "test");
/// registry
///     .register(NodeRegistration::new(manifest, || Box::new(Noop)))
///     .expect("registration succeeds");
/// assert!(registry.get("Noop").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    registrations: HashMap<String, NodeRegistration>,
}

impl NodeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node after validating its manifest.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::Registration`] if validation fails or if a node
    /// with the same id is already registered.
    pub fn register(&mut self, registration: NodeRegistration) -> Result<(), NodeError> {
        registration.manifest().validate()?;
        let id = registration.manifest().id().to_owned();
        if self.registrations.contains_key(&id) {
            return Err(NodeError::Registration {
                message: format!("node '{id}' is already registered"),
            });
        }
        self.registrations.insert(id, registration);
        Ok(())
    }

    /// Registers every node supplied by `provider`.
    ///
    /// # Errors
    ///
    /// Stops at the first registration that fails; earlier ones are kept.
    pub fn register_provider(&mut self, provider: &dyn NodeProvider) -> Result<usize, NodeError> {
        let registrations = provider.registrations();
        let count = registrations.len();
        for registration in registrations {
            self.register(registration)?;
        }
        Ok(count)
    }

    /// Looks up a registration by node id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&NodeRegistration> {
        self.registrations.get(id)
    }

    /// Builds an instance of node `id`.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::NotFound`] for an unknown id.
    pub fn instantiate(&self, id: &str) -> Result<Box<dyn Node>, NodeError> {
        self.get(id)
            .map(NodeRegistration::instantiate)
            .ok_or_else(|| NodeError::NotFound { id: id.to_owned() })
    }

    /// Resolves `raw` against node `id`'s schema and runs the node.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::NotFound`] for an unknown id, schema errors from
    /// resolution, and whatever the node itself raises.
    pub fn execute(&self, id: &str, raw: RawInputs) -> Result<NodeOutput, NodeError> {
        let node = self.instantiate(id)?;
        let inputs = node.schema().resolve(raw)?;
        tracing::debug!(target: "dznodes::registry", node = id, "executing node");
        node.execute(&inputs)
    }

    /// Returns the id to factory mapping, ordered by id.
    #[must_use]
    pub fn class_mappings(&self) -> BTreeMap<&str, NodeFactory> {
        self.registrations
            .iter()
            .map(|(id, registration)| (id.as_str(), Arc::clone(registration.factory())))
            .collect()
    }

    /// Returns the id to display name mapping, ordered by id.
    #[must_use]
    pub fn display_name_mappings(&self) -> BTreeMap<&str, &str> {
        self.registrations
            .iter()
            .map(|(id, registration)| (id.as_str(), registration.manifest().display_name()))
            .collect()
    }

    /// Returns all nodes whose category matches exactly.
    #[must_use]
    pub fn find_by_category(&self, category: &str) -> Vec<&NodeManifest> {
        self.registrations
            .values()
            .map(NodeRegistration::manifest)
            .filter(|m| m.category() == category)
            .collect()
    }

    /// Returns the registered ids in sorted order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.registrations.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Renders the host's object-info document for every registered node.
    #[must_use]
    pub fn object_info(&self) -> Value {
        let entries: Map<String, Value> = self
            .registrations
            .iter()
            .map(|(id, registration)| {
                let schema = registration.instantiate().schema();
                (id.clone(), schema.to_json(registration.manifest()))
            })
            .collect();
        Value::Object(entries)
    }

    /// Returns the number of registered nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Returns `true` when no nodes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}
