//! Crate-level tests wiring providers, registry and schema together.

use serde_json::json;

use crate::error::NodeError;
use crate::manifest::NodeManifest;
use crate::node::Node;
use crate::registry::{NodeProvider, NodeRegistration, NodeRegistry};
use crate::schema::{InputSpec, NodeSchema};
use crate::value::{NodeInputs, NodeOutput, NodeValue, RawInputs, ValueKind};

struct Upper;

impl Node for Upper {
    fn schema(&self) -> NodeSchema {
        NodeSchema::new()
            .required(InputSpec::string("text", "").multiline())
            .output(ValueKind::String, "text")
    }

    fn execute(&self, inputs: &NodeInputs) -> Result<NodeOutput, NodeError> {
        let text = inputs.string("text")?.to_uppercase();
        Ok(NodeOutput::new(vec![NodeValue::from(text.clone())]).with_ui(json!({ "text": text })))
    }
}

struct StubProvider;

impl NodeProvider for StubProvider {
    fn registrations(&self) -> Vec<NodeRegistration> {
        vec![NodeRegistration::new(
            NodeManifest::new("Upper", "Upper Case", "😺dzNodes").with_output_node(true),
            || Box::new(Upper),
        )]
    }
}

#[test]
fn end_to_end_provider_registration_and_execution() {
    let mut registry = NodeRegistry::new();
    registry
        .register_provider(&StubProvider)
        .expect("register provider");

    let raw: RawInputs = [("text".to_owned(), NodeValue::from("word cloud"))]
        .into_iter()
        .collect();
    let output = registry.execute("Upper", raw).expect("execute");
    assert_eq!(output.result(), &[NodeValue::from("WORD CLOUD")]);
    assert_eq!(output.ui(), Some(&json!({ "text": "WORD CLOUD" })));

    let info = registry.object_info();
    assert_eq!(info["Upper"]["output_node"], json!(true));
    assert_eq!(
        registry.display_name_mappings().get("Upper"),
        Some(&"Upper Case")
    );
}
