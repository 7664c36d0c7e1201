//! Contract tests pinning tool input schemas.

use mcp_workbench::mcp::registry::CapabilityRegistry;
use rmcp::model::Tool;
use serde_json::Value;

fn find_tool(name: &str) -> Tool {
    CapabilityRegistry::builtin()
        .list_tools()
        .into_iter()
        .find(|tool| tool.name == name)
        .unwrap_or_else(|| panic!("tool {name} not registered"))
}

fn required_fields(tool: &Tool) -> Vec<String> {
    tool.input_schema
        .get("required")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn every_schema_is_an_object_schema() {
    for tool in CapabilityRegistry::builtin().list_tools() {
        assert_eq!(
            tool.input_schema.get("type").and_then(Value::as_str),
            Some("object"),
            "{} schema is not an object",
            tool.name
        );
    }
}

#[test]
fn arithmetic_tools_require_both_operands() {
    for name in ["calculate_sum", "calculate_product", "divide"] {
        let tool = find_tool(name);
        assert_eq!(required_fields(&tool), ["a", "b"], "{name} required fields");
    }
}

#[test]
fn percentage_requires_part_and_total() {
    let tool = find_tool("calculate_percentage");
    assert_eq!(required_fields(&tool), ["part", "total"]);
}

#[test]
fn greet_user_requires_name() {
    let tool = find_tool("greet_user");
    assert_eq!(required_fields(&tool), ["name"]);
}

#[test]
fn analyze_text_requires_text() {
    let tool = find_tool("analyze_text");
    assert_eq!(required_fields(&tool), ["text"]);
}

#[test]
fn get_user_list_has_only_optional_fields() {
    let tool = find_tool("get_user_list");
    assert!(required_fields(&tool).is_empty());

    let default = tool
        .input_schema
        .get("properties")
        .and_then(|props| props.get("include_inactive"))
        .and_then(|prop| prop.get("default"));
    assert_eq!(default, Some(&Value::Bool(false)));
}

#[test]
fn trigger_error_takes_no_parameters() {
    let tool = find_tool("trigger_error");
    assert!(required_fields(&tool).is_empty());
    let properties = tool
        .input_schema
        .get("properties")
        .and_then(Value::as_object);
    assert!(properties.is_some_and(serde_json::Map::is_empty));
}
