//! Contract tests pinning the registered resource set.

use mcp_workbench::mcp::registry::CapabilityRegistry;

#[test]
fn builtin_registry_exposes_three_resources() {
    let registry = CapabilityRegistry::builtin();
    let uris: Vec<String> = registry
        .list_resources()
        .iter()
        .map(|resource| resource.uri.clone())
        .collect();
    assert_eq!(uris, ["config://settings", "data://stats", "data://users"]);
}

#[test]
fn mime_types_match_content_kinds() {
    let registry = CapabilityRegistry::builtin();
    for resource in registry.list_resources() {
        let mime = resource.mime_type.as_deref().unwrap_or_default();
        match resource.uri.as_str() {
            "data://stats" => assert_eq!(mime, "application/json"),
            _ => assert_eq!(mime, "text/plain", "{} mime type", resource.uri),
        }
    }
}

#[test]
fn every_resource_has_name_and_description() {
    let registry = CapabilityRegistry::builtin();
    for resource in registry.list_resources() {
        assert!(!resource.name.is_empty());
        let description = resource.description.as_deref().unwrap_or_default();
        assert!(!description.is_empty(), "{} lacks description", resource.uri);
    }
}
