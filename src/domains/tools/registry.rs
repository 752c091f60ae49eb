//! Tool Registry - central registration and lookup for all tools.
//!
//! This module provides:
//! - A registry of all available tool definitions, keyed by name
//! - Static consistency checks over the whole tool table
//! - Tool metadata for listing

use std::collections::{HashMap, HashSet};

use rmcp::model::Tool;
use tracing::{debug, error};

use super::definitions::ALL_TOOLS;
use super::error::ToolError;
use super::schema::{Placement, ToolDefinition, path_placeholders};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - owns every tool definition for the process lifetime.
///
/// Populated once at startup and read-only afterwards.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the full admin tool table, verified.
    pub fn builtin() -> Result<Self, ToolError> {
        let registry = Self::from_definitions(ALL_TOOLS.iter().flat_map(|group| group.iter()))?;
        registry.verify()?;
        debug!("Registered {} tools", registry.len());
        Ok(registry)
    }

    /// Build a registry from definitions, failing on the first duplicate name.
    pub fn from_definitions<'a>(
        definitions: impl IntoIterator<Item = &'a ToolDefinition>,
    ) -> Result<Self, ToolError> {
        let mut registry = Self::new();
        for def in definitions {
            registry.register(*def)?;
        }
        Ok(registry)
    }

    /// Add a definition. Names are unique.
    pub fn register(&mut self, def: ToolDefinition) -> Result<(), ToolError> {
        if self.index.contains_key(def.name) {
            return Err(ToolError::duplicate_name(def.name));
        }
        self.index.insert(def.name, self.tools.len());
        self.tools.push(def);
        Ok(())
    }

    /// Find a definition by name.
    pub fn lookup(&self, name: &str) -> Result<&ToolDefinition, ToolError> {
        self.index
            .get(name)
            .map(|&i| &self.tools[i])
            .ok_or_else(|| ToolError::not_found(name))
    }

    /// Definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter()
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Get all tools as Tool models (metadata).
    pub fn to_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(to_tool).collect()
    }

    /// Check every definition's path template against its parameters.
    ///
    /// The placeholder set must equal the set of path-placed parameters, and
    /// every path parameter must be a required scalar. A failure here is a
    /// defect in the tool table.
    pub fn verify(&self) -> Result<(), ToolError> {
        for def in &self.tools {
            if let Err(e) = verify_definition(def) {
                error!("Invalid tool definition: {}", e);
                return Err(e);
            }
        }
        Ok(())
    }
}

fn verify_definition(def: &ToolDefinition) -> Result<(), ToolError> {
    let defect = |msg: String| ToolError::internal(format!("tool '{}': {}", def.name, msg));

    let placeholders = path_placeholders(def.path);
    let braces = def.path.chars().filter(|c| *c == '{' || *c == '}').count();
    if braces != placeholders.len() * 2
        || placeholders.iter().any(|p| p.is_empty() || p.contains('{'))
    {
        return Err(defect(format!("malformed path template '{}'", def.path)));
    }

    let mut seen = HashSet::new();
    for param in def.parameters {
        if !seen.insert(param.name) {
            return Err(defect(format!("parameter '{}' declared twice", param.name)));
        }
    }

    let unique: HashSet<&str> = placeholders.iter().copied().collect();
    if unique.len() != placeholders.len() {
        return Err(defect(format!("repeated placeholder in '{}'", def.path)));
    }

    let path_params: HashSet<&str> = def
        .parameters
        .iter()
        .filter(|p| def.placement_of(p) == Placement::Path)
        .map(|p| p.name)
        .collect();
    if let Some(orphan) = unique.difference(&path_params).next() {
        return Err(defect(format!("placeholder '{{{}}}' has no parameter", orphan)));
    }

    for param in def.parameters {
        if def.placement_of(param) != Placement::Path {
            continue;
        }
        if !param.required {
            return Err(defect(format!("path parameter '{}' must be required", param.name)));
        }
        if !param.kind.is_scalar() {
            return Err(defect(format!(
                "path parameter '{}' must be a string or number",
                param.name
            )));
        }
    }

    Ok(())
}

/// Create a Tool model for a definition (metadata).
pub fn to_tool(def: &ToolDefinition) -> Tool {
    Tool {
        name: def.name.into(),
        description: Some(def.description.into()),
        input_schema: std::sync::Arc::new(def.input_schema()),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::schema::{HttpMethod, ParameterKind, ParameterSpec};

    const ID: &[ParameterSpec] = &[ParameterSpec::required("id", ParameterKind::Number, "")];

    fn def(name: &'static str, path: &'static str, params: &'static [ParameterSpec]) -> ToolDefinition {
        ToolDefinition::new(name, "", HttpMethod::Get, path, params)
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = ToolRegistry::new();
        registry.register(def("get_thing", "/things/{id}", ID)).unwrap();
        assert_eq!(registry.lookup("get_thing").unwrap().path, "/things/{id}");
        assert!(matches!(
            registry.lookup("foo_bar"),
            Err(ToolError::NotFound(name)) if name == "foo_bar"
        ));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = ToolRegistry::new();
        registry.register(def("get_thing", "/things/{id}", ID)).unwrap();
        let err = registry
            .register(def("get_thing", "/other/{id}", ID))
            .unwrap_err();
        assert!(matches!(err, ToolError::DuplicateName(_)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_builtin_registry() {
        let registry = ToolRegistry::builtin().unwrap();
        let names = registry.tool_names();
        assert_eq!(names.len(), 86);
        assert!(names.contains(&"get_public_config"));
        assert!(names.contains(&"admin_login"));
        assert!(names.contains(&"get_product"));
        assert!(names.contains(&"delete_category"));
        assert!(names.contains(&"list_products"));
        assert!(names.contains(&"list_orders"));
        assert!(names.contains(&"adjust_user_wallet"));
        assert!(names.contains(&"delete_skill"));
        assert_eq!(names.first(), Some(&"get_public_config"));
    }

    #[test]
    fn test_builtin_placeholders_match_path_parameters() {
        let registry = ToolRegistry::builtin().unwrap();
        for def in registry.iter() {
            let placeholders: HashSet<&str> = def.placeholders().into_iter().collect();
            let path_params: HashSet<&str> = def
                .parameters
                .iter()
                .filter(|p| def.placement_of(p) == Placement::Path)
                .map(|p| p.name)
                .collect();
            assert_eq!(placeholders, path_params, "tool {}", def.name);
        }
    }

    #[test]
    fn test_verify_rejects_orphan_placeholder() {
        let registry =
            ToolRegistry::from_definitions([&def("broken", "/things/{thing_id}", ID)]).unwrap();
        assert!(matches!(registry.verify(), Err(ToolError::Internal(_))));
    }

    #[test]
    fn test_verify_rejects_optional_or_non_scalar_path_parameter() {
        const OPTIONAL: &[ParameterSpec] =
            &[ParameterSpec::optional("id", ParameterKind::Number, "")];
        const FLAG: &[ParameterSpec] = &[ParameterSpec::required("id", ParameterKind::Boolean, "")];

        for params in [OPTIONAL, FLAG] {
            let registry =
                ToolRegistry::from_definitions([&def("bad", "/things/{id}", params)]).unwrap();
            assert!(registry.verify().is_err());
        }
    }

    #[test]
    fn test_verify_rejects_malformed_template() {
        for path in ["/things/{id", "/things/id}", "/things/{}", "/things/{id}/{id}"] {
            let registry = ToolRegistry::from_definitions([&def("bad", path, ID)]).unwrap();
            assert!(registry.verify().is_err(), "{}", path);
        }
    }

    #[test]
    fn test_to_tools_metadata() {
        let registry = ToolRegistry::builtin().unwrap();
        let tools = registry.to_tools();
        assert_eq!(tools.len(), registry.len());
        let get_product = tools.iter().find(|t| t.name == "get_product").unwrap();
        assert_eq!(get_product.input_schema["required"], serde_json::json!(["id"]));
    }
}
