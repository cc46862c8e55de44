use serde_json::{json, Value};

use crate::knowledge::KnowledgeBase;
use crate::protocol::ToolDescriptor;

/// Tools exposed through `tools/call`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    ExplainConcept,
    ShowExample,
    ListServers,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::ExplainConcept, Tool::ShowExample, Tool::ListServers];

    pub fn name(self) -> &'static str {
        match self {
            Self::ExplainConcept => "explain_concept",
            Self::ShowExample => "show_example",
            Self::ListServers => "list_servers",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::ExplainConcept => "Get a beginner-friendly explanation of an MCP concept",
            Self::ShowExample => "Show a practical example of an MCP feature",
            Self::ListServers => "List available MCP servers by category",
        }
    }

    /// The single string argument each tool takes.
    pub fn argument(self) -> &'static str {
        match self {
            Self::ExplainConcept => "concept",
            Self::ShowExample => "feature",
            Self::ListServers => "category",
        }
    }

    fn argument_description(self) -> &'static str {
        match self {
            Self::ExplainConcept => "The MCP concept to explain (e.g., 'tools', 'resources', 'prompts', 'server', 'client', 'server_types', 'frameworks', 'clients')",
            Self::ShowExample => "The MCP feature to demonstrate (e.g., 'tool_call', 'resource_read', 'prompt_template')",
            Self::ListServers => "Server category to list (e.g., 'browser', 'cloud', 'database', 'developer', 'filesystem', 'search', 'all')",
        }
    }

    /// Schema advertised in `tools/list`.
    ///
    /// `list_servers` enumerates the known categories plus `all`.
    pub fn input_schema(self, kb: &KnowledgeBase) -> Value {
        let mut property = json!({
            "type": "string",
            "description": self.argument_description(),
        });
        if self == Self::ListServers {
            let mut choices: Vec<&str> = kb.categories().iter().map(|c| c.key).collect();
            choices.push("all");
            property["enum"] = json!(choices);
        }

        json!({
            "type": "object",
            "properties": { self.argument(): property },
            "required": [self.argument()],
        })
    }

    /// Structural schema that `tools/call` arguments are checked against.
    ///
    /// Carries no `enum`, so an unknown category still reaches the resolver
    /// and receives the list of valid ones.
    pub fn argument_schema(self) -> Value {
        json!({
            "type": "object",
            "properties": { self.argument(): { "type": "string" } },
            "required": [self.argument()],
        })
    }

    pub fn descriptor(self, kb: &KnowledgeBase) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name().into(),
            description: self.description().into(),
            input_schema: self.input_schema(kb),
        }
    }
}
