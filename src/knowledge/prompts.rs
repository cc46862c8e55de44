//! Tutorial prompt templates.
//!
//! Argument `required` flags are advertised through `prompts/list` but not
//! enforced: a missing or empty argument renders with its documented default.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    CreateTool,
    CreateResource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptArgumentSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    /// Value rendered when the caller omits the argument.
    pub default: &'static str,
}

#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub kind: PromptKind,
    pub name: &'static str,
    pub description: &'static str,
    pub arguments: &'static [PromptArgumentSpec],
}

const CREATE_TOOL_ARGS: &[PromptArgumentSpec] = &[
    PromptArgumentSpec {
        name: "tool_name",
        description: "Name of the tool to create",
        required: true,
        default: "example_tool",
    },
    PromptArgumentSpec {
        name: "description",
        description: "What the tool will do",
        required: true,
        default: "an example tool",
    },
];

const CREATE_RESOURCE_ARGS: &[PromptArgumentSpec] = &[PromptArgumentSpec {
    name: "resource_type",
    description: "Type of resource (file, api, database)",
    required: true,
    default: "file",
}];

/// Example URI per resource type; the first entry doubles as the fallback.
const RESOURCE_EXAMPLE_URIS: &[(&str, &str)] = &[
    ("file", "file:///data/config.json"),
    ("api", "api://weather/current"),
    ("database", "db://users/schema"),
];

impl PromptKind {
    pub const ALL: [PromptKind; 2] = [PromptKind::CreateTool, PromptKind::CreateResource];

    pub fn name(self) -> &'static str {
        match self {
            Self::CreateTool => "create_tool",
            Self::CreateResource => "create_resource",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn template(self) -> PromptTemplate {
        let (description, arguments) = match self {
            Self::CreateTool => ("Guide for creating your first MCP tool", CREATE_TOOL_ARGS),
            Self::CreateResource => (
                "Guide for creating your first MCP resource",
                CREATE_RESOURCE_ARGS,
            ),
        };
        PromptTemplate {
            kind: self,
            name: self.name(),
            description,
            arguments,
        }
    }
}

impl PromptTemplate {
    /// Render the tutorial text, filling absent or empty arguments with defaults.
    pub fn render(&self, supplied: &HashMap<String, String>) -> String {
        let args = ResolvedArguments::new(self.arguments, supplied);
        match self.kind {
            PromptKind::CreateTool => render_create_tool(&args),
            PromptKind::CreateResource => render_create_resource(&args),
        }
    }
}

struct ResolvedArguments<'a> {
    values: Vec<(&'static str, &'a str)>,
}

impl<'a> ResolvedArguments<'a> {
    fn new(specs: &'static [PromptArgumentSpec], supplied: &'a HashMap<String, String>) -> Self {
        let values = specs
            .iter()
            .map(|spec| {
                let value = supplied
                    .get(spec.name)
                    .map(String::as_str)
                    .filter(|v| !v.is_empty())
                    .unwrap_or(spec.default);
                (spec.name, value)
            })
            .collect();
        Self { values }
    }

    fn get(&self, name: &str) -> &'a str {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
            .unwrap_or("")
    }
}

fn resource_example_uri(resource_type: &str) -> &'static str {
    RESOURCE_EXAMPLE_URIS
        .iter()
        .find(|(kind, _)| *kind == resource_type)
        .unwrap_or(&RESOURCE_EXAMPLE_URIS[0])
        .1
}

fn render_create_tool(args: &ResolvedArguments<'_>) -> String {
    let tool_name = args.get("tool_name");
    let description = args.get("description");

    format!(
        r#"Let's create a new MCP tool called "{tool_name}" that will {description}. Here's a step-by-step guide:

1. First, we'll define the tool's schema:

```typescript
{{
  name: "{tool_name}",
  description: "{description}",
  inputSchema: {{
    type: "object",
    properties: {{
      // Add your parameters here
    }},
    required: []
  }}
}}
```

2. Then implement the tool handler:

```typescript
server.setRequestHandler(CallToolRequestSchema, async (request) => {{
  if (request.params.name === "{tool_name}") {{
    // Add your tool logic here
    return {{
      content: [{{
        type: "text",
        text: "Tool result"
      }}]
    }};
  }}
}});
```

3. Test your tool:
   - Use the MCP Inspector to verify the tool appears
   - Try calling it with different inputs
   - Check error handling

Need help? Try the explain_concept tool with "tools" as the concept!"#
    )
}

fn render_create_resource(args: &ResolvedArguments<'_>) -> String {
    let resource_type = args.get("resource_type").to_lowercase();
    let uri = resource_example_uri(&resource_type);

    format!(
        r#"Let's create a new MCP resource of type "{resource_type}". Here's how:

1. Define the resource:

```typescript
{{
  uri: "{uri}",
  name: "My Resource",
  description: "Description of what this resource provides",
  mimeType: "application/json"  // Adjust based on content type
}}
```

2. Implement the resource handler:

```typescript
server.setRequestHandler(ReadResourceRequestSchema, async (request) => {{
  if (request.params.uri === "{uri}") {{
    return {{
      contents: [{{
        uri: request.params.uri,
        mimeType: "application/json",
        text: JSON.stringify({{ /* your data here */ }})
      }}]
    }};
  }}
}});
```

3. Test your resource:
   - Use the MCP Inspector to verify the resource appears
   - Try reading it
   - Check error handling

Need help? Try the explain_concept tool with "resources" as the concept!"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn names_round_trip_through_lookup() {
        for kind in PromptKind::ALL {
            assert_eq!(PromptKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(PromptKind::from_name("CREATE_TOOL"), None);
    }

    #[test]
    fn create_tool_uses_defaults_when_empty() {
        let text = PromptKind::CreateTool
            .template()
            .render(&args(&[("tool_name", "")]));
        assert!(text.contains(r#"called "example_tool" that will an example tool."#));
    }

    #[test]
    fn create_tool_substitutes_supplied_values() {
        let text = PromptKind::CreateTool.template().render(&args(&[
            ("tool_name", "get_weather"),
            ("description", "fetch the forecast"),
        ]));
        assert!(text.contains(r#"name: "get_weather","#));
        assert!(text.contains(r#"description: "fetch the forecast","#));
        assert!(text.contains(r#"request.params.name === "get_weather""#));
    }

    #[test]
    fn create_resource_lowercases_type_and_picks_uri() {
        let text = PromptKind::CreateResource
            .template()
            .render(&args(&[("resource_type", "API")]));
        assert!(text.contains(r#"of type "api""#));
        assert!(text.contains(r#"uri: "api://weather/current","#));
    }

    #[test]
    fn unrecognized_resource_type_falls_back_to_file_uri() {
        let text = PromptKind::CreateResource
            .template()
            .render(&args(&[("resource_type", "queue")]));
        assert!(text.contains(r#"of type "queue""#));
        assert!(text.contains("file:///data/config.json"));
    }
}
