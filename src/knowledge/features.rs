//! Worked examples of MCP features, in listing order.

pub(super) const EXAMPLES: &[(&str, &str)] = &[
    (
        "tool_call",
        r#"Here's an example of defining and using a tool:

// Define the tool
{
  name: "calculate_sum",
  description: "Add two numbers together",
  inputSchema: {
    type: "object",
    properties: {
      a: { type: "number" },
      b: { type: "number" }
    },
    required: ["a", "b"]
  }
}

// Use the tool
const result = await server.callTool("calculate_sum", { a: 5, b: 3 });
// Result: 8"#,
    ),
    (
        "resource_read",
        r#"Here's an example of exposing and reading a resource:

// Define the resource
{
  uri: "file:///docs/guide.md",
  name: "MCP Guide",
  description: "Documentation for MCP concepts",
  mimeType: "text/markdown"
}

// Read the resource
const content = await server.readResource("file:///docs/guide.md");"#,
    ),
    (
        "prompt_template",
        r#"Here's an example of a prompt template:

{
  name: "code_review",
  description: "Review code for best practices",
  arguments: [
    {
      name: "language",
      description: "Programming language",
      required: true
    },
    {
      name: "code",
      description: "Code to review",
      required: true
    }
  ]
}

// Generated prompt:
"Please review this {language} code:
{code}""#,
    ),
];
