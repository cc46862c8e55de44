//! Markdown guides exposed as `guide://concepts/*` resources.

/// `(uri, name, description, body)`
pub(super) const DOCUMENTS: &[(&str, &str, &str, &str)] = &[
    (
        "guide://concepts/overview",
        "MCP Overview",
        "High-level introduction to MCP concepts",
        r#"# Understanding MCP

The Model Context Protocol (MCP) is like a universal translator between AI models and data sources. It helps AI assistants like Claude access the information and tools they need in a standardized way.

## Key Components

1. **Servers** - Programs that provide:
   - Tools (functions the AI can call)
   - Resources (data the AI can read)
   - Prompts (templates for common tasks)

2. **Clients** - Programs that:
   - Connect to servers
   - Manage permissions
   - Handle user interaction

3. **Protocol** - The rules for how everything communicates

## How It Works

1. You run an MCP server that connects to your data
2. You connect the server to a client like Claude Desktop
3. The AI can now use your server's capabilities!"#,
    ),
    (
        "guide://concepts/tools",
        "Understanding Tools",
        "Deep dive into MCP tools",
        r#"# Understanding MCP Tools

Tools are functions that LLMs can call to perform actions. They're perfect for tasks like:
- Fetching data from APIs
- Performing calculations
- Manipulating files
- Running system commands

## Anatomy of a Tool

Every tool has:
1. A unique name
2. A description that helps the LLM understand when to use it
3. An input schema that defines what parameters it accepts

## Example Tool

```typescript
{
  name: "get_weather",
  description: "Get weather for a location",
  inputSchema: {
    type: "object",
    properties: {
      location: {
        type: "string",
        description: "City name"
      }
    },
    required: ["location"]
  }
}
```

## Security

Tools always require user approval before executing. This ensures safety and control."#,
    ),
    (
        "guide://concepts/resources",
        "Understanding Resources",
        "Deep dive into MCP resources",
        r#"# Understanding MCP Resources

Resources are pieces of data that LLMs can read. They're great for providing:
- Documentation
- Configuration files
- API responses
- Database records
- And more!

## Resource Structure

Every resource has:
1. A unique URI
2. A name and description
3. A MIME type
4. Content (text or binary)

## Example Resource

```typescript
{
  uri: "file:///config.json",
  name: "Configuration",
  description: "System settings",
  mimeType: "application/json"
}
```

## Types of Resources

1. Static Resources - Fixed content
2. Dynamic Resources - Content generated on demand
3. Template Resources - Parameterized URIs"#,
    ),
    (
        "guide://concepts/prompts",
        "Understanding Prompts",
        "Deep dive into MCP prompts",
        r#"# Understanding MCP Prompts

Prompts are pre-written templates that help standardize LLM interactions. They're useful for:
- Common tasks
- Guided workflows
- Consistent formatting

## Prompt Structure

Every prompt has:
1. A unique name
2. A description
3. Optional arguments
4. Message templates

## Example Prompt

```typescript
{
  name: "analyze_code",
  description: "Review code for improvements",
  arguments: [
    {
      name: "language",
      description: "Programming language",
      required: true
    },
    {
      name: "code",
      description: "Code to analyze",
      required: true
    }
  ]
}
```

## Using Prompts

Prompts often appear as:
- Slash commands
- Menu options
- Quick actions"#,
    ),
];
