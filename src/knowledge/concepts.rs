//! Beginner-friendly explanations of MCP concepts, in listing order.

pub(super) const EXPLANATIONS: &[(&str, &str)] = &[
    (
        "tools",
        "Tools are functions that LLMs can call to perform actions. Think of them like special commands that Claude can use to do things like search data, make API calls, or perform calculations. Every tool has a name, description, and a schema that defines what information it needs.\n\n\
For example, a weather tool might need a city name to fetch the forecast. The LLM reads the tool descriptions and decides when to use them based on the user's requests. For safety, tools always require user approval before executing.",
    ),
    (
        "resources",
        "Resources are pieces of data that can be read by LLMs, like files, API responses, or database records. Each resource has a unique URI (like a web address) that identifies it. Resources can contain text (like code or documents) or binary data (like images).\n\n\
Unlike tools which perform actions, resources just provide information. They're great for giving LLMs access to documentation, configuration files, or other reference material.",
    ),
    (
        "prompts",
        "Prompts are pre-written templates that help guide conversations with LLMs. They can include dynamic parts that get filled in with specific information. Prompts often show up as slash commands or menu options in chat interfaces.\n\n\
For example, a code review prompt might have placeholders for the programming language and code to review. This helps ensure consistent and effective interactions.",
    ),
    (
        "server",
        "An MCP server is a program that provides tools, resources, and prompts to LLMs. It's like a bridge between AI models and your data or systems. Servers can be simple (like providing access to local files) or complex (like connecting to databases or APIs).\n\n\
Servers use a standard protocol (MCP) to communicate, which means they work with any MCP-compatible client like Claude Desktop.",
    ),
    (
        "client",
        "An MCP client is a program that connects to MCP servers and coordinates interactions with LLMs. Claude Desktop is an example of a client - it manages connections to servers, handles user permissions, and presents tools and resources in its interface.\n\n\
Clients act as middlemen, ensuring secure and controlled access to server capabilities.",
    ),
    (
        "server_types",
        "MCP servers come in many specialized types:\n\n\
📂 Browser Automation: Web scraping and interaction\n\
☁️ Cloud Platforms: Manage cloud infrastructure\n\
🖥️ Command Line: Execute shell commands securely\n\
💬 Communication: Integrate with messaging platforms\n\
🗄️ Databases: Query and analyze data\n\
🛠️ Developer Tools: Enhance development workflows\n\
📂 File Systems: Access and manage files\n\
🧠 Knowledge & Memory: Maintain persistent context\n\
🔎 Search: Web and data search capabilities\n\
🔄 Version Control: Git and repository management",
    ),
    (
        "frameworks",
        "MCP has several frameworks for building servers:\n\n\
- TypeScript SDK: Official TypeScript implementation\n\
- Python SDK: Official Python implementation\n\
- Kotlin SDK: Official Kotlin implementation\n\
- FastMCP: High-level Python framework\n\
- LiteMCP: High-level TypeScript framework\n\
- MCP-Go: Golang SDK\n\n\
These frameworks provide tools and utilities for building MCP servers efficiently.",
    ),
    (
        "clients",
        "Popular MCP clients include:\n\n\
- Claude Desktop: Official Anthropic client\n\
- Zed: Multiplayer code editor\n\
- Continue: VSCode extension\n\
- Firebase Genkit: Agent framework\n\
- MCP-Bridge: OpenAI middleware proxy\n\n\
Clients can connect to multiple servers and manage their capabilities.",
    ),
];
