//! Directory of known MCP servers grouped by category.
//!
//! Category order here is the order used when every category is listed.

pub(super) const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "browser",
        &[
            "@executeautomation/playwright-mcp-server - Browser automation and webscraping",
            "@automatalabs/mcp-server-playwright - Browser automation with Playwright",
            "@modelcontextprotocol/server-puppeteer - Browser automation for web scraping",
            "@kimtaeyoon83/mcp-server-youtube-transcript - YouTube subtitles and transcripts",
            "@recursechat/mcp-server-apple-shortcuts - Apple Shortcuts integration",
        ],
    ),
    (
        "cloud",
        &[
            "Cloudflare MCP Server - Integration with Cloudflare services",
            "Kubernetes MCP Server - Kubernetes cluster operations",
            "@flux159/mcp-server-kubernetes - Kubernetes operations for pods and services",
        ],
    ),
    (
        "command_line",
        &[
            "g0t4/mcp-server-commands - Run any command with run_command and run_script tools",
            "MladenSU/cli-mcp-server - Command line interface with secure execution",
            "tumf/mcp-shell-server - Secure shell command execution",
        ],
    ),
    (
        "communication",
        &[
            "@modelcontextprotocol/server-slack - Slack workspace integration",
            "@modelcontextprotocol/server-bluesky - Bluesky instance integration",
            "MarkusPfundstein/mcp-gsuite - Integration with Gmail and Google Calendar",
        ],
    ),
    (
        "customer_data",
        &[
            "sergehuber/inoyu-mcp-unomi-server - Access and update profiles on Apache Unomi CDP",
            "OpenDataMCP/OpenDataMCP - Connect any Open Data to any LLM",
            "tinybirdco/mcp-tinybird - Interact with a Tinybird Workspace",
        ],
    ),
    (
        "database",
        &[
            "LucasHild/mcp-server-bigquery - BigQuery integration",
            "ergut/mcp-bigquery-server - Google BigQuery integration",
            "designcomputer/mysql_mcp_server - MySQL database integration",
            "@modelcontextprotocol/server-postgres - PostgreSQL integration",
            "@modelcontextprotocol/server-sqlite - SQLite operations",
            "@joshuarileydev/supabase-mcp-server - Supabase MCP Server",
            "ktanaka101/mcp-server-duckdb - DuckDB integration",
            "QuantGeekDev/mongo-mcp - MongoDB integration",
            "tinybirdco/mcp-tinybird - Tinybird integration",
            "kiliczsh/mcp-mongo-server - MongoDB integration",
            "KashiwaByte/vikingdb-mcp-server - VikingDB integration",
            "neo4j-contrib/mcp-neo4j - Neo4j integration",
        ],
    ),
    (
        "developer",
        &[
            "QuantGeekDev/docker-mcp - Docker container management",
            "snaggle-ai/openapi-mcp-server - OpenAPI integration",
            "jetbrains/mcpProxy - JetBrains IDE integration",
        ],
    ),
    (
        "data_science",
        &["@reading-plus-ai/mcp-server-data-exploration - Autonomous data exploration on .csv datasets"],
    ),
    (
        "filesystem",
        &[
            "@modelcontextprotocol/server-filesystem - Local file system access",
            "@modelcontextprotocol/server-google-drive - Google Drive integration",
            "mark3labs/mcp-filesystem-server - Golang file system implementation",
        ],
    ),
    (
        "finance",
        &[
            "QuantGeekDev/coincap-mcp - Real-time cryptocurrency market data",
            "anjor/coinmarket-mcp-server - Coinmarket API integration",
        ],
    ),
    (
        "knowledge",
        &[
            "@modelcontextprotocol/server-memory - Knowledge graph-based persistent memory",
            "/CheMiguel23/MemoryMesh - Enhanced graph-based memory",
        ],
    ),
    (
        "location",
        &["@modelcontextprotocol/server-google-maps - Google Maps integration"],
    ),
    (
        "monitoring",
        &[
            "@modelcontextprotocol/server-sentry - Sentry.io integration",
            "@modelcontextprotocol/server-raygun - Raygun API V3 integration",
            "metoro-io/metoro-mcp-server - Interact with Kubernetes environments",
        ],
    ),
    (
        "search",
        &[
            "@modelcontextprotocol/server-brave-search - Brave Search API",
            "@angheljf/nyt - NYTimes article search",
            "@modelcontextprotocol/server-fetch - Web content fetching",
            "ac3xx/mcp-servers-kagi - Kagi search integration",
            "exa-labs/exa-mcp-server - Exa AI Search API",
            "fatwang2/search1api-mcp - Search via search1api",
            "Tomatio13/mcp-server-tavily - Tavily AI search API",
            "blazickjp/arxiv-mcp-server - Search ArXiv research papers",
            "mzxrai/mcp-webresearch - Search Google and do deep web research",
            "andybrandt/mcp-simple-arxiv - Search and read papers from arXiv",
            "andybrandt/mcp-simple-pubmed - Search and read medical papers from PubMed",
            "apify/mcp-server-rag-web-browser - Apify's RAG Web Browser Actor",
        ],
    ),
    (
        "travel",
        &["NS Travel Information MCP Server - Access Dutch Railways travel information"],
    ),
    (
        "version_control",
        &[
            "@modelcontextprotocol/server-github - GitHub API integration",
            "@modelcontextprotocol/server-gitlab - GitLab platform integration",
            "@modelcontextprotocol/server-git - Direct Git repository operations",
        ],
    ),
    (
        "other",
        &[
            "mzxrai/mcp-openai - Chat with OpenAI's models",
            "mrjoshuak/godoc-mcp - Go documentation server",
            "pierrebrunelle/mcp-server-openai - Query OpenAI models",
            "@modelcontextprotocol/server-everything - MCP server with all features",
            "baba786/phabricator-mcp-server - Interacting with Phabricator API",
            "MarkusPfundstein/mcp-obsidian - Interacting with Obsidian",
            "calclavia/mcp-obsidian - Read and search Markdown notes",
            "anaisbetts/mcp-youtube - Fetch YouTube subtitles",
            "danhilse/notion_mcp - Integrates with Notion's API",
            "rusiaaman/wcgw - Autonomous shell execution",
            "reeeeemo/ancestry-mcp - Read .ged files and genetic data",
            "sirmews/apple-notes-mcp - Read from Apple Notes database",
            "anjor/coinmarket-mcp-server - Coinmarket API integration",
            "suekou/mcp-notion-server - Interacting with Notion API",
            "amidabuddha/unichat-mcp-server - Send requests to various AI models",
            "evalstate/mcp-miro - Access MIRO whiteboards",
            "sooperset/mcp-atlassian - Search and access Confluence workspaces",
            "pyroprompts/any-chat-completions-mcp - Chat with OpenAI SDK Compatible APIs",
            "anaisbetts/mcp-installer - Installs other MCP servers",
            "tanigami/mcp-server-perplexity - Interacting with Perplexity API",
            "future-audiences/wikimedia-enterprise-model-context-protocol - Wikipedia Article lookup",
            "andybrandt/mcp-simple-timeserver - Check local or UTC time",
            "andybrandt/mcp-simple-openai-assistant - Talk to OpenAI assistants",
            "@llmindset/mcp-hfspace - Use HuggingFace Spaces",
            "zueai/mcp-manager - Web UI to manage MCP servers",
            "wong2/mcp-cli - CLI tool for testing MCP servers",
            "isaacwasserman/mcp-vegalite-server - Generate visualizations with VegaLite",
        ],
    ),
];

pub(super) const ICONS: &[(&str, &str)] = &[
    ("browser", "📂"),
    ("cloud", "☁️"),
    ("command_line", "🖥️"),
    ("communication", "💬"),
    ("customer_data", "👤"),
    ("database", "🗄️"),
    ("developer", "🛠️"),
    ("data_science", "🧮"),
    ("filesystem", "📂"),
    ("finance", "💰"),
    ("knowledge", "🧠"),
    ("location", "🗺️"),
    ("monitoring", "📊"),
    ("search", "🔎"),
    ("travel", "🚆"),
    ("version_control", "🔄"),
    ("other", "🛠️"),
];
