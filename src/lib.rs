//! MCP server that teaches the Model Context Protocol.
//!
//! Exposes `explain_concept`, `show_example` and `list_servers` tools,
//! `guide://concepts/*` resources and tutorial prompts over JSON-RPC 2.0
//! stdio transport, compatible with any MCP-aware AI agent.

pub mod config;
pub mod format;
pub mod handlers;
pub mod knowledge;
pub mod protocol;
pub mod server;

pub mod schema;
