pub mod catalog;
pub mod explain_concept;
pub mod get_prompt;
pub mod list_servers;
pub mod read_resource;
pub mod show_example;
pub mod tools;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::knowledge::KnowledgeBase;
use crate::protocol::{
    GuideRequest, InitializeParams, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ProtocolError, ToolCallParams, ToolResult,
};
use crate::schema;

pub use tools::Tool;

/// MCP protocol revision spoken by this server.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Name reported in `serverInfo`.
pub const SERVER_NAME: &str = "mcp-guide";

/// Outcome of a tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The lookup hit; the text is the answer.
    Resolved(String),
    /// The lookup missed; the text explains the miss and lists valid keys.
    /// Sent to the client as ordinary content.
    NotFoundAdvisory(String),
    /// The call itself is wrong (unknown tool, bad arguments).
    ProtocolError(ProtocolError),
}

impl Resolution {
    pub fn into_tool_result(self) -> Result<ToolResult, ProtocolError> {
        match self {
            Self::Resolved(text) | Self::NotFoundAdvisory(text) => Ok(ToolResult::text(text)),
            Self::ProtocolError(err) => Err(err),
        }
    }
}

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub fn dispatch(req: &JsonRpcRequest, kb: &KnowledgeBase) -> Option<JsonRpcResponse> {
    debug!(method = %req.method, "dispatching request");

    match req.method.as_str() {
        "initialize" => {
            log_client(req.params.as_ref());
            let result = serde_json::json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {},
                    "resources": {},
                    "prompts": {}
                },
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION")
                }
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        method if method.starts_with("notifications/") => None,

        "ping" => Some(JsonRpcResponse::success(req.id.clone(), serde_json::json!({}))),

        method => {
            let request = match GuideRequest::parse(method, req.params.as_ref()) {
                Ok(Some(request)) => request,
                Ok(None) => {
                    warn!(method, "method not found");
                    return Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::method_not_found(method),
                    ));
                }
                Err(err) => return Some(error_response(req, err)),
            };

            match route(request, kb) {
                Ok(result) => Some(JsonRpcResponse::success(req.id.clone(), result)),
                Err(err) => Some(error_response(req, err)),
            }
        }
    }
}

/// Resolve a decoded request against the knowledge base.
pub fn route(
    request: GuideRequest,
    kb: &KnowledgeBase,
) -> Result<serde_json::Value, ProtocolError> {
    match request {
        GuideRequest::ListTools => to_json(&catalog::list_tools(kb)),
        GuideRequest::CallTool(params) => to_json(&call_tool(&params, kb).into_tool_result()?),
        GuideRequest::ListResources => to_json(&catalog::list_resources(kb)),
        GuideRequest::ReadResource(params) => to_json(&read_resource::handle(params, kb)?),
        GuideRequest::ListPrompts => to_json(&catalog::list_prompts(kb)),
        GuideRequest::GetPrompt(params) => to_json(&get_prompt::handle(params, kb)?),
    }
}

/// Route a `tools/call` to its resolver after validating the arguments.
pub fn call_tool(params: &ToolCallParams, kb: &KnowledgeBase) -> Resolution {
    let Some(tool) = Tool::from_name(&params.name) else {
        return Resolution::ProtocolError(ProtocolError::UnknownTool(params.name.clone()));
    };

    let arguments = params.arguments.as_ref();
    let resolution = match tool {
        Tool::ExplainConcept => {
            parse_arguments(tool, arguments).map(|p| explain_concept::handle(p, kb))
        }
        Tool::ShowExample => parse_arguments(tool, arguments).map(|p| show_example::handle(p, kb)),
        Tool::ListServers => parse_arguments(tool, arguments).map(|p| list_servers::handle(p, kb)),
    };

    resolution.unwrap_or_else(Resolution::ProtocolError)
}

fn parse_arguments<T: DeserializeOwned>(
    tool: Tool,
    arguments: Option<&serde_json::Value>,
) -> Result<T, ProtocolError> {
    let arguments = arguments.ok_or_else(|| {
        ProtocolError::InvalidParams(format!("Missing arguments for {}", tool.name()))
    })?;

    schema::validate_value(&tool.argument_schema(), arguments).map_err(|e| {
        ProtocolError::InvalidParams(format!("Invalid arguments for {}: {e}", tool.name()))
    })?;

    serde_json::from_value(arguments.clone()).map_err(|e| {
        ProtocolError::InvalidParams(format!("Invalid arguments for {}: {e}", tool.name()))
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value, ProtocolError> {
    serde_json::to_value(value).map_err(|e| ProtocolError::Internal(e.to_string()))
}

fn error_response(req: &JsonRpcRequest, err: ProtocolError) -> JsonRpcResponse {
    warn!(method = %req.method, code = err.kind().code(), "{err}");
    JsonRpcResponse::error(req.id.clone(), err.into())
}

fn log_client(params: Option<&serde_json::Value>) {
    let Some(params) = params else { return };
    if let Ok(init) = serde_json::from_value::<InitializeParams>(params.clone()) {
        let client = init.client_info.as_ref();
        info!(
            client = client.and_then(|c| c.name.as_deref()).unwrap_or("unknown"),
            client_version = client.and_then(|c| c.version.as_deref()).unwrap_or("unknown"),
            protocol = init.protocol_version.as_deref().unwrap_or("unspecified"),
            "client initializing"
        );
    }
}
