use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::ProtocolError;

/// JSON-RPC 2.0 ID, either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(i64),
    Str(String),
}

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<RpcId>,
    pub method: String,
    pub params: Option<serde_json::Value>,
}

impl JsonRpcRequest {
    /// Requests without an id are notifications and never get a response.
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// MCP `initialize` params.
#[derive(Debug, Clone, Deserialize)]
pub struct InitializeParams {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: Option<String>,
    #[serde(rename = "clientInfo")]
    pub client_info: Option<ClientInfo>,
}

/// Client information sent during `initialize`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientInfo {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Parameters for `tools/call`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

/// Parameters for `resources/read`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReadResourceParams {
    pub uri: String,
}

/// Parameters for `prompts/get`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GetPromptParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Option<HashMap<String, String>>,
}

/// Arguments of the `explain_concept` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ExplainConceptParams {
    pub concept: String,
}

/// Arguments of the `show_example` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ShowExampleParams {
    pub feature: String,
}

/// Arguments of the `list_servers` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ListServersParams {
    pub category: String,
}

/// The request kinds served by the guide, decoded from a JSON-RPC envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum GuideRequest {
    ListTools,
    CallTool(ToolCallParams),
    ListResources,
    ReadResource(ReadResourceParams),
    ListPrompts,
    GetPrompt(GetPromptParams),
}

impl GuideRequest {
    /// Decode `method` and `params` into a request.
    ///
    /// Returns `Ok(None)` when `method` is not one of the guide's request
    /// kinds, leaving the caller to decide how to answer it.
    pub fn parse(
        method: &str,
        params: Option<&serde_json::Value>,
    ) -> Result<Option<Self>, ProtocolError> {
        let request = match method {
            "tools/list" => Self::ListTools,
            "tools/call" => {
                let call: ToolCallParams = parse_params(method, params)?;
                if call.name.is_empty() {
                    return Err(ProtocolError::InvalidParams(
                        "Tool name must be a non-empty string".into(),
                    ));
                }
                Self::CallTool(call)
            }
            "resources/list" => Self::ListResources,
            "resources/read" => Self::ReadResource(parse_params(method, params)?),
            "prompts/list" => Self::ListPrompts,
            "prompts/get" => {
                let get: GetPromptParams = parse_params(method, params)?;
                if get.name.is_empty() {
                    return Err(ProtocolError::InvalidParams(
                        "Prompt name must be a non-empty string".into(),
                    ));
                }
                Self::GetPrompt(get)
            }
            _ => return Ok(None),
        };
        Ok(Some(request))
    }
}

fn parse_params<T: DeserializeOwned>(
    method: &str,
    params: Option<&serde_json::Value>,
) -> Result<T, ProtocolError> {
    let value = params
        .ok_or_else(|| ProtocolError::InvalidParams(format!("Missing params for {method}")))?;
    serde_json::from_value(value.clone())
        .map_err(|e| ProtocolError::InvalidParams(format!("Invalid {method} params: {e}")))
}
