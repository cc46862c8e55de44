pub mod error;
pub mod request;
pub mod response;

pub use error::{ErrorKind, ProtocolError};
pub use request::{
    ClientInfo, ExplainConceptParams, GetPromptParams, GuideRequest, InitializeParams,
    JsonRpcRequest, ListServersParams, ReadResourceParams, RpcId, ShowExampleParams,
    ToolCallParams,
};
pub use response::{
    GetPromptResult, JsonRpcError, JsonRpcResponse, ListPromptsResult, ListResourcesResult,
    ListToolsResult, PromptArgument, PromptDescriptor, PromptMessage, ReadResourceResult,
    ResourceContents, ResourceDescriptor, Role, TextContent, ToolDescriptor, ToolResult,
};
