use super::response::JsonRpcError;

/// Protocol-level failure category, mapped onto JSON-RPC 2.0 error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ParseError,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
    InternalError,
}

impl ErrorKind {
    pub fn code(self) -> i32 {
        match self {
            Self::ParseError => -32700,
            Self::InvalidRequest => -32600,
            Self::MethodNotFound => -32601,
            Self::InvalidParams => -32602,
            Self::InternalError => -32603,
        }
    }
}

/// A request that cannot be answered with content.
///
/// Unknown concepts, features and categories are not errors; they resolve
/// to an advisory listing the valid keys. Unknown tools, resources and
/// prompts are addressable names the client got wrong and end up here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),
    #[error("Unknown prompt: {0}")]
    UnknownPrompt(String),
    #[error("{0}")]
    InvalidParams(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProtocolError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownTool(_) => ErrorKind::MethodNotFound,
            Self::ResourceNotFound(_) | Self::UnknownPrompt(_) => ErrorKind::InvalidRequest,
            Self::InvalidParams(_) => ErrorKind::InvalidParams,
            Self::Internal(_) => ErrorKind::InternalError,
        }
    }
}

impl From<ProtocolError> for JsonRpcError {
    fn from(err: ProtocolError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_and_protocol_errors_share_the_code_table() {
        assert_eq!(JsonRpcError::parse_error().code, -32700);
        assert_eq!(JsonRpcError::invalid_request().code, ErrorKind::InvalidRequest.code());
        assert_eq!(JsonRpcError::invalid_request_with("x").code, -32600);
        assert_eq!(JsonRpcError::method_not_found("x").code, -32601);

        let cases = [
            (ProtocolError::UnknownTool("t".into()), -32601),
            (ProtocolError::ResourceNotFound("r".into()), -32600),
            (ProtocolError::UnknownPrompt("p".into()), -32600),
            (ProtocolError::InvalidParams("bad".into()), -32602),
            (ProtocolError::Internal("boom".into()), -32603),
        ];
        for (err, code) in cases {
            let rpc = JsonRpcError::from(err.clone());
            assert_eq!(rpc.code, code, "{err:?}");
            assert_eq!(rpc.message, err.to_string());
            assert!(rpc.data.is_none());
        }
    }
}
