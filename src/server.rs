use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader,
};
use tracing::{debug, warn};

use crate::config::ServerConfig;
use crate::handlers;
use crate::knowledge::KnowledgeBase;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("transport I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("response serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// MCP server that communicates over stdio using newline-delimited JSON-RPC 2.0.
pub struct McpServer<'kb> {
    config: ServerConfig,
    knowledge: &'kb KnowledgeBase,
    initialized: bool,
}

impl<'kb> McpServer<'kb> {
    pub fn new(config: ServerConfig, knowledge: &'kb KnowledgeBase) -> Self {
        Self {
            config,
            knowledge,
            initialized: false,
        }
    }

    /// Serve stdin/stdout until stdin closes.
    pub async fn run(&mut self) -> Result<(), ServerError> {
        let reader = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(reader, stdout).await
    }

    /// Serve any line-oriented reader/writer pair until the reader hits EOF.
    pub async fn serve<R, W>(&mut self, mut reader: R, mut writer: W) -> Result<(), ServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let limit = self.config.max_message_bytes;
        let mut raw = Vec::new();

        loop {
            raw.clear();
            let n = (&mut reader)
                .take((limit as u64).saturating_add(1))
                .read_until(b'\n', &mut raw)
                .await?;
            if n == 0 {
                break;
            }

            if n > limit {
                warn!("Message exceeds {limit} bytes");
                write_response(
                    &mut writer,
                    &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                )
                .await?;
                if raw.last() != Some(&b'\n') {
                    discard_line(&mut reader).await?;
                }
                continue;
            }

            let trimmed = match std::str::from_utf8(&raw) {
                Ok(s) => s.trim(),
                Err(_) => {
                    warn!("Message is not valid UTF-8");
                    write_response(
                        &mut writer,
                        &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                    )
                    .await?;
                    continue;
                }
            };

            if trimmed.is_empty() {
                continue;
            }

            let req: JsonRpcRequest = match serde_json::from_str(trimmed) {
                Ok(r) => r,
                Err(e) => {
                    warn!("Parse error: {e}");
                    write_response(
                        &mut writer,
                        &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                    )
                    .await?;
                    continue;
                }
            };

            if req.jsonrpc != "2.0" {
                if !req.is_notification() {
                    write_response(
                        &mut writer,
                        &JsonRpcResponse::error(req.id.clone(), JsonRpcError::invalid_request()),
                    )
                    .await?;
                }
                continue;
            }

            // Only `initialize` is allowed before the handshake completes
            if !self.initialized && req.method != "initialize" {
                if req.is_notification() {
                    debug!(method = %req.method, "dropping notification before initialize");
                    continue;
                }
                write_response(
                    &mut writer,
                    &JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_request_with("Server not initialized"),
                    ),
                )
                .await?;
                continue;
            }

            let response = handlers::dispatch(&req, self.knowledge);
            if let Some(resp) = response.filter(|_| !req.is_notification()) {
                write_response(&mut writer, &resp).await?;
            }

            if req.method == "initialize" {
                self.initialized = true;
            }
        }

        Ok(())
    }
}

async fn write_response<W>(writer: &mut W, resp: &JsonRpcResponse) -> Result<(), ServerError>
where
    W: AsyncWrite + Unpin,
{
    let out = serde_json::to_string(resp)?;
    writer.write_all(out.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

/// Skip the rest of an oversized line without buffering it.
async fn discard_line<R>(reader: &mut R) -> Result<(), ServerError>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let buf = reader.fill_buf().await?;
        if buf.is_empty() {
            return Ok(());
        }
        match buf.iter().position(|&b| b == b'\n') {
            Some(end) => {
                reader.consume(end + 1);
                return Ok(());
            }
            None => {
                let len = buf.len();
                reader.consume(len);
            }
        }
    }
}
