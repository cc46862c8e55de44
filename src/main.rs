use mcp_guide::config::ServerConfig;
use mcp_guide::knowledge::KnowledgeBase;
use mcp_guide::server::McpServer;
use tracing::{error, info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("mcp-guide: configuration error: {e}");
            std::process::exit(1);
        }
    };

    let (filter, rejected) = match config.tracing_filter() {
        Ok(filter) => (filter, None),
        Err(e) => (ServerConfig::fallback_filter(), Some(e)),
    };

    // stdout carries JSON-RPC, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Some(e) = rejected {
        warn!(
            filter = %config.log_filter,
            "invalid MCP_GUIDE_LOG directive, logging at info: {e}"
        );
    }

    let knowledge = KnowledgeBase::builtin();
    info!(
        concepts = knowledge.concepts().len(),
        categories = knowledge.categories().len(),
        guides = knowledge.guides().len(),
        "MCP Guide server running on stdio"
    );

    let mut server = McpServer::new(config, &knowledge);
    if let Err(e) = server.run().await {
        error!("fatal error: {e}");
        std::process::exit(1);
    }
}
