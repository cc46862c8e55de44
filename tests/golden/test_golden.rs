use std::fs;
use std::path::PathBuf;

use mcp_guide::config::ServerConfig;
use mcp_guide::handlers;
use mcp_guide::knowledge::KnowledgeBase;
use mcp_guide::protocol::{JsonRpcRequest, RpcId};
use mcp_guide::server::McpServer;
use serde_json::{json, Value};
use tokio::io::BufReader;

fn expected_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden/expected")
        .join(name)
}

fn read_expected(name: &str) -> String {
    fs::read_to_string(expected_path(name))
        .expect("expected file missing")
        .trim_end()
        .to_string()
}

fn dispatch(id: RpcId, method: &str, params: Option<Value>) -> String {
    let req = JsonRpcRequest {
        jsonrpc: "2.0".into(),
        id: Some(id),
        method: method.into(),
        params,
    };
    let response = handlers::dispatch(&req, &KnowledgeBase::builtin()).expect("no response");
    serde_json::to_string(&response).unwrap()
}

/// Error envelopes are plain structs, so their field order is fixed and the
/// line must match byte for byte.
fn assert_bytes(name: &str, actual: &str) {
    assert_eq!(actual, read_expected(name), "{name} snapshot mismatch");
}

/// Result payloads contain JSON objects whose key order is not part of the
/// contract; compare them structurally.
fn assert_value(name: &str, actual: &str) {
    let actual: Value = serde_json::from_str(actual).unwrap();
    let expected: Value = serde_json::from_str(&read_expected(name)).unwrap();
    assert_eq!(actual, expected, "{name} snapshot mismatch");
}

#[test]
fn golden_unknown_tool_error() {
    let out = dispatch(
        RpcId::Number(1),
        "tools/call",
        Some(json!({ "name": "summon_dragon", "arguments": {} })),
    );
    assert_bytes("unknown_tool.json", &out);
}

#[test]
fn golden_resource_not_found_error() {
    let out = dispatch(
        RpcId::Number(2),
        "resources/read",
        Some(json!({ "uri": "guide://concepts/sorcery" })),
    );
    assert_bytes("resource_not_found.json", &out);
}

#[test]
fn golden_unknown_prompt_error() {
    let out = dispatch(
        RpcId::Number(3),
        "prompts/get",
        Some(json!({ "name": "summon_dragon", "arguments": {} })),
    );
    assert_bytes("unknown_prompt.json", &out);
}

#[test]
fn golden_list_servers_single_category() {
    let out = dispatch(
        RpcId::Number(4),
        "tools/call",
        Some(json!({ "name": "list_servers", "arguments": { "category": "Travel" } })),
    );
    assert_value("list_servers_travel.json", &out);
}

#[test]
fn golden_initialize() {
    let out = dispatch(
        RpcId::Number(0),
        "initialize",
        Some(json!({ "protocolVersion": "2024-11-05", "capabilities": {} })),
    );
    assert_value("initialize.json", &out);
}

#[test]
fn golden_prompts_list() {
    assert_value("prompts_list.json", &dispatch(RpcId::Number(5), "prompts/list", None));
}

#[test]
fn golden_tools_list() {
    assert_value("tools_list.json", &dispatch(RpcId::Number(6), "tools/list", None));
}

#[tokio::test]
async fn golden_not_initialized_session() {
    let kb = KnowledgeBase::builtin();
    let mut server = McpServer::new(ServerConfig::default(), &kb);
    let input = br#"{"jsonrpc":"2.0","id":"init","method":"resources/list"}
"#;
    let mut output = Vec::new();
    server
        .serve(BufReader::new(&input[..]), &mut output)
        .await
        .unwrap();

    let out = String::from_utf8(output).unwrap();
    assert_bytes("not_initialized.json", out.trim_end());
}
