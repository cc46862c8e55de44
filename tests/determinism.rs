//! Determinism regression test.
//!
//! Resolution is a pure function of the request and the knowledge base:
//! identical requests MUST produce byte-identical JSON across
//! - repeated calls
//! - independently built knowledge bases

use mcp_guide::handlers;
use mcp_guide::knowledge::KnowledgeBase;
use mcp_guide::protocol::{JsonRpcRequest, RpcId};
use serde_json::json;

fn requests() -> Vec<JsonRpcRequest> {
    let calls = vec![
        ("tools/list", None),
        ("resources/list", None),
        ("prompts/list", None),
        (
            "tools/call",
            Some(json!({ "name": "explain_concept", "arguments": { "concept": "server_types" } })),
        ),
        (
            "tools/call",
            Some(json!({ "name": "explain_concept", "arguments": { "concept": "nonexistent topic" } })),
        ),
        (
            "tools/call",
            Some(json!({ "name": "show_example", "arguments": { "feature": "tool_call" } })),
        ),
        (
            "tools/call",
            Some(json!({ "name": "list_servers", "arguments": { "category": "all" } })),
        ),
        (
            "tools/call",
            Some(json!({ "name": "list_servers", "arguments": { "category": "database" } })),
        ),
        ("tools/call", Some(json!({ "name": "nope", "arguments": {} }))),
        ("resources/read", Some(json!({ "uri": "guide://concepts/overview" }))),
        ("resources/read", Some(json!({ "uri": "guide://concepts/missing" }))),
        (
            "prompts/get",
            Some(json!({ "name": "create_resource", "arguments": { "resource_type": "database" } })),
        ),
        ("prompts/get", Some(json!({ "name": "create_tool" }))),
        ("prompts/get", Some(json!({ "name": "nonexistent" }))),
    ];

    calls
        .into_iter()
        .enumerate()
        .map(|(i, (method, params))| JsonRpcRequest {
            jsonrpc: "2.0".into(),
            id: Some(RpcId::Number(i as i64)),
            method: method.into(),
            params,
        })
        .collect()
}

fn dispatch_to_json(req: &JsonRpcRequest, kb: &KnowledgeBase) -> String {
    let response = handlers::dispatch(req, kb).expect("request should get a response");
    serde_json::to_string(&response).unwrap()
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------

#[test]
fn identical_requests_produce_identical_output() {
    let kb = KnowledgeBase::builtin();

    for req in requests() {
        let run_a = dispatch_to_json(&req, &kb);
        let run_b = dispatch_to_json(&req, &kb);
        assert_eq!(
            run_a, run_b,
            "{} {:?} must produce byte-identical output across runs",
            req.method, req.params
        );
    }
}

#[test]
fn rebuilt_knowledge_base_produces_identical_output() {
    let kb_1 = KnowledgeBase::builtin();
    let kb_2 = KnowledgeBase::builtin();

    for req in requests() {
        assert_eq!(
            dispatch_to_json(&req, &kb_1),
            dispatch_to_json(&req, &kb_2),
            "{} {:?} differs between knowledge base builds",
            req.method,
            req.params
        );
    }
}

#[test]
fn interleaving_does_not_leak_state_between_requests() {
    let kb = KnowledgeBase::builtin();
    let reqs = requests();

    let forward: Vec<String> = reqs.iter().map(|r| dispatch_to_json(r, &kb)).collect();
    let mut backward: Vec<String> = reqs.iter().rev().map(|r| dispatch_to_json(r, &kb)).collect();
    backward.reverse();

    assert_eq!(forward, backward, "request order must not affect any response");
}
