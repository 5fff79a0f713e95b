//! End-to-end sessions against the stdio loop using in-memory buffers.

use serde_json::{json, Value};

use knit::mcp::server::serve;
use knit::mcp::types::METHOD_NOT_FOUND;
use knit::{DemoServer, KnitServer, McpService};

fn session<S: McpService>(service: &S, requests: &[Value]) -> Vec<Value> {
    let input: String = requests
        .iter()
        .map(|r| format!("{}\n", r))
        .collect();
    let mut output = Vec::new();
    serve(service, input.as_bytes(), &mut output);

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn test_knit_session() {
    let server = KnitServer::default();
    let responses = session(
        &server,
        &[
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
            json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call", "params": {
                "name": "generate_chart",
                "arguments": {"pattern": "Stockinette", "width": 4, "height": 4}
            }}),
            json!({"jsonrpc": "2.0", "id": 4, "method": "resources/read", "params": {
                "uri": "pattern://scarf_seed"
            }}),
        ],
    );

    // the notification produces no output
    assert_eq!(responses.len(), 4);

    assert_eq!(responses[0]["result"]["serverInfo"]["name"], "knit-mcp");
    assert!(responses[0]["result"]["capabilities"]["resources"].is_object());

    let tools = responses[1]["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 5);
    assert!(tools.iter().all(|t| t["inputSchema"]["type"] == "object"));

    let call = &responses[2]["result"];
    assert!(call.get("isError").is_none());
    let chart: Value = serde_json::from_str(call["content"][0]["text"].as_str().unwrap()).unwrap();
    assert_eq!(chart["pattern"], "stockinette");
    assert_eq!(
        chart["chart"],
        json!([
            ["K", "K", "K", "K"],
            ["P", "P", "P", "P"],
            ["K", "K", "K", "K"],
            ["P", "P", "P", "P"]
        ])
    );

    let contents = &responses[3]["result"]["contents"][0];
    assert_eq!(contents["uri"], "pattern://scarf_seed");
    assert_eq!(contents["mimeType"], "text/markdown");
    assert!(contents["text"].as_str().unwrap().contains("- Size: 30×20"));
}

#[test]
fn test_knit_errors() {
    let server = KnitServer::default();
    let responses = session(
        &server,
        &[
            json!({"jsonrpc": "2.0", "id": 1, "method": "tools/call", "params": {
                "name": "generate_chart",
                "arguments": {"pattern": "cable", "width": 4, "height": 4}
            }}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "resources/read", "params": {
                "uri": "yarn://nothing"
            }}),
            json!({"jsonrpc": "2.0", "id": 3, "method": "prompts/list"}),
        ],
    );

    assert_eq!(responses[0]["result"]["isError"], true);
    assert!(responses[0]["result"]["content"][0]["text"]
        .as_str()
        .unwrap()
        .contains("cable"));

    assert_eq!(responses[1]["error"]["code"], -32002);
    assert_eq!(responses[2]["error"]["code"], METHOD_NOT_FOUND);
}

#[test]
fn test_demo_session() {
    let server = DemoServer::new();
    let responses = session(
        &server,
        &[
            json!({"jsonrpc": "2.0", "id": "a", "method": "tools/call", "params": {
                "name": "add", "arguments": {"a": 3, "b": 4}
            }}),
            json!({"jsonrpc": "2.0", "id": "b", "method": "tools/call", "params": {
                "name": "echo", "arguments": {"message": "purl soho"}
            }}),
            json!({"jsonrpc": "2.0", "id": "c", "method": "resources/templates/list"}),
            json!({"jsonrpc": "2.0", "id": "d", "method": "resources/read", "params": {
                "uri": "greeting://Ada"
            }}),
        ],
    );

    assert_eq!(responses[0]["id"], "a");
    assert_eq!(responses[0]["result"]["content"][0]["text"], "7");
    assert_eq!(responses[1]["result"]["content"][0]["text"], "purl soho");
    assert_eq!(
        responses[2]["result"]["resourceTemplates"][0]["uriTemplate"],
        "greeting://{name}"
    );
    assert_eq!(responses[3]["result"]["contents"][0]["text"], "Hello, Ada!");
}
