//! MCP JSON-RPC 2.0 server — reads requests from stdin, writes responses to stdout.
//!
//! The MCP protocol uses newline-delimited JSON over STDIO.
//! Tracing output goes to stderr so it doesn't interfere with the protocol.

use std::io::{self, BufRead, Write};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::types::*;
use super::{McpService, PROTOCOL_VERSION};

/// Run the MCP server loop on the process stdin/stdout.
pub fn run<S: McpService>(service: &S) {
    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(service, stdin.lock(), stdout.lock());
}

/// Serve requests read from `reader` until EOF, writing responses to `writer`.
pub fn serve<S, R, W>(service: &S, reader: R, mut writer: W)
where
    S: McpService,
    R: BufRead,
    W: Write,
{
    info!(server = %service.server_info().name, "MCP server starting");

    for line in reader.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!(error = %e, "failed to read stdin");
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        debug!(request = %trimmed, "received request");

        let request: JsonRpcRequest = match serde_json::from_str(trimmed) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "invalid JSON-RPC request");
                let response =
                    JsonRpcResponse::error(None, PARSE_ERROR, format!("Parse error: {}", e));
                if let Err(e) = write_response(&mut writer, &response) {
                    error!(error = %e, "failed to write response");
                    break;
                }
                continue;
            }
        };

        if let Some(response) = handle_request(service, &request) {
            if let Err(e) = write_response(&mut writer, &response) {
                error!(error = %e, "failed to write response");
                break;
            }
        }
    }

    info!("MCP server shutting down");
}

/// Handle a single JSON-RPC request and return a response (or None for notifications).
pub fn handle_request<S: McpService>(
    service: &S,
    request: &JsonRpcRequest,
) -> Option<JsonRpcResponse> {
    let id = request.id.clone();

    if id.is_none() {
        // Notifications don't get responses
        debug!(method = %request.method, "notification");
        return None;
    }

    let response = match request.method.as_str() {
        "initialize" => {
            info!("client initializing");
            let result = InitializeResult {
                protocol_version: PROTOCOL_VERSION.to_string(),
                capabilities: ServerCapabilities {
                    tools: EmptyCapability {},
                    resources: service.has_resources().then_some(EmptyCapability {}),
                },
                server_info: service.server_info(),
            };
            success(id, &result)
        }

        "ping" => JsonRpcResponse::success(id, Value::Object(Default::default())),

        "tools/list" => {
            debug!("listing tools");
            let result = ToolsListResult {
                tools: service.list_tools(),
            };
            success(id, &result)
        }

        "tools/call" => {
            let params: ToolsCallParams = match serde_json::from_value(request.params.clone()) {
                Ok(p) => p,
                Err(e) => {
                    return Some(JsonRpcResponse::error(
                        id,
                        INVALID_PARAMS,
                        format!("Invalid params: {}", e),
                    ));
                }
            };

            debug!(tool = %params.name, "calling tool");
            let result = service.call_tool(&params.name, &params.arguments);
            if result.is_error() {
                warn!(tool = %params.name, "tool call failed");
            }
            success(id, &result)
        }

        "resources/list" => {
            let resources = service.list_resources();
            success(id, &serde_json::json!({ "resources": resources }))
        }

        "resources/templates/list" => {
            let templates = service.list_resource_templates();
            success(id, &serde_json::json!({ "resourceTemplates": templates }))
        }

        "resources/read" => {
            let params: ResourcesReadParams = match serde_json::from_value(request.params.clone())
            {
                Ok(p) => p,
                Err(e) => {
                    return Some(JsonRpcResponse::error(
                        id,
                        INVALID_PARAMS,
                        format!("Invalid params: {}", e),
                    ));
                }
            };

            debug!(uri = %params.uri, "reading resource");
            match service.read_resource(&params.uri) {
                Ok(contents) => success(id, &serde_json::json!({ "contents": [contents] })),
                Err(e) => {
                    warn!(uri = %params.uri, error = %e, "resource read failed");
                    JsonRpcResponse::error(id, e.error_code(), e.to_string())
                }
            }
        }

        _ => {
            warn!(method = %request.method, "unknown method");
            JsonRpcResponse::error(
                id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            )
        }
    };

    Some(response)
}

fn success<T: Serialize>(id: Option<Value>, result: &T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::error(
            id,
            INTERNAL_ERROR,
            format!("Failed to serialize result: {}", e),
        ),
    }
}

/// Write a JSON-RPC response (newline-delimited).
fn write_response(writer: &mut impl Write, response: &JsonRpcResponse) -> io::Result<()> {
    let json = serde_json::to_string(response)?;
    debug!(response = %json, "sending response");
    writeln!(writer, "{}", json)?;
    writer.flush()
}
