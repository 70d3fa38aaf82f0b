//! MCP request handler

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use super::types::*;
use crate::tools::{tool_definitions, ToolExecutor};
use pay_core::{PayError, PayWallet};

/// Handler for MCP requests
pub struct RequestHandler {
    tool_executor: ToolExecutor,
    server_name: String,
    server_version: String,
}

impl RequestHandler {
    /// Create a new request handler over the shared wallet
    pub fn new(wallet: Arc<RwLock<PayWallet>>) -> Self {
        Self {
            tool_executor: ToolExecutor::new(wallet),
            server_name: "Apple Pay Mock Server".to_string(),
            server_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Handle an incoming message. Returns `None` for notifications and
    /// anything else that needs no reply.
    pub async fn handle(&mut self, message: McpMessage) -> Option<McpMessage> {
        if message.is_request() {
            let method = message.method.as_deref().unwrap_or_default();
            let id = message.id.clone()?;

            debug!("Handling request: {}", method);

            let result = match method {
                "initialize" => self.handle_initialize(message.params),
                "ping" => Ok(serde_json::json!({})),
                "tools/list" => self.handle_tools_list(),
                "tools/call" => self.handle_tools_call(message.params).await,
                _ => Err(McpError::method_not_found()),
            };

            Some(match result {
                Ok(result) => McpMessage::response(id, result),
                Err(error) => McpMessage::error_response(Some(id), error),
            })
        } else if message.is_notification() {
            let method = message.method.as_deref().unwrap_or_default();

            match method {
                "notifications/initialized" | "initialized" => {
                    info!("Client initialized");
                }
                other => {
                    debug!("Ignoring notification: {}", other);
                }
            }

            None
        } else {
            debug!("Received unexpected response message");
            None
        }
    }

    fn handle_initialize(&mut self, params: Option<Value>) -> Result<Value, McpError> {
        let params: InitializeParams = params
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| McpError::invalid_params(e.to_string()))?
            .ok_or_else(|| McpError::invalid_params("Missing params"))?;

        info!(
            "Initializing session with client: {} v{}",
            params.client_info.name, params.client_info.version
        );

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities::with_tools(),
            server_info: ServerInfo {
                name: self.server_name.clone(),
                version: self.server_version.clone(),
            },
        };

        serde_json::to_value(result).map_err(|e| McpError::internal_error(e.to_string()))
    }

    fn handle_tools_list(&self) -> Result<Value, McpError> {
        let result = ToolsListResult {
            tools: tool_definitions(),
        };
        serde_json::to_value(result).map_err(|e| McpError::internal_error(e.to_string()))
    }

    async fn handle_tools_call(&self, params: Option<Value>) -> Result<Value, McpError> {
        let params: ToolCallParams = params
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| McpError::invalid_params(e.to_string()))?
            .ok_or_else(|| McpError::invalid_params("Missing params"))?;

        debug!("Calling tool: {}", params.name);

        let result = self
            .tool_executor
            .execute(&params.name, params.arguments)
            .await;

        match result {
            Ok(tool_result) => {
                serde_json::to_value(tool_result).map_err(|e| McpError::internal_error(e.to_string()))
            }
            Err(e) => {
                error!("Tool call rejected: {}", e);
                Err(match e {
                    PayError::UnknownTool(_) => McpError::method_not_found(),
                    PayError::MissingArgument(_) | PayError::InvalidArgument { .. } => {
                        McpError::invalid_params(e.to_string())
                    }
                    PayError::SerializationError(_) => McpError::internal_error(e.to_string()),
                })
            }
        }
    }
}
