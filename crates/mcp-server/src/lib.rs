//! # mcp-server
//!
//! MCP (Model Context Protocol) server for the Apple Pay mock wallet.
//! Speaks JSON-RPC 2.0 over newline-delimited stdio and exposes the six
//! wallet tools from `pay-core`.

pub mod protocol;
pub mod tools;
pub mod transport;

pub use protocol::{McpError, McpMessage, RequestHandler, ServerCapabilities};
pub use tools::{tool_definitions, ToolExecutor};
pub use transport::StdioTransport;
