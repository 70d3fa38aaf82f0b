//! Transport implementations for the MCP server

mod stdio;

pub use stdio::StdioTransport;
