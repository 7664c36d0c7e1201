#![forbid(unsafe_code)]

//! `mcp-workbench` — MCP capability server.
//!
//! Registers dispatch tables for tools, resources, and prompts and
//! serves them over stdio or streamable HTTP using the `rmcp` protocol
//! runtime.

pub mod config;
pub mod errors;
pub mod mcp;
pub mod models;
pub mod stats;

pub use config::GlobalConfig;
pub use errors::{AppError, Result};
