//! Model Context Protocol server layer.

pub mod handler;
pub mod http;
pub mod prompts;
pub mod registry;
pub mod resources;
pub mod tools;
pub mod transport;
