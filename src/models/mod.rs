//! Domain value objects passed through tool calls.

pub mod text_stats;
pub mod user;
