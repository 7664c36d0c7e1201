//! Operational counters backing the `data://stats` resource.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Live operational counters for the running server instance.
///
/// Incremented at the dispatch choke points in the capability registry.
/// All counters are relaxed atomics: they feed an informational resource,
/// not any control decision.
#[derive(Debug)]
pub struct ServerStats {
    instance_id: Uuid,
    started_at: DateTime<Utc>,
    start: Instant,
    requests: AtomicU64,
    errors: AtomicU64,
    tool_calls: AtomicU64,
    resource_reads: AtomicU64,
    prompt_renders: AtomicU64,
}

/// Point-in-time snapshot of [`ServerStats`], serialized by `data://stats`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Random per-process instance identifier.
    pub instance_id: String,
    /// RFC 3339 timestamp of process start.
    pub started_at: String,
    /// Seconds since process start.
    pub uptime_seconds: u64,
    /// Total dispatched requests across all capability kinds.
    pub requests: u64,
    /// Total dispatch failures.
    pub errors: u64,
    /// Tool invocations.
    pub tool_calls: u64,
    /// Resource reads.
    pub resource_reads: u64,
    /// Prompt renders.
    pub prompt_renders: u64,
}

impl ServerStats {
    /// Create a fresh counter set stamped with a new instance id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4(),
            started_at: Utc::now(),
            start: Instant::now(),
            requests: AtomicU64::new(0),
            errors: AtomicU64::new(0),
            tool_calls: AtomicU64::new(0),
            resource_reads: AtomicU64::new(0),
            prompt_renders: AtomicU64::new(0),
        }
    }

    /// Record one tool invocation.
    pub fn record_tool_call(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
        self.tool_calls.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one resource read.
    pub fn record_resource_read(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
        self.resource_reads.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one prompt render.
    pub fn record_prompt_render(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
        self.prompt_renders.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one dispatch failure of any kind.
    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Capture a point-in-time snapshot of all counters.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            instance_id: self.instance_id.to_string(),
            started_at: self.started_at.to_rfc3339(),
            uptime_seconds: self.start.elapsed().as_secs(),
            requests: self.requests.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
            tool_calls: self.tool_calls.load(Ordering::Relaxed),
            resource_reads: self.resource_reads.load(Ordering::Relaxed),
            prompt_renders: self.prompt_renders.load(Ordering::Relaxed),
        }
    }
}

impl Default for ServerStats {
    fn default() -> Self {
        Self::new()
    }
}
