//! Error-level logging capability injected into the client.

use serde_json::{Map, Value};

/// Structured fields attached to a log entry.
pub type LogContext = Map<String, Value>;

/// Receives one entry per rejected provider call.
///
/// Logging is a side channel: implementations must not panic, and the client's
/// result is the same whether or not a logger is installed.
pub trait ErrorLogger: Send + Sync {
    fn error(&self, message: &str, context: &LogContext);
}

#[derive(Debug, Clone, Copy, Default)]
/// Default [`ErrorLogger`]: forwards entries to `tracing` at `ERROR` level.
pub struct TracingLogger;

impl ErrorLogger for TracingLogger {
    fn error(&self, message: &str, context: &LogContext) {
        let status = context.get("status").and_then(Value::as_u64);
        // `Value` inside the macro resolves to tracing's own trait.
        let fields = Value::Object(context.clone());
        tracing::error!(
            target: "smartpings",
            status = ?status,
            context = %fields,
            "{message}"
        );
    }
}
