//! Severity-tagged console logging, injected so handlers stay testable.

/// Three-severity event log for request outcomes. Implementations write
/// synchronously and never affect control flow.
pub trait EventLog: Send + Sync {
    fn success(&self, msg: &str);
    fn error(&self, msg: &str);
    fn info(&self, msg: &str);
}

/// Emits marked status lines through `tracing`; the fmt subscriber adds
/// level coloring on the console.
pub struct ConsoleLog;

impl EventLog for ConsoleLog {
    fn success(&self, msg: &str) {
        tracing::info!("✅ {msg}");
    }

    fn error(&self, msg: &str) {
        tracing::error!("❌ {msg}");
    }

    fn info(&self, msg: &str) {
        tracing::info!("ℹ️ {msg}");
    }
}
