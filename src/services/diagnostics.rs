use log::Level;
use parking_lot::Mutex;

const LOG_TARGET: &str = "automod";

/// Receives diagnostics from the filter and the moderation pipeline.
///
/// The filter never touches the global logger directly; whoever builds it
/// decides where the reports end up.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, level: Level, message: &str);
}

/// Forwards every report to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, level: Level, message: &str) {
        log::log!(target: LOG_TARGET, level, "{}", message);
    }
}

/// Keeps reports in memory so callers can inspect them afterwards.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<(Level, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.lock().clone()
    }

    pub fn count_at(&self, level: Level) -> usize {
        self.entries.lock().iter().filter(|(l, _)| *l == level).count()
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, level: Level, message: &str) {
        self.entries.lock().push((level, message.to_string()));
    }
}
