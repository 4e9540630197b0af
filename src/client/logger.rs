//! Explicit logging sink for the API client
//!
//! The client never logs through the global `log` macros. It owns a
//! [`ClientLogger`] instead, which forwards records to any [`log::Log`]
//! implementation. [`ClientLogger::global`] forwards to whatever logger the
//! process installed; [`MemoryLogger`] keeps records in memory for tests.

use std::fmt;
use std::sync::{Arc, Mutex};

use log::{Level, Log, Metadata, Record};

/// Target used for ordinary client records
pub const LOG_TARGET: &str = "safetyculture";

/// Target used for critical records (validation failures, unexpected payloads)
pub const CRITICAL_TARGET: &str = "safetyculture::critical";

/// Logging handle carried by the client
#[derive(Clone)]
pub struct ClientLogger {
    sink: Arc<dyn Log>,
}

impl ClientLogger {
    /// Log through the process-wide logger installed via the `log` facade
    pub fn global() -> Self {
        Self {
            sink: Arc::new(GlobalSink),
        }
    }

    /// Log through a specific sink
    pub fn new(sink: Arc<dyn Log>) -> Self {
        Self { sink }
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Info, LOG_TARGET, args);
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Error, LOG_TARGET, args);
    }

    /// `log` has no critical level; critical records are errors on their own target
    pub fn critical(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Error, CRITICAL_TARGET, args);
    }

    fn emit(&self, level: Level, target: &str, args: fmt::Arguments<'_>) {
        let metadata = Metadata::builder().level(level).target(target).build();
        if !self.sink.enabled(&metadata) {
            return;
        }
        self.sink.log(
            &Record::builder()
                .metadata(metadata)
                .args(args)
                .module_path_static(Some(module_path!()))
                .build(),
        );
    }
}

impl Default for ClientLogger {
    fn default() -> Self {
        Self::global()
    }
}

impl fmt::Debug for ClientLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientLogger").finish_non_exhaustive()
    }
}

/// Forwards to `log::logger()`, resolved on every call so late initialisation works
struct GlobalSink;

impl Log for GlobalSink {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level() && log::logger().enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        log::logger().log(record);
    }

    fn flush(&self) {
        log::logger().flush();
    }
}

/// A captured log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl CapturedRecord {
    pub fn is_critical(&self) -> bool {
        self.target == CRITICAL_TARGET
    }
}

/// In-memory sink that keeps every record it receives
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<CapturedRecord>>,
}

impl MemoryLogger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of all records received so far
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Records whose message contains `needle`
    pub fn matching(&self, needle: &str) -> Vec<CapturedRecord> {
        self.records()
            .into_iter()
            .filter(|r| r.message.contains(needle))
            .collect()
    }

    pub fn criticals(&self) -> Vec<CapturedRecord> {
        self.records()
            .into_iter()
            .filter(CapturedRecord::is_critical)
            .collect()
    }
}

impl Log for MemoryLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut records) = self.records.lock() {
            records.push(CapturedRecord {
                level: record.level(),
                target: record.target().to_string(),
                message: record.args().to_string(),
            });
        }
    }

    fn flush(&self) {}
}
