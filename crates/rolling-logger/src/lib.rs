//! Rolling Logger
//!
//! A `tracing-subscriber` fmt layer whose writer keeps the last N formatted
//! lines in a circular buffer and forwards each line to the browser
//! console (stderr when not on wasm32). `log` records reach it through the
//! `tracing-log` bridge that `init_logger` installs.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::Layer;

const TIME_FORMAT: &str = "%H:%M:%S%.3f";

static SINK: OnceLock<RollingSink> = OnceLock::new();

/// Fixed-size line buffer; the oldest line is dropped when full
#[derive(Debug, Clone)]
pub struct RollingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Shared handle to the rolling buffer, used as the fmt layer's writer
#[derive(Clone)]
pub struct RollingSink {
    app_name: Arc<str>,
    buffer: Arc<Mutex<RollingBuffer>>,
}

impl RollingSink {
    pub fn new(app_name: &str, capacity: usize) -> Self {
        Self {
            app_name: Arc::from(app_name),
            buffer: Arc::new(Mutex::new(RollingBuffer::new(capacity))),
        }
    }

    /// fmt layer that writes into this sink
    pub fn layer<S>(&self) -> impl Layer<S>
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
            .with_writer(self.clone())
    }

    fn push(&self, level: Level, text: &str) {
        let text = text.trim_end();
        if text.is_empty() {
            return;
        }
        let line = format!("[{}] {}", self.app_name, text);
        emit(level, &line);
        match self.buffer.lock() {
            Ok(mut buffer) => buffer.push(line),
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }

    pub fn recent(&self) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.lines(),
            Err(poisoned) => poisoned.into_inner().lines(),
        }
    }

    fn line_writer(&self, level: Level) -> LineWriter {
        LineWriter {
            sink: self.clone(),
            level,
            bytes: Vec::new(),
        }
    }
}

impl<'a> MakeWriter<'a> for RollingSink {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.line_writer(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        self.line_writer(*meta.level())
    }
}

/// Collects one formatted event; hands it to the sink on drop
pub struct LineWriter {
    sink: RollingSink,
    level: Level,
    bytes: Vec<u8>,
}

impl io::Write for LineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        if !self.bytes.is_empty() {
            let text = String::from_utf8_lossy(&self.bytes);
            self.sink.push(self.level, &text);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        _ => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global subscriber at `INFO` (`DEBUG` in debug builds) and
/// bridge `log` records into it
pub fn init_logger(app_name: &str, capacity: usize) -> Result<(), TryInitError> {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let sink = SINK.get_or_init(|| RollingSink::new(app_name, capacity));
    tracing_subscriber::registry()
        .with(sink.layer().with_filter(level))
        .try_init()
}

/// Most recent lines, oldest first. Empty before `init_logger`.
pub fn recent_lines() -> Vec<String> {
    SINK.get().map(RollingSink::recent).unwrap_or_default()
}
