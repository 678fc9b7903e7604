//! Browser console logging.
//!
//! `tracing` events are formatted by the `fmt` subscriber and forwarded to the
//! console method matching their level. Timestamps are left out since
//! `wasm32-unknown-unknown` has no system clock.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

use trolley::config::Config;

/// Install the console subscriber at the configured level.
pub(crate) fn init(config: &Config) {
    let result = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(config.log_level)
        .with_target(true)
        .without_time()
        .try_init();

    if let Err(error) = result {
        emit(
            Level::WARN,
            &format!("console logging was already initialised: {error}"),
        );
    }
}

#[derive(Debug, Clone, Copy)]
struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and hands it to the console on drop.
#[derive(Debug)]
struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = finish_line(&self.buffer) {
            emit(self.level, &line);
        }
    }
}

fn finish_line(buffer: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(buffer);
    let line = text.trim_end();

    (!line.is_empty()).then(|| line.to_string())
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);

    if level == Level::ERROR {
        web_sys::console::error_1(&value);
    } else if level == Level::WARN {
        web_sys::console::warn_1(&value);
    } else if level == Level::INFO {
        web_sys::console::info_1(&value);
    } else {
        web_sys::console::debug_1(&value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, _line: &str) {}
