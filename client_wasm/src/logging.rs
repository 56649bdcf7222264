//! `tracing` output to the browser console

use std::io::{self, Write};

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Buffers one formatted event and hands it to `console.log` on drop
#[derive(Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl ConsoleWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn line(&self) -> String {
        String::from_utf8_lossy(&self.buf).trim_end().to_string()
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        emit(&self.line());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    web_sys::console::log_1(&line.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &str) {
    eprintln!("{line}");
}

/// Install the global subscriber and panic hook. Safe to call twice.
pub fn init(max_level: Level) {
    console_error_panic_hook::set_once();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_writer(ConsoleWriter::new)
        .with_ansi(false)
        .without_time()
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
