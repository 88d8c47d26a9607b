//! Browser console output for `tracing` events.
//!
//! The cart crates log through `tracing`; in the browser those events only
//! become visible once a subscriber writes them to the console. Formatting is
//! `tracing-subscriber`'s fmt layer, without timestamps (there is no system
//! clock on `wasm32-unknown-unknown`) and without ANSI colours.

use std::io::{self, Write};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Install the console subscriber. Later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(LevelFilter::WARN)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init();
}

#[derive(Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = LineWriter<fn(&str)>;

    fn make_writer(&'a self) -> Self::Writer {
        LineWriter::new(console_warn)
    }
}

fn console_warn(line: &str) {
    web_sys::console::warn_1(&JsValue::from_str(line));
}

/// Buffers formatted output and hands each complete line to `sink`.
/// Whatever is left over is emitted on flush or drop.
pub struct LineWriter<F: Fn(&str)> {
    sink: F,
    buf: Vec<u8>,
}

impl<F: Fn(&str)> LineWriter<F> {
    pub fn new(sink: F) -> Self {
        Self {
            sink,
            buf: Vec::new(),
        }
    }

    fn emit_lines(&mut self) {
        while let Some(pos) = self.buf.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=pos).collect();
            (self.sink)(String::from_utf8_lossy(&line[..pos]).trim_end_matches('\r'));
        }
    }
}

impl<F: Fn(&str)> Write for LineWriter<F> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        self.emit_lines();
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit_lines();
        if !self.buf.is_empty() {
            let rest = std::mem::take(&mut self.buf);
            (self.sink)(&*String::from_utf8_lossy(&rest));
        }
        Ok(())
    }
}

impl<F: Fn(&str)> Drop for LineWriter<F> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn collecting() -> (Rc<RefCell<Vec<String>>>, LineWriter<impl Fn(&str)>) {
        let lines = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&lines);
        let writer = LineWriter::new(move |line: &str| sink.borrow_mut().push(line.to_owned()));
        (lines, writer)
    }

    #[test]
    fn emits_each_complete_line() {
        let (lines, mut writer) = collecting();
        writer.write_all(b" WARN failed to persist cart\n WARN sec").unwrap();
        writer.write_all(b"ond\n").unwrap();
        assert_eq!(
            *lines.borrow(),
            vec![" WARN failed to persist cart", " WARN second"]
        );
    }

    #[test]
    fn unterminated_tail_is_emitted_on_drop() {
        let (lines, mut writer) = collecting();
        writer.write_all(b"partial").unwrap();
        assert!(lines.borrow().is_empty());
        drop(writer);
        assert_eq!(*lines.borrow(), vec!["partial"]);
    }

    #[test]
    fn flush_does_not_repeat_output() {
        let (lines, mut writer) = collecting();
        writer.write_all(b"one\r\n").unwrap();
        writer.flush().unwrap();
        drop(writer);
        assert_eq!(*lines.borrow(), vec!["one"]);
    }
}
