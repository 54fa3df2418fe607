//! Text report formatting. Pure: reads entries, never touches a store.

use crate::entry::Entry;
use crate::payload::Payload;
use std::fmt;

/// Local calendar time, second resolution. Always 19 characters wide.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Write `<timestamp> <payload>\n` for one entry.
pub fn write_entry<P: Payload>(out: &mut dyn fmt::Write, entry: &Entry<P>) -> fmt::Result {
    write!(out, "{} ", entry.timestamp().format(TIMESTAMP_FORMAT))?;
    entry.payload().render(out)?;
    out.write_char('\n')
}

/// Write one line per entry, in iteration order. Stops at the first sink error.
pub fn write_entries<'a, P, I>(out: &mut dyn fmt::Write, entries: I) -> fmt::Result
where
    P: Payload + 'a,
    I: IntoIterator<Item = &'a Entry<P>>,
{
    for entry in entries {
        write_entry(out, entry)?;
    }
    Ok(())
}

/// A single report line, rendered lazily through `Display`.
pub struct Line<'a, P> {
    entry: &'a Entry<P>,
}

impl<'a, P> Line<'a, P> {
    pub fn new(entry: &'a Entry<P>) -> Self {
        Self { entry }
    }

    pub fn entry(&self) -> &'a Entry<P> { self.entry }
}

impl<P: Payload> fmt::Display for Line<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entry(f, self.entry)
    }
}

/// Adapts an `io::Write` so the fmt-based renderer can drive it, keeping
/// the underlying I/O error for the caller.
pub(crate) struct IoSink<'a> {
    inner: &'a mut dyn std::io::Write,
    pub(crate) error: Option<std::io::Error>,
}

impl<'a> IoSink<'a> {
    pub(crate) fn new(inner: &'a mut dyn std::io::Write) -> Self {
        Self { inner, error: None }
    }
}

impl fmt::Write for IoSink<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn at(h: u32, m: u32, s: u32) -> chrono::DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 12, h, m, s).single().unwrap()
    }

    #[test]
    fn line_format() {
        let e = Entry::new(0, at(11, 5, 3), String::from("SENT Signal 2."));
        let mut out = String::new();
        write_entry(&mut out, &e).unwrap();
        assert_eq!(out, "2024-06-12 11:05:03 SENT Signal 2.\n");
        assert_eq!(Line::new(&e).to_string(), out);
    }

    #[test]
    fn timestamp_is_fixed_width() {
        let e = Entry::new(0, at(12, 0, 0), String::new());
        let line = Line::new(&e).to_string();
        // 19 chars of timestamp, a space, empty payload, newline
        assert_eq!(line.len(), 21);
        assert!(line.ends_with(" \n"));
    }

    #[test]
    fn entries_in_given_order() {
        let a = Entry::new(0, at(13, 0, 0), String::from("a"));
        let b = Entry::new(1, at(13, 0, 0), String::from("b"));
        let mut out = String::new();
        write_entries(&mut out, [&a, &b]).unwrap();
        assert_eq!(out, "2024-06-12 13:00:00 a\n2024-06-12 13:00:00 b\n");
    }

    #[test]
    fn no_entries_no_text() {
        let mut out = String::new();
        write_entries(&mut out, std::iter::empty::<&Entry<String>>()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn io_sink_keeps_error() {
        struct Broken;
        impl std::io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
        }

        let mut broken = Broken;
        let mut sink = IoSink::new(&mut broken);
        assert!(fmt::Write::write_str(&mut sink, "x").is_err());
        assert_eq!(sink.error.map(|e| e.kind()), Some(std::io::ErrorKind::BrokenPipe));
    }
}
