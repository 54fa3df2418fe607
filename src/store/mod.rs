//! Bounded storage strategies behind one `BoundedLog` interface.
//!
//! Stores do no locking. Concurrent use of one store must be serialized by
//! the caller (e.g. behind a `Mutex`).

pub mod deque;
pub mod ring;

use crate::config::Strategy;
use crate::entry::Entry;
use crate::error::ConfigError;
use crate::payload::Payload;
use crate::render::{self, IoSink, Line};
use chrono::{DateTime, Local};
use std::fmt;
use std::io;

pub use deque::DequeStore;
pub use ring::RingStore;

/// A log holding at most `capacity()` entries, oldest evicted first.
pub trait BoundedLog<P> {
    /// Log `payload` stamped with `timestamp`. Returns the entry evicted to
    /// make room, if the log was full.
    fn log_at(&mut self, timestamp: DateTime<Local>, payload: P) -> Option<Entry<P>>;

    /// Retained entries, oldest first.
    fn iter(&self) -> Box<dyn Iterator<Item = &Entry<P>> + '_>;

    fn len(&self) -> usize;

    fn capacity(&self) -> usize;

    /// Number of entries ever logged, including evicted ones.
    fn total_logged(&self) -> u64;

    /// Drop every entry. Capacity and the sequence counter are kept.
    fn clear(&mut self);

    /// Log `payload` stamped with the current local time.
    fn log(&mut self, payload: P) {
        self.log_at(Local::now(), payload);
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn oldest(&self) -> Option<&Entry<P>> {
        self.iter().next()
    }

    fn newest(&self) -> Option<&Entry<P>> {
        self.iter().last()
    }

    /// Write the report into `sink`. A sink error is returned as-is and
    /// leaves the log untouched.
    fn render(&self, sink: &mut dyn fmt::Write) -> fmt::Result
    where
        P: Payload,
    {
        render::write_entries(sink, self.iter())
    }

    /// The whole report as a `String`. Fails only if a payload's own
    /// `render` fails; prefer this over `to_string()`, which panics then.
    fn render_to_string(&self) -> Result<String, fmt::Error>
    where
        P: Payload,
    {
        let mut out = String::new();
        self.render(&mut out)?;
        Ok(out)
    }

    /// Write the report into a byte sink.
    fn write_to(&self, sink: &mut dyn io::Write) -> io::Result<()>
    where
        P: Payload,
    {
        let mut adapter = IoSink::new(sink);
        match self.render(&mut adapter) {
            Ok(()) => Ok(()),
            Err(_) => Err(adapter
                .error
                .take()
                .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "payload formatting failed"))),
        }
    }

    /// The report one line at a time.
    fn lines(&self) -> Box<dyn Iterator<Item = Line<'_, P>> + '_> {
        Box::new(self.iter().map(Line::new))
    }
}

// ── Strategy selection ───────────────────────────────────────────────

/// A log whose storage strategy is picked at runtime.
#[derive(Debug, Clone)]
pub enum EventLog<P> {
    Ring(RingStore<P>),
    Deque(DequeStore<P>),
}

impl<P> EventLog<P> {
    pub fn new(strategy: Strategy, capacity: usize) -> Result<Self, ConfigError> {
        match strategy {
            Strategy::Ring  => RingStore::new(capacity).map(EventLog::Ring),
            Strategy::Deque => DequeStore::new(capacity).map(EventLog::Deque),
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            EventLog::Ring(_)  => Strategy::Ring,
            EventLog::Deque(_) => Strategy::Deque,
        }
    }
}

impl<P> BoundedLog<P> for EventLog<P> {
    fn log_at(&mut self, timestamp: DateTime<Local>, payload: P) -> Option<Entry<P>> {
        match self {
            EventLog::Ring(s)  => s.log_at(timestamp, payload),
            EventLog::Deque(s) => s.log_at(timestamp, payload),
        }
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Entry<P>> + '_> {
        match self {
            EventLog::Ring(s)  => s.iter(),
            EventLog::Deque(s) => s.iter(),
        }
    }

    fn len(&self) -> usize {
        match self {
            EventLog::Ring(s)  => s.len(),
            EventLog::Deque(s) => s.len(),
        }
    }

    fn capacity(&self) -> usize {
        match self {
            EventLog::Ring(s)  => s.capacity(),
            EventLog::Deque(s) => s.capacity(),
        }
    }

    fn total_logged(&self) -> u64 {
        match self {
            EventLog::Ring(s)  => s.total_logged(),
            EventLog::Deque(s) => s.total_logged(),
        }
    }

    fn clear(&mut self) {
        match self {
            EventLog::Ring(s)  => s.clear(),
            EventLog::Deque(s) => s.clear(),
        }
    }

    fn newest(&self) -> Option<&Entry<P>> {
        match self {
            EventLog::Ring(s)  => s.newest(),
            EventLog::Deque(s) => s.newest(),
        }
    }
}

impl<P: Payload> fmt::Display for EventLog<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_selects_store() {
        let ring: EventLog<String> = EventLog::new(Strategy::Ring, 8).unwrap();
        let deque: EventLog<String> = EventLog::new(Strategy::Deque, 6).unwrap();
        assert_eq!(ring.strategy(), Strategy::Ring);
        assert_eq!(deque.strategy(), Strategy::Deque);
        assert_eq!(deque.capacity(), 6);
    }

    #[test]
    fn ring_rejects_what_deque_accepts() {
        assert_eq!(
            EventLog::<String>::new(Strategy::Ring, 6).unwrap_err(),
            ConfigError::NotPowerOfTwo { capacity: 6 },
        );
        assert!(EventLog::<String>::new(Strategy::Deque, 6).is_ok());
    }

    #[test]
    fn write_to_reports_io_error() {
        struct Full;
        impl io::Write for Full {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::WriteZero, "disk full"))
            }
            fn flush(&mut self) -> io::Result<()> { Ok(()) }
        }

        let mut log: EventLog<&str> = EventLog::new(Strategy::Deque, 2).unwrap();
        log.log("a");
        let err = log.write_to(&mut Full).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn write_to_matches_string_report() {
        let mut log: EventLog<&str> = EventLog::new(Strategy::Ring, 2).unwrap();
        log.log("a");
        log.log("b");
        log.log("c");
        let mut bytes = Vec::new();
        log.write_to(&mut bytes).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), log.render_to_string().unwrap());
    }
}
