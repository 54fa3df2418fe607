use chrono::{DateTime, Local};

/// One logged record.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<P> {
    seq:       u64,
    timestamp: DateTime<Local>,
    payload:   P,
}

impl<P> Entry<P> {
    pub(crate) fn new(seq: u64, timestamp: DateTime<Local>, payload: P) -> Self {
        Self { seq, timestamp, payload }
    }

    /// Zero-based insertion index within the store that logged it.
    pub fn seq(&self) -> u64 { self.seq }

    pub fn timestamp(&self) -> DateTime<Local> { self.timestamp }

    pub fn payload(&self) -> &P { &self.payload }

    pub fn into_payload(self) -> P { self.payload }
}
