use super::BoundedLog;
use crate::entry::Entry;
use crate::error::ConfigError;
use crate::payload::Payload;
use chrono::{DateTime, Local};
use std::fmt;

/// Fixed-capacity ring of preallocated slots. Oldest entry is overwritten
/// when full. Capacity must be a power of two so the cursor wraps with a mask.
#[derive(Debug, Clone)]
pub struct RingStore<P> {
    slots:    Vec<Option<Entry<P>>>,
    head:     usize,
    len:      usize,
    mask:     usize,
    next_seq: u64,
}

impl<P> RingStore<P> {
    pub fn new(cap: usize) -> Result<Self, ConfigError> {
        if cap == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !cap.is_power_of_two() {
            return Err(ConfigError::NotPowerOfTwo { capacity: cap });
        }
        log::debug!("ring store created (capacity {})", cap);
        Ok(Self {
            slots:    (0..cap).map(|_| None).collect(),
            head:     0,
            len:      0,
            mask:     cap - 1,
            next_seq: 0,
        })
    }

    /// Slot holding the oldest retained entry.
    fn start(&self) -> usize {
        (self.head + self.slots.len() - self.len) & self.mask
    }
}

impl<P> BoundedLog<P> for RingStore<P> {
    fn log_at(&mut self, timestamp: DateTime<Local>, payload: P) -> Option<Entry<P>> {
        let entry = Entry::new(self.next_seq, timestamp, payload);
        self.next_seq += 1;

        // Below capacity the slot under the cursor is always empty.
        let evicted = self.slots[self.head].replace(entry);
        self.head = (self.head + 1) & self.mask;
        if self.len < self.slots.len() {
            self.len += 1;
        }
        if let Some(old) = &evicted {
            log::trace!("ring store evicted entry #{}", old.seq());
        }
        evicted
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Entry<P>> + '_> {
        let start = self.start();
        Box::new((0..self.len).filter_map(move |i| self.slots[(start + i) & self.mask].as_ref()))
    }

    fn len(&self) -> usize { self.len }

    fn capacity(&self) -> usize { self.slots.len() }

    fn total_logged(&self) -> u64 { self.next_seq }

    fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
        self.head = 0;
        self.len = 0;
    }

    fn newest(&self) -> Option<&Entry<P>> {
        if self.len == 0 {
            return None;
        }
        self.slots[(self.head + self.mask) & self.mask].as_ref()
    }
}

impl<P: Payload> fmt::Display for RingStore<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}
