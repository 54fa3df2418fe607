use super::BoundedLog;
use crate::entry::Entry;
use crate::error::ConfigError;
use crate::payload::Payload;
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::fmt;

/// Bounded queue: pops the front (oldest) entry before pushing past capacity.
/// Any non-zero capacity is accepted.
#[derive(Debug, Clone)]
pub struct DequeStore<P> {
    entries:  VecDeque<Entry<P>>,
    cap:      usize,
    next_seq: u64,
}

impl<P> DequeStore<P> {
    pub fn new(cap: usize) -> Result<Self, ConfigError> {
        if cap == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        log::debug!("deque store created (capacity {})", cap);
        Ok(Self { entries: VecDeque::with_capacity(cap), cap, next_seq: 0 })
    }
}

impl<P> BoundedLog<P> for DequeStore<P> {
    fn log_at(&mut self, timestamp: DateTime<Local>, payload: P) -> Option<Entry<P>> {
        let evicted = if self.entries.len() == self.cap {
            self.entries.pop_front()
        } else {
            None
        };
        if let Some(old) = &evicted {
            log::trace!("deque store evicted entry #{}", old.seq());
        }
        self.entries.push_back(Entry::new(self.next_seq, timestamp, payload));
        self.next_seq += 1;
        evicted
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Entry<P>> + '_> {
        Box::new(self.entries.iter())
    }

    fn len(&self) -> usize { self.entries.len() }

    fn capacity(&self) -> usize { self.cap }

    fn total_logged(&self) -> u64 { self.next_seq }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn newest(&self) -> Option<&Entry<P>> {
        self.entries.back()
    }
}

impl<P: Payload> fmt::Display for DequeStore<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_only_rejection() {
        assert_eq!(DequeStore::<u8>::new(0).unwrap_err(), ConfigError::ZeroCapacity);
        for cap in [1, 3, 5, 6, 7, 100] {
            assert_eq!(DequeStore::<u8>::new(cap).unwrap().capacity(), cap);
        }
    }

    #[test]
    fn front_eviction() {
        let mut d = DequeStore::new(3).unwrap();
        let evicted: Vec<u32> = (0..7u32)
            .filter_map(|i| d.log_at(Local::now(), i))
            .map(Entry::into_payload)
            .collect();
        assert_eq!(evicted, vec![0, 1, 2, 3]);
        let kept: Vec<u32> = d.iter().map(|e| *e.payload()).collect();
        assert_eq!(kept, vec![4, 5, 6]);
        assert_eq!(d.newest().map(|e| e.seq()), Some(6));
    }

    #[test]
    fn never_grows_past_capacity() {
        let mut d = DequeStore::new(5).unwrap();
        for i in 0..50 {
            d.log(i);
            assert!(d.len() <= 5);
        }
        assert_eq!(d.len(), 5);
        assert_eq!(d.total_logged(), 50);
    }
}
