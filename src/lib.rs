//! Fixed-capacity, timestamped event log.
//!
//! Keeps the N most recent records of any [`Payload`] type and renders them
//! oldest first as `YYYY-MM-DD HH:MM:SS <payload>` lines. Two storage
//! strategies implement [`BoundedLog`] with identical observable behaviour:
//! [`RingStore`] (preallocated, power-of-two capacity) and [`DequeStore`].
//!
//! [`BoundedLog::render_to_string`] is the fallible materialized report.
//! The stores also implement `Display`, but `to_string()` panics if a
//! payload's `render` returns an error.
//!
//! ```
//! use ringlog::{BoundedLog, RingStore};
//!
//! let mut log = RingStore::new(4)?;
//! for event in ["boot", "link up", "rx", "tx", "link down"] {
//!     log.log(event);
//! }
//! assert_eq!(log.len(), 4);
//! let report = log.render_to_string().expect("str payloads always render");
//! assert!(report.lines().all(|l| l.len() > 20));
//! assert!(!report.contains("boot"));
//! # Ok::<(), ringlog::ConfigError>(())
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod payload;
pub mod render;
pub mod store;

pub use config::{BufferConfig, Config, Strategy};
pub use entry::Entry;
pub use error::ConfigError;
pub use payload::{Payload, Text};
pub use render::{Line, TIMESTAMP_FORMAT};
pub use store::{BoundedLog, DequeStore, EventLog, RingStore};
