use std::fmt::{self, Display};
use std::rc::Rc;
use std::sync::Arc;

/// Anything that can write itself into a text sink can be logged.
///
/// Handle types (`&T`, `Box<T>`, `Rc<T>`, `Arc<T>`) forward to the value
/// they point at, so a record renders the same whichever way it is held.
pub trait Payload {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

impl Payload for str {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str(self)
    }
}

impl Payload for String {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str(self)
    }
}

/// Adapter for logging any `Display` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Text<T>(pub T);

impl<T: Display> Payload for Text<T> {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{}", self.0)
    }
}

// ── Handles ──────────────────────────────────────────────────────────

impl<T: Payload + ?Sized> Payload for &T {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        (**self).render(out)
    }
}

impl<T: Payload + ?Sized> Payload for Box<T> {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        (**self).render(out)
    }
}

impl<T: Payload + ?Sized> Payload for Rc<T> {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        (**self).render(out)
    }
}

impl<T: Payload + ?Sized> Payload for Arc<T> {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        (**self).render(out)
    }
}
