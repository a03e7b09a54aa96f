//! Watch mode: continuous rebuilds driven by filesystem events
//!
//! A single-threaded event loop multiplexes three input sources:
//! filesystem change notifications, keystrokes, and the interrupt
//! flag. Rebuilds run serially, one changed path at a time, and a
//! unit that fails to build is reported without ending the session.

mod event;
mod session;

pub use event::{WatchEvent, WatchOptions, POLL_INTERVAL_MS};
pub use session::{key_to_event, route_change, ChangeRoute, SessionEvent, WatchSession};
