//! Port traits (capabilities injected into the client).
//!
//! The client depends on these traits, not on a concrete HTTP library,
//! HMAC implementation or system clock, so tests can substitute fakes.

mod clock;
mod hasher;
mod transport;

pub use clock::{Clock, SystemClock};
pub use hasher::KeyedHasher;
pub use transport::HttpTransport;
