//! Port traits (interfaces for adapters).
//!
//! The registry depends on these traits, not on concrete sources or on a
//! particular HTTP client.

mod source;
mod transport;

pub use source::RateSource;
pub use transport::{Transport, TransportOptions, TransportRequest, TransportResponse};
