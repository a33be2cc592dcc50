//! # Venrate Types
//!
//! Domain types and port traits for the exchange-rate extraction core.
//! This crate has ZERO IO dependencies - only data structures, validation
//! rules, and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Currency codes, source identifiers and configs, queries and results
//! - `ports/` - Trait definitions that adapters must implement (`Transport`, `RateSource`)
//! - `error/` - Validation, transport and extraction error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    CurrencyCode, DEFAULT_TIMEOUT, HttpMethod, RateQuery, RateResult, SourceConfig, SourceId,
};
pub use error::{ExtractionError, RateError, TransportError, ValidationError};
pub use ports::{RateSource, Transport, TransportOptions, TransportRequest, TransportResponse};
