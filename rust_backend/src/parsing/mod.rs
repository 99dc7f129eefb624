//! Parsers for calculator input.
//!
//! The calculators expect a well-formed [`Timestamp`](crate::core::domain::Timestamp);
//! this module is the collaborator that turns user text into one and rejects
//! anything malformed before it reaches them.
//!
//! # Example
//!
//! ```
//! use moon_rust::parsing::parse_timestamp;
//!
//! let ts = parse_timestamp("2000-01-21T00:00").expect("valid datetime-local value");
//! assert_eq!(ts.day(), 21);
//! ```

pub mod timestamp;


pub use timestamp::{parse_batch, parse_timestamp, TimestampParser};
