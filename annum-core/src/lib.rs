//! Core types and date computations for the annum ecosystem.
//!
//! This crate provides everything the annum CLI and import providers share:
//! - `Event`, `Category` and `Settings` value types
//! - the pure calendar computation core (`interval`, `grid`, `aggregate`,
//!   `cyclic`)
//! - `protocol` module for the CLI-provider communication protocol
//!
//! The computation modules are deliberately free of I/O and ambient state:
//! they take a `(year, events)` snapshot and return derived value structures,
//! so callers can memoize results per render pass.

pub mod aggregate;
pub mod category;
pub mod error;
pub mod event;
pub mod grid;
pub mod interval;
pub mod protocol;
pub mod settings;

pub mod cyclic;

// Re-export the data model at crate root for convenience
pub use category::*;
pub use error::*;
pub use event::*;
pub use settings::*;
