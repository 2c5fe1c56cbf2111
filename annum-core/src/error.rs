//! Error types for the annum ecosystem.

use thiserror::Error;

/// Errors that can occur in core computations.
///
/// The core favors total functions: degenerate events and empty inputs
/// degrade to well-defined outputs instead of failing. The variants here
/// cover the few genuine caller contract violations.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Month index {0} out of range (expected 0..=11)")]
    MonthOutOfRange(u32),

    #[error("Year {0} outside the supported calendar range")]
    YearOutOfRange(i32),
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
