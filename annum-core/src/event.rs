//! The event value type shared across the annum ecosystem.
//!
//! Events are plain values: the core never mutates them and never owns
//! them beyond the duration of a computation. Whether an event was created
//! locally, imported from a provider, or synced from a remote store is
//! invisible at this level.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A date-ranged calendar event.
///
/// `start_date` and `end_date` carry instants for wire compatibility, but
/// every computation in this crate is date-only: the time-of-day component
/// is truncated away before any comparison. The editing surface enforces
/// `start_date <= end_date`; the core tolerates violations (an inverted
/// interval is never active on any day).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
