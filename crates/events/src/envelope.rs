use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::clock::{Clock, SystemClock};
use crate::id::{EventIds, UuidIds};

/// Open-ended string-keyed values (string, number, boolean, nested map,
/// nested list) carried alongside the structured fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Envelope carried by every event: identity, typing, versioning and
/// timestamp metadata around the domain payload.
///
/// Notes:
/// - **Sealed**: produced through [`EnvelopeDraft::seal`], which guarantees
///   `event_id` is non-empty and `occurred_at` is populated.
/// - `event_type` is a stable dotted name (e.g. "people.employee.created").
/// - `metadata` is an open side channel; nothing in this layer inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    event_id: String,
    event_type: String,
    aggregate_id: String,
    aggregate_type: String,
    event_version: u32,
    occurred_at: DateTime<Utc>,
    metadata: JsonMap,
}

impl EventEnvelope {
    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn aggregate_id(&self) -> &str {
        &self.aggregate_id
    }

    pub fn aggregate_type(&self) -> &str {
        &self.aggregate_type
    }

    pub fn event_version(&self) -> u32 {
        self.event_version
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn metadata(&self) -> &JsonMap {
        &self.metadata
    }

    /// Overwrite the canonical identity fields.
    ///
    /// Record factories call this after sealing; whatever the caller put in
    /// the draft for these three fields is discarded.
    pub fn stamp_identity(
        &mut self,
        event_type: impl Into<String>,
        aggregate_type: impl Into<String>,
        aggregate_id: impl Into<String>,
    ) {
        self.event_type = event_type.into();
        self.aggregate_type = aggregate_type.into();
        self.aggregate_id = aggregate_id.into();
    }
}

/// Caller-supplied envelope fields, before the defaulting step.
///
/// `event_id` may be left empty and `occurred_at` unset; [`seal`](Self::seal)
/// fills both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvelopeDraft {
    pub event_id: String,
    pub event_type: String,
    pub aggregate_id: String,
    pub aggregate_type: String,
    pub event_version: u32,
    pub occurred_at: Option<DateTime<Utc>>,
    pub metadata: JsonMap,
}

impl EnvelopeDraft {
    /// Seal with the process defaults (UUIDv4 ids, system UTC clock).
    pub fn seal(self) -> EventEnvelope {
        self.seal_with(&UuidIds, &SystemClock)
    }

    /// Seal with explicit sources. Prefer this in tests for determinism.
    ///
    /// Defaulting rules:
    /// - empty `event_id` → one fresh id from `ids`
    /// - unset `occurred_at` → the clock's current instant
    ///
    /// Everything else passes through unchanged; field content is not
    /// validated here (`event_version` and `aggregate_type` in particular).
    pub fn seal_with(self, ids: &dyn EventIds, clock: &dyn Clock) -> EventEnvelope {
        let event_id = if self.event_id.is_empty() {
            let id = ids.next();
            trace!(event_id = %id, "defaulted empty event_id");
            id
        } else {
            self.event_id
        };

        let occurred_at = match self.occurred_at {
            Some(at) => at,
            None => {
                let now = clock.now();
                trace!(occurred_at = %now, "defaulted unset occurred_at");
                now
            }
        };

        EventEnvelope {
            event_id,
            event_type: self.event_type,
            aggregate_id: self.aggregate_id,
            aggregate_type: self.aggregate_type,
            event_version: self.event_version,
            occurred_at,
            metadata: self.metadata,
        }
    }
}
