use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::envelope::{EnvelopeDraft, EventEnvelope};
use crate::id::EventIds;

/// A domain event: envelope + multi-tenant scoping.
///
/// Classifies an event whose effect is local to one business domain/tenant.
/// The scope fields are stored verbatim; sealing the envelope is the only
/// construction-time logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEvent {
    #[serde(flatten)]
    envelope: EventEnvelope,
    tenant_id: String,
    /// Acting user, when one is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
}

impl DomainEvent {
    /// Seal the draft and attach tenant scope (process default sources).
    pub fn new(draft: EnvelopeDraft, tenant_id: impl Into<String>, user_id: Option<String>) -> Self {
        Self {
            envelope: draft.seal(),
            tenant_id: tenant_id.into(),
            user_id,
        }
    }

    /// Like [`new`](Self::new), with explicit id/clock sources for
    /// deterministic construction.
    pub fn new_with(
        draft: EnvelopeDraft,
        tenant_id: impl Into<String>,
        user_id: Option<String>,
        ids: &dyn EventIds,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            envelope: draft.seal_with(ids, clock),
            tenant_id: tenant_id.into(),
            user_id,
        }
    }

    pub fn envelope(&self) -> &EventEnvelope {
        &self.envelope
    }

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Overwrite the canonical identity fields on the inner envelope.
    pub fn stamp_identity(
        &mut self,
        event_type: impl Into<String>,
        aggregate_type: impl Into<String>,
        aggregate_id: impl Into<String>,
    ) {
        self.envelope
            .stamp_identity(event_type, aggregate_type, aggregate_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    struct StaticIds(&'static str);

    impl EventIds for StaticIds {
        fn next(&self) -> String {
            self.0.to_string()
        }
    }

    fn draft() -> EnvelopeDraft {
        EnvelopeDraft {
            event_version: 1,
            ..EnvelopeDraft::default()
        }
    }

    #[test]
    fn new_stores_scope_verbatim() {
        let event = DomainEvent::new(draft(), "tenant-1", Some("user-7".to_string()));

        assert_eq!(event.tenant_id(), "tenant-1");
        assert_eq!(event.user_id(), Some("user-7"));
        assert!(!event.envelope().event_id().is_empty());
    }

    #[test]
    fn user_id_is_optional() {
        let event = DomainEvent::new(draft(), "tenant-1", None);

        assert_eq!(event.user_id(), None);
    }

    #[test]
    fn new_with_is_deterministic() {
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();

        let a = DomainEvent::new_with(draft(), "tenant-1", None, &StaticIds("evt-1"), &FixedClock(at));
        let b = DomainEvent::new_with(draft(), "tenant-1", None, &StaticIds("evt-1"), &FixedClock(at));

        assert_eq!(a, b);
        assert_eq!(a.envelope().event_id(), "evt-1");
        assert_eq!(a.envelope().occurred_at(), at);
    }

    #[test]
    fn serializes_as_one_flat_object() {
        let event = DomainEvent::new(draft(), "tenant-1", None);

        let value = serde_json::to_value(&event).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.contains_key("event_id"));
        assert!(object.contains_key("tenant_id"));
        // Absent user_id is omitted entirely, not serialized as null.
        assert!(!object.contains_key("user_id"));
        assert!(object.contains_key("metadata"));
        assert_eq!(object.get("metadata").unwrap(), &serde_json::json!({}));
    }

    #[test]
    fn round_trips_through_json() {
        let event = DomainEvent::new(draft(), "tenant-1", Some("user-7".to_string()));

        let json = serde_json::to_string(&event).unwrap();
        let back: DomainEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(back, event);
    }
}
