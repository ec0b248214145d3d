use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::envelope::{EnvelopeDraft, EventEnvelope};
use crate::id::EventIds;

/// An integration event: envelope + cross-domain routing.
///
/// Classifies an event explicitly meant to leave its publishing domain.
/// `source_domain` names the publisher, `target_domains` the expected
/// consumers, in delivery order. Routing fields are stored verbatim here;
/// records with fixed routing stamp over them after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationEvent {
    #[serde(flatten)]
    envelope: EventEnvelope,
    source_domain: String,
    target_domains: Vec<String>,
    /// Ties related events together across domains.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,
}

impl IntegrationEvent {
    /// Seal the draft and attach routing (process default sources).
    pub fn new(
        draft: EnvelopeDraft,
        source_domain: impl Into<String>,
        target_domains: Vec<String>,
        correlation_id: Option<String>,
    ) -> Self {
        Self {
            envelope: draft.seal(),
            source_domain: source_domain.into(),
            target_domains,
            correlation_id,
        }
    }

    /// Like [`new`](Self::new), with explicit id/clock sources for
    /// deterministic construction.
    pub fn new_with(
        draft: EnvelopeDraft,
        source_domain: impl Into<String>,
        target_domains: Vec<String>,
        correlation_id: Option<String>,
        ids: &dyn EventIds,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            envelope: draft.seal_with(ids, clock),
            source_domain: source_domain.into(),
            target_domains,
            correlation_id,
        }
    }

    pub fn envelope(&self) -> &EventEnvelope {
        &self.envelope
    }

    pub fn source_domain(&self) -> &str {
        &self.source_domain
    }

    pub fn target_domains(&self) -> &[String] {
        &self.target_domains
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
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

    /// Overwrite the routing fields.
    ///
    /// Records with fixed fan-out call this from their factories; the
    /// caller-supplied routing is discarded. `correlation_id` is untouched.
    pub fn stamp_routing(&mut self, source_domain: impl Into<String>, target_domains: Vec<String>) {
        self.source_domain = source_domain.into();
        self.target_domains = target_domains;
    }
}
