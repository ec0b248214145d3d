//! People domain events.
//!
//! Three records: employee created and updated (domain events, tenant-local)
//! and employee terminated (integration event, fanned out to the fixed
//! consumer domains). Factories take the parent shape as the caller built it
//! — envelope already sealed — then stamp the canonical type, aggregate and
//! routing values. Caller-supplied values for the stamped fields are
//! discarded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hrms_events::{DomainEvent, Event, EventEnvelope, IntegrationEvent, JsonMap};

/// Stable event type for [`EmployeeCreated`].
pub const EMPLOYEE_CREATED: &str = "people.employee.created";
/// Stable event type for [`EmployeeUpdated`].
pub const EMPLOYEE_UPDATED: &str = "people.employee.updated";
/// Stable event type for [`EmployeeTerminated`].
pub const EMPLOYEE_TERMINATED: &str = "people.employee.terminated";

/// Aggregate category shared by all employee events.
pub const EMPLOYEE_AGGREGATE: &str = "employee";

/// Domain that publishes employee integration events.
pub const PEOPLE_DOMAIN: &str = "people";

/// Domains that consume an employee termination, in delivery order.
pub const TERMINATION_TARGETS: [&str; 3] = ["workforce-ops", "it-finance", "platform"];

fn termination_targets() -> Vec<String> {
    TERMINATION_TARGETS.iter().map(|d| d.to_string()).collect()
}

/// Event: a new employee record exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeCreated {
    #[serde(flatten)]
    event: DomainEvent,
    employee_id: String,
    employee_number: String,
    personal_info: JsonMap,
    employment_info: JsonMap,
}

impl EmployeeCreated {
    /// Build from a caller-assembled domain event plus the payload.
    ///
    /// The envelope is sealed before this runs (building `event` did that),
    /// so id/timestamp defaulting happens first; the canonical
    /// `event_type`/`aggregate_type`/`aggregate_id` are stamped here.
    pub fn new(
        event: DomainEvent,
        employee_id: impl Into<String>,
        employee_number: impl Into<String>,
        personal_info: JsonMap,
        employment_info: JsonMap,
    ) -> Self {
        let mut created = Self {
            event,
            employee_id: employee_id.into(),
            employee_number: employee_number.into(),
            personal_info,
            employment_info,
        };
        created.event.stamp_identity(
            EMPLOYEE_CREATED,
            EMPLOYEE_AGGREGATE,
            created.employee_id.clone(),
        );
        created
    }

    pub fn domain(&self) -> &DomainEvent {
        &self.event
    }

    pub fn envelope(&self) -> &EventEnvelope {
        self.event.envelope()
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn employee_number(&self) -> &str {
        &self.employee_number
    }

    pub fn personal_info(&self) -> &JsonMap {
        &self.personal_info
    }

    pub fn employment_info(&self) -> &JsonMap {
        &self.employment_info
    }
}

/// Event: fields of an existing employee changed.
///
/// Carries the changed field names plus before/after values so consumers can
/// audit or diff without refetching the aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeUpdated {
    #[serde(flatten)]
    event: DomainEvent,
    employee_id: String,
    updated_fields: Vec<String>,
    previous_values: JsonMap,
    new_values: JsonMap,
}

impl EmployeeUpdated {
    /// Build from a caller-assembled domain event plus the change set.
    pub fn new(
        event: DomainEvent,
        employee_id: impl Into<String>,
        updated_fields: Vec<String>,
        previous_values: JsonMap,
        new_values: JsonMap,
    ) -> Self {
        let mut updated = Self {
            event,
            employee_id: employee_id.into(),
            updated_fields,
            previous_values,
            new_values,
        };
        updated.event.stamp_identity(
            EMPLOYEE_UPDATED,
            EMPLOYEE_AGGREGATE,
            updated.employee_id.clone(),
        );
        updated
    }

    pub fn domain(&self) -> &DomainEvent {
        &self.event
    }

    pub fn envelope(&self) -> &EventEnvelope {
        self.event.envelope()
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn updated_fields(&self) -> &[String] {
        &self.updated_fields
    }

    pub fn previous_values(&self) -> &JsonMap {
        &self.previous_values
    }

    pub fn new_values(&self) -> &JsonMap {
        &self.new_values
    }
}

/// Integration event: an employee was terminated.
///
/// Routing is fixed at construction: published by the people domain and
/// delivered to workforce-ops, it-finance and platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeTerminated {
    #[serde(flatten)]
    event: IntegrationEvent,
    employee_id: String,
    termination_date: String,
    termination_reason: String,
    final_pay_period: String,
}

impl EmployeeTerminated {
    /// Build from a caller-assembled integration event plus the payload.
    ///
    /// Besides the identity stamp, routing is stamped to the fixed
    /// publisher/consumer set; whatever routing the caller supplied is
    /// discarded. A caller-supplied `correlation_id` survives.
    pub fn new(
        event: IntegrationEvent,
        employee_id: impl Into<String>,
        termination_date: impl Into<String>,
        termination_reason: impl Into<String>,
        final_pay_period: impl Into<String>,
    ) -> Self {
        let mut terminated = Self {
            event,
            employee_id: employee_id.into(),
            termination_date: termination_date.into(),
            termination_reason: termination_reason.into(),
            final_pay_period: final_pay_period.into(),
        };
        terminated.event.stamp_identity(
            EMPLOYEE_TERMINATED,
            EMPLOYEE_AGGREGATE,
            terminated.employee_id.clone(),
        );
        terminated
            .event
            .stamp_routing(PEOPLE_DOMAIN, termination_targets());
        terminated
    }

    pub fn integration(&self) -> &IntegrationEvent {
        &self.event
    }

    pub fn envelope(&self) -> &EventEnvelope {
        self.event.envelope()
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn termination_date(&self) -> &str {
        &self.termination_date
    }

    pub fn termination_reason(&self) -> &str {
        &self.termination_reason
    }

    pub fn final_pay_period(&self) -> &str {
        &self.final_pay_period
    }
}

/// All events the people domain publishes about employees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EmployeeEvent {
    Created(EmployeeCreated),
    Updated(EmployeeUpdated),
    Terminated(EmployeeTerminated),
}

impl EmployeeEvent {
    fn envelope(&self) -> &EventEnvelope {
        match self {
            EmployeeEvent::Created(e) => e.envelope(),
            EmployeeEvent::Updated(e) => e.envelope(),
            EmployeeEvent::Terminated(e) => e.envelope(),
        }
    }
}

impl Event for EmployeeEvent {
    fn event_type(&self) -> &'static str {
        match self {
            EmployeeEvent::Created(_) => EMPLOYEE_CREATED,
            EmployeeEvent::Updated(_) => EMPLOYEE_UPDATED,
            EmployeeEvent::Terminated(_) => EMPLOYEE_TERMINATED,
        }
    }

    fn version(&self) -> u32 {
        self.envelope().event_version()
    }

    fn aggregate_type(&self) -> &'static str {
        EMPLOYEE_AGGREGATE
    }

    fn aggregate_id(&self) -> &str {
        self.envelope().aggregate_id()
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.envelope().occurred_at()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use hrms_events::EnvelopeDraft;
    use proptest::prelude::*;

    fn draft() -> EnvelopeDraft {
        EnvelopeDraft {
            event_id: String::new(),
            event_type: "x".to_string(),
            aggregate_id: "y".to_string(),
            aggregate_type: "z".to_string(),
            event_version: 1,
            occurred_at: None,
            metadata: JsonMap::new(),
        }
    }

    fn created(employee_id: &str) -> EmployeeCreated {
        EmployeeCreated::new(
            DomainEvent::new(draft(), "t1", None),
            employee_id,
            "E001",
            JsonMap::new(),
            JsonMap::new(),
        )
    }

    fn terminated(employee_id: &str) -> EmployeeTerminated {
        EmployeeTerminated::new(
            IntegrationEvent::new(
                draft(),
                "placeholder",
                vec!["nowhere".to_string()],
                Some("corr-7".to_string()),
            ),
            employee_id,
            "2024-06-30",
            "resignation",
            "2024-P13",
        )
    }

    #[test]
    fn created_stamps_canonical_identity() {
        let before = Utc::now();
        let event = created("emp-1");
        let after = Utc::now();

        let envelope = event.envelope();
        assert_eq!(envelope.event_type(), "people.employee.created");
        assert_eq!(envelope.aggregate_type(), "employee");
        assert_eq!(envelope.aggregate_id(), "emp-1");
        assert!(!envelope.event_id().is_empty());
        assert!(envelope.occurred_at() >= before);
        assert!(envelope.occurred_at() <= after);
        assert_eq!(event.domain().tenant_id(), "t1");
    }

    #[test]
    fn created_generates_fresh_event_ids() {
        let a = created("emp-1");
        let b = created("emp-1");

        assert_ne!(a.envelope().event_id(), b.envelope().event_id());
    }

    #[test]
    fn created_keeps_supplied_envelope_fields() {
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();
        let mut d = draft();
        d.event_id = "evt-1".to_string();
        d.event_version = 3;
        d.occurred_at = Some(at);

        let event = EmployeeCreated::new(
            DomainEvent::new(d, "t1", Some("user-9".to_string())),
            "emp-1",
            "E001",
            JsonMap::new(),
            JsonMap::new(),
        );

        let envelope = event.envelope();
        assert_eq!(envelope.event_id(), "evt-1");
        assert_eq!(envelope.event_version(), 3);
        assert_eq!(envelope.occurred_at(), at);
        assert_eq!(event.domain().user_id(), Some("user-9"));
    }

    #[test]
    fn updated_tracks_employee_identity() {
        let event = EmployeeUpdated::new(
            DomainEvent::new(draft(), "t1", None),
            "emp-5",
            vec!["jobTitle".to_string()],
            JsonMap::new(),
            JsonMap::new(),
        );

        let envelope = event.envelope();
        assert_eq!(envelope.event_type(), "people.employee.updated");
        assert_eq!(envelope.aggregate_type(), "employee");
        assert_eq!(envelope.aggregate_id(), "emp-5");
        assert_eq!(event.updated_fields(), ["jobTitle".to_string()]);
    }

    #[test]
    fn terminated_overwrites_caller_routing() {
        let event = terminated("emp-2");

        let integration = event.integration();
        assert_eq!(integration.source_domain(), "people");
        assert_eq!(
            integration.target_domains(),
            ["workforce-ops", "it-finance", "platform"]
        );
        assert_eq!(event.envelope().aggregate_id(), "emp-2");
    }

    #[test]
    fn terminated_keeps_correlation_id() {
        let event = terminated("emp-2");

        assert_eq!(event.integration().correlation_id(), Some("corr-7"));
    }

    #[test]
    fn terminated_carries_payload_verbatim() {
        let event = terminated("emp-2");

        assert_eq!(event.termination_date(), "2024-06-30");
        assert_eq!(event.termination_reason(), "resignation");
        assert_eq!(event.final_pay_period(), "2024-P13");
    }

    #[test]
    fn employee_event_reports_fixed_types() {
        let created = EmployeeEvent::Created(created("emp-1"));
        let terminated = EmployeeEvent::Terminated(terminated("emp-2"));

        assert_eq!(created.event_type(), "people.employee.created");
        assert_eq!(created.aggregate_type(), "employee");
        assert_eq!(created.aggregate_id(), "emp-1");
        assert_eq!(created.version(), 1);

        assert_eq!(terminated.event_type(), "people.employee.terminated");
        assert_eq!(terminated.aggregate_id(), "emp-2");
    }

    #[test]
    fn created_serializes_as_one_flat_object() {
        let event = created("emp-1");

        let value = serde_json::to_value(&event).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "event_id",
            "event_type",
            "aggregate_id",
            "aggregate_type",
            "event_version",
            "occurred_at",
            "metadata",
            "tenant_id",
            "employee_id",
            "employee_number",
            "personal_info",
            "employment_info",
        ] {
            assert!(object.contains_key(key), "missing field {key}");
        }
        assert_eq!(object.get("event_type").unwrap(), "people.employee.created");
        assert_eq!(object.get("aggregate_type").unwrap(), "employee");
        assert_eq!(object.get("aggregate_id").unwrap(), "emp-1");
        // No user supplied, no key on the wire.
        assert!(!object.contains_key("user_id"));
    }

    #[test]
    fn terminated_serializes_fixed_routing_values() {
        let event = terminated("emp-2");

        let value = serde_json::to_value(&event).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.get("source_domain").unwrap(), "people");
        assert_eq!(
            object.get("target_domains").unwrap(),
            &serde_json::json!(["workforce-ops", "it-finance", "platform"])
        );
        assert_eq!(object.get("final_pay_period").unwrap(), "2024-P13");
    }

    #[test]
    fn created_round_trips_through_json() {
        let event = created("emp-1");

        let json = serde_json::to_string(&event).unwrap();
        let back: EmployeeCreated = serde_json::from_str(&json).unwrap();

        assert_eq!(back, event);
    }

    proptest! {
        #[test]
        fn aggregate_id_always_tracks_employee_id(employee_id in "[a-z0-9-]{0,24}") {
            let event = created(&employee_id);

            prop_assert_eq!(event.envelope().aggregate_id(), employee_id.as_str());
            prop_assert_eq!(event.envelope().aggregate_type(), EMPLOYEE_AGGREGATE);
        }

        #[test]
        fn event_id_is_never_empty(event_id in "[a-z0-9-]{0,12}") {
            let mut d = draft();
            d.event_id = event_id.clone();

            let event = EmployeeUpdated::new(
                DomainEvent::new(d, "t1", None),
                "emp-9",
                Vec::new(),
                JsonMap::new(),
                JsonMap::new(),
            );

            prop_assert!(!event.envelope().event_id().is_empty());
            if !event_id.is_empty() {
                prop_assert_eq!(event.envelope().event_id(), event_id.as_str());
            }
        }
    }
}
