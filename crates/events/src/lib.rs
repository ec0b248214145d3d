//! Event schemas for the HRMS platform.
//!
//! This crate defines the **data shapes** every published event carries: the
//! common envelope (identity, typing, versioning, timestamp, open metadata)
//! and the two classification shapes layered on top of it — [`DomainEvent`]
//! for changes local to one business domain/tenant, [`IntegrationEvent`] for
//! events explicitly routed across domains.
//!
//! Shapes only: no bus, no storage, no consumers. Anything that serializes
//! these records to a broker or log takes their field names as the contract.

pub mod clock;
pub mod domain;
pub mod envelope;
pub mod event;
pub mod id;
pub mod integration;

pub use clock::{Clock, FixedClock, SystemClock};
pub use domain::DomainEvent;
pub use envelope::{EnvelopeDraft, EventEnvelope, JsonMap};
pub use event::Event;
pub use id::{EventIds, UuidIds};
pub use integration::IntegrationEvent;
