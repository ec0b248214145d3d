use chrono::{DateTime, Utc};

/// Behavior shared by every published event.
///
/// Events are **immutable facts**: once constructed they are never edited,
/// only stored, transmitted, or replayed. The trait exposes the envelope
/// fields consumers route and order by, without caring which concrete
/// record they are looking at.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable dotted event name (e.g. "people.employee.created").
    fn event_type(&self) -> &'static str;

    /// Schema version of this event type.
    fn version(&self) -> u32;

    /// Category of the entity the event is about (e.g. "employee").
    fn aggregate_type(&self) -> &'static str;

    /// Identifier of the entity the event is about.
    fn aggregate_id(&self) -> &str;

    /// When the event occurred (business time, UTC).
    fn occurred_at(&self) -> DateTime<Utc>;
}
