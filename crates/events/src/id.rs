//! Event identifier generation.

use uuid::Uuid;

/// Source of fresh event identifiers.
///
/// The envelope sealing step pulls from a source only when the caller left
/// `event_id` empty. Prefer passing an explicit source in tests for
/// determinism.
pub trait EventIds: Send + Sync {
    /// Produce one fresh, globally unique identifier.
    fn next(&self) -> String;
}

/// Random UUIDv4 identifiers (process default).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl EventIds for UuidIds {
    fn next(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_produces_parseable_distinct_ids() {
        let ids = UuidIds;
        let a = ids.next();
        let b = ids.next();

        assert!(Uuid::parse_str(&a).is_ok());
        assert!(Uuid::parse_str(&b).is_ok());
        assert_ne!(a, b);
    }
}
