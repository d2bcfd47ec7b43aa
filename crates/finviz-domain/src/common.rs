//! Shared traits for records kept in the document store.

use uuid::Uuid;

/// Exposes a stable identifier for records stored in a collection.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}
