//! Strongly-typed identifiers and the service that mints them.

use core::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of an inventory item.
///
/// Opaque to callers: assigned once at creation and never reassigned.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for ItemId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<ItemId> for Uuid {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid =
            Uuid::from_str(s).map_err(|e| DomainError::invalid_id(format!("ItemId: {e}")))?;
        Ok(Self(uuid))
    }
}

/// Source of fresh item identifiers.
///
/// Every call must return an id never returned before by the same generator.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ItemId;
}

impl<G> IdGenerator for Arc<G>
where
    G: IdGenerator + ?Sized,
{
    fn next_id(&self) -> ItemId {
        (**self).next_id()
    }
}

/// UUIDv7 (time-ordered, random tail) generator. The production default.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn next_id(&self) -> ItemId {
        ItemId(Uuid::now_v7())
    }
}

/// Monotonic counter generator.
///
/// Produces `00000000-0000-0000-0000-000000000001`, `...0002`, and so on.
/// Deterministic, which makes it the generator of choice in tests.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting after `last` (the first id issued is `last + 1`).
    pub fn starting_after(last: u64) -> Self {
        Self {
            next: AtomicU64::new(last),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> ItemId {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        ItemId(Uuid::from_u128(u128::from(n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sequential_generator_counts_up_from_one() {
        let ids = SequentialIdGenerator::new();
        assert_eq!(ids.next_id().as_uuid().as_u128(), 1);
        assert_eq!(ids.next_id().as_uuid().as_u128(), 2);

        let resumed = SequentialIdGenerator::starting_after(41);
        assert_eq!(resumed.next_id().as_uuid().as_u128(), 42);
    }

    #[test]
    fn uuid_v7_generator_does_not_repeat() {
        let ids = UuidV7Generator;
        let seen: HashSet<ItemId> = (0..1_000).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 1_000);
    }

    #[test]
    fn item_id_round_trips_through_its_string_form() {
        let id = SequentialIdGenerator::new().next_id();
        let parsed: ItemId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn item_id_rejects_garbage() {
        let err = "not-a-uuid".parse::<ItemId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }
}
