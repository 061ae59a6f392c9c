//! `stockbook-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).
//! Wall-clock time and identifier generation are modelled as owned services
//! so callers can substitute deterministic implementations.

pub mod clock;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{IdGenerator, ItemId, SequentialIdGenerator, UuidV7Generator};
pub use value_object::ValueObject;
