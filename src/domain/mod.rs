//! Domain layer: entities and the course index
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod index;

pub use entities::*;
pub use error::DomainError;
pub use index::{CourseIndex, InOrder, InsertOutcome};
