//! `quantro-core` — shared building blocks for the analytics workspace.
//!
//! Pure types only (no IO): tenant identity, the domain error model and
//! the value-object marker used by filter criteria.

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::TenantId;
pub use value_object::ValueObject;
