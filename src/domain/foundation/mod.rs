//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Comfort Check domain.

mod errors;
mod ids;
mod money;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::AssessmentId;
pub use money::Money;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
