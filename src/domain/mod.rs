//! Domain layer - the guided assessment core.
//!
//! Pure business logic: the assessment session and its stage state machine,
//! the financial estimation engine, and the profile scorer. Nothing in this
//! layer performs I/O.

pub mod assessment;
pub mod estimator;
pub mod foundation;
pub mod profile;
