//! Port definitions - interfaces between the application core and the
//! outside world.

pub mod session_store;

pub use session_store::{SessionStore, SessionStoreError};
