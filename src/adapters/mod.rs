//! Adapters - concrete implementations of the ports plus the terminal
//! presentation boundary.

pub mod storage;
pub mod terminal;

pub use storage::InMemorySessionStore;
pub use terminal::TerminalRenderer;
