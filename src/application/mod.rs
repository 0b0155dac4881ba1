//! Application layer - command and query handlers that orchestrate
//! domain operations over the ports.

pub mod handlers;
