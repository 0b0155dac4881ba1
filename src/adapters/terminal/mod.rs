//! Terminal presentation boundary.

mod renderer;

pub use renderer::TerminalRenderer;
