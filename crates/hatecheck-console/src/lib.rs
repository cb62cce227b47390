pub mod cli;
pub mod session;
pub mod terminal;

pub use cli::*;
pub use terminal::TerminalSurface;
