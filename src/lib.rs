#[macro_export]
macro_rules! matches_exact {
    ($cmd:expr, $($pattern:literal)|+) => {
        matches!($cmd.trim().to_lowercase().as_str(), $($pattern)|+)
    };
}

// Module definitions
pub mod commands;
pub mod core;
pub mod setup;

// Essential re-exports
pub use crate::commands::clear::{ClearCommandParser, ClearMode, ClearRequest, ClearTarget};
pub use crate::commands::index::Index;
pub use crate::commands::{Command, CommandHandler, CommandRegistry, CommandResult};
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, ParseError, Result};

pub fn create_default_registry() -> CommandRegistry {
    use commands::{clear::ClearCommand, exit::ExitCommand};

    let mut registry = CommandRegistry::new();

    registry.register(ExitCommand);
    registry.register(ClearCommand::new());

    registry.initialize();
    registry
}
