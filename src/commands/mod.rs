pub mod clear;
pub mod command;
pub mod exit;
pub mod handler;
pub mod index;
pub mod parsing;
pub mod registry;

pub use command::Command;
pub use handler::{CommandHandler, CommandResult};
pub use registry::CommandRegistry;
