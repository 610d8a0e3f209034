pub mod command;
pub mod parser;

pub use command::ClearCommand;
pub use parser::{ClearCommandParser, ClearMode, ClearRequest, ClearTarget, MESSAGE_USAGE};
