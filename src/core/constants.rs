pub const APP_TITLE: &str = "CONTACT CLEAR";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_PROMPT: &str = "> ";

// Signals returned by commands and interpreted by the handler
pub const SIG_EXIT: &str = "__EXIT__";

pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
