// Core essentials
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, ParseError, Result};

// Standard library essentials
pub use std::io::{self, Write};
