use super::parser::{ClearCommandParser, ClearRequest};
use crate::commands::command::Command;
use crate::core::prelude::*;

#[derive(Debug, Default)]
pub struct ClearCommand {
    parser: ClearCommandParser,
}

impl ClearCommand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the words following `clear`.
    pub fn parse_request(&self, args: &[&str]) -> Result<ClearRequest> {
        let raw = args.join(" ");
        let request = self.parser.parse(&raw)?;
        log::debug!("clear: accepted request {:?}", request);
        Ok(request)
    }
}

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn description(&self) -> &'static str {
        "Clear all or a range of persons (p/) or events (e/)"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "clear")
    }

    fn execute_sync(&self, args: &[&str]) -> Result<String> {
        let request = self.parse_request(args)?;
        Ok(format!("Clearing {}", request))
    }

    fn priority(&self) -> u8 {
        80
    }
}
