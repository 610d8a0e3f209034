use super::registry::CommandRegistry;
use crate::core::constants::{MESSAGE_UNKNOWN_COMMAND, SIG_EXIT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub message: String,
    pub success: bool,
    pub should_exit: bool,
}

impl CommandResult {
    fn empty() -> Self {
        Self {
            message: String::new(),
            success: false,
            should_exit: false,
        }
    }

    fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
            should_exit: false,
        }
    }
}

pub struct CommandHandler {
    registry: CommandRegistry,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self {
            registry: crate::create_default_registry(),
        }
    }

    pub fn handle_input(&self, input: &str) -> CommandResult {
        let input = input.trim();
        let Some((command, args)) = split_command(input) else {
            return CommandResult::empty();
        };

        log::info!("CommandHandler processing: '{}'", input);
        let result = self.to_result(input, self.registry.execute_sync(command, &args));
        log::debug!(
            "CommandResult: success={}, message_len={}, should_exit={}",
            result.success,
            result.message.chars().count(),
            result.should_exit
        );
        result
    }

    pub async fn handle_input_async(&self, input: &str) -> CommandResult {
        let input = input.trim();
        let Some((command, args)) = split_command(input) else {
            return CommandResult::empty();
        };

        let outcome = self.registry.execute_async(command, &args).await;
        self.to_result(input, outcome)
    }

    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        self.registry.list_commands()
    }

    pub fn debug_info(&self) -> String {
        self.registry.debug_info()
    }

    fn to_result(
        &self,
        input: &str,
        outcome: Option<crate::core::error::Result<String>>,
    ) -> CommandResult {
        match outcome {
            Some(Ok(msg)) => {
                let should_exit = msg.starts_with(SIG_EXIT);
                CommandResult {
                    message: msg,
                    success: true,
                    should_exit,
                }
            }
            Some(Err(e)) => {
                log::warn!("Command failed: {}", e);
                CommandResult::failure(e.to_string())
            }
            None => {
                log::warn!("Unknown command: {}", input);
                CommandResult::failure(format!("{}: {}", MESSAGE_UNKNOWN_COMMAND, input))
            }
        }
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn split_command(input: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = input.split_whitespace();
    let command = parts.next()?;
    Some((command, parts.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_does_nothing() {
        let handler = CommandHandler::new();
        let result = handler.handle_input("   ");
        assert_eq!(result, CommandResult::empty());
    }

    #[test]
    fn unknown_command_names_the_input() {
        let handler = CommandHandler::new();
        let result = handler.handle_input("frobnicate now");
        assert!(!result.success);
        assert_eq!(result.message, "Unknown command: frobnicate now");
    }

    #[test]
    fn split_command_separates_arguments() {
        assert_eq!(
            split_command("clear  p/1-2 "),
            Some(("clear", vec!["p/1-2"]))
        );
        assert_eq!(split_command(""), None);
    }
}
