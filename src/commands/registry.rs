use super::command::Command;
use crate::core::prelude::*;
use std::collections::HashMap;

pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    name_map: HashMap<String, usize>,
    initialized: bool,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            name_map: HashMap::new(),
            initialized: false,
        }
    }

    pub fn register<T: Command>(&mut self, command: T) -> &mut Self {
        self.register_boxed(Box::new(command))
    }

    pub fn register_boxed(&mut self, command: Box<dyn Command>) -> &mut Self {
        let name = command.name().to_lowercase();
        let index = self.commands.len();

        self.commands.push(command);
        self.name_map.insert(name, index);
        self.initialized = false;
        self
    }

    /// Orders commands by priority (highest first) for pattern matching and
    /// rebuilds the name index.
    pub fn initialize(&mut self) -> &mut Self {
        if self.initialized {
            return self;
        }

        self.commands
            .sort_by_key(|cmd| std::cmp::Reverse(cmd.priority()));

        self.name_map.clear();
        for (new_idx, cmd) in self.commands.iter().enumerate() {
            self.name_map.insert(cmd.name().to_lowercase(), new_idx);
        }

        self.initialized = true;
        self
    }

    pub fn find_command(&self, input: &str) -> Option<&dyn Command> {
        let input = input.trim().to_lowercase();

        // Exact name
        if let Some(&index) = self.name_map.get(&input) {
            if let Some(cmd) = self.commands.get(index).filter(|cmd| cmd.is_available()) {
                return Some(cmd.as_ref());
            }
        }

        // Aliases
        self.commands
            .iter()
            .find(|cmd| cmd.is_available() && cmd.matches(&input))
            .map(|cmd| cmd.as_ref())
    }

    pub fn execute_sync(&self, command: &str, args: &[&str]) -> Option<Result<String>> {
        self.find_command(command).map(|cmd| cmd.execute_sync(args))
    }

    pub async fn execute_async(&self, command: &str, args: &[&str]) -> Option<Result<String>> {
        match self.find_command(command) {
            Some(cmd) => Some(cmd.execute(args).await),
            None => None,
        }
    }

    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        self.commands
            .iter()
            .filter(|cmd| cmd.is_available())
            .map(|cmd| (cmd.name(), cmd.description()))
            .collect()
    }

    pub fn debug_info(&self) -> String {
        format!(
            "CommandRegistry: {} commands, initialized: {}",
            self.commands.len(),
            self.initialized
        )
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Echo {
        name: &'static str,
        priority: u8,
        available: bool,
    }

    impl Command for Echo {
        fn name(&self) -> &'static str {
            self.name
        }
        fn description(&self) -> &'static str {
            "echo arguments"
        }
        fn matches(&self, command: &str) -> bool {
            command.starts_with(self.name)
        }
        fn execute_sync(&self, args: &[&str]) -> Result<String> {
            Ok(format!("{}:{}", self.name, args.join(",")))
        }
        fn priority(&self) -> u8 {
            self.priority
        }
        fn is_available(&self) -> bool {
            self.available
        }
    }

    fn echo(name: &'static str, priority: u8) -> Echo {
        Echo {
            name,
            priority,
            available: true,
        }
    }

    #[test]
    fn finds_by_exact_name_case_insensitively() {
        let mut registry = CommandRegistry::new();
        registry.register(echo("say", 50)).initialize();

        let result = registry.execute_sync("SAY", &["a", "b"]);
        assert_eq!(result.map(|r| r.ok()), Some(Some("say:a,b".to_string())));
    }

    #[test]
    fn pattern_match_prefers_higher_priority() {
        let mut registry = CommandRegistry::new();
        registry
            .register(echo("s", 10))
            .register(echo("sa", 90))
            .initialize();

        let cmd = registry.find_command("say").expect("pattern match");
        assert_eq!(cmd.name(), "sa");
    }

    #[test]
    fn unavailable_commands_are_hidden() {
        let mut registry = CommandRegistry::new();
        registry
            .register(Echo {
                name: "hidden",
                priority: 50,
                available: false,
            })
            .initialize();

        assert!(registry.find_command("hidden").is_none());
        assert!(registry.list_commands().is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn async_execution_falls_back_to_sync() {
        let mut registry = CommandRegistry::new();
        registry.register(echo("say", 50)).initialize();

        let result = registry.execute_async("say", &["x"]).await;
        assert_eq!(result.map(|r| r.ok()), Some(Some("say:x".to_string())));
        assert!(registry.execute_async("nope", &[]).await.is_none());
    }
}
