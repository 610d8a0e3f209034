// src/main.rs
use contact_clear::core::constants::{APP_TITLE, VERSION};
use contact_clear::core::logging;
use contact_clear::{AppError, CommandHandler, Config, Result};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    let log_setup = logging::init();

    let config = Config::load().await.unwrap_or_else(|e| {
        log::error!("Config error, using defaults: {}", e);
        Config::default()
    });
    log_setup.apply_config(&config);

    log::info!("{} v{} starting", APP_TITLE, VERSION);

    let handler = CommandHandler::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print_prompt(&config.prompt)?;

        let Some(line) = lines.next_line().await.map_err(AppError::Io)? else {
            log::debug!("stdin closed");
            break;
        };

        let result = handler.handle_input_async(&line).await;
        if result.should_exit {
            break;
        }
        if result.message.is_empty() {
            continue;
        }
        if result.success {
            println!("{}", result.message);
        } else {
            eprintln!("{}", result.message);
        }
    }

    log::info!("{} stopped", APP_TITLE);
    Ok(())
}

fn print_prompt(prompt: &str) -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", prompt).map_err(AppError::Io)?;
    stdout.flush().map_err(AppError::Io)
}
