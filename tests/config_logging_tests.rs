// =====================================================
// FILE: tests/config_logging_tests.rs - CONFIG LOG OUTPUT
// =====================================================
// Own test binary: installs a capturing global logger.

use contact_clear::core::constants::APP_TITLE;
use contact_clear::Config;
use log::{LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut lines) = CAPTURED.lock() {
            lines.push(format!("{} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

#[tokio::test]
async fn test_config_load_logs_path_and_fallback_only() {
    log::set_boxed_logger(Box::new(CaptureLogger)).expect("first logger");
    log::set_max_level(LevelFilter::Trace);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    tokio::fs::write(&path, "[general]\nlog_level = \"loud\"\n")
        .await
        .expect("write");

    let config = Config::from_file(&path).await.expect("load");
    assert_eq!(config.log_level, "info");

    let lines = CAPTURED.lock().expect("lock").clone();
    assert!(
        lines.iter().any(|l| l.starts_with("WARN") && l.contains("loud")),
        "fallback warning missing: {:?}",
        lines
    );
    // The startup banner belongs to main, not to config loading
    assert!(
        !lines.iter().any(|l| l.contains(APP_TITLE)),
        "unexpected banner: {:?}",
        lines
    );
}
