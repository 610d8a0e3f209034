// =====================================================
// FILE: tests/logging_tests.rs - LOGGER BEFORE CONFIG
// =====================================================
// Own test binary: the global logger can only be installed once per process.

use contact_clear::core::logging;
use contact_clear::Config;
use log::{Level, LevelFilter, Log, Metadata};

fn enabled(level: Level) -> bool {
    let metadata = Metadata::builder()
        .level(level)
        .target("contact_clear::core::config")
        .build();
    level <= log::max_level() && log::logger().enabled(&metadata)
}

#[test]
fn test_config_warnings_reach_the_logger() {
    let setup = logging::init_with(None);

    // Installed before any config is read: fallback warnings are emitted
    assert_eq!(log::max_level(), LevelFilter::Info);
    assert!(enabled(Level::Warn), "config warnings must not be dropped");
    assert!(!enabled(Level::Debug));

    let config = Config::from_toml_str("[general]\nlog_level = \"loud\"\n").expect("parses");
    assert_eq!(config.log_level, "info");

    // Config level applies afterwards, in both directions
    let config = Config::from_toml_str("[general]\nlog_level = \"debug\"\n").expect("parses");
    setup.apply_config(&config);
    assert_eq!(log::max_level(), LevelFilter::Debug);
    assert!(enabled(Level::Debug));

    let config = Config::from_toml_str("[general]\nlog_level = \"error\"\n").expect("parses");
    setup.apply_config(&config);
    assert!(!enabled(Level::Warn));
}
