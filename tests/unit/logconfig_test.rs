//! Tests for the logging-configuration module

use std::path::Path;

use sitetool::logconfig::{LogConfig, LogLevel};

use crate::common::TestTree;

#[test]
fn missing_config_file_yields_defaults() {
    let tree = TestTree::empty();
    let config = LogConfig::load(tree.path().join("config/local/log.toml")).unwrap();

    assert_eq!(config.default_level, LogLevel::Info);
    assert!(config.levels.is_empty());
    assert!(config.print_level && config.print_time && config.print_filename);
}

#[test]
fn config_file_overrides_defaults() {
    let tree = TestTree::empty();
    tree.add_file(
        "config/local/log.toml",
        r#"
default_level = "debug"
print_time = false

[levels]
"engine.c" = "verbose"
"nl80211.c" = "error"
"#,
    );

    let config = LogConfig::load(tree.path().join("config/local/log.toml")).unwrap();

    assert_eq!(config.default_level, LogLevel::Debug);
    assert!(!config.print_time);
    assert!(config.print_level);
    assert_eq!(config.level_for("engine.c"), LogLevel::Verbose);
    assert_eq!(config.level_for("nl80211.c"), LogLevel::Error);
    assert_eq!(config.level_for("main.c"), LogLevel::Debug);
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = LogConfig {
        default_level: LogLevel::Warn,
        print_time: false,
        ..LogConfig::default()
    };
    config.levels.insert("engine.c".to_string(), LogLevel::Verbose);

    let rendered = toml::to_string(&config).unwrap();
    let reloaded: LogConfig = toml::from_str(&rendered).unwrap();

    assert_eq!(reloaded.default_level, LogLevel::Warn);
    assert!(!reloaded.print_time);
    assert!(reloaded.print_level && reloaded.print_filename);
    assert_eq!(reloaded.level_for("engine.c"), LogLevel::Verbose);
}

#[test]
fn malformed_config_is_an_error() {
    let tree = TestTree::empty();
    tree.add_file("log.toml", "default_level = \"chatty\"");

    assert!(LogConfig::load(tree.path().join("log.toml")).is_err());
}

#[test]
fn disabled_prefixes_drop_their_defines() {
    let config = LogConfig {
        print_level: false,
        print_time: false,
        ..LogConfig::default()
    };

    assert_eq!(config.global_flags(), vec!["-DLOG_PRINT_FILENAME"]);
}

#[test]
fn per_source_flags_use_the_file_name_only() {
    let mut config = LogConfig::default();
    config.levels.insert("engine.c".to_string(), LogLevel::None);

    let flags = config.flags_for(Path::new("src/engine/engine.c"));
    assert_eq!(
        flags,
        vec!["-DLOG_FILENAME=\\\"engine.c\\\"", "-DLOG_LEVEL=LOG_LEVEL_NONE"]
    );
}

#[test]
fn levels_order_from_silent_to_verbose() {
    assert!(LogLevel::None < LogLevel::Error);
    assert!(LogLevel::Error < LogLevel::Warn);
    assert!(LogLevel::Warn < LogLevel::Info);
    assert!(LogLevel::Info < LogLevel::Debug);
    assert!(LogLevel::Debug < LogLevel::Verbose);
}
