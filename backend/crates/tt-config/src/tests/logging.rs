use crate::LoggingConfig;

#[test]
fn test_default_logging_is_valid() {
    assert!(LoggingConfig::default().validate().is_ok());
}

#[test]
fn test_absolute_log_dir_rejected() {
    let config = LoggingConfig {
        dir: String::from("/var/log/taxtrack"),
        ..LoggingConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_log_dir_cannot_escape_config_dir() {
    let config = LoggingConfig {
        dir: String::from("../logs"),
        file: Some(String::from("taxtrack.log")),
        ..LoggingConfig::default()
    };

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("logging.dir"));
}

#[test]
fn test_log_file_cannot_escape_log_dir() {
    let config = LoggingConfig {
        file: Some(String::from("../../taxtrack.log")),
        ..LoggingConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_nested_relative_log_dir_accepted() {
    let config = LoggingConfig {
        dir: String::from("state/log"),
        file: Some(String::from("taxtrack.log")),
        ..LoggingConfig::default()
    };
    assert!(config.validate().is_ok());
}
