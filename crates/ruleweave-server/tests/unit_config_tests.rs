//! Unit tests for loading ServerConfig from files

use ruleweave_server::config::{LogFormat, ServerConfig, StorageConfig};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent");

    let config = ServerConfig::load_from(path.to_str().unwrap()).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.storage, StorageConfig::Memory);
}

#[test]
fn test_yaml_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("server.yaml");
    std::fs::write(
        &path,
        r#"
port: 9090
log_format: json
enable_cors: false
storage:
  type: filesystem
  path: /var/lib/ruleweave
"#,
    )
    .unwrap();

    let config = ServerConfig::load_from(path.to_str().unwrap()).unwrap();
    assert_eq!(config.port, 9090);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.log_format, LogFormat::Json);
    assert!(!config.enable_cors);
    assert_eq!(
        config.storage,
        StorageConfig::FileSystem {
            path: PathBuf::from("/var/lib/ruleweave")
        }
    );
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("server.yaml");
    std::fs::write(&path, "port: [not, a, number]").unwrap();

    assert!(ServerConfig::load_from(path.to_str().unwrap()).is_err());
}
