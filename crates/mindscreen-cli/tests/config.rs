use std::path::PathBuf;

use mindscreen_cli::config::{MindscreenConfig, load_config, save_config};

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, MindscreenConfig::default());
    assert!(config.save_reports);
    assert!(config.color);
}

#[test]
fn saved_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = MindscreenConfig {
        report_dir: Some(PathBuf::from("/tmp/reports")),
        save_reports: false,
        ..MindscreenConfig::default()
    };

    save_config(&path, &config).unwrap();
    assert_eq!(load_config(&path).unwrap(), config);
}

#[cfg(unix)]
#[test]
fn saved_config_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_config(&path, &MindscreenConfig::default()).unwrap();
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn partial_config_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "report_dir": "/srv/reports", "color": false }"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.report_dir, Some(PathBuf::from("/srv/reports")));
    assert!(!config.color);
    assert!(config.save_reports);
}

#[test]
fn newer_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": 99 }"#).unwrap();
    assert!(load_config(&path).is_err());
}

#[test]
fn explicit_report_dir_wins() {
    let config = MindscreenConfig {
        report_dir: Some(PathBuf::from("/data/screening")),
        ..MindscreenConfig::default()
    };
    assert_eq!(
        config.resolved_report_dir().unwrap(),
        PathBuf::from("/data/screening")
    );
}
