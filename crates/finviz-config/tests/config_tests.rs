use std::path::PathBuf;

use tempfile::tempdir;

use finviz_config::{Config, ConfigManager};

#[test]
fn load_without_a_file_returns_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let config = manager.load().expect("load");
    assert_eq!(config.listen_addr, Config::default_listen_addr());
    assert_eq!(config.currency_symbol, "₹");
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let config = Config {
        listen_addr: "0.0.0.0:9001".into(),
        currency_symbol: "$".into(),
        data_root: Some(PathBuf::from("/tmp/finviz-data")),
    };
    manager.save(&config).expect("save");

    let loaded = manager.load().expect("load");
    assert_eq!(loaded.listen_addr, "0.0.0.0:9001");
    assert_eq!(loaded.currency_symbol, "$");
    assert_eq!(loaded.data_root, Some(PathBuf::from("/tmp/finviz-data")));
}

#[test]
fn save_leaves_no_tmp_file_behind() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    manager.save(&Config::default()).expect("save");

    assert!(manager.config_path().exists());
    let siblings: Vec<_> = std::fs::read_dir(manager.config_path().parent().expect("parent"))
        .expect("read_dir")
        .map(|entry| entry.expect("entry").file_name())
        .collect();
    assert_eq!(siblings, vec![std::ffi::OsString::from("config.json")]);
}
