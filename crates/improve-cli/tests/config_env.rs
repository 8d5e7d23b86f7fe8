//! Sets a process-wide env var, so this file holds a single test.

use improve_cli::config::{
    CONFIG_DIR_ENV, CliConfig, OutputFormat, config_dir, config_path, load_config, save_config,
};

#[test]
fn config_dir_env_override_is_used_for_load_and_save() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    // SAFETY: the only test in this binary, so no other thread reads the env.
    unsafe { std::env::set_var(CONFIG_DIR_ENV, tmp.path()) };

    assert_eq!(config_dir().unwrap(), tmp.path());
    assert_eq!(config_path().unwrap(), tmp.path().join("config.json"));
    assert_eq!(load_config().unwrap(), CliConfig::default());

    let config = CliConfig {
        format: OutputFormat::Json,
        show_reference: false,
        ..CliConfig::default()
    };
    let path = save_config(&config).unwrap();
    assert_eq!(path, tmp.path().join("config.json"));
    assert!(path.exists());
    assert_eq!(load_config().unwrap(), config);

    unsafe { std::env::remove_var(CONFIG_DIR_ENV) };
}
