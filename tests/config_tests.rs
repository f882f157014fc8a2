//! Integration tests for settings, remembered logins and input validation

mod common;

use common::TestEnvironment;
use modsync::config::{SessionConfig, SettingsConfig, StoredCredentials};
use modsync::validation::{validate_hostname, validate_mod_file_name, validate_port};
use secrecy::ExposeSecret;

#[test]
fn remembered_login_round_trips() {
    let env = TestEnvironment::new();
    let session = SessionConfig::new("mc.example.com", 2022, "steve", "hunter2");

    StoredCredentials::from_session(&session)
        .save_to(&env.credentials_path())
        .expect("save");

    let raw = std::fs::read_to_string(env.credentials_path()).expect("read");
    assert!(!raw.contains("hunter2"));

    let stored = StoredCredentials::load_from(&env.credentials_path())
        .expect("load")
        .expect("present");
    let restored = stored.to_session().expect("decode");
    assert_eq!(restored.address(), "mc.example.com:2022");
    assert_eq!(restored.password.expose_secret(), "hunter2");

    StoredCredentials::clear_at(&env.credentials_path()).expect("clear");
    assert!(
        StoredCredentials::load_from(&env.credentials_path())
            .expect("load")
            .is_none()
    );
}

#[test]
fn settings_default_when_missing_and_persist_overrides() {
    let env = TestEnvironment::new();
    let settings = SettingsConfig::load_from(&env.settings_path()).expect("defaults");
    assert_eq!(settings, SettingsConfig::default());

    let custom = SettingsConfig {
        remote_mods_dir: "/srv/mods".to_string(),
        local_mods_dir: Some(env.local_mods.clone()),
        ..SettingsConfig::default()
    };
    custom.save_to(&env.settings_path()).expect("save");

    let loaded = SettingsConfig::load_from(&env.settings_path()).expect("load");
    assert_eq!(loaded.remote_mods_dir, "/srv/mods");
    assert_eq!(loaded.local_mods_dir(), env.local_mods);
}

#[test]
fn login_and_file_name_validation() {
    assert!(validate_hostname("play.example.com").is_ok());
    assert!(validate_hostname("").is_err());
    assert_eq!(validate_port("22").ok(), Some(22));
    assert!(validate_port("0").is_err());
    assert!(validate_mod_file_name("jei-1.20.jar").is_ok());
    assert!(validate_mod_file_name("../evil.jar").is_err());
}
