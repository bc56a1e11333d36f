//! Tests for profile resolution from INI files and the environment

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use rstest::rstest;
use tempfile::TempDir;

use cs::application::ApplicationError;
use cs::config::{ConfigSources, HttpMethod, Profile, ResponseFormat, TlsVerify};

fn write_ini(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn sources(paths: Vec<PathBuf>) -> ConfigSources {
    ConfigSources {
        paths,
        env: HashMap::new(),
    }
}

#[test]
fn given_ini_with_region_when_loading_then_profile_is_resolved() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = write_ini(
        &dir,
        "cloudstack.ini",
        "[cloudstack]\nendpoint = https://api.example.com/compute\nkey = k1\nsecret = s1\n",
    );

    // Act
    let profile = Profile::load_from("cloudstack", &sources(vec![path])).unwrap();

    // Assert
    assert_eq!(profile.name, "cloudstack");
    assert_eq!(profile.endpoint, "https://api.example.com/compute");
    assert_eq!(profile.key, "k1");
    assert_eq!(profile.secret, "s1");
    assert_eq!(profile.method, HttpMethod::Get);
    assert_eq!(profile.response, ResponseFormat::Json);
    assert_eq!(profile.verify, TlsVerify::Enabled);
    assert_eq!(profile.timeout, Duration::from_secs(10));
    assert_eq!(profile.expiration, Some(Duration::from_secs(600)));
    assert_eq!(profile.theme, None);
}

#[test]
fn given_optional_keys_when_loading_then_they_override_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_ini(
        &dir,
        "cloudstack.ini",
        "[lab]\nendpoint = https://lab/compute\nkey = k\nsecret = s\n\
         method = post\nresponse = xml\nverify = false\ntimeout = 30\n\
         expiration = -1\ntheme = monokai\n",
    );

    let profile = Profile::load_from("lab", &sources(vec![path])).unwrap();

    assert_eq!(profile.method, HttpMethod::Post);
    assert_eq!(profile.response, ResponseFormat::Xml);
    assert_eq!(profile.verify, TlsVerify::Disabled);
    assert_eq!(profile.timeout, Duration::from_secs(30));
    assert_eq!(profile.expiration, None);
    assert_eq!(profile.theme.as_deref(), Some("monokai"));
}

#[test]
fn given_missing_region_when_loading_then_profile_not_found() {
    let dir = TempDir::new().unwrap();
    let path = write_ini(
        &dir,
        "cloudstack.ini",
        "[cloudstack]\nendpoint = https://api.example.com/compute\nkey = k\nsecret = s\n",
    );

    let err = Profile::load_from("production", &sources(vec![path])).unwrap_err();

    assert!(matches!(err, ApplicationError::ProfileNotFound(ref region) if region == "production"));
}

#[test]
fn given_no_config_file_when_loading_then_reports_tried_paths() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.ini");

    let err = Profile::load_from("cloudstack", &sources(vec![missing.clone()])).unwrap_err();

    match err {
        ApplicationError::ConfigFileNotFound { tried } => assert_eq!(tried, vec![missing]),
        other => panic!("expected missing config file, got {other:?}"),
    }
}

#[test]
fn given_two_files_when_loading_then_later_file_wins_per_key() {
    let dir = TempDir::new().unwrap();
    let home = write_ini(
        &dir,
        "home.ini",
        "[cloudstack]\nendpoint = https://home/compute\nkey = home-key\nsecret = home-secret\n",
    );
    let local = write_ini(&dir, "local.ini", "[cloudstack]\nkey = local-key\n");

    let profile = Profile::load_from("cloudstack", &sources(vec![home, local])).unwrap();

    assert_eq!(profile.endpoint, "https://home/compute");
    assert_eq!(profile.key, "local-key");
    assert_eq!(profile.secret, "home-secret");
}

#[test]
fn given_complete_environment_when_loading_then_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    let path = write_ini(&dir, "cloudstack.ini", "[cloudstack]\nendpoint = https://file\n");
    let env = HashMap::from([
        ("CLOUDSTACK_ENDPOINT".to_string(), "https://env/compute".to_string()),
        ("CLOUDSTACK_KEY".to_string(), "env-key".to_string()),
        ("CLOUDSTACK_SECRET".to_string(), "env-secret".to_string()),
        ("CLOUDSTACK_METHOD".to_string(), "post".to_string()),
    ]);

    let profile = Profile::load_from(
        "anything",
        &ConfigSources {
            paths: vec![path],
            env,
        },
    )
    .unwrap();

    assert_eq!(profile.endpoint, "https://env/compute");
    assert_eq!(profile.key, "env-key");
    assert_eq!(profile.method, HttpMethod::Post);
}

#[rstest]
#[case("CLOUDSTACK_ENDPOINT")]
#[case("CLOUDSTACK_KEY")]
#[case("CLOUDSTACK_SECRET")]
fn given_incomplete_environment_when_loading_then_falls_back_to_files(#[case] unset: &str) {
    let dir = TempDir::new().unwrap();
    let path = write_ini(
        &dir,
        "cloudstack.ini",
        "[cloudstack]\nendpoint = https://file/compute\nkey = file-key\nsecret = file-secret\n",
    );
    let mut env = HashMap::from([
        ("CLOUDSTACK_ENDPOINT".to_string(), "https://env/compute".to_string()),
        ("CLOUDSTACK_KEY".to_string(), "env-key".to_string()),
        ("CLOUDSTACK_SECRET".to_string(), "env-secret".to_string()),
    ]);
    env.remove(unset);

    let profile = Profile::load_from(
        "cloudstack",
        &ConfigSources {
            paths: vec![path],
            env,
        },
    )
    .unwrap();

    assert_eq!(profile.endpoint, "https://file/compute");
    assert_eq!(profile.key, "file-key");
}

#[test]
fn given_unknown_method_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_ini(
        &dir,
        "cloudstack.ini",
        "[cloudstack]\nendpoint = https://e\nkey = k\nsecret = s\nmethod = put\n",
    );

    let err = Profile::load_from("cloudstack", &sources(vec![path])).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
}
