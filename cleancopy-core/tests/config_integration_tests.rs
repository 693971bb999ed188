// cleancopy-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use cleancopy_core::config::{self, BlacklistConfig, BlacklistedParam};
use cleancopy_core::Blacklist;

#[test]
fn test_load_default_blacklist() {
    let config = BlacklistConfig::load_default().unwrap();
    assert!(!config.params.is_empty());
    let fbclid = config.params.iter().find(|p| p.name == "fbclid").unwrap();
    assert_eq!(fbclid.source.as_deref(), Some("Facebook"));
    assert!(fbclid.is_enabled());
}

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
params:
  - name: mc_eid
    source: "Mailchimp"
    description: "Mailchimp subscriber id"
  - name: si
    enabled: false
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = BlacklistConfig::load_from_file(file.path())?;
    assert_eq!(config.params.len(), 2);
    assert_eq!(config.params[0].name, "mc_eid");
    assert_eq!(config.params[1].enabled, Some(false));
    Ok(())
}

#[test]
fn test_load_from_file_rejects_duplicates() -> Result<()> {
    let yaml_content = r#"
params:
  - name: ref
  - name: ref
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let err = BlacklistConfig::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Duplicate param name found: 'ref'"));
    Ok(())
}

#[test]
fn test_load_from_missing_file_errors() {
    let result = BlacklistConfig::load_from_file("/nonexistent/cleancopy/blacklist.yaml");
    assert!(result.is_err());
}

#[test]
fn test_merge_params_no_user_config() {
    let default_config = BlacklistConfig {
        params: vec![BlacklistedParam::named("gclid"), BlacklistedParam::named("fbclid")],
    };
    let merged = config::merge_params(default_config.clone(), None);
    assert_eq!(merged, default_config);
}

#[test]
fn test_merge_params_overrides_in_place_and_appends() {
    let default_config = BlacklistConfig {
        params: vec![
            BlacklistedParam::named("gclid"),
            BlacklistedParam::named("si"),
            BlacklistedParam::named("fbclid"),
        ],
    };
    let user_config = BlacklistConfig {
        params: vec![
            BlacklistedParam::named("mc_cid"),
            BlacklistedParam { enabled: Some(false), ..BlacklistedParam::named("si") },
        ],
    };
    let merged = config::merge_params(default_config, Some(user_config));
    let names: Vec<&str> = merged.params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["gclid", "si", "fbclid", "mc_cid"]);
    assert_eq!(merged.enabled_names(), vec!["gclid", "fbclid", "mc_cid"]);
}

#[test]
fn test_set_active_params() {
    let mut config = BlacklistConfig {
        params: vec![
            BlacklistedParam::named("gclid"),
            BlacklistedParam { enabled: Some(false), ..BlacklistedParam::named("si") },
            BlacklistedParam::named("share"),
        ],
    };
    config.set_active_params(
        &["si".to_string(), "ref".to_string()],
        &["share".to_string(), "unknown".to_string()],
    );
    assert_eq!(config.enabled_names(), vec!["gclid", "si", "ref"]);

    let blacklist = Blacklist::from_config(&config);
    assert!(blacklist.contains("ref"));
    assert!(!blacklist.contains("share"));
}

#[test]
fn test_user_config_path_is_namespaced() {
    if let Some(path) = BlacklistConfig::user_config_path() {
        assert!(path.ends_with("cleancopy/blacklist.yaml"));
    }
}
