//! Tests for the config module

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use super::loader::{apply_overrides, resolve};
use super::types::*;
use crate::domain::value_objects::ApplianceKind;
use crate::error::RulesnapError;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.output.root, PathBuf::from("collected_rules"));
    assert_eq!(config.search.anchor, "policy");
    assert_eq!(config.search.full_scan_root, PathBuf::from("/"));
    assert_eq!(config.container.runtime, "docker");
    assert_eq!(config.container.extract_timeout_secs, 30);

    let tiers: Vec<_> = config.search.tiers.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        tiers,
        vec!["common paths", "user home", "program install directories"]
    );
    assert_eq!(config.search.tiers[0].paths.len(), 6);
}

#[test]
fn test_default_appliance_table() {
    let registry = Config::default().registry().unwrap();
    let names: Vec<_> = registry.iter().map(|a| a.name()).collect();
    assert_eq!(
        names,
        vec!["suricata", "snort", "ModSecurity", "zeek", "nuclei", "堡塔云waf", "南墙uuwaf"]
    );

    let zeek = registry.get("zeek").unwrap();
    assert_eq!(zeek.search_specs().len(), 10);
    assert!(zeek
        .search_specs()
        .iter()
        .all(|s| s.starts_with("**/zeek/share/zeek/policy/") && s.ends_with(".zeek")));

    let uuwaf = registry.get("南墙uuwaf").unwrap();
    assert_eq!(uuwaf.kind(), ApplianceKind::Container);
    assert_eq!(uuwaf.extension().extension(), Some("w"));
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[output]
root = "/srv/rules"

[search]
anchor = "rules"
full_scan_root = "/data"

[[search.tiers]]
name = "appliance roots"
paths = ["/opt/ids"]

[container]
runtime = "podman"
extract_timeout_secs = 5

[[appliances]]
name = "suricata"
kind = "local"
search = ["**/suricata/rules/"]
extension = ".rules"

[[appliances]]
name = "waf"
kind = "docker"
container = "86e4e41a871c"
path = "/etc/nginx/waf/rule"
extension = "json"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.output.root, PathBuf::from("/srv/rules"));
    assert_eq!(config.search.anchor, "rules");
    assert_eq!(config.search.tiers.len(), 1);
    assert_eq!(config.container.runtime, "podman");
    assert_eq!(config.appliances.len(), 2);
    assert_eq!(config.appliances[1].kind, ApplianceKind::Container);

    let registry = config.registry().unwrap();
    assert_eq!(
        registry.get("suricata").unwrap().extension().extension(),
        Some("rules")
    );
}

#[test]
fn test_partial_sections_keep_defaults() {
    let config: Config = toml::from_str("[container]\nruntime = \"podman\"\n").unwrap();

    assert_eq!(config.container.runtime, "podman");
    assert_eq!(config.container.extract_timeout_secs, 30);
    assert_eq!(config.search.tiers.len(), 3);
    assert_eq!(config.appliances.len(), 7);
}

#[test]
fn test_invalid_appliance_is_fatal() {
    let toml = r#"
[[appliances]]
name = "waf"
kind = "container"
path = "/etc/nginx/waf/rule"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert!(matches!(
        config.registry(),
        Err(RulesnapError::InvalidAppliance { .. })
    ));
}

#[test]
fn test_duplicate_appliance_is_fatal() {
    let toml = r#"
[[appliances]]
name = "snort"
search = ["**/snort/rules/"]

[[appliances]]
name = "snort"
search = ["**/scripts/site"]
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert!(matches!(
        config.registry(),
        Err(RulesnapError::DuplicateAppliance { .. })
    ));
}

#[test]
fn test_unknown_keys_become_warnings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rulesnap.toml");
    fs::write(&path, "[search]\nanchr = \"policy\"\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.search.anchor, "policy");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "anchr");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("anchor"));
}

#[test]
fn test_malformed_file_is_invalid_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rulesnap.toml");
    fs::write(&path, "[output\nroot = 1").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, RulesnapError::InvalidConfig { file, .. } if file == path));
}

#[test]
fn test_explicit_missing_config_is_fatal() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(resolve(Some(&missing)).is_err());
}

#[test]
fn test_explicit_config_is_used() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[search]\nanchor = \"rules\"\n").unwrap();

    let loaded = resolve(Some(&path)).unwrap();
    assert_eq!(loaded.source.as_deref(), Some(path.as_path()));
    assert!(loaded.warnings.is_empty());
}

fn overrides(vars: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    apply_overrides(Config::default(), |key| vars.get(key).cloned())
}

#[test]
fn test_env_overrides() {
    let config = overrides(&[
        ("RULESNAP_OUTPUT", "/tmp/out"),
        ("RULESNAP_CONTAINER_RUNTIME", "podman"),
        ("RULESNAP_EXTRACT_TIMEOUT", "90"),
        ("RULESNAP_ANCHOR", "scripts"),
    ]);

    assert_eq!(config.output.root, Path::new("/tmp/out"));
    assert_eq!(config.container.runtime, "podman");
    assert_eq!(config.container.extract_timeout_secs, 90);
    assert_eq!(config.search.anchor, "scripts");
}

#[test]
fn test_invalid_timeout_override_is_ignored() {
    let config = overrides(&[("RULESNAP_EXTRACT_TIMEOUT", "soon")]);
    assert_eq!(config.container.extract_timeout_secs, 30);
}
