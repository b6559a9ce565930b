//! Built-in defaults: search tiers and the stock appliance table

use std::path::PathBuf;

use crate::domain::value_objects::{ApplianceKind, SearchTier};

use super::types::ApplianceConfig;

pub(super) const DEFAULT_OUTPUT_ROOT: &str = "collected_rules";
pub(super) const DEFAULT_ANCHOR: &str = "policy";
pub(super) const DEFAULT_FULL_SCAN_ROOT: &str = "/";
pub(super) const DEFAULT_RUNTIME: &str = "docker";
pub(super) const DEFAULT_EXTRACT_TIMEOUT_SECS: u64 = 30;

const ZEEK_POLICY: &str = "**/zeek/share/zeek/policy";

const ZEEK_SCRIPTS: &[&str] = &[
    "protocols/ftp/detect-bruteforcing.zeek",
    "protocols/http/detect-sqli.zeek",
    "protocols/http/detect-webapps.zeek",
    "protocols/ssh/detect-bruteforcing.zeek",
    "protocols/ssl/heartbleed.zeek",
    "protocols/ssl/weak-keys.zeek",
    "protocols/smtp/blocklists.zeek",
    "protocols/smtp/detect-suspicious-orig.zeek",
    "frameworks/files/detect-MHR.zeek",
    "frameworks/software/vulnerable.zeek",
];

pub(super) fn default_output_root() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_ROOT)
}

pub(super) fn default_anchor() -> String {
    DEFAULT_ANCHOR.to_string()
}

pub(super) fn default_full_scan_root() -> PathBuf {
    PathBuf::from(DEFAULT_FULL_SCAN_ROOT)
}

pub(super) fn default_runtime() -> String {
    DEFAULT_RUNTIME.to_string()
}

pub(super) fn default_extract_timeout_secs() -> u64 {
    DEFAULT_EXTRACT_TIMEOUT_SECS
}

/// Tiers probed in order before escalating to a full scan
pub(super) fn default_tiers() -> Vec<SearchTier> {
    vec![
        SearchTier::new(
            "common paths",
            ["/etc", "/opt", "/usr/local", "/usr/share", "/var/lib", "/var"],
        ),
        SearchTier::new("user home", ["~"]),
        SearchTier::new(
            "program install directories",
            ["/usr/share", "/usr/local/share", "/var/lib", "/opt"],
        ),
    ]
}

fn local(name: &str, search: &[&str], extension: &str) -> ApplianceConfig {
    ApplianceConfig {
        name: name.to_string(),
        kind: ApplianceKind::Local,
        search: search.iter().map(|s| s.to_string()).collect(),
        extension: extension.to_string(),
        container: None,
        path: None,
    }
}

fn container(name: &str, container: &str, path: &str, extension: &str) -> ApplianceConfig {
    ApplianceConfig {
        name: name.to_string(),
        kind: ApplianceKind::Container,
        search: Vec::new(),
        extension: extension.to_string(),
        container: Some(container.to_string()),
        path: Some(path.to_string()),
    }
}

/// The stock appliance table
pub(super) fn default_appliances() -> Vec<ApplianceConfig> {
    let zeek: Vec<String> = ZEEK_SCRIPTS
        .iter()
        .map(|script| format!("{}/{}", ZEEK_POLICY, script))
        .collect();
    let zeek: Vec<&str> = zeek.iter().map(String::as_str).collect();

    vec![
        local("suricata", &["**/suricata/rules/"], "rules"),
        local(
            "snort",
            &["**/snort/rules/", "**/scripts/policy", "**/scripts/site"],
            "rules",
        ),
        local("ModSecurity", &["**/crs4/rules"], "conf"),
        local("zeek", &zeek, "zeek"),
        local("nuclei", &["**/nuclei-templates/"], "yaml"),
        container("堡塔云waf", "86e4e41a871c", "/etc/nginx/waf/rule", "json"),
        container("南墙uuwaf", "ca466ab891e4", "/uuwaf/waf/plugins/", "w"),
    ]
}
