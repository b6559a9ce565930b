//! End-to-end tests running the rulesnap binary.

mod common;

use std::fs;

use common::*;

#[test]
fn help_lists_subcommands() {
    let env = TestEnv::new();
    let result = env.run(&["--help"]);

    assert!(result.success, "{}", result.combined_output());
    for sub in ["collect", "clear-cache", "appliances"] {
        assert!(result.stdout.contains(sub), "missing {sub} in help");
    }
}

#[test]
fn collect_copies_matching_files_then_converges() {
    let env = TestEnv::new();
    env.write_config(SURICATA_ONLY);
    env.host_file("etc/suricata/rules/emerging-scan.rules", "alert tcp any any");
    env.host_file("etc/suricata/rules/local.rules", "drop ip any any");
    env.host_file("etc/suricata/rules/README.txt", "not a rule");

    // No subcommand means collect.
    let first = env.run(&["--json"]);
    assert!(first.success, "{}", first.combined_output());
    let summary = first.last_json();
    assert_eq!(summary["event"], "complete");
    assert_eq!(summary["total"], 2);
    assert_eq!(summary["copied"].as_array().unwrap().len(), 2);
    assert_eq!(summary["used_cache"], false);
    assert!(env.output().join("suricata/emerging-scan.rules").is_file());
    assert!(env.output().join("suricata/local.rules").is_file());
    assert!(!env.output().join("suricata/README.txt").exists());
    assert!(env.output().join("path_cache.json").is_file());
    assert!(env.output().join("file_hashes.json").is_file());

    let second = env.run(&["collect", "--json"]);
    assert!(second.success, "{}", second.combined_output());
    let summary = second.last_json();
    assert_eq!(summary["used_cache"], true);
    assert_eq!(summary["unchanged"], 2);
    assert!(summary["copied"].as_array().unwrap().is_empty());
}

#[test]
fn modified_file_is_recopied() {
    let env = TestEnv::new();
    env.write_config(SURICATA_ONLY);
    let rule = env.host_file("etc/suricata/rules/local.rules", "drop ip any any");
    env.host_file("etc/suricata/rules/other.rules", "pass ip any any");

    assert!(env.run(&["--json"]).success);
    fs::write(&rule, "drop tcp any any").unwrap();

    let result = env.run(&["--json"]);
    assert!(result.success, "{}", result.combined_output());
    let summary = result.last_json();
    let copied = summary["copied"].as_array().unwrap();
    assert_eq!(copied.len(), 1);
    assert!(copied[0].as_str().unwrap().ends_with("local.rules"));
    assert_eq!(
        fs::read_to_string(env.output().join("suricata/local.rules")).unwrap(),
        "drop tcp any any"
    );
}

#[test]
fn human_output_shows_summary() {
    let env = TestEnv::new();
    env.write_config(SURICATA_ONLY);
    env.host_file("etc/suricata/rules/local.rules", "drop ip any any");

    let result = env.run(&["collect", "--color", "never"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("rulesnap collect"));
    assert!(result.stdout.contains("Collection complete"));
    assert!(result.stdout.contains("Copied"));
}

#[test]
fn output_flag_overrides_config() {
    let env = TestEnv::new();
    env.write_config(SURICATA_ONLY);
    env.host_file("etc/suricata/rules/local.rules", "drop ip any any");
    let elsewhere = env.work_dir().join("elsewhere");

    let result = env.run(&["--json", "--output", elsewhere.to_str().unwrap()]);
    assert!(result.success, "{}", result.combined_output());
    assert!(elsewhere.join("suricata/local.rules").is_file());
    assert!(!env.output().join("suricata").exists());
}

#[test]
fn clear_cache_removes_both_caches() {
    let env = TestEnv::new();
    env.write_config(SURICATA_ONLY);
    env.host_file("etc/suricata/rules/local.rules", "drop ip any any");
    assert!(env.run(&["--json"]).success);

    let result = env.run(&["clear-cache", "--json"]);
    assert!(result.success, "{}", result.combined_output());
    let summary = result.last_json();
    assert_eq!(summary["removed"].as_array().unwrap().len(), 2);
    assert!(!env.output().join("path_cache.json").exists());
    assert!(!env.output().join("file_hashes.json").exists());
    // Collected files stay.
    assert!(env.output().join("suricata/local.rules").is_file());

    // Next run rebuilds from a full scan and copies everything again.
    let rerun = env.run(&["--json"]).last_json();
    assert_eq!(rerun["used_cache"], false);
    assert_eq!(rerun["copied"].as_array().unwrap().len(), 1);
}

#[test]
fn missing_container_runtime_does_not_stop_local_collection() {
    let env = TestEnv::new();
    env.write_config(&format!(
        "{SURICATA_ONLY}\n{}",
        r#"
[[appliances]]
name = "waf"
kind = "container"
container = "86e4e41a871c"
path = "/etc/nginx/waf/rule"
extension = "json"

[container]
runtime = "rulesnap-test-no-such-runtime"
"#
    ));
    env.host_file("etc/suricata/rules/local.rules", "drop ip any any");

    let result = env.run(&["--json"]);
    assert!(result.success, "{}", result.combined_output());
    let summary = result.last_json();
    assert_eq!(summary["total"], 1);
    let warnings = summary["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].as_str().unwrap().starts_with("waf:"));
    assert!(!env.output().join("docker_temp").exists());
}

#[test]
fn invalid_appliance_fails_with_exit_code_1() {
    let env = TestEnv::new();
    env.write_config(
        r#"
[output]
root = "{out}"

[[appliances]]
name = "waf"
kind = "container"
container = "86e4e41a871c"
"#,
    );

    let result = env.run(&["collect"]);
    assert_eq!(result.exit_code, Some(1), "{}", result.combined_output());
    assert!(result.stderr.contains("invalid appliance"), "{}", result.stderr);
}

#[test]
fn explicit_missing_config_is_an_error() {
    let env = TestEnv::new();
    let result = env.run(&["--config", "does-not-exist.toml", "appliances"]);
    assert_eq!(result.exit_code, Some(1), "{}", result.combined_output());
}

#[test]
fn unknown_config_key_is_reported_with_suggestion() {
    let env = TestEnv::new();
    env.write_config(
        r#"
[search]
anchr = "policy"
full_scan_root = "{host}"

[[appliances]]
name = "suricata"
search = ["**/suricata/rules/"]
"#,
    );

    let result = env.run(&["appliances"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("Unknown config key"), "{}", result.stderr);
    assert!(result.stderr.contains("Did you mean 'anchor'?"), "{}", result.stderr);
}

#[test]
fn appliances_lists_builtin_table_without_config() {
    let env = TestEnv::new();
    let result = env.run(&["appliances", "--json"]);

    assert!(result.success, "{}", result.combined_output());
    let doc = result.last_json();
    let names: Vec<&str> = doc["appliances"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 7);
    assert!(names.contains(&"suricata"));
    assert!(names.contains(&"zeek"));
}
