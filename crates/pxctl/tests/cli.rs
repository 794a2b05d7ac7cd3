use assert_cmd::Command;
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::tempdir;

const PXCTL: &str = "pxctl";

fn pxctl(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin(PXCTL).unwrap();
    cmd.env("PXCTL_CONFIG", config).env_remove("PXCTL_CONTEXT");
    cmd
}

#[test]
fn get_alerts_produces_help_message() {
    let mut cmd = Command::cargo_bin(PXCTL).unwrap();
    cmd.args(["get", "alerts", "--help"]).assert().success();
}

#[test]
fn contexts_are_created_and_listed() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("pxctl").join("config.yaml");

    let out = pxctl(&config)
        .args(["context", "create", "prod", "--endpoint", "10.0.0.1"])
        .args(["--token", "s3cr3t"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&out.get_output().stdout).to_string();
    assert!(stdout.starts_with("New context prod saved to"), "{stdout}");

    pxctl(&config)
        .args(["context", "create", "staging", "--endpoint", "10.0.0.2:9021"])
        .assert()
        .success();

    let out = pxctl(&config)
        .args(["context", "list", "-o", "json"])
        .assert()
        .success();
    let rows: Vec<serde_json::Value> = out
        .get_output()
        .stdout
        .split(|b| *b == b'\n')
        .filter(|line| !line.is_empty())
        .map(|line| serde_json::from_slice(line).unwrap())
        .collect();

    assert_eq!(
        rows,
        vec![
            serde_json::json!({
                "name": "prod",
                "current": true,
                "endpoint": "10.0.0.1:9020",
                "secure": false,
                "hasToken": true,
                "hasCaCert": false,
            }),
            serde_json::json!({
                "name": "staging",
                "current": false,
                "endpoint": "10.0.0.2:9021",
                "secure": false,
                "hasToken": false,
                "hasCaCert": false,
            }),
        ]
    );

    // Secrets stay in the config file, and out of listings.
    assert!(std::fs::read_to_string(&config).unwrap().contains("s3cr3t"));
    assert!(!String::from_utf8_lossy(&out.get_output().stdout).contains("s3cr3t"));

    dir.close().unwrap();
}

#[test]
fn cafile_must_exist_and_implies_secure() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.yaml");

    pxctl(&config)
        .args(["context", "create", "prod", "--endpoint", "10.0.0.1"])
        .arg("--cafile")
        .arg(dir.path().join("missing.pem"))
        .assert()
        .failure();
    assert!(!config.exists());

    let cafile = dir.path().join("ca.pem");
    std::fs::write(&cafile, "-----BEGIN CERTIFICATE-----\n").unwrap();

    pxctl(&config)
        .args(["context", "create", "prod", "--endpoint", "10.0.0.1"])
        .arg("--cafile")
        .arg(&cafile)
        .assert()
        .success();

    let out = pxctl(&config)
        .args(["context", "list", "-o", "json"])
        .assert()
        .success();
    let row: serde_json::Value = serde_json::from_slice(&out.get_output().stdout).unwrap();

    assert_eq!(row["secure"], true);
    assert_eq!(row["hasCaCert"], true);
}

#[test]
fn unknown_contexts_are_rejected() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.yaml");

    pxctl(&config)
        .args(["context", "use", "nope"])
        .assert()
        .failure();
    pxctl(&config)
        .args(["context", "delete", "nope"])
        .assert()
        .failure();
    pxctl(&config)
        .args(["context", "create", "bad", "--endpoint", "https://10.0.0.1"])
        .assert()
        .failure();
}

#[test]
fn get_alerts_requires_a_context() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.yaml");

    let out = pxctl(&config).args(["get", "alerts"]).assert().failure();
    let stderr = String::from_utf8_lossy(&out.get_output().stderr).to_string();
    assert!(stderr.contains("no context is selected"), "{stderr}");

    pxctl(&config)
        .args(["context", "create", "prod", "--endpoint", "10.0.0.1"])
        .assert()
        .success();
    pxctl(&config)
        .args(["context", "unset"])
        .assert()
        .success();

    pxctl(&config)
        .args(["--context", "other", "get", "alerts"])
        .assert()
        .failure();
}

#[test]
fn get_alerts_accepts_only_known_types() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.yaml");

    let out = pxctl(&config)
        .args(["get", "alerts", "--type", "pool"])
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&out.get_output().stderr).to_string();
    assert!(stderr.contains("possible values"), "{stderr}");
}
