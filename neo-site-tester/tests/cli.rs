use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "neo-site-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_neo-site-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("form-valid"));
}

#[test]
fn cli_logic_run_reports_json() {
    let exe = env!("CARGO_BIN_EXE_neo-site-tester");
    let output_path = temp_path("logic");
    let status = Command::new(exe)
        .args([
            "--mode",
            "logic",
            "--scenarios",
            "phone-mask,theme-toggle",
            "--seeds",
            "7",
            "--iterations",
            "3",
            "--report",
            "json",
            "--output",
        ])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let json_end = content.rfind(']').expect("json array");
    let parsed: serde_json::Value =
        serde_json::from_str(&content[..=json_end]).expect("json report");
    assert_eq!(parsed.as_array().map(Vec::len), Some(2));
}

#[test]
fn cli_skips_unknown_browser() {
    let exe = env!("CARGO_BIN_EXE_neo-site-tester");
    let output = Command::new(exe)
        .args([
            "--mode",
            "browser",
            "--browsers",
            "unknown",
            "--scenarios",
            "smoke",
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown browser"));
}
