use {serde_json::Value, std::process::Command};

#[test]
fn stdout_carries_only_the_json_result() {
    let output = Command::new(env!("CARGO_BIN_EXE_deployer"))
        .arg("claim-topics")
        .env("LOG_FILTER", "trace")
        .env_remove("USE_JSON_LOGS")
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["topics"][0], "PROPERTY");
    let logs = String::from_utf8(output.stderr).unwrap();
    assert!(logs.contains("running deployer with validated arguments"));
}

#[test]
fn failures_exit_with_status_one() {
    let output = Command::new(env!("CARGO_BIN_EXE_deployer"))
        .args(["list-instances", "--schema-id", "tokens"])
        .env("ENTITY_API_URL", "http://127.0.0.1:1")
        .env("HTTP_TIMEOUT", "1s")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
