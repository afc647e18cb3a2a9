mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn plan_text_lists_both_artifacts() {
    let ctx = TestContext::new();
    let params = ctx.params_file("");

    ctx.cli()
        .args(["plan", "--params", &params.display().to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("present /etc/snmp/snmptt.ini"))
        .stdout(predicate::str::contains("absent  /etc/snmp/snmptt.sql"));
}

#[test]
fn plan_json_is_machine_readable() {
    let ctx = TestContext::new();
    let params = ctx.params_file("enable_mysql = true\nmysql_password = \"secret\"\n");

    let output = ctx
        .cli()
        .args(["plan", "--params", &params.display().to_string(), "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).expect("plan output is JSON");
    let artifacts = value["artifacts"].as_array().expect("artifacts array");

    assert_eq!(artifacts.len(), 2);
    assert_eq!(artifacts[0]["path"], "/etc/snmp/snmptt.ini");
    assert_eq!(artifacts[0]["mode"], "0644");
    assert_eq!(artifacts[1]["path"], "/etc/snmp/snmptt.sql");
    assert_eq!(artifacts[1]["present"], true);
    assert_eq!(artifacts[1]["mode"], "0640");
}
