use integration_tests::harness::{Workspace, banner_log, gzip};
use logreport_core::report::ReportRow;
use logreport_core::run::{RunOutcome, run};
use pretty_assertions::assert_eq;
use std::fs;

fn table_json(report: &str) -> serde_json::Value {
    let start = report.find("var table = ").expect("table marker") + "var table = ".len();
    let end = report[start..].find(";</script>").expect("table end") + start;
    serde_json::from_str(&report[start..end]).expect("table is JSON")
}

#[test]
fn newest_log_is_rendered_into_dated_report() {
    // Arrange
    let ws = Workspace::new();
    ws.write_log("nginx-access-ui.log-20170629.log", "");
    ws.write_log("nginx-access-ui.log-20170630.gz", gzip(&banner_log()));
    ws.write_log("nginx-access-ui.log-20170701.bz2", "ignored");
    let cfg = ws.resolved();

    // Act
    let outcome = run(&cfg).expect("run analyzer");

    // Assert
    let expected = ws.report_dir().join("report-2017.06.30.html");
    let RunOutcome::Generated {
        log,
        report,
        rows,
        quality,
    } = outcome
    else {
        panic!("expected a generated report, got {outcome:?}");
    };
    assert!(log.path.ends_with("nginx-access-ui.log-20170630.gz"));
    assert_eq!(report, expected);
    assert_eq!(rows, 3);
    assert_eq!(quality.parse_errors_lines, vec![7, 11]);

    let html = fs::read_to_string(&expected).expect("report written");
    assert!(html.contains("<p>cost: $5</p>"));
    let table = table_json(&html);
    let rows = table.as_array().expect("table is an array");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["url"], "/api/v2/banner/25019908");
    assert_eq!(rows[0]["count"], 4);
    assert_eq!(rows[0]["time_perc"], "33.976%");
}

#[test]
fn second_run_finds_report_up_to_date() {
    // Arrange
    let ws = Workspace::new();
    ws.write_log("nginx-access-ui.log-20170630.log", banner_log());
    let cfg = ws.resolved();
    run(&cfg).expect("first run");
    let report = ws.report_dir().join("report-2017.06.30.html");
    let written = fs::read_to_string(&report).expect("report written");

    // Act
    let outcome = run(&cfg).expect("second run");

    // Assert
    assert!(matches!(outcome, RunOutcome::UpToDate { .. }));
    assert_eq!(fs::read_to_string(&report).expect("report kept"), written);
}

#[test]
fn older_report_does_not_block_newer_log() {
    // Arrange
    let ws = Workspace::new();
    ws.write_log("nginx-access-ui.log-20170630.log", banner_log());
    ws.write_report("report-2017.06.29.html");
    let cfg = ws.resolved();

    // Act
    let outcome = run(&cfg).expect("run analyzer");

    // Assert
    assert!(matches!(outcome, RunOutcome::Generated { .. }));
    assert!(ws.report_dir().join("report-2017.06.30.html").is_file());
}

#[test]
fn empty_log_dir_is_a_no_op() {
    // Arrange
    let ws = Workspace::new();
    ws.write_log("access.log", "not an nginx ui log");
    let cfg = ws.resolved();

    // Act
    let outcome = run(&cfg).expect("run analyzer");

    // Assert
    assert_eq!(outcome, RunOutcome::NoLogs);
    assert!(!ws.report_dir().exists());
}

#[test]
fn missing_template_fails_without_leaving_a_report() {
    // Arrange
    let ws = Workspace::new();
    ws.write_log("nginx-access-ui.log-20170630.log", banner_log());
    fs::remove_file(ws.template_path()).expect("remove template");
    let cfg = ws.resolved();

    // Act
    let err = run(&cfg).expect_err("template is required");

    // Assert
    assert!(format!("{err:#}").contains("failed to write report"));
    assert!(!ws.report_dir().join("report-2017.06.30.html").exists());
}

#[test]
fn empty_log_renders_an_empty_table() {
    // Arrange
    let ws = Workspace::new();
    ws.write_log("nginx-access-ui.log-20170630.log", "");
    let cfg = ws.resolved();

    // Act
    run(&cfg).expect("run analyzer");

    // Assert
    let html = fs::read_to_string(ws.report_dir().join("report-2017.06.30.html"))
        .expect("report written");
    let rows: Vec<ReportRow> = Vec::new();
    assert_eq!(table_json(&html), serde_json::to_value(&rows).expect("serialize"));
}

#[test]
fn zero_byte_gzip_log_renders_an_empty_table() {
    // Arrange
    let ws = Workspace::new();
    ws.write_log("nginx-access-ui.log-20170630.gz", b"");
    let cfg = ws.resolved();

    // Act
    let outcome = run(&cfg).expect("run analyzer");

    // Assert
    let RunOutcome::Generated { rows, quality, .. } = outcome else {
        panic!("expected a generated report, got {outcome:?}");
    };
    assert_eq!(rows, 0);
    assert_eq!(quality.lines_count, 0);
    let html = fs::read_to_string(ws.report_dir().join("report-2017.06.30.html"))
        .expect("report written");
    assert_eq!(table_json(&html), serde_json::json!([]));
}
