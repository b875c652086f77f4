//! End-to-end report generation against real directory trees

use std::fs;
use std::path::Path;
use tab_report::{ReportConfig, ReportError, ReportGenerator};

/// Any byte content works for plots - embedding never parses the image
const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nnot-a-real-png";

fn write_file(path: &Path, content: &[u8]) {
    fs::write(path, content).unwrap();
}

#[test]
fn single_section_report() {
    let dir = tempfile::tempdir().unwrap();
    let section = dir.path().join("01_Alpha");
    fs::create_dir(&section).unwrap();
    write_file(&section.join("metrics.csv"), b"metric,value\nrmse,0.42\n");
    write_file(&section.join("plot.png"), PNG_BYTES);

    let html = ReportGenerator::new()
        .render_to_string(dir.path())
        .unwrap();

    // One tab labeled with the prefix stripped
    assert!(html.contains("openTab(event, 'Alpha')\">Alpha</div>"));
    assert_eq!(html.matches("class=\"tab\"").count(), 1);

    // Table header matches the CSV columns, no index column
    assert!(html.contains("<th>metric</th><th>value</th>"));
    assert!(html.contains("<td>rmse</td><td>0.42</td>"));

    // Plot is inlined as a data URI with its heading
    assert!(html.contains("<h3>plot</h3>"));
    assert!(html.contains("src=\"data:image/png;base64,"));
}

#[test]
fn tabs_follow_prefix_order_not_creation_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("02_Beta")).unwrap();
    fs::create_dir(dir.path().join("01_Alpha")).unwrap();

    let html = ReportGenerator::new()
        .render_to_string(dir.path())
        .unwrap();

    let alpha = html.find(">Alpha<").unwrap();
    let beta = html.find(">Beta<").unwrap();
    assert!(alpha < beta, "Alpha must come before Beta in the tab bar");
}

#[test]
fn tables_precede_plots_within_a_section() {
    let dir = tempfile::tempdir().unwrap();
    let section = dir.path().join("01_Alpha");
    fs::create_dir(&section).unwrap();
    write_file(&section.join("10_second.csv"), b"a\n1\n");
    write_file(&section.join("01_first.csv"), b"b\n2\n");
    write_file(&section.join("00_early plot.png"), PNG_BYTES);

    let html = ReportGenerator::new()
        .render_to_string(dir.path())
        .unwrap();

    let first = html.find("<h2>first</h2>").unwrap();
    let second = html.find("<h2>second</h2>").unwrap();
    let plot = html.find("<h3>early plot</h3>").unwrap();
    assert!(first < second);
    assert!(second < plot, "all tables must precede all plots");
}

#[test]
fn empty_input_yields_valid_empty_report() {
    let dir = tempfile::tempdir().unwrap();

    let html = ReportGenerator::new()
        .render_to_string(dir.path())
        .unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<div class=\"tabs\"></div>"));
    assert!(!html.contains("class=\"tab-content\""));
    assert!(html.contains("</html>"));
}

#[test]
fn non_directory_input_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let bogus_input = dir.path().join("input.txt");
    write_file(&bogus_input, b"not a directory");
    let output = dir.path().join("report.html");

    let err = ReportGenerator::new()
        .write_report(&bogus_input, &output)
        .unwrap_err();

    assert!(matches!(err, ReportError::InvalidInputRoot(_)));
    assert!(!output.exists(), "no output file may be created on failure");
}

#[test]
fn malformed_csv_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input");
    let section = input.join("01_Alpha");
    fs::create_dir_all(&section).unwrap();
    write_file(&section.join("good.csv"), b"a,b\n1,2\n");
    write_file(&section.join("truncated.csv"), b"a,b\n1,2,3\n");
    let output = dir.path().join("report.html");

    let err = ReportGenerator::new()
        .write_report(&input, &output)
        .unwrap_err();

    assert!(matches!(err, ReportError::Csv { .. }));
    assert!(!output.exists(), "no output file may be created on failure");
}

#[test]
fn write_report_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input");
    fs::create_dir(&input).unwrap();
    let output = dir.path().join("report.html");
    write_file(&output, b"stale content");

    ReportGenerator::new().write_report(&input, &output).unwrap();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(!html.contains("stale content"));
}

#[test]
fn markup_heavy_names_are_escaped_and_disambiguated() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("01_A B")).unwrap();
    fs::create_dir(dir.path().join("02_A_B")).unwrap();
    fs::create_dir(dir.path().join("03_R&D <new>")).unwrap();

    let html = ReportGenerator::new()
        .render_to_string(dir.path())
        .unwrap();

    // Colliding sanitized names get numeric suffixes
    assert!(html.contains("<div id=\"A_B\" class=\"tab-content\">"));
    assert!(html.contains("<div id=\"A_B_2\" class=\"tab-content\">"));

    // Labels are escaped, identifiers stay markup-safe
    assert!(html.contains(">R&amp;D &lt;new&gt;</div>"));
    assert!(html.contains("<div id=\"R_D__new_\" class=\"tab-content\">"));
}

#[test]
fn custom_title_appears_in_head_and_body() {
    let dir = tempfile::tempdir().unwrap();

    let config = ReportConfig::new()
        .with_title("Regression Suite")
        .with_timestamp(false);
    let html = ReportGenerator::with_config(config)
        .render_to_string(dir.path())
        .unwrap();

    assert!(html.contains("<title>Regression Suite</title>"));
    assert!(html.contains("<h1>Regression Suite</h1>"));
    assert!(!html.contains("Generated at"));
}
