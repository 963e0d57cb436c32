//! End-to-end integration tests for the extraction pipeline.
//!
//! Builds small corpora on disk, runs the aggregator, and checks the CSV
//! table that comes out the other side.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;

use cce_extractor::aggregator;

/// One-volume fixture: a group with two entries straddling the cutoff, plus a
/// standalone entry on a later page.
const VOLUME_XML: &str = r#"<copyrightEntries>
    <header><year>1950</year><volume>3</volume><part>A</part></header>
    <page pgnum="1"/>
    <entryGroup>
        <author><authorName>Doe, J.</authorName></author>
        <copyrightEntry id="A100" regnum="A100">
            <title>Kept by the cutoff.</title>
            <regDate date="1950-01-01">1Jan50</regDate>
        </copyrightEntry>
        <copyrightEntry id="A101" regnum="A101">
            <title>Dropped by the cutoff.</title>
            <regDate date="1970-05-01">1May70</regDate>
        </copyrightEntry>
    </entryGroup>
    <page pgnum="2"/>
    <copyrightEntry id="A102" regnum="A102">
        <title>Standalone on page two.</title>
        <regDate date="1951-06-15">15Jun51</regDate>
    </copyrightEntry>
</copyrightEntries>"#;

/// Read a CSV file back as a list of column-name → value maps.
fn read_rows(path: &Path) -> Vec<HashMap<String, String>> {
    let mut reader = csv::Reader::from_path(path).expect("output CSV should open");
    let headers = reader.headers().expect("output CSV should have headers").clone();

    reader
        .records()
        .map(|record| {
            let record = record.expect("output CSV row should parse");
            headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.to_string(), v.to_string()))
                .collect()
        })
        .collect()
}

#[test]
fn test_single_volume_corpus() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("volume.xml"), VOLUME_XML).expect("write fixture");
    let output = dir.path().join("combined.csv");

    let summary = aggregator::run(dir.path(), &output, 1964).expect("run should succeed");
    assert_eq!(summary.files_processed, 1);
    assert_eq!(summary.files_skipped, 0);
    assert_eq!(summary.records, 2);

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 2);

    // Grouped entry: inherited author, document header, first page marker
    let grouped = rows.iter().find(|r| r["id"] == "A100").expect("A100 row");
    assert_eq!(grouped["authorName"], "Doe, J.");
    assert_eq!(grouped["year"], "1950");
    assert_eq!(grouped["volume"], "3");
    assert_eq!(grouped["part"], "A");
    assert_eq!(grouped["page"], "1");
    assert_eq!(grouped["date"], "1950-01-01");
    assert_eq!(grouped["regDate"], "1Jan50");

    // The post-cutoff entry is gone entirely
    assert!(rows.iter().all(|r| r["id"] != "A101"));

    // Standalone entry: no inherited author, second page marker
    let standalone = rows.iter().find(|r| r["id"] == "A102").expect("A102 row");
    assert_eq!(standalone["authorName"], "");
    assert_eq!(standalone["page"], "2");
}

#[test]
fn test_group_straddling_cutoff_yields_one_row() {
    // One file, one group ("Doe, J."), entries dated 1950-01-01 and
    // 1970-05-01, cutoff 1964 -> exactly one output row.
    let xml = r#"<copyrightEntries>
        <header><year>1950</year><volume>3</volume><part>A</part></header>
        <entryGroup>
            <author><authorName>Doe, J.</authorName></author>
            <copyrightEntry id="A1" regnum="A1"><regDate date="1950-01-01"/></copyrightEntry>
            <copyrightEntry id="A2" regnum="A2"><regDate date="1970-05-01"/></copyrightEntry>
        </entryGroup>
    </copyrightEntries>"#;

    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("volume.xml"), xml).expect("write fixture");
    let output = dir.path().join("combined.csv");

    aggregator::run(dir.path(), &output, 1964).expect("run should succeed");

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], "A1");
    assert_eq!(rows[0]["authorName"], "Doe, J.");
    assert_eq!(rows[0]["year"], "1950");
    assert_eq!(rows[0]["volume"], "3");
    assert_eq!(rows[0]["part"], "A");
}

#[test]
fn test_unparsable_file_degrades_but_never_aborts() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("bad.xml"), "<copyrightEntries><unclosed").expect("write fixture");
    fs::write(dir.path().join("good.xml"), VOLUME_XML).expect("write fixture");
    let output = dir.path().join("combined.csv");

    let summary = aggregator::run(dir.path(), &output, 1964).expect("run should succeed");
    assert_eq!(summary.files_processed, 1);
    assert_eq!(summary.files_skipped, 1);

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_unparseable_reg_date_keeps_record() {
    let xml = r#"<copyrightEntries>
        <header><year>1950</year><volume>3</volume><part>A</part></header>
        <copyrightEntry id="A1" regnum="A1"><regDate date="circa 1950"/></copyrightEntry>
    </copyrightEntries>"#;

    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("volume.xml"), xml).expect("write fixture");
    let output = dir.path().join("combined.csv");

    aggregator::run(dir.path(), &output, 1964).expect("run should succeed");

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["date"], "circa 1950");
}

#[test]
fn test_column_union_across_files() {
    let first = r#"<copyrightEntries>
        <header><year>1950</year><volume>1</volume><part>A</part></header>
        <copyrightEntry id="A1" regnum="A1"><title>Has a title.</title></copyrightEntry>
    </copyrightEntries>"#;
    let second = r#"<copyrightEntries>
        <header><year>1951</year><volume>2</volume><part>B</part></header>
        <copyrightEntry id="B1" regnum="B1"><edition>2d ed.</edition></copyrightEntry>
    </copyrightEntries>"#;

    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("a.xml"), first).expect("write fixture");
    fs::write(dir.path().join("b.xml"), second).expect("write fixture");
    let output = dir.path().join("combined.csv");

    aggregator::run(dir.path(), &output, 1964).expect("run should succeed");

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 2);

    // Both rows carry the full column union, with empty cells where a field
    // was never extracted for that row
    let title_row = rows.iter().find(|r| r["id"] == "A1").expect("A1 row");
    assert_eq!(title_row["title"], "Has a title.");
    assert_eq!(title_row["edition"], "");

    let edition_row = rows.iter().find(|r| r["id"] == "B1").expect("B1 row");
    assert_eq!(edition_row["edition"], "2d ed.");
    assert_eq!(edition_row["title"], "");
}

#[test]
fn test_custom_cutoff_year() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("volume.xml"), VOLUME_XML).expect("write fixture");
    let output = dir.path().join("combined.csv");

    // Cutoff 1951: only the 1950 entry survives
    let summary = aggregator::run(dir.path(), &output, 1951).expect("run should succeed");
    assert_eq!(summary.records, 1);

    let rows = read_rows(&output);
    assert_eq!(rows[0]["id"], "A100");
}

#[test]
fn test_cli_extract_end_to_end() {
    let dir = tempfile::tempdir().expect("tempdir");
    let corpus = dir.path().join("xml");
    fs::create_dir(&corpus).expect("create corpus dir");
    fs::write(corpus.join("bad.xml"), "<broken").expect("write fixture");
    fs::write(corpus.join("volume.xml"), VOLUME_XML).expect("write fixture");
    let output = dir.path().join("combined.csv");

    Command::cargo_bin("cce-extractor")
        .expect("binary should build")
        .arg("extract")
        .arg(&corpus)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows written"));

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_cli_rejects_missing_input_dir() {
    Command::cargo_bin("cce-extractor")
        .expect("binary should build")
        .arg("extract")
        .arg("/nonexistent/corpus")
        .arg("--output")
        .arg("out.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
