use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn tablekit() -> Command {
    Command::cargo_bin("tablekit").unwrap()
}

#[test]
fn prints_usage_without_a_file() {
    tablekit()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn missing_csv_cascades_into_no_data_messages() {
    let dir = tempfile::tempdir().unwrap();

    tablekit()
        .current_dir(dir.path())
        .arg("dataset.csv")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: File 'dataset.csv' not found."))
        .stdout(predicate::str::contains("No data to sample."))
        .stdout(predicate::str::contains("No data to average."))
        .stderr(predicate::str::is_empty());

    assert!(!dir.path().join("dataset_head.csv").exists());
}

#[test]
fn full_demonstration_run() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::write(
        data.join("dataset.csv"),
        "name,score\na,1\nb,2\nc,3\nd,4\ne,5\nf,6\n",
    )
    .unwrap();
    fs::write(data.join("foods.txt"), "Pizza\nSushi\n").unwrap();

    tablekit()
        .current_dir(dir.path())
        .args(["dataset.csv", "--base-dir", "data", "--text", "foods.txt"])
        .args(["--sample", "10", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 'dataset.csv' successfully. Shape: (6, 2)"))
        .stdout(predicate::str::contains("Data saved to 'dataset_head.csv' successfully."))
        .stdout(predicate::str::contains("Sampled 6 of 6 rows."))
        .stdout(predicate::str::contains("Average of 'score': 3.5"))
        .stdout(predicate::str::contains("foods.txt"))
        .stdout(predicate::str::contains("Loaded 'foods.txt' successfully. 2 lines."))
        .stdout(predicate::str::contains("Total lines in file: 3"));

    assert_eq!(
        fs::read_to_string(dir.path().join("dataset_head.csv")).unwrap(),
        "name,score\na,1\nb,2\nc,3\nd,4\ne,5\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("foods_updated.txt")).unwrap(),
        "Pizza\nSushi\nIce Cream\n"
    );
}

#[test]
fn reports_missing_column() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("d.csv"), "x\n1\n").unwrap();

    tablekit()
        .current_dir(dir.path())
        .args(["d.csv", "--column", "price", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Column 'price' not found."))
        .stdout(predicate::str::contains("\"inferred_type\": \"int\""));
}

#[test]
fn reports_malformed_csv() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::write(data.join("broken.csv"), "a,b\n1,2\n3,4,5\n").unwrap();

    tablekit()
        .current_dir(dir.path())
        .args(["broken.csv", "--base-dir", "data"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: File 'broken.csv' is invalid or corrupted",
        ))
        .stdout(predicate::str::contains("No data to sample."));
}

#[test]
fn preview_is_capped_at_head_rows() {
    let dir = tempfile::tempdir().unwrap();
    let body: String = (1..=8).map(|i| format!("{}\n", i)).collect();
    fs::write(dir.path().join("n.csv"), format!("n\n{}", body)).unwrap();

    tablekit()
        .current_dir(dir.path())
        .args(["n.csv", "--head", "2", "--sample", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("... 6 more rows"));
}
