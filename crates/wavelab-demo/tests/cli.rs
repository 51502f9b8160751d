// File: crates/wavelab-demo/tests/cli.rs
// Purpose: End-to-end runs of the `wavelab` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn wavelab() -> Command {
    Command::cargo_bin("wavelab").expect("binary built")
}

#[test]
fn am_writes_plot_legend_and_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("samples.csv");

    wavelab()
        .arg("--out-dir").arg(dir.path())
        .args(["am", "--carrier", "12", "--modulators", "1, 2", "--depth", "0.6"])
        .arg("--csv").arg(&csv_path)
        .assert()
        .success();

    assert!(dir.path().join("am.png").exists());
    assert!(dir.path().join("am_legend.png").exists());

    let text = std::fs::read_to_string(&csv_path).expect("csv");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("index,x_px,carrier_y_px,envelope_y_px"));
    // default 600 px wide, centred origin
    assert_eq!(lines.count(), 601);
    assert!(text.contains("\n0,300.5,150.5,"));
}

#[test]
fn bad_modulator_list_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    wavelab()
        .arg("--out-dir").arg(dir.path())
        .args(["am", "--modulators", "1,two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid modulator frequency `two`"));
}

#[test]
fn thermostat_renders_per_width() {
    let dir = tempfile::tempdir().expect("tempdir");
    wavelab()
        .arg("--out-dir").arg(dir.path())
        .args(["thermostat", "--slider", "75", "--widths", "640,320"])
        .assert()
        .success();

    for name in ["thermostat_800.png", "thermostat_640.png", "thermostat_320.png"] {
        assert!(dir.path().join(name).exists(), "missing {name}");
    }
}

#[test]
fn config_file_drives_all() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = dir.path().join("lab.json");
    std::fs::write(&cfg, r#"{ "am": { "width": 300, "height": 150 }, "thermostat": { "article_width": 500 } }"#)
        .expect("write config");
    let log = dir.path().join("run.log");

    wavelab()
        .arg("--config").arg(&cfg)
        .arg("--out-dir").arg(dir.path())
        .arg("--log").arg(&log)
        .arg("all")
        .assert()
        .success();

    assert!(dir.path().join("am.png").exists());
    assert!(dir.path().join("thermostat_500.png").exists());
    let logged = std::fs::read_to_string(&log).expect("log file");
    assert!(logged.contains("thermostat state"));
}
