use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn linecode() -> Command {
    Command::cargo_bin("linecode").unwrap()
}

#[test]
fn test_encode_manchester_default() {
    linecode()
        .arg("encode")
        .arg("1011001")
        .assert()
        .success()
        .stdout(predicate::str::contains("1011001 -> HLLHHLHLLHLHHL"));
}

#[test]
fn test_encode_nrz() {
    linecode()
        .args(["encode", "--scheme", "nrz", "1011001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1011001 -> HLHHLLH"));
}

#[test]
fn test_encode_nrzi_initial_level() {
    linecode()
        .args(["encode", "-s", "nrzi", "1011001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1011001 -> LHHLHHHL"));

    linecode()
        .args(["encode", "-s", "nrzi", "--initial", "H", "1011001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1011001 -> HLLHLLLH"));
}

#[test]
fn test_encode_multiple_inputs_keep_order() {
    linecode()
        .args(["--threads", "2", "encode", "-s", "nrz", "0", "1", "0011"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)0 -> L\n1 -> H\n0011 -> LLHH").unwrap());
}

#[test]
fn test_encode_rejects_invalid_bits() {
    linecode()
        .args(["encode", "10201"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid symbol '2' at position 2"))
        .stderr(predicate::str::contains("1 of 1 inputs failed"));
}

#[test]
fn test_encode_rejects_empty_input() {
    linecode()
        .args(["encode", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input is empty"));
}

#[test]
fn test_encode_reports_each_failure() {
    linecode()
        .args(["encode", "101", "abc", "11"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("101 -> HLLHHL"))
        .stdout(predicate::str::contains("11 -> HLHL"))
        .stderr(predicate::str::contains("✗ abc"));
}

#[test]
fn test_encode_plot() {
    linecode()
        .args(["encode", "-s", "nrz", "--plot", "0110"])
        .assert()
        .success()
        .stdout(predicate::str::contains("H    ___\n"))
        .stdout(predicate::str::contains("L __|   |_\n"));
}

#[test]
fn test_encode_unit_width_out_of_range() {
    for width in ["0", "65", "18446744073709551615"] {
        linecode()
            .args(["encode", "--plot", "--unit-width", width, "0110"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("invalid value"))
            .stderr(predicate::str::contains("panicked").not());
    }

    linecode()
        .args(["encode", "-s", "nrz", "--plot", "--unit-width", "64", "01"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("L {}|", "_".repeat(64))));
}

#[test]
fn test_encode_json() {
    let output = linecode()
        .args(["encode", "-s", "manchester", "--json", "10"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records[0]["input"], "10");
    assert_eq!(records[0]["scheme"], "manchester");
    assert_eq!(records[0]["output"], "HLLH");
}

#[test]
fn test_decode_manchester() {
    linecode()
        .args(["decode", "HLLHHLHLLHLHHL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HLLHHLHLLHLHHL -> 1011001"));
}

#[test]
fn test_decode_nrzi_single_symbol() {
    linecode()
        .args(["decode", "-s", "nrzi", "L"])
        .assert()
        .success()
        .stdout(predicate::str::contains("L -> \n"));
}

#[test]
fn test_decode_manchester_odd_length() {
    linecode()
        .args(["decode", "-s", "manchester", "LHL"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("length 3 is odd"));
}

#[test]
fn test_decode_manchester_invalid_pair() {
    linecode()
        .args(["decode", "LLHH"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid Manchester pair 'LL' at position 0",
        ));
}

#[test]
fn test_decode_rejects_bits() {
    linecode()
        .args(["decode", "-s", "nrz", "0101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid signal '0101'"));
}

#[test]
fn test_unknown_scheme() {
    linecode()
        .args(["encode", "-s", "ami", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown line code: ami"));
}

#[test]
fn test_demo_default_pattern() {
    linecode()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Original data:      1011001"))
        .stdout(predicate::str::contains("Encoded signal:     HLHHLLH"))
        .stdout(predicate::str::contains(
            "NRZI Encoding (initial state 'L'):",
        ))
        .stdout(predicate::str::contains("Encoded signal:     LHHLHHHL"))
        .stdout(predicate::str::contains("Encoded signal:     HLLHHLHLLHLHHL"))
        .stdout(predicate::str::contains("Decoded data:       1011001"));
}

#[test]
fn test_demo_custom_bits_high_initial() {
    linecode()
        .args(["demo", "--initial", "high", "01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NRZI Encoding (initial state 'H'):"))
        .stdout(predicate::str::contains("Encoded signal:     HHL"));
}

#[test]
fn test_schemes_lists_all() {
    linecode()
        .arg("schemes")
        .assert()
        .success()
        .stdout(predicate::str::contains("nrz "))
        .stdout(predicate::str::contains("nrzi-high"))
        .stdout(predicate::str::contains("manchester"));
}

#[test]
fn test_config_file_sets_defaults() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("linecode.json");
    fs::write(
        &config_path,
        r#"{"strategy": {"scheme": "nrzi"}, "initial": "High"}"#,
    )
    .unwrap();

    linecode()
        .arg("--config")
        .arg(&config_path)
        .args(["encode", "1011001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1011001 -> HLLHLLLH"));

    // Explicit flags win over the file.
    linecode()
        .arg("--config")
        .arg(&config_path)
        .args(["encode", "-s", "nrz", "1011001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1011001 -> HLHHLLH"));
}

#[test]
fn test_config_initial_applies_to_scheme_flag() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("linecode.json");
    fs::write(&config_path, r#"{"initial": "High"}"#).unwrap();

    linecode()
        .arg("--config")
        .arg(&config_path)
        .args(["encode", "-s", "nrzi", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> HL"));

    // A level named in the scheme wins over the file.
    linecode()
        .arg("--config")
        .arg(&config_path)
        .args(["encode", "-s", "nrzi-low", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> LH"));
}

#[test]
fn test_config_file_invalid() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("bad.json");
    fs::write(&config_path, "not json").unwrap();

    linecode()
        .arg("--config")
        .arg(&config_path)
        .args(["encode", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}
