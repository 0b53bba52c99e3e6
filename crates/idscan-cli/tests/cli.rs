use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `idscan` with the user config directory redirected into `home`.
fn idscan(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("idscan").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"));
    cmd
}

#[test]
fn test_text_vehicle_json() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("plate.txt");
    fs::write(&input, "RDC\nBE-6401-01\nCHASSIS: JTDBR32E720012345\n").unwrap();

    idscan(&home)
        .args(["text", "--kind", "vehicle", "--confidence", "88.5"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""plateNumber":"BE-6401-01""#))
        .stdout(predicate::str::contains(r#""province":"Kinshasa""#))
        .stdout(predicate::str::contains(r#""chassisNumber":"JTDBR32E720012345""#))
        .stdout(predicate::str::contains(r#""documentType":"VEHICLE""#));
}

#[test]
fn test_text_voter_card_from_stdin_as_csv() {
    let home = TempDir::new().unwrap();

    idscan(&home)
        .args(["text", "-", "--kind", "voter-card", "--format", "csv"])
        .write_stdin("Nom: MULENDA\nPostnom/Prénom: OLIVIER/FWAMBA\nSexe: M\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("documentType,cardNumber,codeCI,nomCI,lastname"))
        .stdout(predicate::str::contains("voter-card,,,,MULENDA,OLIVIER,FWAMBA,,,M,"));
}

#[test]
fn test_text_passport_as_text() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("passport.txt");
    fs::write(
        &input,
        "P<CODMULENDAS<<OLIVIER<FWAMBA<<<<<<<<<<<<<<<\nOP12345670COD9609174M3012305<<<<<<<<<<<<<<06\n",
    )
    .unwrap();

    idscan(&home)
        .args(["text", "-k", "passport", "-f", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Document: passport"))
        .stdout(predicate::str::contains("MULENDA"))
        .stdout(predicate::str::contains("17/09/1996"));
}

#[test]
fn test_text_writes_output_file() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("id.txt");
    let output = home.path().join("id.json");
    fs::write(&input, "Nom: KASONGO\nSexe: F\n").unwrap();

    idscan(&home)
        .args(["text", "-k", "id-card"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Output written to"));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["documentType"], "ID_CARD");
    assert_eq!(json["surname"], "KASONGO");
    assert_eq!(json["sex"], "F");
    assert!(json["documentNumber"].is_null());
}

#[test]
fn test_unknown_kind_is_rejected() {
    let home = TempDir::new().unwrap();

    idscan(&home)
        .args(["text", "-", "--kind", "invoice"])
        .write_stdin("anything")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown document kind"));
}

#[test]
fn test_text_rejects_out_of_range_confidence() {
    let home = TempDir::new().unwrap();

    idscan(&home)
        .args(["text", "-", "--kind", "vehicle", "--confidence", "150"])
        .write_stdin("BE-6401-01")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Confidence must be between 0 and 100"));
}

#[test]
fn test_process_rejects_unsupported_extension() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("scan.pdf");
    fs::write(&input, b"%PDF-1.4").unwrap();

    idscan(&home)
        .args(["process", "--kind", "passport"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn test_process_reports_missing_models() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("plate.png");
    let models = home.path().join("models");
    fs::create_dir_all(&models).unwrap();
    fs::write(&input, b"not really a png").unwrap();

    idscan(&home)
        .args(["process", "--kind", "vehicle", "--model-dir"])
        .arg(&models)
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("OCR models not found"));
}

#[test]
fn test_process_uses_configured_model_dir() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("card.png");
    let models = home.path().join("configured-models");
    let config = home.path().join("config.json");
    fs::create_dir_all(&models).unwrap();
    fs::write(&input, b"not really a png").unwrap();
    fs::write(
        &config,
        serde_json::json!({ "ocr": { "model_dir": models } }).to_string(),
    )
    .unwrap();

    idscan(&home)
        .arg("-c")
        .arg(&config)
        .args(["process", "--kind", "id-card"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("OCR models not found"))
        .stderr(predicate::str::contains("configured-models"));
}

#[test]
fn test_process_missing_input() {
    let home = TempDir::new().unwrap();

    idscan(&home)
        .args(["process", "--kind", "vehicle", "does-not-exist.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_batch_without_matches() {
    let home = TempDir::new().unwrap();
    let pattern = home.path().join("*.png");

    idscan(&home)
        .args(["batch", "--kind", "id-card"])
        .arg(pattern.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files found"));
}

#[test]
fn test_config_init_set_get() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("conf").join("config.json");
    let config = config.to_str().unwrap();

    idscan(&home)
        .args(["-c", config, "config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    idscan(&home)
        .args(["-c", config, "config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    idscan(&home)
        .args(["-c", config, "config", "set", "ocr.model_dir", "/opt/idscan/models"])
        .assert()
        .success();

    idscan(&home)
        .args(["-c", config, "config", "set", "output.pretty", "true"])
        .assert()
        .success();

    idscan(&home)
        .args(["-c", config, "config", "get", "ocr.model_dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/opt/idscan/models"));

    idscan(&home)
        .args(["-c", config, "config", "get", "output.pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));

    idscan(&home)
        .args(["-c", config, "config", "set", "ocr.no_such_key", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key not found"));
}

#[test]
fn test_config_file_drives_output() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("config.json");
    fs::write(&config, r#"{"output": {"include_raw_text": false}}"#).unwrap();

    idscan(&home)
        .arg("-c")
        .arg(&config)
        .args(["text", "-", "-k", "vehicle"])
        .write_stdin("BE-6401-01")
        .assert()
        .success()
        .stdout(predicate::str::contains("plateNumber"))
        .stdout(predicate::str::contains("rawText").not());
}

#[test]
fn test_config_path_uses_user_config_dir() {
    let home = TempDir::new().unwrap();

    idscan(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("idscan"))
        .stdout(predicate::str::contains("not created"));
}
