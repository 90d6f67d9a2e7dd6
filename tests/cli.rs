// tests/cli.rs
//! Smartphone Factory CLI tests.

use assert_cmd::Command;
use assert_fs::assert::PathAssert;
use assert_fs::fixture::FileWriteStr;
use assert_fs::fixture::PathChild;
use predicates::str::contains;
use smartphone_factory::config::Config;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn expected_report(color: &str) -> String {
    format!(
        "{color} Smartphone Company produced a box of smartphones\n\
         The box contains the following items:\n\
         1. Smartphone. Specs: weight: 0.137 kg, color: {color}\n\
         2. Smartphone. Specs: weight: 0.137 kg, color: {color}\n\
         3. Smartphone. Specs: weight: 0.137 kg, color: {color}\n"
    )
}

#[test]
fn dies_no_args() -> TestResult {
    let mut cmd = Command::cargo_bin("smartphone-factory")?;
    cmd.env("CLICOLOR", "0");

    cmd.assert()
        .failure()
        .stderr(contains("Usage:"))
        .stderr(contains("[OPTIONS] <COMMAND>"))
        .stderr(contains("Commands:"));

    Ok(())
}

#[test]
fn run_without_config_prints_red_then_blue() -> TestResult {
    let tmp = assert_fs::TempDir::new()?;

    Command::cargo_bin("smartphone-factory")?
        .current_dir(&tmp)
        .env_remove("RUST_LOG")
        .arg("run")
        .assert()
        .success()
        .stdout(format!("{}{}", expected_report("Red"), expected_report("Blue")));

    tmp.close()?;
    Ok(())
}

#[test]
fn produce_single_company() -> TestResult {
    let tmp = assert_fs::TempDir::new()?;

    Command::cargo_bin("smartphone-factory")?
        .current_dir(&tmp)
        .env_remove("RUST_LOG")
        .args(["produce", "blue"])
        .assert()
        .success()
        .stdout(expected_report("Blue"));

    tmp.close()?;
    Ok(())
}

#[test]
fn produce_rejects_unknown_factory() -> TestResult {
    Command::cargo_bin("smartphone-factory")?
        .args(["produce", "green"])
        .assert()
        .failure()
        .stderr(contains("invalid value"));
    Ok(())
}

#[test]
fn weigh_reports_total() -> TestResult {
    let tmp = assert_fs::TempDir::new()?;

    Command::cargo_bin("smartphone-factory")?
        .current_dir(&tmp)
        .env("CLICOLOR", "0")
        .args(["weigh", "red"])
        .assert()
        .success()
        .stdout(contains("Red box: 3 items, total weight 0.411 kg"));

    tmp.close()?;
    Ok(())
}

#[test]
fn init_writes_default_config_in_cwd() -> TestResult {
    let tmp = assert_fs::TempDir::new()?;

    Command::cargo_bin("smartphone-factory")?
        .current_dir(&tmp)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialized .smartphone-factory.toml"));

    let cfg_path = tmp.child(".smartphone-factory.toml");
    cfg_path.assert(predicates::path::exists());

    let s = std::fs::read_to_string(cfg_path.path())?;
    let cfg: Config = toml::from_str(&s)?;
    assert_eq!(cfg, Config::default());

    tmp.close()?;
    Ok(())
}

#[test]
fn run_honours_config_file() -> TestResult {
    let tmp = assert_fs::TempDir::new()?;
    tmp.child(".smartphone-factory.toml")
        .write_str("companies = [\"blue\"]\n\n[batch]\ncount = 2\nweight_kg = 0.25\n")?;

    Command::cargo_bin("smartphone-factory")?
        .env_remove("RUST_LOG")
        .arg("run")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(
            "Blue Smartphone Company produced a box of smartphones\n\
             The box contains the following items:\n\
             1. Smartphone. Specs: weight: 0.25 kg, color: Blue\n\
             2. Smartphone. Specs: weight: 0.25 kg, color: Blue\n",
        );

    tmp.close()?;
    Ok(())
}

#[test]
fn run_fails_on_invalid_config() -> TestResult {
    let tmp = assert_fs::TempDir::new()?;
    tmp.child(".smartphone-factory.toml")
        .write_str("[batch]\ncount = 3\nweight_kg = -0.5\n")?;

    Command::cargo_bin("smartphone-factory")?
        .arg("run")
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(contains("weight_kg"));

    tmp.close()?;
    Ok(())
}
