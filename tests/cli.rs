//! End-to-end tests of the `wavelift` binary.

use std::path::Path;
use std::process::{Command, Output};

const CONFIG: &str = r#"
precisions = ["bf16", "f32", "f64"]
threads = 2
seed = 42

[[inputs]]
name = "noise"
shape = [64]
magnitude = 10.0

[[wavelets]]
name = "haar_zero"
id = "haar"
mode = "zero"

[[wavelets]]
name = "db4_periodic"
id = "db4"
mode = "periodic"
"#;

fn wavelift(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wavelift"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn generate_run_compare() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bench.toml");
    std::fs::write(&config, CONFIG).unwrap();
    let input = dir.path().join("input");
    let output = dir.path().join("output");

    let out = wavelift(&[Path::new("generate"), &config, Path::new("--output"), &input]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(std::fs::metadata(input.join("noise")).unwrap().len(), 64 * 8);

    let out = wavelift(&[Path::new("run"), &config, &output, &input]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    for suffix in ["bf16", "f32", "f64"] {
        let root = dir.path().join(format!("output-{suffix}"));
        for file in ["db4_periodic_h_fwd", "db4_periodic_l_fwd", "db4_periodic_inv"] {
            assert!(root.join("noise").join(file).is_file(), "{suffix}/{file}");
        }
        assert!(root.join("summary.json").is_file());
    }

    let out = wavelift(&[
        Path::new("compare"),
        &config,
        &dir.path().join("output-bf16"),
        &dir.path().join("output-f64"),
    ]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().count(), 6);
    assert!(stdout.contains("haar_zero"));
}

#[test]
fn run_exits_nonzero_after_isolated_failure() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bench.toml");
    std::fs::write(
        &config,
        r#"
        precisions = ["f32"]

        [[inputs]]
        name = "sig"
        shape = [8]

        [[wavelets]]
        name = "good"
        id = "haar"
        mode = "reflect"

        [[wavelets]]
        name = "bad"
        id = "haar"
        mode = "mirror"
        "#,
    )
    .unwrap();
    let input = dir.path().join("input");
    let output = dir.path().join("output");
    std::fs::create_dir_all(&input).unwrap();
    std::fs::write(input.join("sig"), [0u8; 64]).unwrap();

    let out = wavelift(&[Path::new("run"), &config, &output, &input]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("mirror"), "{stderr}");
    assert!(dir.path().join("output-f32/sig/good_inv").is_file());
}

#[test]
fn unknown_precision_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bench.toml");
    std::fs::write(&config, "precisions = [\"f16\"]\n").unwrap();

    let out = wavelift(&[Path::new("run"), &config, &dir.path().join("o"), &dir.path().join("i")]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("unsupported precision"));
}

#[test]
fn missing_arguments_are_a_usage_error() {
    let out = Command::new(env!("CARGO_BIN_EXE_wavelift"))
        .arg("run")
        .output()
        .unwrap();
    assert!(!out.status.success());
}
