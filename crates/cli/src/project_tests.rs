#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

use std::fs;

use tempfile::TempDir;

fn write_project(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("hdlreg.toml");
    fs::write(&path, content).unwrap();
    path
}

const FULL_PROJECT: &str = r#"
name = "uart"

[[library]]
name = "uart_lib"
files = [
    "src/uart_pkg.vhd",
    { path = "src/uart_core.vhd", version = "1993", compile_options = ["--relaxed"] },
    "tb/tb_uart.vhd",
]

[[test]]
name = "tb_uart"
library = "uart_lib"
testbench = "tb/tb_uart.vhd"
architecture = "sim"
generics = "-g G_BAUD=9600"

[options]
global = ["-M", "32m"]
elaboration = ["--jit"]
simulation = ["--stats"]
runtime = ["--stop-time=1ms"]
wave_format = "vcd"
"#;

#[test]
fn test_load_full_project() {
    let dir = TempDir::new().unwrap();
    let path = write_project(&dir, FULL_PROJECT);

    let config = ProjectConfig::load(&path).unwrap();

    assert_eq!(config.name, "uart");
    assert_eq!(config.libraries.len(), 1);
    let library = &config.libraries[0];
    assert_eq!(library.name, "uart_lib");
    assert_eq!(library.files.len(), 3);
    assert_eq!(library.files[0].path(), "src/uart_pkg.vhd");
    assert_eq!(library.files[0].version(), None);
    assert_eq!(library.files[1].version(), Some("1993"));
    assert_eq!(library.files[1].compile_options(), ["--relaxed".to_string()]);

    let test = &config.tests[0];
    assert_eq!(test.name, "tb_uart");
    assert_eq!(test.architecture, "sim");
    assert_eq!(test.kind, TestKind::Vhdl);
    assert_eq!(test.generics.as_deref(), Some("-g G_BAUD=9600"));

    assert_eq!(config.options.global, ["-M".to_string(), "32m".to_string()]);
    assert_eq!(config.options.wave_format, "vcd");
    assert!(config.options.simulator_path.is_none());
}

#[test]
fn test_minimal_project() {
    let dir = TempDir::new().unwrap();
    let path = write_project(
        &dir,
        r#"
[[library]]
name = "work"
files = ["tb.vhd"]
"#,
    );

    let config = ProjectConfig::load(&path).unwrap();
    assert!(config.tests.is_empty());
    assert_eq!(config.options.wave_format, "fst");
}

#[test]
fn test_unknown_field_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_project(
        &dir,
        r#"
surprise = true
"#,
    );

    assert!(matches!(
        ProjectConfig::load(&path),
        Err(ProjectError::Parse { .. })
    ));
}

#[test]
fn test_missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");
    assert!(matches!(
        ProjectConfig::load(&path),
        Err(ProjectError::Read { .. })
    ));
}

#[test]
fn test_test_with_unknown_library_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_project(
        &dir,
        r#"
[[library]]
name = "work"
files = ["tb.vhd"]

[[test]]
name = "tb"
library = "other"
testbench = "tb.vhd"
architecture = "rtl"
"#,
    );

    match ProjectConfig::load(&path) {
        Err(ProjectError::UnknownLibrary { test, library }) => {
            assert_eq!(test, "tb");
            assert_eq!(library, "other");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_testbench_must_be_a_library_file() {
    let dir = TempDir::new().unwrap();
    let path = write_project(
        &dir,
        r#"
[[library]]
name = "work"
files = ["a.vhd"]

[[test]]
name = "tb"
library = "work"
testbench = "tb.vhd"
architecture = "rtl"
"#,
    );

    assert!(matches!(
        ProjectConfig::load(&path),
        Err(ProjectError::UnknownTestbench { .. })
    ));
}

#[test]
fn test_per_test_output_dir() {
    let dir = TempDir::new().unwrap();
    let path = write_project(
        &dir,
        r#"
[[library]]
name = "work"
files = ["tb.vhd"]

[[test]]
name = "tb"
library = "work"
testbench = "tb.vhd"
architecture = "rtl"
output = "runs/tb_nightly"
"#,
    );

    let config = ProjectConfig::load(&path).unwrap();
    assert_eq!(config.tests[0].output.as_deref(), Some("runs/tb_nightly"));
}

#[test]
fn test_output_dir_defaults_to_none() {
    let dir = TempDir::new().unwrap();
    let path = write_project(
        &dir,
        r#"
[[library]]
name = "work"
files = ["tb.vhd"]

[[test]]
name = "tb"
library = "work"
testbench = "tb.vhd"
architecture = "rtl"
"#,
    );

    let config = ProjectConfig::load(&path).unwrap();
    assert!(config.tests[0].output.is_none());
}

#[test]
fn test_verilog_test_kind() {
    let dir = TempDir::new().unwrap();
    let path = write_project(
        &dir,
        r#"
[[library]]
name = "work"
files = ["tb.v"]

[[test]]
name = "tb"
library = "work"
testbench = "tb.v"
architecture = "rtl"
kind = "verilog"
"#,
    );

    let config = ProjectConfig::load(&path).unwrap();
    assert_eq!(config.tests[0].kind, TestKind::Verilog);
    assert_eq!(
        LanguageKind::from(config.tests[0].kind),
        LanguageKind::Verilog
    );
}
