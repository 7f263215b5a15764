#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["hdlreg"]).unwrap();
    assert_eq!(cli.project, PathBuf::from("hdlreg.toml"));
    assert_eq!(cli.simulator, "nvc");
    assert!(!cli.force);
    assert!(!cli.gui);
    assert!(cli.report.is_none());
    assert_eq!(cli.output, PathBuf::from("hdlreg_output"));
    assert_eq!(cli.log_level, "info");
}

#[test]
fn test_all_flags() {
    let cli = Cli::try_parse_from([
        "hdlreg",
        "-P",
        "proj/sim.toml",
        "--simulator",
        "NVC",
        "--force",
        "--gui",
        "--report",
        "out/results.xml",
        "--output",
        "build",
        "--log-level",
        "debug",
    ])
    .unwrap();
    assert_eq!(cli.project, PathBuf::from("proj/sim.toml"));
    assert_eq!(cli.simulator, "NVC");
    assert!(cli.force);
    assert!(cli.gui);
    assert_eq!(cli.report, Some(PathBuf::from("out/results.xml")));
    assert_eq!(cli.output, PathBuf::from("build"));
    assert_eq!(cli.log_level, "debug");
}

#[test]
fn test_unknown_flag_is_rejected() {
    assert!(Cli::try_parse_from(["hdlreg", "--no-such-flag"]).is_err());
}
