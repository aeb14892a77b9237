use std::process::{Command, Output};

use assert_cmd::cargo::CommandCargoExt;
use embed::text::{GCC_HELP_TEXT, GENERIC_HELP_TEXT, VERSION_TEXT};

const PLUGIN: &str = "libembed_gcc";

struct Invocation {
    output: Output,
}

impl Invocation {
    fn new(driver_args: &[&str], plugin_args: &[&str]) -> Self {
        let host_args: Vec<String> = plugin_args
            .iter()
            .map(|arg| format!("-fplugin-arg-{PLUGIN}-{arg}"))
            .collect();
        let host_args: Vec<&str> = host_args.iter().map(String::as_str).collect();
        Self::raw(driver_args, &host_args)
    }

    fn raw(driver_args: &[&str], host_args: &[&str]) -> Self {
        let output = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .args(driver_args)
            .arg("--")
            .args(host_args)
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run plugin driver");

        Self { output }
    }

    fn status(&self) -> i32 {
        self.output.status.code().expect("No exit code available")
    }

    fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    fn assert_stderr(&self, status: i32, expected: &str) {
        assert!(
            self.output.stdout.is_empty(),
            "Nothing should go to stdout, got {:?}",
            String::from_utf8_lossy(&self.output.stdout)
        );
        assert_eq!(self.stderr(), expected);
        assert_eq!(self.status(), status);
    }
}

#[test]
fn test_initializes_by_default() {
    let invocation = Invocation::new(&[], &[]);
    invocation.assert_stderr(0, "embed: initializing...\nembed: successfully initialized\n");
}

#[test]
fn test_help() {
    let invocation = Invocation::new(&[], &["help"]);
    invocation.assert_stderr(0, &format!("{GCC_HELP_TEXT}\n"));
}

#[test]
fn test_short_help() {
    let invocation = Invocation::new(&[], &["h", "path=include"]);
    invocation.assert_stderr(0, &format!("{GCC_HELP_TEXT}\n"));
}

#[test]
fn test_version_wins_over_help() {
    let invocation = Invocation::new(&[], &["help", "info", "version"]);
    invocation.assert_stderr(0, &format!("{VERSION_TEXT}\n"));
}

#[test]
fn test_short_v_is_version() {
    let invocation = Invocation::new(&[], &["v"]);
    invocation.assert_stderr(0, &format!("{VERSION_TEXT}\n"));
}

#[test]
fn test_info() {
    let invocation = Invocation::new(
        &[
            "--plugin-path",
            "/usr/lib/gcc/x86_64-linux-gnu/8/plugin/libembed_gcc.so",
            "--host-version",
            "8.2.0",
            "--datestamp",
            "20180726",
            "--devphase",
            "release",
            "--revision",
            "r262995",
        ],
        &["info"],
    );
    assert_eq!(invocation.status(), 0);

    let stderr = invocation.stderr();
    assert!(stderr.starts_with("embed, a Proposal Implementation\n=========="));
    assert!(stderr.contains("Base name: libembed_gcc\n"));
    assert!(
        stderr.contains("Full name: /usr/lib/gcc/x86_64-linux-gnu/8/plugin/libembed_gcc.so\n")
    );
    assert!(stderr.contains("Version: 0.2.0\n"));
    assert!(stderr.contains("Date stamp: 20180726\n"));
    assert!(stderr.contains("Dev phase: release\n"));
    assert!(stderr.contains("Revision: r262995\n"));
    assert!(stderr.contains("The MIT License (MIT)"));
    assert!(!stderr.contains("initializing"));
}

#[test]
fn test_version_mismatch() {
    let invocation = Invocation::new(&["--host-version", "9.1.0"], &["help"]);
    invocation.assert_stderr(1, "This GCC embed plugin is for version 8.2 (host is 9.1.0)\n");
}

#[test]
fn test_other_plugins_arguments_ignored() {
    let invocation = Invocation::raw(
        &[],
        &[
            "-O2",
            "-fplugin-arg-other-help",
            "-fplugin-arg-other-version",
        ],
    );
    invocation.assert_stderr(0, "embed: initializing...\nembed: successfully initialized\n");
}

#[test]
fn test_custom_plugin_name() {
    let invocation = Invocation::raw(
        &["--plugin-name", "std_embed"],
        &["-fplugin-arg-libembed_gcc-version", "-fplugin-arg-std_embed-h"],
    );
    invocation.assert_stderr(0, &format!("{GCC_HELP_TEXT}\n"));
}

#[test]
fn test_malformed_argument_warns() {
    let invocation = Invocation::raw(&[], &["-fplugin-arg-libembed_gcc"]);
    assert_eq!(invocation.status(), 0);

    let stderr = invocation.stderr();
    assert!(stderr.contains("ignoring malformed plugin argument"));
    assert!(stderr.ends_with("embed: initializing...\nembed: successfully initialized\n"));
}

#[test]
fn test_verbose_logs_search_paths() {
    let invocation = Invocation::new(
        &[],
        &["verbose", "path=include;;assets", "local=false"],
    );
    assert_eq!(invocation.status(), 0);

    let stderr = invocation.stderr();
    assert!(stderr.contains("embed: initializing...\n"));
    assert!(stderr.contains("search path"));
    assert!(stderr.contains("path=include"));
    assert!(stderr.contains("path=assets"));
    assert!(!stderr.contains("path=."));
    assert!(stderr.ends_with("embed: successfully initialized\n"));
}

#[test]
fn test_quiet_without_verbose() {
    let invocation = Invocation::new(&[], &["path=include"]);
    assert!(!invocation.stderr().contains("search path"));
}

#[test]
fn test_clang_stub() {
    let invocation = Invocation::new(
        &["--compiler", "clang", "--host-version", "15.0.0"],
        &["help"],
    );
    invocation.assert_stderr(0, &format!("{GENERIC_HELP_TEXT}\n"));
}
