#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;

use assert_fs::prelude::*;
use assert_fs::TempDir;

use fsops::permissions::{calculate, to_bits, Flag};
use fsops::{change_mode, is_executable, make_directory};

// Drive chmod with a calculated digit-wise mode, end to end.
#[test]
fn calculated_mode_applies_through_change_mode() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let file = tmp.child("config.toml");
    file.touch()?;

    let mode = calculate(
        &[Flag::Read, Flag::Write],
        &[Flag::Read],
        &[Flag::None],
    );
    assert_eq!(mode, 640);

    change_mode(file.path(), to_bits(mode))?;
    let bits = fs::metadata(file.path())?.permissions().mode();
    assert_eq!(bits & 0o777, 0o640);

    Ok(())
}

#[test]
fn execute_flag_makes_file_executable() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let script = tmp.child("run.sh");
    script.write_str("#!/bin/sh\n")?;

    let plain = calculate(&[Flag::Read, Flag::Write], &[Flag::Read], &[Flag::Read]);
    change_mode(script.path(), to_bits(plain))?;
    assert!(!is_executable(script.path()));

    let exec = calculate(
        &[Flag::Read, Flag::Write, Flag::Execute],
        &[Flag::Read, Flag::Execute],
        &[Flag::Read, Flag::Execute],
    );
    assert_eq!(exec, 755);
    change_mode(script.path(), to_bits(exec))?;
    assert!(is_executable(script.path()));

    Ok(())
}

#[test]
fn make_directory_with_calculated_mode() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let dir = tmp.path().join("private");

    let mode = calculate(
        &[Flag::Read, Flag::Write, Flag::Execute],
        &[Flag::None],
        &[Flag::None],
    );
    assert_eq!(mode, 700);
    make_directory(&dir, to_bits(mode), false)?;

    let bits = fs::metadata(&dir)?.permissions().mode();
    // umask may clear bits but never adds them.
    assert_eq!(bits & 0o777 & !0o700, 0);

    Ok(())
}
