//! Tests for the vmw CLI help functionality

use std::process::Command;

#[test]
fn test_no_args_shows_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_vmw"))
        .output()
        .expect("Failed to execute vmw command");

    assert!(output.status.success(), "Command should exit successfully");

    let stdout = String::from_utf8_lossy(&output.stdout);

    for section in ["Usage:", "Commands:", "Options:"] {
        assert!(
            stdout.contains(section),
            "Output should contain '{}': {}",
            section,
            stdout
        );
    }
}

#[test]
fn test_help_lists_catalog_commands() {
    let output = Command::new(env!("CARGO_BIN_EXE_vmw"))
        .arg("--help")
        .output()
        .expect("Failed to execute vmw command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    for command in ["login", "products", "dlg-details", "download", "completion"] {
        assert!(
            stdout.contains(command),
            "Help should list '{}': {}",
            command,
            stdout
        );
    }
}
