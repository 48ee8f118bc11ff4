use std::process::Command;

/// Create a new vmw CLI command, isolated from the caller's credentials
pub fn vmw() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_vmw"));
    command
        .env_remove("VMWUSER")
        .env_remove("VMWPASS")
        .env_remove("RUST_LOG")
        .arg("--color")
        .arg("no");
    command
}

/// A vmw command pointed at `server` for both the portal and the identity provider
pub fn vmw_against(server: &wiremock::MockServer) -> Command {
    let mut command = vmw();
    command
        .arg("--portal-url")
        .arg(server.uri())
        .arg("--identity-url")
        .arg(server.uri())
        .arg("--nointeraction");
    command
}
