use std::path::Path;

use color_eyre::eyre::{bail, Result, WrapErr};
use vmw_cli::{password_prompt_when_none, text_prompt_when_none};
use vmw_core::auth::Credentials;

use crate::command::{CredentialArgs, PASSWORD_ENV, USERNAME_ENV};

/// Reads a credentials file: `{ "username": "...", "password": "..." }`.
pub(crate) fn read_credentials_file(path: &Path) -> Result<Credentials> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read credentials file {}", path.display()))?;

    serde_json::from_str(&content)
        .wrap_err_with(|| format!("Invalid credentials file {}", path.display()))
}

/// Resolves the credentials from, in order: the command line or environment, the credentials
/// file, an interactive prompt.
pub(crate) fn resolve_credentials(args: &CredentialArgs, interactive: bool) -> Result<Credentials> {
    let mut username = args.username.clone();
    let mut password = args.password.clone();

    if username.is_none() || password.is_none() {
        if let Some(path) = &args.credentials {
            let file = read_credentials_file(path)?;
            username = username.or_else(|| Some(file.username.clone()));
            password = password.or_else(|| Some(file.password.clone()));
        }
    }

    if !interactive && (username.is_none() || password.is_none()) {
        bail!(
            "Missing credentials: use --username and --password, set {USERNAME_ENV} and \
             {PASSWORD_ENV}, or pass a --credentials file"
        );
    }

    Ok(Credentials::new(
        text_prompt_when_none("Username", username)?,
        password_prompt_when_none("Password", password)?,
    ))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn args(
        username: Option<&str>,
        password: Option<&str>,
        file: Option<&Path>,
    ) -> CredentialArgs {
        CredentialArgs {
            username: username.map(str::to_owned),
            password: password.map(str::to_owned),
            credentials: file.map(Path::to_path_buf),
        }
    }

    fn credentials_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_arguments_take_precedence_over_file() {
        let file = credentials_file(r#"{ "username": "file.user", "password": "file.pass" }"#);

        let credentials =
            resolve_credentials(&args(Some("cli.user"), None, Some(file.path())), false).unwrap();

        assert_eq!(credentials.username, "cli.user");
        assert_eq!(credentials.password, "file.pass");
    }

    #[test]
    fn test_file_is_not_read_when_arguments_complete() {
        let credentials = resolve_credentials(
            &args(
                Some("cli.user"),
                Some("cli.pass"),
                Some(Path::new("/nonexistent/params.json")),
            ),
            false,
        )
        .unwrap();

        assert_eq!(credentials.username, "cli.user");
        assert_eq!(credentials.password, "cli.pass");
    }

    #[test]
    fn test_invalid_file() {
        let file = credentials_file("username=my.username");

        let error = resolve_credentials(&args(None, None, Some(file.path())), false).unwrap_err();

        assert!(error.to_string().contains("Invalid credentials file"));
    }

    #[test]
    fn test_missing_credentials_without_interaction() {
        let error = resolve_credentials(&args(Some("cli.user"), None, None), false).unwrap_err();

        assert!(error.to_string().contains("Missing credentials"));
    }
}
