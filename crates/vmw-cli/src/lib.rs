#![doc = include_str!("../README.md")]

mod color;

pub use color::{install_color_eyre, Color};
use inquire::{error::InquireResult, Password, Text};

/// Prompt the user for input if the value is None
///
/// Typically used when the user can provide a value via CLI or prompt
pub fn text_prompt_when_none(prompt: &str, val: Option<String>) -> InquireResult<String> {
    Ok(if let Some(val) = val {
        val
    } else {
        Text::new(prompt).prompt()?
    })
}

/// Prompt the user for a secret without echoing it if the value is None
pub fn password_prompt_when_none(prompt: &str, val: Option<String>) -> InquireResult<String> {
    Ok(if let Some(val) = val {
        val
    } else {
        Password::new(prompt).without_confirmation().prompt()?
    })
}
