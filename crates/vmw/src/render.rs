use clap::ValueEnum;
use serde::Serialize;
use vmw_cli::Color;

use crate::command::Cli;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::upper_case_acronyms)]
pub(crate) enum Output {
    JSON,
    YAML,
    None,
}

pub enum CommandOutput {
    Plain(String),
    Object(Box<dyn erased_serde::Serialize>),
}
pub type CommandResult = color_eyre::eyre::Result<CommandOutput>;

impl CommandOutput {
    pub fn object<T: Serialize + 'static>(value: T) -> Self {
        CommandOutput::Object(Box::new(value))
    }
}

impl From<&str> for CommandOutput {
    fn from(text: &str) -> Self {
        CommandOutput::Plain(text.to_owned())
    }
}
impl From<String> for CommandOutput {
    fn from(text: String) -> Self {
        CommandOutput::Plain(text)
    }
}
impl From<()> for CommandOutput {
    fn from(_: ()) -> Self {
        CommandOutput::Plain(String::new())
    }
}

pub struct RenderConfig {
    pub output: Output,
    pub color: Color,
    pub quiet: bool,
}

impl RenderConfig {
    pub fn new(cli: &Cli) -> Self {
        Self {
            output: cli.output,
            color: cli.color,
            quiet: cli.quiet,
        }
    }

    pub fn render_result(&self, result: CommandResult) -> color_eyre::eyre::Result<()> {
        // Errors are passed through to the caller, and rendered by color-eyre
        let output = result?;

        if self.quiet || self.output == Output::None {
            return Ok(());
        }

        match output {
            CommandOutput::Plain(text) if text.is_empty() => {}
            CommandOutput::Plain(text) => println!("{}", text),
            CommandOutput::Object(obj) => {
                let (language, data) = self.serialize(&*obj)?;
                pretty_print(language, &data, self.color)?;
            }
        }
        Ok(())
    }

    fn serialize(
        &self,
        obj: &dyn erased_serde::Serialize,
    ) -> color_eyre::eyre::Result<(&'static str, String)> {
        Ok(match self.output {
            Output::YAML => ("yaml", serde_yaml::to_string(obj)?),
            // The YAML serialization ends with a newline, so we do the same here for consistency
            Output::JSON | Output::None => ("json", serde_json::to_string_pretty(obj)? + "\n"),
        })
    }
}

fn pretty_print(language: &str, data: &str, color: Color) -> color_eyre::eyre::Result<()> {
    if color.is_enabled() {
        bat::PrettyPrinter::new()
            .input_from_bytes(data.as_bytes())
            .language(language)
            .print()
            .map_err(|e| color_eyre::eyre::eyre!("Failed to print output: {e}"))?;
    } else {
        print!("{}", data);
    }
    Ok(())
}
