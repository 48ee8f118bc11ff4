use clap::ValueEnum;

/// When to colorize output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Color {
    /// Never.
    No,
    /// Always, even when stdout is not a terminal.
    Yes,
    /// When stdout is a terminal that supports it.
    Auto,
}

impl Color {
    /// Resolves [`Color::Auto`] against the terminal stdout is attached to.
    pub fn is_enabled(self) -> bool {
        match self {
            Color::No => false,
            Color::Yes => true,
            Color::Auto => supports_color::on(supports_color::Stream::Stdout).is_some(),
        }
    }
}

/// Installs the `color-eyre` error report handler, colored or plain according to `color`.
pub fn install_color_eyre(color: Color) -> color_eyre::Result<()> {
    if color.is_enabled() {
        color_eyre::install()
    } else {
        // An empty theme disables coloring of reports and panics
        color_eyre::config::HookBuilder::new()
            .theme(color_eyre::config::Theme::new())
            .install()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_choices() {
        assert!(Color::Yes.is_enabled());
        assert!(!Color::No.is_enabled());
    }

    #[test]
    fn test_value_names() {
        assert_eq!(Color::from_str("auto", true).unwrap(), Color::Auto);
        assert_eq!(Color::from_str("no", true).unwrap(), Color::No);
    }
}
