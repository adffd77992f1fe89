use clap::ValueEnum;

/// Whether coloured output is wanted.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Color {
    #[allow(missing_docs)]
    No,
    #[allow(missing_docs)]
    Yes,
    /// Colour when stdout is a terminal that supports it.
    Auto,
}

impl Color {
    #[allow(missing_docs)]
    pub fn is_enabled(self) -> bool {
        match self {
            Color::No => false,
            Color::Yes => true,
            Color::Auto => supports_color::on(supports_color::Stream::Stdout).is_some(),
        }
    }
}

/// Install the `color_eyre` panic and error report handlers, themed according to `color`.
pub fn install_color_eyre(color: Color) -> color_eyre::Result<()> {
    if color.is_enabled() {
        color_eyre::install()
    } else {
        // Use an empty theme to disable the colors
        color_eyre::config::HookBuilder::new()
            .theme(color_eyre::config::Theme::new())
            .install()
    }
}
