use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use frontdesk_engine::StatusColor;

use crate::args::OutputFormat;

/// Resolved output options for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct OutputOpts {
    pub format: OutputFormat,
    pub color: bool,
}

impl OutputOpts {
    pub fn new(format: OutputFormat, no_color: bool) -> Self {
        let color =
            format == OutputFormat::Plain && !no_color && std::io::stdout().is_terminal();
        Self { format, color }
    }

    pub fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

/// Apply an abstract status color as ANSI, if color is enabled.
///
/// Callers pad BEFORE painting so the escape codes never affect column
/// alignment.
pub fn paint(text: &str, color: StatusColor, enable: bool) -> String {
    if !enable {
        return text.to_string();
    }
    match color {
        StatusColor::Green => text.green().to_string(),
        StatusColor::Amber => text.yellow().to_string(),
        StatusColor::Red => text.red().to_string(),
        StatusColor::Blue => text.blue().to_string(),
        StatusColor::Gray => text.bright_black().to_string(),
        StatusColor::Neutral => text.to_string(),
    }
}

/// Dim styling for secondary text (ids, separators).
pub fn dim(text: &str, enable: bool) -> String {
    if enable {
        text.bright_black().to_string()
    } else {
        text.to_string()
    }
}

/// Highlight styling for the "today" column.
pub fn highlight(text: &str, enable: bool) -> String {
    if enable {
        text.cyan().bold().to_string()
    } else {
        text.to_string()
    }
}
