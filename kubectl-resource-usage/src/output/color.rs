use std::io::{self, IsTerminal as _};

use clap::ValueEnum;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum ColorMode {
    /// Colorize when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

/// Colors percentage cells by magnitude: >=80 red, 50-79 yellow, <50 green.
/// Absent values render as `N/A` and are never colored.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Colorizer {
    enabled: bool,
}

impl Colorizer {
    pub(crate) fn new(mode: ColorMode) -> Self {
        let enabled = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => io::stdout().is_terminal(),
        };
        Self { enabled }
    }

    /// Right-pads the percentage to `width`, then wraps it in a color marker
    /// when coloring is enabled. Padding happens before wrapping so the ANSI
    /// bytes never count against the column width.
    pub(crate) fn format_percent(&self, percent: Option<i64>, width: usize) -> String {
        let Some(percent) = percent else {
            return format!("{:<width$}", "N/A");
        };
        let text = format!("{percent}%");
        if !self.enabled {
            return format!("{text:<width$}");
        }
        let color = match percent {
            p if p >= 80 => RED,
            p if p >= 50 => YELLOW,
            _ => GREEN,
        };
        format!("{color}{text:<width$}{RESET}")
    }
}
