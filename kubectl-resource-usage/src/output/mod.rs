//! Rendering of computed pod usages across the four output encodings. The
//! table and wide encodings share the truncation, `N/A`, color, and unit
//! conventions; json and yaml share one structured shape.

use std::io::Write;

use thiserror::Error;

use resource_usage_core::PodUsage;

mod color;
mod json;
mod structured;
mod table;
mod units;
mod wide;
mod yaml;

pub(crate) use color::{ColorMode, Colorizer};
pub(crate) use units::{Unit, UnitFormatter};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Wide,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Maps a format name to a variant; anything unrecognized gets Table.
    pub(crate) fn from_name(name: &str) -> Self {
        match name {
            "json" => Self::Json,
            "yaml" => Self::Yaml,
            "wide" => Self::Wide,
            _ => Self::Table,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum RenderError {
    #[error("failed to write output")]
    Io(#[from] std::io::Error),
    #[error("failed to encode json")]
    Json(#[from] serde_json::Error),
    #[error("failed to encode yaml")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug)]
pub(crate) struct Renderer {
    format: OutputFormat,
    colorizer: Colorizer,
    units: UnitFormatter,
}

impl Renderer {
    pub(crate) fn new(format: OutputFormat, colorizer: Colorizer, units: UnitFormatter) -> Self {
        Self {
            format,
            colorizer,
            units,
        }
    }

    /// Writes a complete rendering of `pods` to `out`. Only write failures
    /// propagate; partial output may have been written by then.
    pub(crate) fn render(
        &self,
        out: &mut impl Write,
        pods: &[PodUsage],
    ) -> Result<(), RenderError> {
        match self.format {
            OutputFormat::Table => self.render_table(out, pods)?,
            OutputFormat::Wide => self.render_wide(out, pods)?,
            OutputFormat::Json => json::render(out, pods)?,
            OutputFormat::Yaml => yaml::render(out, pods)?,
        }
        Ok(())
    }
}

/// Truncates to `max` with a trailing `...` so the result always fits the
/// column exactly.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut result: String = text.chars().take(max - 3).collect();
    result.push_str("...");
    result
}
