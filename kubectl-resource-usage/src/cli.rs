use clap::{Parser, ValueEnum};
use thiserror::Error;

use resource_usage_core::ResourceField;

use crate::output::{ColorMode, Unit};

const EXAMPLES: &str = "\
Examples:
  # View resource usage for all namespaces
  kubectl resource-usage

  # Filter by namespace and label
  kubectl resource-usage -n payment -l app=api

  # Sort by memory limit usage, descending
  kubectl resource-usage --sort memory

  # Show pods with memory usage >= 80% of their limits
  kubectl resource-usage --above 80

  # Show pods without limits configured
  kubectl resource-usage --no-limits

  # Structured output
  kubectl resource-usage -o json
  kubectl resource-usage -o yaml

  # Refresh the table every 5 seconds
  kubectl resource-usage --watch --interval 5";

/// Display pod CPU/memory usage relative to requests and limits.
///
/// Unlike `kubectl top pods`, this plugin reports usage as a percentage of
/// the declared requests and limits, making over- and under-provisioned pods
/// easy to spot.
#[derive(Debug, Parser)]
#[command(name = "kubectl-resource_usage", version, after_help = EXAMPLES)]
pub(crate) struct Cli {
    /// Namespace to query (all namespaces when unset)
    #[arg(long, short = 'n')]
    pub(crate) namespace: Option<String>,

    /// Label selector, e.g. app=api
    #[arg(long, short = 'l')]
    pub(crate) selector: Option<String>,

    /// Sort by field
    #[arg(long, value_enum)]
    pub(crate) sort: Option<SortField>,

    /// Sort in ascending order (default: descending)
    #[arg(long)]
    pub(crate) asc: bool,

    /// Output format: table, json, yaml, or wide
    #[arg(long, short = 'o', default_value = "table")]
    pub(crate) output: String,

    /// Show pods with limit usage >= N% (uses --sort field, default: memory)
    #[arg(long, value_name = "N")]
    pub(crate) above: Option<i64>,

    /// Show pods with limit usage <= N% (uses --sort field, default: memory)
    #[arg(long, value_name = "N")]
    pub(crate) below: Option<i64>,

    /// Show pods without CPU or memory limits configured
    #[arg(long)]
    pub(crate) no_limits: bool,

    /// When to colorize percentages
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub(crate) color: ColorMode,

    /// Unit for CPU/memory quantities
    #[arg(long, value_enum, default_value_t = Unit::Auto)]
    pub(crate) unit: Unit,

    /// Re-run and redraw on a fixed interval
    #[arg(long)]
    pub(crate) watch: bool,

    /// Watch refresh interval in seconds
    #[arg(long, default_value_t = 2)]
    pub(crate) interval: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortField {
    Cpu,
    Memory,
}

impl From<SortField> for ResourceField {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Cpu => Self::Cpu,
            SortField::Memory => Self::Memory,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ValidationError {
    #[error("invalid output format: {0} (must be 'table', 'json', 'yaml', or 'wide')")]
    Output(String),
    #[error("invalid --above value: {0} (must be between 0 and 100)")]
    Above(i64),
    #[error("invalid --below value: {0} (must be between 0 and 100)")]
    Below(i64),
    #[error("--above ({above}) cannot be greater than --below ({below})")]
    AboveExceedsBelow { above: i64, below: i64 },
    #[error("--no-limits cannot be combined with --above or --below")]
    NoLimitsWithThreshold,
    #[error("--watch is not supported with json or yaml output")]
    WatchStructured,
    #[error("invalid --interval value: {0} (must be at least 1 second)")]
    Interval(u64),
}

impl Cli {
    /// Cross-flag validation, run before the pipeline ever starts.
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if !matches!(self.output.as_str(), "table" | "json" | "yaml" | "wide") {
            return Err(ValidationError::Output(self.output.clone()));
        }
        if let Some(above) = self.above {
            if !(0..=100).contains(&above) {
                return Err(ValidationError::Above(above));
            }
        }
        if let Some(below) = self.below {
            if !(0..=100).contains(&below) {
                return Err(ValidationError::Below(below));
            }
        }
        if let (Some(above), Some(below)) = (self.above, self.below) {
            if above > below {
                return Err(ValidationError::AboveExceedsBelow { above, below });
            }
        }
        if self.no_limits && (self.above.is_some() || self.below.is_some()) {
            return Err(ValidationError::NoLimitsWithThreshold);
        }
        if self.watch && matches!(self.output.as_str(), "json" | "yaml") {
            return Err(ValidationError::WatchStructured);
        }
        if self.interval < 1 {
            return Err(ValidationError::Interval(self.interval));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("kubectl-resource_usage").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_pass_validation() {
        assert_eq!(cli(&[]).validate(), Ok(()));
    }

    #[test]
    fn rejects_unknown_output() {
        let err = cli(&["-o", "csv"]).validate().unwrap_err();
        assert_eq!(err, ValidationError::Output("csv".to_string()));
    }

    #[test]
    fn rejects_thresholds_out_of_range() {
        assert_eq!(
            cli(&["--above", "101"]).validate(),
            Err(ValidationError::Above(101))
        );
        assert_eq!(
            cli(&["--below=-1"]).validate(),
            Err(ValidationError::Below(-1))
        );
    }

    #[test]
    fn rejects_inverted_band() {
        assert_eq!(
            cli(&["--above", "80", "--below", "50"]).validate(),
            Err(ValidationError::AboveExceedsBelow {
                above: 80,
                below: 50
            })
        );
    }

    #[test]
    fn rejects_no_limits_with_threshold() {
        assert_eq!(
            cli(&["--no-limits", "--above", "80"]).validate(),
            Err(ValidationError::NoLimitsWithThreshold)
        );
    }

    #[test]
    fn rejects_watch_with_structured_output() {
        assert_eq!(
            cli(&["--watch", "-o", "json"]).validate(),
            Err(ValidationError::WatchStructured)
        );
        assert_eq!(cli(&["--watch", "-o", "wide"]).validate(), Ok(()));
    }

    #[test]
    fn watch_is_long_only() {
        assert!(Cli::try_parse_from(["kubectl-resource_usage", "-w"]).is_err());
        assert!(cli(&["--watch"]).watch);
    }

    #[test]
    fn rejects_subsecond_interval() {
        assert_eq!(
            cli(&["--watch", "--interval", "0"]).validate(),
            Err(ValidationError::Interval(0))
        );
    }
}
