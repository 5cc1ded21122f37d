//! Drives one pass of the usage pipeline: fetch, join, filter, sort, render.

use std::io::{self, Write as _};
use std::time::Duration;

use thiserror::Error;

use resource_usage_core::{
    calculate_cluster_usage, filter_pod_usages, sort_pod_usages, FilterOptions, ResourceField,
};
use resource_usage_kubeapi::{KubeApi, KubeApiError};
use resource_usage_metrics::quantity::QuantityParseError;

use crate::cli::{Cli, ValidationError};
use crate::output::{Colorizer, OutputFormat, RenderError, Renderer, UnitFormatter};

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to connect to cluster")]
    Connect(#[source] kube::Error),
    #[error(transparent)]
    Kube(#[from] KubeApiError),
    #[error(transparent)]
    Quantity(#[from] QuantityParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub(crate) async fn run(cli: Cli) -> Result<(), AppError> {
    cli.validate()?;
    let kubeapi = KubeApi::new().await.map_err(AppError::Connect)?;
    if cli.watch {
        watch_loop(&kubeapi, &cli).await
    } else {
        run_once(&kubeapi, &cli).await
    }
}

/// One full pipeline pass. Each invocation starts from freshly fetched
/// collections; nothing is carried over between passes.
async fn run_once(kubeapi: &KubeApi, cli: &Cli) -> Result<(), AppError> {
    let namespace = cli.namespace.as_deref();
    let metrics = kubeapi.list_pod_metrics(namespace).await?;
    let pods = kubeapi.list_pods(namespace, cli.selector.as_deref()).await?;

    let usages = calculate_cluster_usage(&metrics, &pods)?;
    tracing::debug!(
        metrics = metrics.len(),
        pods = pods.len(),
        matched = usages.len(),
        "computed cluster usage"
    );

    let field = match cli.sort {
        Some(sort) => sort.into(),
        None => ResourceField::default(),
    };
    let options = FilterOptions {
        above: cli.above,
        below: cli.below,
        no_limits: cli.no_limits,
        field,
    };
    let mut usages = filter_pod_usages(usages, &options);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if usages.is_empty() {
        writeln!(out, "No pods found matching the criteria")?;
        return Ok(());
    }

    if let Some(sort) = cli.sort {
        sort_pod_usages(&mut usages, sort.into(), cli.asc);
    }

    let renderer = Renderer::new(
        OutputFormat::from_name(&cli.output),
        Colorizer::new(cli.color),
        UnitFormatter::new(cli.unit),
    );
    renderer.render(&mut out, &usages)?;
    Ok(())
}

/// Re-runs the pipeline on a fixed interval until Ctrl-C. Cancellation is
/// only observed between ticks, never mid-render.
async fn watch_loop(kubeapi: &KubeApi, cli: &Cli) -> Result<(), AppError> {
    let mut ticker = tokio::time::interval(Duration::from_secs(cli.interval));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                clear_screen()?;
                run_once(kubeapi, cli).await?;
            }
            _ = tokio::signal::ctrl_c() => {
                return Ok(());
            }
        }
    }
}

fn clear_screen() -> io::Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "\x1b[2J\x1b[H")?;
    out.flush()
}
