use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::args::CliArgs;
use crate::config::load_request_spec;
use crate::error::AppResult;
use crate::http::{HttpExecutor, RequestExecutor};
use crate::load::{LoadOrchestrator, LoadTestConfig};

use super::progress::spawn_progress_renderer;
use super::summary::{execution_lines, print_lines, report_lines};

/// Sends the baseline request, then runs the load phase when more than one
/// iteration was requested.
///
/// # Errors
///
/// Returns an error when the config cannot be loaded or the baseline
/// request fails in any way. Load phase request failures are not errors.
pub async fn run_local(args: &CliArgs) -> AppResult<()> {
    let spec = load_request_spec(Path::new(&args.config))?;
    let executor = Arc::new(HttpExecutor::new()?);

    let baseline = executor.execute(&spec).await?;
    info!(
        "Baseline {} {} -> {}",
        spec.method(),
        spec.url(),
        baseline.status
    );
    print_lines(&execution_lines(&baseline));

    let config = LoadTestConfig::from(args);
    if !config.is_load_test() {
        return Ok(());
    }

    println!("Running stress test...");
    let orchestrator = LoadOrchestrator::new(executor, Arc::new(spec));
    let renderer =
        spawn_progress_renderer(orchestrator.tracker(), config.duration(), args.no_color);

    let report = match orchestrator.run(&config).await {
        Ok(report) => report,
        Err(err) => {
            renderer.abort();
            return Err(err);
        }
    };
    renderer.await?;

    print_lines(&report_lines(&report));
    Ok(())
}
