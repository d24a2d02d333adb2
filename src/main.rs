pub mod bench;
pub mod config;
pub mod fib;
pub mod report;

use config::Config;
use report::Report;

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> anyhow::Result<()> {
    // stdout carries the progress lines only
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let config = Config::from_env()?;
    tracing::info!(n = config.n, output = %config.output.display(), "start");

    let outcome = bench::run(config.n, &mut std::io::stdout().lock())?;
    tracing::info!("computed {} values in {:?}", outcome.sequence.len(), outcome.elapsed);

    Report::new(config.n, outcome).write_to(&config.output)?;
    tracing::info!("result written to {}", config.output.display());
    Ok(())
}
