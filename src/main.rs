use std::process::ExitCode;

use order_harness::{scenario, HarnessConfig, OrderHarness};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("order_harness=info")),
        )
        .init();

    let config = match HarnessConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(base_url = %config.base_url, wait = ?config.wait, "starting order scenarios");

    let mut harness = match OrderHarness::new(config) {
        Ok(harness) => harness,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match harness.run_all(&scenario::default_sequence()).await {
        Ok(passed) => {
            info!(passed, "all scenarios passed");
            ExitCode::SUCCESS
        }
        Err(failure) => {
            error!("{}", failure);
            ExitCode::FAILURE
        }
    }
}
