//! Scenario outcomes are logged inside the scenario span.

use std::io;
use std::sync::{Arc, Mutex};

use order_harness::{scenario, Scenario};

use crate::support::{short_wait, FakeConfig, FakeOrderService};

/// Collects formatted log output.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .with_writer(move || writer.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}

#[tokio::test]
async fn failed_scenario_logs_error_in_its_span() {
    let (logs, _guard) = capture();
    let service = FakeOrderService::start(FakeConfig {
        max_credits: 1_000,
        ..FakeConfig::default()
    })
    .await;
    let mut harness = service.harness(short_wait());

    harness
        .run_all(&scenario::default_sequence())
        .await
        .unwrap_err();

    let output = logs.contents();
    let failed = output
        .lines()
        .find(|line| line.contains("scenario failed"))
        .expect("no error event for the failed scenario");
    assert!(failed.contains("ERROR"), "{failed}");
    assert!(
        failed.contains(Scenario::insufficient_credits().name),
        "{failed}"
    );
    assert!(failed.contains("order field `status`"), "{failed}");
}

#[tokio::test]
async fn passing_scenario_logs_no_error() {
    let (logs, _guard) = capture();
    let service = FakeOrderService::with_defaults().await;
    let mut harness = service.harness(short_wait());

    harness.test_create_order_baseline().await.unwrap();

    let output = logs.contents();
    assert!(output.contains("scenario passed"), "{output}");
    assert!(!output.contains("scenario failed"), "{output}");
}
