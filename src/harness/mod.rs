//! The order test harness.
//!
//! `OrderHarness` owns the client, the wait strategy and the id counters.
//! A scenario is create → wait → get → verify → advance ids; a failed check
//! returns early and leaves the ids where they were.
//!
//! ## Example
//!
//! ```ignore
//! use order_harness::{scenario, HarnessConfig, OrderHarness};
//!
//! let mut harness = OrderHarness::new(HarnessConfig::from_env()?)?;
//! harness.run_all(&scenario::default_sequence()).await?;
//! ```

mod ids;
mod verify;

pub use ids::OrderIds;
pub use verify::verify_order_information;

use std::time::Duration;

use tokio::time::{sleep, Instant};
use tracing::{debug, error, info, info_span, Instrument};

use crate::client::OrderClient;
use crate::config::{HarnessConfig, WaitStrategy};
use crate::error::{HarnessError, ScenarioFailure};
use crate::order::{CreateOrderResponse, ExpectedOrder, FaultFlags, Order, OrderStatus};
use crate::scenario::Scenario;

pub struct OrderHarness {
    client: OrderClient,
    wait: WaitStrategy,
    ids: OrderIds,
}

impl OrderHarness {
    pub fn new(config: HarnessConfig) -> Result<Self, HarnessError> {
        let client = OrderClient::new(config.base_url)?;
        Ok(Self::with_client(client, config.wait))
    }

    pub fn with_client(client: OrderClient, wait: WaitStrategy) -> Self {
        Self {
            client,
            wait,
            ids: OrderIds::new(),
        }
    }

    /// Override the starting ids.
    pub fn with_ids(mut self, ids: OrderIds) -> Self {
        self.ids = ids;
        self
    }

    /// The ids the next scenario expects.
    pub fn ids(&self) -> OrderIds {
        self.ids
    }

    pub fn client(&self) -> &OrderClient {
        &self.client
    }

    pub async fn create_order(
        &self,
        num_tokens: u64,
        faults: FaultFlags,
    ) -> Result<CreateOrderResponse, HarnessError> {
        self.client.create_order(num_tokens, faults).await
    }

    pub async fn get_order(&self, order_id: u64) -> Result<Order, HarnessError> {
        self.client.get_order(order_id).await
    }

    /// Create an order, wait for it to be processed, read it back and check
    /// it. The ids advance only if every check passes.
    pub async fn test_create_order(
        &mut self,
        num_tokens: u64,
        expected_status: OrderStatus,
        expected_status_message: &str,
        faults: FaultFlags,
    ) -> Result<Order, HarnessError> {
        self.create_order(num_tokens, faults).await?;

        let order = self.wait_for_order(self.ids.order_id).await?;

        let expected = ExpectedOrder {
            id: self.ids.order_id,
            user_id: self.ids.user_id,
            num_tokens,
            status: expected_status,
            status_message: expected_status_message.to_string(),
        };
        verify_order_information(&order, &expected)?;

        self.ids.advance();
        Ok(order)
    }

    async fn wait_for_order(&self, order_id: u64) -> Result<Order, HarnessError> {
        match self.wait {
            WaitStrategy::FixedDelay(delay) => {
                sleep(delay).await;
                self.get_order(order_id).await
            }
            WaitStrategy::Poll { interval, timeout } => {
                self.poll_until_terminal(order_id, interval, timeout).await
            }
        }
    }

    async fn poll_until_terminal(
        &self,
        order_id: u64,
        interval: Duration,
        timeout: Duration,
    ) -> Result<Order, HarnessError> {
        let started = Instant::now();
        let mut last_status = None;

        loop {
            match self.get_order(order_id).await {
                Ok(order) if order.is_terminal() => return Ok(order),
                Ok(order) => {
                    debug!(order_id, status = %order.status, "order still processing");
                    last_status = Some(order.status);
                }
                // Not visible yet.
                Err(HarnessError::Decode { .. }) => {}
                Err(e) => return Err(e),
            }

            let waited = started.elapsed();
            if waited >= timeout {
                return Err(HarnessError::PollTimeout {
                    order_id,
                    waited,
                    last_status,
                });
            }
            sleep(interval.min(timeout - waited)).await;
        }
    }

    /// Run one scenario inside a span carrying its name and ids.
    pub async fn run_scenario(&mut self, scenario: &Scenario) -> Result<Order, HarnessError> {
        let span = info_span!(
            "scenario",
            scenario = scenario.name,
            user_id = self.ids.user_id,
            order_id = self.ids.order_id
        );
        let result = self
            .test_create_order(
                scenario.num_tokens,
                scenario.expected_status,
                scenario.expected_status_message,
                scenario.faults,
            )
            .instrument(span.clone())
            .await;
        span.in_scope(|| match &result {
            Ok(order) => info!(status = %order.status, "scenario passed"),
            Err(e) => error!(error = %e, "scenario failed"),
        });
        result
    }

    /// Run `scenarios` in order, stopping at the first failure.
    ///
    /// Returns the number of scenarios that passed.
    pub async fn run_all(&mut self, scenarios: &[Scenario]) -> Result<usize, ScenarioFailure> {
        for (index, scenario) in scenarios.iter().enumerate() {
            if let Err(error) = self.run_scenario(scenario).await {
                return Err(ScenarioFailure {
                    scenario: scenario.name,
                    position: index + 1,
                    error,
                });
            }
        }
        Ok(scenarios.len())
    }

    pub async fn test_create_order_baseline(&mut self) -> Result<Order, HarnessError> {
        self.run_scenario(&Scenario::baseline()).await
    }

    pub async fn test_create_order_with_insufficient_credits(
        &mut self,
    ) -> Result<Order, HarnessError> {
        self.run_scenario(&Scenario::insufficient_credits()).await
    }

    pub async fn test_create_order_with_insufficient_tokens(
        &mut self,
    ) -> Result<Order, HarnessError> {
        self.run_scenario(&Scenario::insufficient_tokens()).await
    }

    pub async fn test_create_order_with_order_service_failure(
        &mut self,
    ) -> Result<Order, HarnessError> {
        self.run_scenario(&Scenario::order_service_failure()).await
    }

    pub async fn test_create_order_with_payment_service_failure(
        &mut self,
    ) -> Result<Order, HarnessError> {
        self.run_scenario(&Scenario::payment_service_failure()).await
    }

    pub async fn test_create_order_with_inventory_service_failure(
        &mut self,
    ) -> Result<Order, HarnessError> {
        self.run_scenario(&Scenario::inventory_service_failure()).await
    }

    pub async fn test_create_order_with_delivery_service_failure(
        &mut self,
    ) -> Result<Order, HarnessError> {
        self.run_scenario(&Scenario::delivery_service_failure()).await
    }
}
