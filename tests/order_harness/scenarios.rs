//! Scenarios against a well-behaved service.

use order_harness::{scenario, FaultFlags, OrderIds, OrderStatus, Scenario};

use crate::support::{short_wait, FakeConfig, FakeOrderService};

#[tokio::test]
async fn create_order_is_acknowledged() {
    let service = FakeOrderService::with_defaults().await;
    let harness = service.harness(short_wait());

    let response = harness.create_order(5, FaultFlags::none()).await.unwrap();
    assert_eq!(response.message, "Order created");

    let requests = service.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].num_tokens, 5);
    assert!(!requests[0].faults.any());

    // Creating alone never touches the counters.
    assert_eq!(harness.ids(), OrderIds::new());
}

#[tokio::test]
async fn get_order_returns_service_record() {
    let service = FakeOrderService::with_defaults().await;
    let harness = service.harness(short_wait());

    harness.create_order(7, FaultFlags::none()).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let order = harness.get_order(1).await.unwrap();
    assert_eq!(Some(order.clone()), service.order(1));
    assert_eq!(order.num_tokens, 7);
    assert_eq!(order.status, "complete");
}

#[tokio::test]
async fn baseline_order_completes() {
    let service = FakeOrderService::with_defaults().await;
    let mut harness = service.harness(short_wait());

    let order = harness.test_create_order_baseline().await.unwrap();
    assert_eq!(order.id, 1);
    assert_eq!(order.user_id, 1);
    assert_eq!(order.num_tokens, 5);
    assert_eq!(order.status, "complete");
    assert_eq!(order.status_message, "Order complete");
    assert_eq!(harness.ids(), OrderIds::starting_at(2, 2));
}

#[tokio::test]
async fn insufficient_credits_fails_order() {
    let service = FakeOrderService::with_defaults().await;
    let mut harness = service.harness(short_wait());

    let order = harness
        .test_create_order_with_insufficient_credits()
        .await
        .unwrap();
    assert_eq!(order.num_tokens, 101);
    assert_eq!(order.status, "failed");
    assert_eq!(order.status_message, "User has insufficient funds for purchase.");
}

#[tokio::test]
async fn insufficient_tokens_fails_order() {
    // Enough credits that only the token limit rejects the order.
    let service = FakeOrderService::start(FakeConfig {
        max_credits: 5_000,
        ..FakeConfig::default()
    })
    .await;
    let mut harness = service.harness(short_wait());

    let order = harness
        .test_create_order_with_insufficient_tokens()
        .await
        .unwrap();
    assert_eq!(order.num_tokens, 1001);
    assert_eq!(order.status, "failed");
    assert_eq!(order.status_message, "Insufficient tokens to purchase.");
}

#[tokio::test]
async fn injected_faults_fail_with_service_message() {
    let service = FakeOrderService::with_defaults().await;
    let mut harness = service.harness(short_wait());

    let order = harness
        .test_create_order_with_order_service_failure()
        .await
        .unwrap();
    assert_eq!(order.status_message, "Failure in order service!");

    let order = harness
        .test_create_order_with_payment_service_failure()
        .await
        .unwrap();
    assert_eq!(order.status_message, "Failure in payment service!");

    let order = harness
        .test_create_order_with_inventory_service_failure()
        .await
        .unwrap();
    assert_eq!(order.status_message, "Failure in inventory service!");

    let order = harness
        .test_create_order_with_delivery_service_failure()
        .await
        .unwrap();
    assert_eq!(order.status_message, "Failure in delivery service!");

    let requests = service.requests();
    assert!(requests[0].faults.order_fail);
    assert!(requests[1].faults.payment_fail);
    assert!(requests[2].faults.inventory_fail);
    assert!(requests[3].faults.delivery_fail);
    for (i, request) in requests.iter().enumerate() {
        assert_eq!(request.num_tokens, 5);
        let order = service.order(i as u64 + 1).unwrap();
        assert_eq!(order.status, "failed");
        assert_eq!(order.num_tokens, 5);
    }
}

#[tokio::test]
async fn ids_advance_in_lockstep_after_each_scenario() {
    let service = FakeOrderService::with_defaults().await;
    let mut harness = service.harness(short_wait());

    for (index, scenario) in scenario::default_sequence().iter().enumerate() {
        let n = index as u64 + 1;
        assert_eq!(harness.ids(), OrderIds::starting_at(n, n));
        let order = harness.run_scenario(scenario).await.unwrap();
        assert_eq!(order.id, n);
        assert_eq!(order.user_id, n);
        assert_eq!(harness.ids(), OrderIds::starting_at(n + 1, n + 1));
    }
}

#[tokio::test]
async fn default_sequence_passes() {
    let service = FakeOrderService::with_defaults().await;
    let mut harness = service.harness(short_wait());

    let passed = harness
        .run_all(&scenario::default_sequence())
        .await
        .unwrap();
    assert_eq!(passed, 6);
    assert_eq!(harness.ids(), OrderIds::starting_at(7, 7));
    assert_eq!(service.requests().len(), 6);
}

#[tokio::test]
async fn repeated_scenario_gets_new_order_each_time() {
    let service = FakeOrderService::with_defaults().await;
    let mut harness = service.harness(short_wait());

    let first = harness
        .test_create_order(5, OrderStatus::Complete, "Order complete", FaultFlags::none())
        .await
        .unwrap();
    let second = harness
        .test_create_order(5, OrderStatus::Complete, "Order complete", FaultFlags::none())
        .await
        .unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(second.user_id, 2);
}

#[tokio::test]
async fn harness_can_start_from_existing_ids() {
    let service = FakeOrderService::start(FakeConfig {
        first_id: 40,
        ..FakeConfig::default()
    })
    .await;
    let mut harness = service
        .harness(short_wait())
        .with_ids(OrderIds::starting_at(40, 40));

    let order = harness.run_scenario(&Scenario::baseline()).await.unwrap();
    assert_eq!(order.id, 40);
    assert_eq!(harness.ids(), OrderIds::starting_at(41, 41));
}
