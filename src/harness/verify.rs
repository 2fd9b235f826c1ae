use crate::error::HarnessError;
use crate::order::{ExpectedOrder, Order};

/// Check every field of `order` against `expected`.
///
/// Fields are compared in the order id, user_id, num_tokens, status,
/// status_message; the first mismatch is returned.
pub fn verify_order_information(
    order: &Order,
    expected: &ExpectedOrder,
) -> Result<(), HarnessError> {
    if order.id != expected.id {
        return Err(HarnessError::mismatch("id", expected.id, order.id));
    }
    if order.user_id != expected.user_id {
        return Err(HarnessError::mismatch("user_id", expected.user_id, order.user_id));
    }
    if order.num_tokens != expected.num_tokens {
        return Err(HarnessError::mismatch(
            "num_tokens",
            expected.num_tokens,
            order.num_tokens,
        ));
    }
    if order.status != expected.status.as_str() {
        return Err(HarnessError::mismatch("status", expected.status, &order.status));
    }
    if order.status_message != expected.status_message {
        return Err(HarnessError::mismatch(
            "status_message",
            &expected.status_message,
            &order.status_message,
        ));
    }
    Ok(())
}
