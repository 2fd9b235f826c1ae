//! Error types for harness operations.
//!
//! Every variant is a failed check. There is no recoverable category: the
//! variants exist only so the diagnostic points at the failing comparison.

use std::error::Error;
use std::fmt;
use std::time::Duration;

/// A failed harness check or a request that could not be completed.
#[derive(Debug)]
pub enum HarnessError {
    /// The request could not be sent or its body could not be read.
    Transport(reqwest::Error),
    /// A response body did not have the expected JSON shape.
    Decode {
        endpoint: &'static str,
        message: String,
    },
    /// The service answered with an unexpected HTTP status code.
    UnexpectedStatus {
        endpoint: &'static str,
        expected: u16,
        actual: u16,
    },
    /// `POST /create-order` answered with the wrong message.
    UnexpectedMessage { expected: String, actual: String },
    /// A fetched order field did not match the expectation.
    FieldMismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },
    /// Poll mode gave up before the order reached a terminal status.
    PollTimeout {
        order_id: u64,
        waited: Duration,
        last_status: Option<String>,
    },
    /// An environment override could not be parsed.
    Config(String),
}

impl HarnessError {
    pub(crate) fn mismatch(
        field: &'static str,
        expected: impl fmt::Display,
        actual: impl fmt::Display,
    ) -> Self {
        HarnessError::FieldMismatch {
            field,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::Transport(e) => write!(f, "transport error: {}", e),
            HarnessError::Decode { endpoint, message } => {
                write!(f, "could not decode {} response: {}", endpoint, message)
            }
            HarnessError::UnexpectedStatus {
                endpoint,
                expected,
                actual,
            } => write!(
                f,
                "{} returned HTTP {} (expected {})",
                endpoint, actual, expected
            ),
            HarnessError::UnexpectedMessage { expected, actual } => write!(
                f,
                "create-order message was {:?} (expected {:?})",
                actual, expected
            ),
            HarnessError::FieldMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "order field `{}` was {:?} (expected {:?})",
                field, actual, expected
            ),
            HarnessError::PollTimeout {
                order_id,
                waited,
                last_status,
            } => match last_status {
                Some(status) => write!(
                    f,
                    "order {} still {:?} after {:?}",
                    order_id, status, waited
                ),
                None => write!(f, "order {} not visible after {:?}", order_id, waited),
            },
            HarnessError::Config(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl Error for HarnessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HarnessError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for HarnessError {
    fn from(err: reqwest::Error) -> Self {
        HarnessError::Transport(err)
    }
}

/// The first scenario of a run that did not pass.
#[derive(Debug)]
pub struct ScenarioFailure {
    /// Name of the failing scenario.
    pub scenario: &'static str,
    /// 1-indexed position of the scenario in the run.
    pub position: usize,
    pub error: HarnessError,
}

impl fmt::Display for ScenarioFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scenario #{} `{}` failed: {}",
            self.position, self.scenario, self.error
        )
    }
}

impl Error for ScenarioFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}
