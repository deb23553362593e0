use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::{error, info, instrument};

/// Path of the checkout endpoint, relative to the API base URL.
pub const SEND_TEST_ORDER_PATH: &str = "/api/send-test-order";

/// Errors that can occur while submitting an order.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Order request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Order rejected by server: HTTP {status}")]
    Rejected { status: u16 },
}

/// Something that can place the checkout order.
pub trait OrderSubmitter: Send + Sync + 'static {
    fn send_test_order(&self) -> impl Future<Output = Result<(), OrderError>> + Send;
}

/// HTTP client for the order endpoint.
#[derive(Clone)]
pub struct OrderClient {
    client: Client,
    url: String,
}

impl OrderClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, OrderError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(OrderError::Client)?;

        Ok(Self {
            client,
            url: format!("{}{}", base_url.trim_end_matches('/'), SEND_TEST_ORDER_PATH),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl OrderSubmitter for OrderClient {
    /// Posts an empty body. Only the status code is looked at.
    #[instrument(skip(self), fields(url = %self.url))]
    async fn send_test_order(&self) -> Result<(), OrderError> {
        let result = match self.client.post(&self.url).send().await {
            Ok(response) if response.status().is_success() => Ok(()),
            Ok(response) => Err(OrderError::Rejected {
                status: response.status().as_u16(),
            }),
            Err(e) => Err(OrderError::Transport(e)),
        };

        match &result {
            Ok(()) => info!("Order sent successfully"),
            Err(e) => error!(error = %e, "Failed to send order"),
        }
        result
    }
}
