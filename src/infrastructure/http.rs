use crate::domain::{
    errors::{AppError, NetworkResult},
    logging::{LogComponent, get_logger},
    market_data::{PriceBoard, PriceRepository},
};
use gloo::net::http::Request;

/// HTTP client for the `/prices` endpoint
#[derive(Clone, Debug)]
pub struct PricesHttpClient {
    prices_url: String,
}

impl PricesHttpClient {
    pub fn new(prices_url: impl Into<String>) -> Self {
        Self { prices_url: prices_url.into() }
    }

    pub fn prices_url(&self) -> &str {
        &self.prices_url
    }
}

impl PriceRepository for PricesHttpClient {
    async fn fetch_board(&self) -> NetworkResult<PriceBoard> {
        get_logger().debug(
            LogComponent::PricesClient,
            &format!("📡 GET {}", self.prices_url),
        );

        let response = Request::get(&self.prices_url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to send request: {}", e)))?;

        if !response.ok() {
            return Err(AppError::Network(format!(
                "HTTP error: {} - {}",
                response.status(),
                response.status_text()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read body: {}", e)))?;

        let board = PriceBoard::parse(&body)?;

        get_logger().debug(
            LogComponent::PricesClient,
            &format!("✅ Received {} ticker entries", board.len()),
        );

        Ok(board)
    }
}
