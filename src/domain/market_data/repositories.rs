use crate::domain::errors::NetworkResult;
use crate::domain::market_data::PriceBoard;

/// Source of per-ticker metrics, one board per refresh cycle
#[allow(async_fn_in_trait)]
pub trait PriceRepository {
    async fn fetch_board(&self) -> NetworkResult<PriceBoard>;
}
