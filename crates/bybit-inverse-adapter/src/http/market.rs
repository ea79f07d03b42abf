/*
[INPUT]:  Symbol identifiers and query parameters
[OUTPUT]: Market data envelopes (order book, klines, tickers, trades, stats)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing their paths
*/

use crate::http::{InverseClient, RequestTransport, Result};
use crate::types::{
    ApiResponse, BigDealRequest, KlineRequest, LiquidationsRequest, LongShortRatioRequest,
    OpenInterestRequest, SymbolRequest, TickersRequest, TradesRequest,
};

impl<T: RequestTransport> InverseClient<T> {
    /// Order book snapshot
    ///
    /// GET v2/public/orderBook/L2
    pub async fn get_order_book(&self, params: &SymbolRequest) -> Result<ApiResponse> {
        self.get_with("v2/public/orderBook/L2", params).await
    }

    /// Candlesticks
    ///
    /// GET v2/public/kline/list
    pub async fn get_kline(&self, params: &KlineRequest) -> Result<ApiResponse> {
        self.get_with("v2/public/kline/list", params).await
    }

    #[deprecated(note = "use get_tickers() instead")]
    pub async fn get_latest_information(&self, params: &TickersRequest) -> Result<ApiResponse> {
        self.get_tickers(params).await
    }

    /// Latest ticker for one or all symbols
    ///
    /// GET v2/public/tickers
    pub async fn get_tickers(&self, params: &TickersRequest) -> Result<ApiResponse> {
        self.get_with("v2/public/tickers", params).await
    }

    #[deprecated(note = "use get_trades() instead")]
    pub async fn get_public_trading_records(&self, params: &TradesRequest) -> Result<ApiResponse> {
        self.get_trades(params).await
    }

    /// Recent public trades
    ///
    /// GET v2/public/trading-records
    pub async fn get_trades(&self, params: &TradesRequest) -> Result<ApiResponse> {
        self.get_with("v2/public/trading-records", params).await
    }

    /// GET v2/public/symbols
    pub async fn get_symbols(&self) -> Result<ApiResponse> {
        self.get("v2/public/symbols").await
    }

    #[deprecated(note = "use get_liquidations() instead")]
    pub async fn get_public_liquidations(
        &self,
        params: &LiquidationsRequest,
    ) -> Result<ApiResponse> {
        self.get_liquidations(params).await
    }

    /// Liquidated orders
    ///
    /// GET v2/public/liq-records
    pub async fn get_liquidations(&self, params: &LiquidationsRequest) -> Result<ApiResponse> {
        self.get_with("v2/public/liq-records", params).await
    }

    /// Mark price candlesticks
    ///
    /// GET v2/public/mark-price-kline
    pub async fn get_mark_price_kline(&self, params: &KlineRequest) -> Result<ApiResponse> {
        self.get_with("v2/public/mark-price-kline", params).await
    }

    /// GET v2/public/open-interest
    pub async fn get_open_interest(&self, params: &OpenInterestRequest) -> Result<ApiResponse> {
        self.get_with("v2/public/open-interest", params).await
    }

    /// Large filled orders
    ///
    /// GET v2/public/big-deal
    pub async fn get_latest_big_deal(&self, params: &BigDealRequest) -> Result<ApiResponse> {
        self.get_with("v2/public/big-deal", params).await
    }

    /// GET v2/public/account-ratio
    pub async fn get_long_short_ratio(
        &self,
        params: &LongShortRatioRequest,
    ) -> Result<ApiResponse> {
        self.get_with("v2/public/account-ratio", params).await
    }
}
