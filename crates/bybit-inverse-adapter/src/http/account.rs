/*
[INPUT]:  Symbol and risk limit requests
[OUTPUT]: Risk limit, funding, API key and liquidity contribution envelopes
[POS]:    HTTP layer - account configuration endpoints (require signed requests)
[UPDATE]: When adding new account endpoints or changing their paths
*/

use crate::http::{InverseClient, RequestTransport, Result};
use crate::types::{ApiResponse, SetRiskLimitRequest, SymbolRequest};

impl<T: RequestTransport> InverseClient<T> {
    /// GET open-api/wallet/risk-limit/list
    pub async fn get_risk_limit_list(&self) -> Result<ApiResponse> {
        self.get("open-api/wallet/risk-limit/list").await
    }

    /// POST open-api/wallet/risk-limit
    pub async fn set_risk_limit(&self, params: &SetRiskLimitRequest) -> Result<ApiResponse> {
        self.post_with("open-api/wallet/risk-limit", params).await
    }

    /// Funding rate of the last settlement
    ///
    /// GET open-api/funding/prev-funding-rate
    pub async fn get_last_funding_rate(&self, params: &SymbolRequest) -> Result<ApiResponse> {
        self.get_with("open-api/funding/prev-funding-rate", params).await
    }

    /// Funding fee paid or received at the last settlement
    ///
    /// GET open-api/funding/prev-funding
    pub async fn get_my_last_funding_fee(&self, params: &SymbolRequest) -> Result<ApiResponse> {
        self.get_with("open-api/funding/prev-funding", params).await
    }

    /// GET open-api/funding/predicted-funding
    pub async fn get_predicted_funding(&self, params: &SymbolRequest) -> Result<ApiResponse> {
        self.get_with("open-api/funding/predicted-funding", params).await
    }

    /// Permissions and metadata of the calling key
    ///
    /// GET open-api/api-key
    pub async fn get_api_key_info(&self) -> Result<ApiResponse> {
        self.get("open-api/api-key").await
    }

    /// Liquidity contribution points
    ///
    /// GET v2/private/account/lcp
    pub async fn get_lcp_info(&self, params: &SymbolRequest) -> Result<ApiResponse> {
        self.get_with("v2/private/account/lcp", params).await
    }
}
