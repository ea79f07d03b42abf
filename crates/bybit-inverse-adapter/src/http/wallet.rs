/*
[INPUT]:  Wallet query parameters and signed credentials
[OUTPUT]: Wallet balances and fund, withdrawal and exchange records
[POS]:    HTTP layer - wallet endpoints (require signed requests)
[UPDATE]: When adding new wallet endpoints or changing query parameters
*/

// ### Wallet Endpoints

use crate::http::{InverseClient, RequestTransport, Result};
use crate::types::{
    ApiResponse, AssetExchangeRecordsRequest, WalletBalanceRequest, WalletFundRecordsRequest,
    WithdrawRecordsRequest,
};

impl<T: RequestTransport> InverseClient<T> {
    /// Query wallet balance, for one coin or all
    ///
    /// GET v2/private/wallet/balance?coin={coin}
    pub async fn get_wallet_balance(&self, params: &WalletBalanceRequest) -> Result<ApiResponse> {
        self.get_with("v2/private/wallet/balance", params).await
    }

    /// Query wallet fund records
    ///
    /// GET open-api/wallet/fund/records
    pub async fn get_wallet_fund_records(
        &self,
        params: &WalletFundRecordsRequest,
    ) -> Result<ApiResponse> {
        self.get_with("open-api/wallet/fund/records", params).await
    }

    /// Query withdrawal records
    ///
    /// GET open-api/wallet/withdraw/list
    pub async fn get_withdraw_records(
        &self,
        params: &WithdrawRecordsRequest,
    ) -> Result<ApiResponse> {
        self.get_with("open-api/wallet/withdraw/list", params).await
    }

    /// Query asset exchange records
    ///
    /// GET v2/private/exchange-order/list
    pub async fn get_asset_exchange_records(
        &self,
        params: &AssetExchangeRecordsRequest,
    ) -> Result<ApiResponse> {
        self.get_with("v2/private/exchange-order/list", params).await
    }
}
