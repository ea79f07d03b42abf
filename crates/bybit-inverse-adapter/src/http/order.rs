/*
[INPUT]:  Active order requests
[OUTPUT]: Order placement, cancellation, amendment and query envelopes
[POS]:    HTTP layer - active order endpoints (require signed requests)
[UPDATE]: When adding new order endpoints or changing order flow
*/

use crate::http::{InverseClient, Params, RequestTransport, Result};
use crate::types::{
    ActiveOrderListRequest, ApiResponse, CancelActiveOrderRequest, LegacyActiveOrderRequest,
    PlaceActiveOrderRequest, QueryActiveOrderRequest, ReplaceActiveOrderRequest, SymbolRequest,
};

impl<T: RequestTransport> InverseClient<T> {
    /// Place an active order
    ///
    /// POST v2/private/order/create
    pub async fn place_active_order(
        &self,
        order_request: &PlaceActiveOrderRequest,
    ) -> Result<ApiResponse> {
        self.post_with("v2/private/order/create", order_request).await
    }

    /// Cursor-paged active order list
    ///
    /// GET v2/private/order/list
    pub async fn get_active_order_list(
        &self,
        params: &ActiveOrderListRequest,
    ) -> Result<ApiResponse> {
        self.get_with("v2/private/order/list", params).await
    }

    /// GET open-api/order/list
    #[deprecated(note = "use get_active_order_list() instead")]
    pub async fn get_active_order(
        &self,
        params: &LegacyActiveOrderRequest,
    ) -> Result<ApiResponse> {
        self.get_with("open-api/order/list", params).await
    }

    /// POST v2/private/order/cancel
    pub async fn cancel_active_order(
        &self,
        params: &CancelActiveOrderRequest,
    ) -> Result<ApiResponse> {
        self.post_with("v2/private/order/cancel", params).await
    }

    /// POST v2/private/order/cancelAll
    pub async fn cancel_all_active_orders(&self, params: &SymbolRequest) -> Result<ApiResponse> {
        self.post_with("v2/private/order/cancelAll", params).await
    }

    /// Amend quantity or price of an unfilled order
    ///
    /// POST v2/private/order/replace
    pub async fn replace_active_order(
        &self,
        params: &ReplaceActiveOrderRequest,
    ) -> Result<ApiResponse> {
        self.post_with("v2/private/order/replace", params).await
    }

    /// POST open-api/order/replace
    #[deprecated(note = "use replace_active_order()")]
    pub async fn replace_active_order_old(&self, params: Params) -> Result<ApiResponse> {
        self.post_raw("open-api/order/replace", params).await
    }

    /// Real-time single order query
    ///
    /// GET v2/private/order
    pub async fn query_active_order(
        &self,
        params: &QueryActiveOrderRequest,
    ) -> Result<ApiResponse> {
        self.get_with("v2/private/order", params).await
    }
}
