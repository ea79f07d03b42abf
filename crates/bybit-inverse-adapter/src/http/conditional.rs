/*
[INPUT]:  Conditional (stop) order requests
[OUTPUT]: Stop order placement, cancellation, amendment and query envelopes
[POS]:    HTTP layer - conditional order endpoints (require signed requests)
[UPDATE]: When adding new stop order endpoints or changing their paths
*/

use crate::http::{InverseClient, Params, RequestTransport, Result};
use crate::types::{
    ApiResponse, CancelConditionalOrderRequest, ConditionalOrderListRequest,
    PlaceConditionalOrderRequest, QueryConditionalOrderRequest, ReplaceConditionalOrderRequest,
    SymbolRequest,
};

impl<T: RequestTransport> InverseClient<T> {
    /// POST v2/private/stop-order/create
    pub async fn place_conditional_order(
        &self,
        params: &PlaceConditionalOrderRequest,
    ) -> Result<ApiResponse> {
        self.post_with("v2/private/stop-order/create", params).await
    }

    /// POST open-api/stop-order/create
    #[deprecated(note = "use place_conditional_order()")]
    pub async fn place_conditional_order_old(&self, params: Params) -> Result<ApiResponse> {
        self.post_raw("open-api/stop-order/create", params).await
    }

    /// GET v2/private/stop-order/list
    pub async fn get_conditional_order(
        &self,
        params: &ConditionalOrderListRequest,
    ) -> Result<ApiResponse> {
        self.get_with("v2/private/stop-order/list", params).await
    }

    /// GET open-api/stop-order/list
    #[deprecated(note = "use get_conditional_order()")]
    pub async fn get_conditional_order_old(&self, params: Params) -> Result<ApiResponse> {
        self.get_raw("open-api/stop-order/list", params).await
    }

    /// POST v2/private/stop-order/cancel
    pub async fn cancel_conditional_order(
        &self,
        params: &CancelConditionalOrderRequest,
    ) -> Result<ApiResponse> {
        self.post_with("v2/private/stop-order/cancel", params).await
    }

    /// POST open-api/stop-order/cancel
    #[deprecated(note = "use cancel_conditional_order()")]
    pub async fn cancel_conditional_order_old(&self, params: Params) -> Result<ApiResponse> {
        self.post_raw("open-api/stop-order/cancel", params).await
    }

    /// POST v2/private/stop-order/cancelAll
    pub async fn cancel_all_conditional_orders(
        &self,
        params: &SymbolRequest,
    ) -> Result<ApiResponse> {
        self.post_with("v2/private/stop-order/cancelAll", params).await
    }

    /// POST v2/private/stop-order/replace
    pub async fn replace_conditional_order(
        &self,
        params: &ReplaceConditionalOrderRequest,
    ) -> Result<ApiResponse> {
        self.post_with("v2/private/stop-order/replace", params).await
    }

    /// POST open-api/stop-order/replace
    #[deprecated(note = "use replace_conditional_order()")]
    pub async fn replace_conditional_order_old(&self, params: Params) -> Result<ApiResponse> {
        self.post_raw("open-api/stop-order/replace", params).await
    }

    /// GET v2/private/stop-order
    pub async fn query_conditional_order(
        &self,
        params: &QueryConditionalOrderRequest,
    ) -> Result<ApiResponse> {
        self.get_with("v2/private/stop-order", params).await
    }
}
