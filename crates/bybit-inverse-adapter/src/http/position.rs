/*
[INPUT]:  Position, leverage and trade history requests
[OUTPUT]: Position state, margin/leverage changes and execution history
[POS]:    HTTP layer - position endpoints (require signed requests)
[UPDATE]: When adding new position endpoints or changing their paths
*/

use crate::http::{InverseClient, RequestTransport, Result};
use crate::types::{
    ApiResponse, ChangePositionMarginRequest, ClosedPnlRequest, PositionRequest,
    SetTradingStopRequest, SetUserLeverageRequest, TradeRecordsRequest,
};

impl<T: RequestTransport> InverseClient<T> {
    /// GET user/leverage
    #[deprecated(note = "use get_position() instead")]
    pub async fn get_user_leverage(&self) -> Result<ApiResponse> {
        self.get("user/leverage").await
    }

    /// Positions for one symbol, or all when `symbol` is unset
    ///
    /// GET v2/private/position/list
    pub async fn get_position(&self, params: &PositionRequest) -> Result<ApiResponse> {
        self.get_with("v2/private/position/list", params).await
    }

    /// GET position/list
    #[deprecated(note = "use get_position() instead")]
    pub async fn get_positions(&self) -> Result<ApiResponse> {
        self.get("position/list").await
    }

    /// POST position/change-position-margin
    pub async fn change_position_margin(
        &self,
        params: &ChangePositionMarginRequest,
    ) -> Result<ApiResponse> {
        self.post_with("position/change-position-margin", params).await
    }

    /// Take profit, stop loss and trailing stop for an open position
    ///
    /// POST open-api/position/trading-stop
    pub async fn set_trading_stop(&self, params: &SetTradingStopRequest) -> Result<ApiResponse> {
        self.post_with("open-api/position/trading-stop", params).await
    }

    /// POST user/leverage/save
    pub async fn set_user_leverage(&self, params: &SetUserLeverageRequest) -> Result<ApiResponse> {
        self.post_with("user/leverage/save", params).await
    }

    #[deprecated(note = "use set_user_leverage() instead")]
    pub async fn change_user_leverage(
        &self,
        params: &SetUserLeverageRequest,
    ) -> Result<ApiResponse> {
        self.set_user_leverage(params).await
    }

    /// User fills
    ///
    /// GET v2/private/execution/list
    pub async fn get_trade_records(&self, params: &TradeRecordsRequest) -> Result<ApiResponse> {
        self.get_with("v2/private/execution/list", params).await
    }

    /// GET v2/private/trade/closed-pnl/list
    pub async fn get_closed_pnl(&self, params: &ClosedPnlRequest) -> Result<ApiResponse> {
        self.get_with("v2/private/trade/closed-pnl/list", params).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, InverseClient, RestClientOptions};
    use crate::types::{PositionRequest, SetTradingStopRequest, SetUserLeverageRequest, TriggerBy};
    use serde_json::{Value, json};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> InverseClient {
        let options = RestClientOptions {
            base_url: Some(server.uri()),
            disable_time_sync: true,
            ..Default::default()
        };
        InverseClient::new(
            Some("test-key".to_string()),
            Some("test-secret".to_string()),
            false,
            options,
            ClientConfig::default(),
        )
        .expect("client init")
    }

    fn ok() -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "ret_code": 0,
            "ret_msg": "OK",
            "result": {}
        }))
    }

    #[tokio::test]
    async fn test_get_position_for_symbol() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/private/position/list"))
            .and(query_param("symbol", "BTCUSD"))
            .respond_with(ok())
            .expect(1)
            .mount(&server)
            .await;

        client(&server)
            .get_position(&PositionRequest {
                symbol: Some("BTCUSD".to_string()),
            })
            .await
            .expect("get_position failed");
    }

    #[tokio::test]
    async fn test_set_trading_stop_sends_numbers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/open-api/position/trading-stop"))
            .respond_with(ok())
            .expect(1)
            .mount(&server)
            .await;

        client(&server)
            .set_trading_stop(&SetTradingStopRequest {
                symbol: "BTCUSD".to_string(),
                take_profit: Some("9500".parse().unwrap()),
                stop_loss: None,
                tp_trigger_by: Some(TriggerBy::MarkPrice),
                sl_trigger_by: None,
                new_trailing_active: None,
            })
            .await
            .expect("set_trading_stop failed");

        let requests = server.received_requests().await.unwrap();
        let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["take_profit"], 9500.0);
        assert_eq!(body["tp_trigger_by"], "MarkPrice");
        assert!(body.get("stop_loss").is_none());
    }

    #[tokio::test]
    #[allow(deprecated)]
    async fn test_change_user_leverage_hits_leverage_save() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/leverage/save"))
            .respond_with(ok())
            .expect(1)
            .mount(&server)
            .await;

        client(&server)
            .change_user_leverage(&SetUserLeverageRequest {
                symbol: "BTCUSD".to_string(),
                leverage: "2.5".parse().unwrap(),
            })
            .await
            .expect("change_user_leverage failed");

        let requests = server.received_requests().await.unwrap();
        let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["leverage"], 2.5);
    }
}
