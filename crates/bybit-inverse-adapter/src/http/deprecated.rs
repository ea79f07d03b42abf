/*
[INPUT]:  Legacy facade method names
[OUTPUT]: Replacement method and how the legacy call is served
[POS]:    HTTP layer - audit table for backward compatible endpoints
[UPDATE]: When deprecating a method or retiring a legacy path
*/

/// How a deprecated method is served
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compatibility {
    /// Delegates to the replacement with identical parameters
    Alias,
    /// Parameter shapes differ, so the old path is still called
    LegacyPath { path: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeprecatedEndpoint {
    pub legacy: &'static str,
    pub replacement: &'static str,
    pub compatibility: Compatibility,
}

const fn alias(legacy: &'static str, replacement: &'static str) -> DeprecatedEndpoint {
    DeprecatedEndpoint {
        legacy,
        replacement,
        compatibility: Compatibility::Alias,
    }
}

const fn legacy_path(
    legacy: &'static str,
    replacement: &'static str,
    path: &'static str,
) -> DeprecatedEndpoint {
    DeprecatedEndpoint {
        legacy,
        replacement,
        compatibility: Compatibility::LegacyPath { path },
    }
}

/// Every `#[deprecated]` method on `InverseClient`
pub const DEPRECATED_ENDPOINTS: &[DeprecatedEndpoint] = &[
    alias("get_latest_information", "get_tickers"),
    alias("get_public_trading_records", "get_trades"),
    alias("get_public_liquidations", "get_liquidations"),
    legacy_path("get_active_order", "get_active_order_list", "open-api/order/list"),
    legacy_path("replace_active_order_old", "replace_active_order", "open-api/order/replace"),
    legacy_path(
        "place_conditional_order_old",
        "place_conditional_order",
        "open-api/stop-order/create",
    ),
    legacy_path(
        "get_conditional_order_old",
        "get_conditional_order",
        "open-api/stop-order/list",
    ),
    legacy_path(
        "cancel_conditional_order_old",
        "cancel_conditional_order",
        "open-api/stop-order/cancel",
    ),
    legacy_path(
        "replace_conditional_order_old",
        "replace_conditional_order",
        "open-api/stop-order/replace",
    ),
    legacy_path("get_user_leverage", "get_position", "user/leverage"),
    legacy_path("get_positions", "get_position", "position/list"),
    alias("change_user_leverage", "set_user_leverage"),
];

/// Look up a deprecated method by name
pub fn deprecated_endpoint(legacy: &str) -> Option<&'static DeprecatedEndpoint> {
    DEPRECATED_ENDPOINTS
        .iter()
        .find(|endpoint| endpoint.legacy == legacy)
}
