//! Huobi REST API endpoint constants.

/// Production API hostname.
pub const HUOBI_HOSTNAME: &str = "api.huobi.pro";

/// Scheme used for every request.
pub const PROTOCOL: &str = "https";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Content type sent with every request.
pub const CONTENT_TYPE_JSON: &str = "application/json;charset=utf-8";

/// User agent sent with every request unless overridden.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/39.0.2171.71 Safari/537.36";

/// Public endpoints (no authentication required).
pub mod public {
    /// Latest trade.
    pub const MARKET_TRADE: &str = "/market/trade";
    /// Recent trades.
    pub const MARKET_HISTORY_TRADE: &str = "/market/history/trade";
    /// Candlestick data.
    pub const MARKET_HISTORY_KLINE: &str = "/market/history/kline";
    /// Order book.
    pub const MARKET_DEPTH: &str = "/market/depth";
    /// Aggregated ticker for one symbol.
    pub const MARKET_DETAIL_MERGED: &str = "/market/detail/merged";
    /// 24h statistics for one symbol.
    pub const MARKET_DETAIL: &str = "/market/detail";
    /// Tickers for all symbols.
    pub const MARKET_TICKERS: &str = "/market/tickers";
}

/// Private endpoints (authentication required).
///
/// Every path outside `/market` is signed, including the reference data
/// endpoints under `/v1/common`.
pub mod private {
    /// Supported symbols.
    pub const COMMON_SYMBOLS: &str = "/v1/common/symbols";
    /// Supported currencies.
    pub const COMMON_CURRENCYS: &str = "/v1/common/currencys";
    /// Server time.
    pub const COMMON_TIMESTAMP: &str = "/v1/common/timestamp";
    /// Accounts of the user.
    pub const ACCOUNTS: &str = "/v1/account/accounts";
    /// Place an order.
    pub const ORDER_PLACE: &str = "/v1/order/orders/place";
    /// Search historical orders.
    pub const ORDERS: &str = "/v1/order/orders";
    /// Open orders.
    pub const OPEN_ORDERS: &str = "/v1/order/openOrders";
    /// Match results.
    pub const MATCH_RESULTS: &str = "/v1/order/matchresults";

    /// Balance of one account.
    pub fn account_balance(account_id: u64) -> String {
        format!("/v1/account/accounts/{account_id}/balance")
    }

    /// Details of one order.
    pub fn order(order_id: u64) -> String {
        format!("/v1/order/orders/{order_id}")
    }

    /// Cancel one order.
    pub fn submit_cancel(order_id: u64) -> String {
        format!("/v1/order/orders/{order_id}/submitcancel")
    }
}
