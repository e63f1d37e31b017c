//! Example: Public market data.
//!
//! Run with: cargo run --example public_market
//!
//! The client always needs credentials, but `/market` endpoints are sent
//! unsigned, so placeholder keys are enough here.

use huobi_api_client::rest::{HuobiRestClient, public};
use huobi_api_client::types::RequestParams;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = HuobiRestClient::new("unused", "unused")?;

    let params = RequestParams::new().with("symbol", "btcusdt");
    let trade = client.get(public::MARKET_TRADE, Some(&params)).await?;
    println!("Latest trade: {:?}", trade.get("tick"));

    let params = params.with("period", "1min").with("size", 5);
    let klines = client.get(public::MARKET_HISTORY_KLINE, Some(&params)).await?;
    println!("Klines: {:?}", klines.data());

    Ok(())
}
