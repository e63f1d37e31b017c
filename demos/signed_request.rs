//! Example: Signing and sending a private request.
//!
//! Run with: cargo run --example signed_request
//!
//! Reads `HUOBI_ACCESS_KEY` / `HUOBI_SECRET_KEY` and the optional
//! `HUOBI_HOSTNAME`, `HUOBI_PROXY_HOST`, `HUOBI_PROXY_PORT`, `HUOBI_TIMEOUT_MS`.

use huobi_api_client::auth::Credentials;
use huobi_api_client::config::ClientConfig;
use huobi_api_client::rest::{HuobiClientExt, HuobiRestClient, private};
use huobi_api_client::types::HttpMethod;

#[derive(Debug, serde::Deserialize)]
struct Account {
    id: u64,
    #[serde(rename = "type")]
    kind: String,
    state: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();

    let Some(credentials) = Credentials::try_from_env() else {
        println!("Set HUOBI_ACCESS_KEY and HUOBI_SECRET_KEY to run this example.");
        return Ok(());
    };

    let client = HuobiRestClient::builder()
        .credentials(credentials)
        .config(ClientConfig::from_env()?)
        .build()?;

    // Inspect what would go on the wire without sending anything.
    let signed = client.sign_params(HttpMethod::Get, private::ACCOUNTS, None)?;
    println!("Query string: {}", signed.query);

    let accounts: Vec<Account> = client.get_data(private::ACCOUNTS, None).await?;
    for account in &accounts {
        println!("{} {} {}", account.id, account.kind, account.state);
    }

    if let Some(account) = accounts.first() {
        let balance = client
            .get(&private::account_balance(account.id), None)
            .await?;
        println!("Balance: {:?}", balance.data());
    }

    Ok(())
}
