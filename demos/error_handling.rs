//! Example: Telling transport failures from API rejections.
//!
//! Run with: cargo run --example error_handling

use huobi_api_client::HuobiError;
use huobi_api_client::rest::HuobiRestClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Invalid keys: the request reaches Huobi and comes back with status "error".
    let client = HuobiRestClient::new("invalid", "invalid")?;

    match client.get("/v1/account/accounts", None).await {
        Ok(envelope) => println!("Unexpected success: {:?}", envelope),
        Err(HuobiError::Api(api_error)) => {
            println!("API error: {}", api_error);
            if api_error.is_signature_invalid() {
                println!("Check the key pair and the system clock");
            }
            println!("Full envelope: {:?}", api_error.envelope());
        }
        Err(err) if err.is_transport() => println!("Transport error: {}", err),
        Err(err) => println!("Other error: {}", err),
    }

    // Empty credentials fail before any request is built.
    match HuobiRestClient::new("", "") {
        Err(HuobiError::Configuration(msg)) => println!("Configuration error: {}", msg),
        _ => println!("Unexpected result"),
    }

    Ok(())
}
