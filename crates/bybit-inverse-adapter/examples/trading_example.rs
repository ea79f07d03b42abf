/*
[INPUT]:  BYBIT_API_KEY / BYBIT_API_SECRET and order parameters
[OUTPUT]: Order creation/cancellation confirmations
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use std::str::FromStr;

use bybit_inverse_adapter::*;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

/// Example: Place and cancel a post-only order on testnet
///
/// Private endpoints are signed with the API secret; the key pair is read
/// from the environment.
#[tokio::main]
async fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    println!("=== Bybit Inverse Trading Example ===\n");

    let Some(credentials) = Credentials::from_env() else {
        eprintln!("Set BYBIT_API_KEY and BYBIT_API_SECRET to run this example");
        return;
    };

    let client = match InverseClient::new(
        Some(credentials.key),
        Some(credentials.secret),
        false,
        RestClientOptions::default(),
        ClientConfig::default(),
    ) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Testnet client created");

    let order = PlaceActiveOrderRequest {
        side: Side::Buy,
        symbol: "BTCUSD".to_string(),
        order_type: OrderType::Limit,
        qty: 1,
        price: Decimal::from_str("1000").ok(),
        time_in_force: TimeInForce::PostOnly,
        take_profit: None,
        stop_loss: None,
        reduce_only: None,
        close_on_trigger: None,
        order_link_id: Some(format!("example-{}", chrono::Utc::now().timestamp_millis())),
    };

    println!("\nPlacing order: {:?}", order);
    let placed = match client.place_active_order(&order).await.and_then(|r| r.into_result()) {
        Ok(result) => {
            println!("✓ Order placed: {}", result);
            result
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };

    let cancel = CancelActiveOrderRequest {
        symbol: order.symbol.clone(),
        order_id: placed["order_id"].as_str().map(str::to_string),
        order_link_id: None,
    };
    match client.cancel_active_order(&cancel).await.and_then(|r| r.into_result()) {
        Ok(result) => println!("✓ Order cancelled: {}", result),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Trading example complete");
}
