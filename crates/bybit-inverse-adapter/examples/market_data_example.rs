/*
[INPUT]:  Symbol identifier (e.g., "BTCUSD")
[OUTPUT]: Market data (order book, tickers, klines, server clock offset)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use bybit_inverse_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: Query market data (no API key required)
#[tokio::main]
async fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    println!("=== Bybit Inverse Market Data Example ===\n");

    let client = match InverseClient::public(true) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let symbol = SymbolRequest::new("BTCUSD");

    println!("Querying order book for {}...", symbol.symbol);
    match client.get_order_book(&symbol).await {
        Ok(book) => println!("✓ Order book: {}", book.result),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying ticker for {}...", symbol.symbol);
    let tickers = TickersRequest {
        symbol: Some(symbol.symbol.clone()),
    };
    match client.get_tickers(&tickers).await {
        Ok(ticker) => println!("✓ Ticker: {}", ticker.result),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying hourly klines for {}...", symbol.symbol);
    let kline = KlineRequest {
        symbol: symbol.symbol.clone(),
        interval: KlineInterval::OneHour,
        from: chrono::Utc::now().timestamp() - 24 * 3600,
        limit: Some(24),
    };
    match client.get_kline(&kline).await {
        Ok(candles) => println!("✓ Klines: {}", candles.result),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nEstimating local clock offset...");
    match client.get_time_offset().await {
        Ok(offset) => println!("✓ Server clock is {}ms ahead of local", offset),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
