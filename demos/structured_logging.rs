//! Structured records and the tracing adapter
//!
//! Run with: cargo run --example structured_logging

use polylog::prelude::*;
use polylog::{RecordFormat, TracingLogger};

fn main() -> Result<()> {
    println!("=== polylog - Structured Logging Example ===\n");

    println!("1. JSON records:");
    let json = StructuredLogger::new(Sink::stdout()).with_prefix("orders");
    json.info(&args!["order placed", fields! { "id" => 1042, "total" => 99.5 }]);
    json.warnf("stock low for %s", &args!["sku-7", fields! { "left" => 2 }]);

    println!("\n2. logfmt records:");
    let logfmt = StructuredLogger::new(Sink::stdout())
        .with_format(RecordFormat::Logfmt)
        .with_timestamps(false);
    logfmt.error(&args!["payment declined", fields! { "code" => "card_expired" }]);

    println!("\n3. Configured from JSON:");
    let config = LoggerConfig::from_json(r#"{"format": "json", "level": "debug", "prefix": "cfg"}"#)?;
    let logger = config.build();
    logger.debug(&args!["records go to stderr"]);

    println!("\n4. Through a tracing subscriber:");
    let logger = TracingLogger::new().named("bridge");
    logger.info(&args!["no subscriber installed, event is dropped"]);

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
