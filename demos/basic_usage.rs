//! Basic logger usage example
//!
//! Demonstrates the console backend, thresholds, fields and the
//! printf-style variants.
//!
//! Run with: cargo run --example basic_usage

use polylog::prelude::*;
use polylog::{info, warn};
use std::panic::{catch_unwind, AssertUnwindSafe};

fn main() -> Result<()> {
    println!("=== polylog - Basic Usage Example ===\n");

    let logger = ConsoleLogger::new().with_level(Level::Trace);

    println!("1. Logging at different levels:");
    logger.trace(&args!["This is a trace message"]);
    logger.debug(&args!["This is a debug message"]);
    logger.info(&args!["This is an info message"]);
    logger.warn(&args!["This is a warning message"]);
    logger.error(&args!["This is an error message"]);

    println!("\n2. Fields and templates:");
    logger.warn(&args!["disk low", fields! { "pct" => 92, "mount" => "/var" }]);
    logger.infof("listening on %s:%d", &args!["0.0.0.0", 8080]);
    logger.errorf("missing %d", &args![]);

    println!("\n3. Macros:");
    info!(logger, "user ", "ada", " logged in", fields! { "attempts" => 1 });
    warn!(logger, "retrying in ", 5, "s");

    println!("\n4. Raising the threshold to WARN:");
    logger.set_level(Level::Warn);
    logger.debug(&args!["Debug message (hidden)"]);
    logger.info(&args!["Info message (hidden)"]);
    logger.warn(&args!["Warning message (visible)"]);

    println!("\n5. Panic-level calls unwind after writing:");
    let caught = catch_unwind(AssertUnwindSafe(|| logger.panic(&args!["bad state"])));
    if let Err(payload) = caught {
        if let Some(panic) = payload.downcast_ref::<LogPanic>() {
            println!("   caught: {:?}", panic.line());
        }
    }

    println!("\n6. Configuration from the environment (POLYLOG_*):");
    let config = LoggerConfig::from_env()?;
    let configured = config.build();
    configured.info(&args!["configured at ", configured.level().name()]);

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
