//! Named loggers and the current-logger slot
//!
//! Run with: cargo run --example named_loggers

use polylog::io::{CurrentWriter, LevelWriter};
use polylog::prelude::*;
use polylog::set_current;
use std::io::Write;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== polylog - Named Loggers Example ===\n");

    let root = ConsoleLogger::builder().prefix("app").build();
    let db = root.named("db");
    let pool = db.named("pool").with_level(Level::Debug);

    println!("1. Derived prefixes:");
    root.info(&args!["starting"]);
    db.warn(&args!["slow query", fields! { "ms" => 1200 }]);
    pool.debug(&args!["connection reused"]);
    db.debug(&args!["hidden, db is still at info"]);

    println!("\n2. Chained configuration:");
    type Opt = Box<dyn FnOnce(ConsoleLogger) -> ConsoleLogger>;
    let named: Opt = Box::new(|l| l.named("http"));
    let debug: Opt = Box::new(|l| l.with_level_from_debug(true));
    let http = root.named("api").options([named, debug]);
    http.debugf("%s %s", &args!["GET", "/health"]);

    println!("\n3. The current logger and free functions:");
    polylog::info(&args!["through the default console logger"]);
    let previous = set_current(Arc::new(WriterLogger::standard().with_prefix("global: ")));
    polylog::warnf("%d jobs queued", &args![3]);

    println!("\n4. Writers:");
    let mut w = CurrentWriter::new(Level::Info);
    w.write_all(b"written through io::Write")?;
    let mut w = LevelWriter::new(db.named("io"), Level::Error);
    w.write_all(b"stderr-like output")?;

    set_current(previous);
    println!("\n=== Example completed successfully! ===");
    Ok(())
}
