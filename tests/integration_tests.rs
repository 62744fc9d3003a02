//! Integration tests for the logging contract
//!
//! These tests verify:
//! - End-to-end line shapes across backends
//! - Gate behaviour, including terminal levels
//! - Named derivation and independence
//! - The process-wide current logger and the free functions
//! - The io bridge against the current logger

use parking_lot::Mutex;
use polylog::io::CurrentWriter;
use polylog::prelude::*;
use polylog::{
    current, set_current, LogFormat, RecordFormat, StructuredLogger, WriterLogger,
};
use std::io::Write;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Tests that swap the current logger must not interleave.
static CURRENT_GUARD: Mutex<()> = parking_lot::const_mutex(());

fn console(level: Level) -> (ConsoleLogger, SharedBuffer) {
    let buf = SharedBuffer::new();
    let logger = ConsoleLogger::builder()
        .level(level)
        .colors(false)
        .output_all(buf.clone())
        .build();
    (logger, buf)
}

#[test]
fn test_warn_with_fields_scenario() {
    let (logger, buf) = console(Level::Info);
    logger.warn(&args!["disk low", fields! { "pct" => 92 }]);

    let out = buf.contents();
    let bracket = out.find("[WARN]").unwrap();
    let message = out.find("disk low").unwrap();
    let field = out.find("pct=92").unwrap();
    assert!(bracket < message && message < field);
    assert!(out.ends_with('\n'));
    assert_eq!(out, "[WARN]  disk low pct=92\n");
}

#[test]
fn test_info_with_prefix_scenario() {
    let (logger, buf) = console(Level::Debug);
    logger.set_prefix("svc");
    logger.info(&args!["ready"]);
    assert_eq!(buf.contents(), "svc: ready\n");
}

#[test]
fn test_panic_scenario_writes_once_and_unwinds_once() {
    let (logger, buf) = console(Level::Trace);

    let result = catch_unwind(AssertUnwindSafe(|| logger.panic(&args!["bad state"])));

    let payload = result.unwrap_err();
    let panic = payload.downcast_ref::<LogPanic>().unwrap();
    assert_eq!(panic.line(), "[PANIC] bad state\n");
    assert!(panic.line().contains("bad state"));
    assert_eq!(buf.contents().matches("bad state").count(), 1);
}

#[test]
fn test_below_threshold_scenario() {
    let (logger, buf) = console(Level::Warn);
    logger.debug(&args!["noisy"]);
    logger.debugf("%s", &args!["noisy"]);
    assert_eq!(buf.len(), 0);
}

#[test]
fn test_silent_threshold_suppresses_panic() {
    let (logger, buf) = console(Level::Silent);
    // would unwind if it passed the gate
    logger.panic(&args!["never raised"]);
    logger.error(&args!["never written"]);
    assert!(buf.is_empty());
}

#[test]
fn test_call_shapes_converge() {
    let (logger, buf) = console(Level::Info);
    logger.info(&args!["foo", "bar"]);
    logger.infof("%s%s", &args!["foo", "bar"]);
    assert_eq!(buf.contents(), "foobar\nfoobar\n");
}

#[test]
fn test_template_mismatches_are_inline() {
    let (logger, buf) = console(Level::Info);
    logger.infof("%d and %s", &args!["x"]);
    assert_eq!(buf.contents(), "%!d(string=x) and %!s(MISSING)\n");
}

#[test]
fn test_oversized_template_width_does_not_abort_the_call() {
    let (logger, buf) = console(Level::Info);

    let wide = catch_unwind(AssertUnwindSafe(|| {
        logger.infof("%99999999999999999999999s", &args!["x"])
    }));
    let precise = catch_unwind(AssertUnwindSafe(|| logger.infof("%.70000f", &args![1.5])));

    assert!(wide.is_ok());
    assert!(precise.is_ok());
    let out = buf.contents();
    assert!(out.starts_with("%!(BADWIDTH)x\n1.5000"));
    assert_eq!(out.len(), "%!(BADWIDTH)x\n".len() + 70_002 + 1);
}

#[test]
fn test_named_chain_and_independence() {
    let (root, buf) = console(Level::Info);
    let a = root.named("a");
    let b = a.named("b");
    let c = b.named("c");
    assert_eq!(c.prefix(), "a.b.c");

    c.set_level(Level::Error);
    c.set_prefix("other");
    assert_eq!(b.level(), Level::Info);
    assert_eq!(b.prefix(), "a.b");

    b.info(&args!["shared sink"]);
    assert_eq!(buf.contents(), "a.b: shared sink\n");
}

#[test]
fn test_backends_agree_on_message_text() {
    let console_buf = SharedBuffer::new();
    let writer_buf = SharedBuffer::new();
    let json_buf = SharedBuffer::new();

    let loggers: Vec<Box<dyn Logger>> = vec![
        Box::new(
            ConsoleLogger::builder()
                .colors(false)
                .output_all(console_buf.clone())
                .build(),
        ),
        Box::new(WriterLogger::new(writer_buf.clone())),
        Box::new(StructuredLogger::new(json_buf.clone()).with_timestamps(false)),
    ];
    for logger in &loggers {
        logger.set_prefix("api");
        logger.errorf("Hello %s", &args!["World"]);
    }

    assert_eq!(console_buf.contents(), "[ERROR] api: Hello World\n");
    assert_eq!(writer_buf.contents(), "[ERROR] api: Hello World\n");
    assert_eq!(
        json_buf.contents(),
        "{\"level\":\"error\",\"message\":\"api: Hello World\"}\n"
    );
}

#[test]
fn test_structured_logfmt_from_config_format() {
    let config = LoggerConfig::from_json(r#"{"format": "logfmt", "prefix": "job"}"#).unwrap();
    assert_eq!(config.format, LogFormat::Logfmt);

    let buf = SharedBuffer::new();
    let logger = StructuredLogger::new(buf.clone())
        .with_format(RecordFormat::Logfmt)
        .with_timestamps(false);
    config.apply(&logger);
    logger.info(&args!["done", fields! { "items" => 3_u32 }]);
    assert_eq!(buf.contents(), "level=info message=\"job: done\" items=3\n");
}

#[test]
fn test_current_slot_replacement() {
    let _guard = CURRENT_GUARD.lock();
    let buf = SharedBuffer::new();
    let previous = set_current(Arc::new(WriterLogger::new(buf.clone())));

    polylog::set_level(Level::Debug);
    polylog::set_prefix("global");
    assert_eq!(polylog::level(), Level::Debug);
    assert_eq!(polylog::prefix(), "global");

    polylog::debug(&args!["one"]);
    polylog::infof("%d", &args![2]);
    polylog::trace(&args!["dropped"]);
    polylog::log(Level::Warn, &args!["three"]);

    assert_eq!(
        buf.contents(),
        "[DEBUG] global: one\n[INFO]  global: 2\n[WARN]  global: three\n"
    );

    let replaced = set_current(previous);
    assert_eq!(replaced.prefix(), "global");
}

#[test]
fn test_current_panic_unwinds_through_free_function() {
    let _guard = CURRENT_GUARD.lock();
    let buf = SharedBuffer::new();
    let previous = set_current(Arc::new(WriterLogger::new(buf.clone())));

    let result = catch_unwind(|| polylog::panicf("code %d", &args![7]));
    let payload = result.unwrap_err();
    assert_eq!(
        payload.downcast_ref::<LogPanic>().map(LogPanic::line),
        Some("[PANIC] code 7\n")
    );

    set_current(previous);
}

#[test]
fn test_current_writer_follows_the_slot() {
    let _guard = CURRENT_GUARD.lock();
    let first = SharedBuffer::new();
    let second = SharedBuffer::new();
    let mut writer = CurrentWriter::new(Level::Error);

    let previous = set_current(Arc::new(WriterLogger::new(first.clone())));
    writer.write_all(b"to first").unwrap();
    set_current(Arc::new(WriterLogger::new(second.clone())));
    writer.write_all(b"to second").unwrap();
    set_current(previous);

    assert_eq!(first.contents(), "[ERROR] to first\n");
    assert_eq!(second.contents(), "[ERROR] to second\n");
}

#[test]
fn test_current_handle_is_a_snapshot() {
    let _guard = CURRENT_GUARD.lock();
    let buf = SharedBuffer::new();
    let previous = set_current(Arc::new(WriterLogger::new(buf.clone())));

    let handle = current();
    set_current(Arc::new(WriterLogger::new(SharedBuffer::new())));
    handle.info(&args!["still here"]);

    set_current(previous);
    assert_eq!(buf.contents(), "[INFO]  still here\n");
}

#[test]
fn test_concurrent_logging_and_reconfiguration() {
    let buf = SharedBuffer::new();
    let logger = Arc::new(WriterLogger::new(buf.clone()));

    let workers: Vec<_> = (0..4)
        .map(|t| {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || {
                for i in 0..100 {
                    logger.warnf("thread %d line %d", &args![t, i]);
                }
            })
        })
        .collect();
    let toggler = {
        let logger = Arc::clone(&logger);
        std::thread::spawn(move || {
            for i in 0..50 {
                logger.set_prefix(if i % 2 == 0 { "even" } else { "odd" });
            }
        })
    };

    for w in workers {
        w.join().unwrap();
    }
    toggler.join().unwrap();

    let out = buf.contents();
    assert_eq!(out.lines().count(), 400);
    assert!(out.lines().all(|l| l.starts_with("[WARN]  ") && l.contains("line ")));
}
