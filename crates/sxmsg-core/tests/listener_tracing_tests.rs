#![allow(clippy::unwrap_used, clippy::expect_used)]

use sxmsg_core::logging_facility::test_capture::{init_test_capture, CapturedEvent, TestCapture};
use sxmsg_core::{MessageListener, MessageNode, RootPackage, SourceLocation, TracingSink};
use sxmsg_core_types::schema::{TARGET_LISTENER, TARGET_MESSAGE};
use tracing::Level;

fn dispatched(capture: &TestCapture, logger: &str) -> Vec<CapturedEvent> {
    capture
        .events_for_logger(logger)
        .into_iter()
        .filter(|e| e.target == TARGET_MESSAGE)
        .collect()
}

fn leveled(level: &str, text: &str) -> MessageNode {
    MessageNode::document(vec![MessageNode::element(
        "message",
        vec![MessageNode::text(text)],
    )
    .with_attribute("level", level)])
}

#[test]
fn test_plain_text_trimmed_to_root_package() {
    let capture = init_test_capture();
    let listener = MessageListener::new(RootPackage::new("tracing1"), TracingSink);
    let content = MessageNode::document(vec![MessageNode::text("hello")]);
    let location = SourceLocation::from_public_id("/opt/project/src/main/xsl/tracing1/bar.xsl");

    listener.message(&content, false, &location).unwrap();

    let events = dispatched(&capture, "tracing1.bar.xsl");
    assert_eq!(events.len(), 1, "Should have exactly one message event");
    assert_eq!(events[0].level, Level::INFO);
    assert_eq!(events[0].message.as_deref(), Some("hello"));
}

#[test]
fn test_plain_text_terminate_is_prefixed() {
    let capture = init_test_capture();
    let listener = MessageListener::new(RootPackage::none(), TracingSink);
    let content = MessageNode::document(vec![MessageNode::text("hello")]);

    listener
        .message(&content, true, &SourceLocation::from_public_id("tracing2/stop.xsl"))
        .unwrap();

    let events = dispatched(&capture, "tracing2.stop.xsl");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::INFO);
    assert_eq!(events[0].message.as_deref(), Some("[TERMINATE] hello"));
}

#[test]
fn test_each_keyword_maps_to_tracing_level() {
    let capture = init_test_capture();
    let listener = MessageListener::new(RootPackage::none(), TracingSink);
    let location = SourceLocation::from_public_id("/tracing3/levels.xsl");

    let cases = [
        ("trace", Level::TRACE),
        ("debug", Level::DEBUG),
        ("info", Level::INFO),
        ("warn", Level::WARN),
        ("error", Level::ERROR),
    ];
    for (keyword, _) in cases {
        listener
            .message(&leveled(keyword, keyword), false, &location)
            .unwrap();
    }

    let events = dispatched(&capture, "tracing3.levels.xsl");
    assert_eq!(events.len(), cases.len());
    for (keyword, level) in cases {
        let event = events
            .iter()
            .find(|e| e.message.as_deref() == Some(keyword))
            .expect("Should have an event per keyword");
        assert_eq!(event.level, level, "Wrong level for {}", keyword);
    }
}

#[test]
fn test_unrecognized_level_dispatches_nothing() {
    let capture = init_test_capture();
    let listener = MessageListener::new(RootPackage::none(), TracingSink);
    let location = SourceLocation::from_public_id("/tracing4/drop.xsl");

    listener
        .message(&leveled("critical", "lost"), false, &location)
        .unwrap();

    assert!(dispatched(&capture, "tracing4.drop.xsl").is_empty());

    let diagnostics = capture.count_events(|e| {
        e.target == TARGET_LISTENER
            && e.logger.as_deref() == Some("tracing4.drop.xsl")
            && e.fields.get("err_code").map(String::as_str) == Some("ERR_UNRECOGNIZED_SEVERITY")
    });
    assert_eq!(diagnostics, 1, "Dropped message should leave one diagnostic");
}

#[test]
fn test_root_package_not_found_keeps_full_name() {
    let capture = init_test_capture();
    let listener = MessageListener::new(RootPackage::new("com.absent"), TracingSink);

    listener
        .message(
            &leveled("warn", "careful"),
            false,
            &SourceLocation::from_public_id("//tracing5//deep/w.xsl"),
        )
        .unwrap();

    let events = dispatched(&capture, "tracing5.deep.w.xsl");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::WARN);
}

#[test]
fn test_system_id_used_without_public_id() {
    let capture = init_test_capture();
    let listener = MessageListener::new(RootPackage::new("tracing6"), TracingSink);

    listener
        .message(
            &MessageNode::document(vec![MessageNode::text("from system id")]),
            false,
            &SourceLocation::from_system_id("/var/xsl/tracing6/sys.xsl"),
        )
        .unwrap();

    assert_eq!(dispatched(&capture, "tracing6.sys.xsl").len(), 1);
}
