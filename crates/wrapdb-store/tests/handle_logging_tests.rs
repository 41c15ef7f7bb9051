#![allow(clippy::unwrap_used, clippy::expect_used)]

// Logging emitted by the cached connection handle

use wrapdb_core::errors::{ExError, ExErrorKind};
use wrapdb_core::logging_facility::test_capture::init_test_capture;
use wrapdb_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_HANDLE_ID, OP_CONNECT, OP_INVOKE, OP_RELEASE,
};
use wrapdb_store::entries::insert_entry;
use wrapdb_store::{CachedConnection, StoreConfig};

#[test]
fn test_handle_lifecycle_is_logged() {
    let capture = init_test_capture();
    let mut handle = CachedConnection::new(StoreConfig::in_memory());

    handle.invoke_with(insert_entry, "A").unwrap();
    let handle_id = handle.handle_id().unwrap().to_string();
    let _ = handle.invoke::<(), _>(|_| {
        Err(ExError::new(ExErrorKind::InvalidInput).with_message("bad value"))
    });
    handle.release().unwrap();

    let events = capture.events();
    let for_handle = |op: &str, event: &str| {
        events.iter().any(|e| {
            e.op() == Some(op)
                && e.event() == Some(event)
                && e.field(FIELD_HANDLE_ID) == Some(handle_id.as_str())
        })
    };

    assert!(for_handle(OP_CONNECT, EVENT_END), "connect end logged");
    assert!(for_handle(OP_INVOKE, EVENT_START), "invoke start logged");
    assert!(for_handle(OP_INVOKE, EVENT_END), "invoke end logged");
    assert!(for_handle(OP_INVOKE, EVENT_END_ERROR), "invoke failure logged");
    assert!(for_handle(OP_RELEASE, EVENT_END), "release logged");

    let failure = events
        .iter()
        .find(|e| {
            e.op() == Some(OP_INVOKE)
                && e.event() == Some(EVENT_END_ERROR)
                && e.field(FIELD_HANDLE_ID) == Some(handle_id.as_str())
        })
        .unwrap();
    assert_eq!(failure.field("err_code"), Some("ERR_INVALID_INPUT"));
    assert_eq!(failure.field("err_message"), Some("bad value"));
}
