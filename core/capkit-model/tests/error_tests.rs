mod common;

use capkit_model::{EmitError, MultiCapabilityEntity, Producible};
use common::BrokenSink;

#[test]
fn io_error_converts_into_emit_error() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
    let err: EmitError = io.into();
    assert!(matches!(err, EmitError::Io(_)));
}

#[test]
fn display_includes_cause() {
    let m = MultiCapabilityEntity::new("x");
    let err = m.execute_to(&mut BrokenSink).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to write output line"));
    assert!(msg.contains("sink closed"));
}
