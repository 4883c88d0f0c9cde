//! Request fixtures for integration tests

use serde_json::{json, Value};

/// Epoch-seconds timestamp used by all fixtures
pub const TEST_EPOCH: i64 = 1_700_000_000;

/// A feedback creation payload
pub fn feedback_payload(grade: i32) -> Value {
    json!({
        "source": "10.1.0.1",
        "text": "Awesome backend",
        "grade": grade,
        "datetime": TEST_EPOCH,
    })
}

/// A comment creation payload against the given feedback id
pub fn comment_payload(target: i64) -> Value {
    json!({
        "target": target,
        "source": "10.1.0.2",
        "text": "Agreed",
        "datetime": TEST_EPOCH,
    })
}

/// A reaction payload with a numeric value
pub fn reaction_payload(value: i64) -> Value {
    json!({
        "value": value,
        "source": "10.1.0.3",
        "datetime": TEST_EPOCH,
    })
}

/// A reaction payload with the value given as a string, as some clients send it
pub fn reaction_payload_str(value: &str) -> Value {
    json!({
        "value": value,
        "source": "10.1.0.3",
        "datetime": TEST_EPOCH,
    })
}
