//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent between the logging macros,
//! the boundary operations and the tests that assert on captured events.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_BATCH_ID: &str = "batch_id";

// Entity identifiers
pub const FIELD_SHAPE_NAME: &str = "shape_name";
pub const FIELD_SHAPE_TYPE: &str = "shape_type";
pub const FIELD_SNAPSHOT_ID: &str = "snapshot_id";
pub const FIELD_LINE_NUMBER: &str = "line_number";

// Collection sizes
pub const FIELD_SHAPE_COUNT: &str = "shape_count";
pub const FIELD_SNAPSHOT_COUNT: &str = "snapshot_count";
pub const FIELD_APPLIED: &str = "applied";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
