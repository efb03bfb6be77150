//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent across log events and error reports.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Journal identifiers
pub const FIELD_DOCUMENT: &str = "document";
pub const FIELD_SCOPE: &str = "scope";
pub const FIELD_FIELD: &str = "field";

// Collection sizes
pub const FIELD_MATCHED: &str = "matched";
pub const FIELD_BYTES: &str = "bytes";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
