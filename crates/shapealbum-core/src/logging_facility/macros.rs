//! Album boundary logging
//!
//! `Album` mutations and `CommandInterpreter` batches each log one `start`
//! and then exactly one of `end` or `end_error`. Field names come from
//! `shapealbum_core_types::schema`; the store and snapshot engine below the
//! boundary log at `debug` only.

/// Log the start of an album mutation or a command batch
///
/// Shape operations pass `shape_name` (and `shape_type` when adding), a
/// batch passes its `batch_id`, and `reset` passes the counts it is about
/// to drop.
///
/// # Example
///
/// ```
/// # use shapealbum_core::log_op_start;
/// log_op_start!("take_snapshot");
/// log_op_start!("add_shape", shape_name = "R", shape_type = "rectangle");
/// log_op_start!("reset", shape_count = 2, snapshot_count = 1);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = shapealbum_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = shapealbum_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log that an album mutation or batch finished without error
///
/// `duration_ms` is always first. Shape operations repeat `shape_name` so
/// the pair can be joined; `take_snapshot` reports the new `snapshot_id`
/// and a batch its `applied` count.
///
/// # Example
///
/// ```
/// # use shapealbum_core::log_op_end;
/// log_op_end!("move_shape", duration_ms = 0, shape_name = "R");
/// log_op_end!("take_snapshot", duration_ms = 1, snapshot_id = "2026-10-16T08:30:00.000000-1");
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = shapealbum_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = shapealbum_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log a rejected shape edit or a halted batch
///
/// The error is converted to `SaError` so `err_kind` and the stable
/// `err_code` (`ERR_UNKNOWN_SHAPE`, `ERR_BATCH_HALTED`, ...) are attached.
/// A halted batch adds the failing `line_number`.
///
/// # Example
///
/// ```
/// # use shapealbum_core::{log_op_error, errors::AlbumError};
/// let err = AlbumError::UnknownShape { name: "R".to_string() };
/// log_op_error!("move_shape", err, duration_ms = 1, shape_name = "R");
///
/// let err = AlbumError::InvalidDimension { first: 0.0, second: 4.0 };
/// log_op_error!("resize_shape", err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::SaError;
        let sa_err: SaError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = shapealbum_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?sa_err.kind(),
            err_code = sa_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::SaError;
        let sa_err: SaError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = shapealbum_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?sa_err.kind(),
            err_code = sa_err.code(),
            $($field)*
        );
    }};
}
