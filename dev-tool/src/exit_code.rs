/// The command finished successfully.
pub const NO_ERROR: i32 = 0;

/// The command failed on invalid arguments and can be retried with different ones.
pub const NON_FATAL_ERROR: i32 = 1;

/// The command failed.
pub const FATAL_ERROR: i32 = 2;
