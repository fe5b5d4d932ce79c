//! Exit code constants for the patchsub CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid rules file)
//! - 2: Input failure (a patch file could not be read)
//! - 3: Git operation failure
//! - 4: Output failure (a `.new` artifact could not be written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an invalid rules file.
pub const USER_ERROR: i32 = 1;

/// Input failure: a patch file is missing, unreadable, or not UTF-8.
pub const INPUT_FAILURE: i32 = 2;

/// Git operation failure: format-patch or am failed.
pub const GIT_FAILURE: i32 = 3;

/// Output failure: a rewritten artifact could not be written.
pub const OUTPUT_FAILURE: i32 = 4;
