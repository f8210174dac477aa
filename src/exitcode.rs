// src/exitcode.rs
//! Process exit codes, following BSD sysexits where one applies.

/// Successful termination.
pub const SUCCESS: i32 = 0;

/// The command itself failed: unknown alias, duplicate alias, vanished
/// directory, or an unreadable store.
pub const FAILURE: i32 = 1;

/// The command was used incorrectly, e.g. a required argument was missing.
pub const USAGE: i32 = 64;
