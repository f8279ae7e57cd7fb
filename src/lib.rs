//! Content security guard for Claude Code file writes.
//!
//! Inspects text about to be written by the Write/Edit tools and flags
//! dangerous dynamic-execution constructs and likely hard-coded secrets.
//! The binary (`csg`) wires these modules to the `PreToolUse` hook protocol;
//! the library exposes them for tests and fuzzing.

#![forbid(unsafe_code)]

pub mod hook;
pub mod inspector;
