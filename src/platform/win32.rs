// ── Win32 bindings ────────────────────────────────────────────────────────────
//
// One of exactly two modules where `unsafe` is permitted (the other is
// `platform::macos`).  Every `unsafe` block carries a `// SAFETY:` comment.

#![allow(unsafe_code)]

use windows::Win32::System::Power::{SetThreadExecutionState, EXECUTION_STATE};

/// Returns the previous execution state, or zero on failure.
///
/// The setting belongs to the calling thread: pairs of calls must be made
/// from the same thread.
pub(super) fn set_thread_execution_state(flags: u32) -> u32 {
    // SAFETY: takes a plain bitmask by value and touches no caller memory.
    let previous = unsafe { SetThreadExecutionState(EXECUTION_STATE(flags)) };
    previous.0
}
