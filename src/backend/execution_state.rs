// ── Windows execution-state backend ───────────────────────────────────────────
//
// Inactive --inhibit--> Active   SetThreadExecutionState(CONTINUOUS |
//                                SYSTEM_REQUIRED | DISPLAY_REQUIRED)
// Active  --release--> Inactive  SetThreadExecutionState(CONTINUOUS)
//
// There is no handle.  The call is idempotent and its return value is only
// logged.

use tracing::debug;

use super::{Backend, InhibitionState};
use crate::{
    error::{InhibitError, Result},
    platform::{self, BackendKind, ExecutionStateApi, ExecutionStateFlags, SystemPower},
};

/// Keeps the system and display awake via the calling thread's execution
/// state.
///
/// # Thread affinity
///
/// Windows scopes the execution state to the thread that set it, and clears
/// it when that thread exits.  `inhibit` and the matching `release` are
/// expected to run on the same thread; this is not enforced.
#[derive(Debug)]
pub struct WindowsExecutionState<E: ExecutionStateApi = SystemPower> {
    api: E,
    state: InhibitionState,
}

impl WindowsExecutionState {
    /// Whether `SetThreadExecutionState` exists on this host.
    pub fn is_supported() -> bool {
        platform::is_supported(BackendKind::WindowsExecutionState)
    }

    /// A backend bound to the real kernel32.  Fails off Windows.
    pub fn new() -> Result<Self> {
        if !Self::is_supported() {
            return Err(InhibitError::UnsupportedPlatform {
                backend: BackendKind::WindowsExecutionState,
            });
        }
        Ok(Self::with_api(SystemPower))
    }
}

impl<E: ExecutionStateApi> WindowsExecutionState<E> {
    /// A backend calling through `api`, without any host check.
    pub fn with_api(api: E) -> Self {
        Self {
            api,
            state: InhibitionState::Inactive,
        }
    }

    fn set(&self, flags: ExecutionStateFlags) {
        let previous = self.api.set_thread_execution_state(flags);
        debug!(
            flags = flags.bits(),
            previous = previous.bits(),
            "set thread execution state"
        );
    }
}

impl<E: ExecutionStateApi> Backend for WindowsExecutionState<E> {
    fn kind(&self) -> BackendKind {
        BackendKind::WindowsExecutionState
    }

    fn state(&self) -> InhibitionState {
        self.state
    }

    fn inhibit(&mut self) -> Result<()> {
        // Re-asserting is harmless: the flags are replaced, not stacked.
        self.set(ExecutionStateFlags::KEEP_AWAKE);
        self.state = InhibitionState::Active;
        Ok(())
    }

    fn release(&mut self) {
        if self.state == InhibitionState::Inactive {
            return;
        }
        self.set(ExecutionStateFlags::CLEAR);
        self.state = InhibitionState::Inactive;
    }
}

impl<E: ExecutionStateApi> Drop for WindowsExecutionState<E> {
    fn drop(&mut self) {
        self.release();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
