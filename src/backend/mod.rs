// ── Backends ──────────────────────────────────────────────────────────────────
//
// One state machine per native mechanism.  The facade owns exactly one of
// these behind `Box<dyn Backend>` and forwards every call unchanged.

use crate::{error::Result, platform::BackendKind};

mod execution_state;
mod mac;
mod null;

pub use execution_state::WindowsExecutionState;
pub use mac::{MacAssertion, ASSERTION_TYPE, NO_ASSERTION};
pub use null::NullBackend;

/// Whether a backend currently holds an inhibition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InhibitionState {
    #[default]
    Inactive,
    Active,
}

impl InhibitionState {
    pub fn is_active(self) -> bool {
        self == Self::Active
    }
}

/// Begin/end sleep inhibition against one native mechanism.
///
/// Both operations are idempotent: `inhibit` while active never acquires a
/// second native resource, and `release` while inactive never calls the OS.
pub trait Backend: Send {
    fn kind(&self) -> BackendKind;

    fn state(&self) -> InhibitionState;

    /// Ask the OS to keep the system and display awake.
    ///
    /// On failure the state stays [`InhibitionState::Inactive`] so the call
    /// can be retried.
    fn inhibit(&mut self) -> Result<()>;

    /// Drop any held inhibition.  Never fails.
    fn release(&mut self);
}

impl std::fmt::Debug for dyn Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backend")
            .field("kind", &self.kind())
            .field("state", &self.state())
            .finish()
    }
}
