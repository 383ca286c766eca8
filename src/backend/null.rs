// ── Null backend ──────────────────────────────────────────────────────────────
//
// Used when no native mechanism applies.  Tracks state so callers see the
// same Inactive/Active transitions as on a real backend, but never calls the
// OS.

use super::{Backend, InhibitionState};
use crate::{error::Result, platform::BackendKind};

#[derive(Debug, Default)]
pub struct NullBackend {
    state: InhibitionState,
}

impl NullBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always true.
    pub fn is_supported() -> bool {
        true
    }
}

impl Backend for NullBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Null
    }

    fn state(&self) -> InhibitionState {
        self.state
    }

    fn inhibit(&mut self) -> Result<()> {
        self.state = InhibitionState::Active;
        Ok(())
    }

    fn release(&mut self) {
        self.state = InhibitionState::Inactive;
    }
}
