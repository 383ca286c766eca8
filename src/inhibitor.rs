// ── Sleep-inhibitor facade ────────────────────────────────────────────────────
//
// Picks one backend at construction and forwards to it for its whole life.
// Dropping the facade releases any held inhibition.

use tracing::debug;

use crate::{
    backend::{Backend, InhibitionState, MacAssertion, NullBackend, WindowsExecutionState},
    error::Result,
    platform::{AssertionApi, BackendKind, ExecutionStateApi, HostOs, SystemPower},
};

/// Keeps the host from sleeping, or dimming its display, between
/// [`inhibit`](Self::inhibit) and [`release`](Self::release).
///
/// Construction never fails: on a host with no supported mechanism the
/// facade holds a no-op backend.  The inhibition is released automatically
/// when the facade is dropped.
///
/// A `SleepInhibitor` is not meant to be driven from several threads at
/// once.  On Windows the inhibition is owned by the thread that called
/// `inhibit`, so `release` (and the drop) should happen on that thread too.
///
/// ```no_run
/// use inhibit_sleep::SleepInhibitor;
///
/// let mut inhibitor = SleepInhibitor::new("Nightly backup");
/// inhibitor.inhibit()?;
/// // … long-running work …
/// inhibitor.release();
/// # Ok::<(), inhibit_sleep::InhibitError>(())
/// ```
#[derive(Debug)]
pub struct SleepInhibitor {
    backend: Box<dyn Backend>,
}

impl SleepInhibitor {
    /// Choose a backend for the running host.
    ///
    /// `identifier` labels the assertion where the OS supports it (macOS
    /// shows it in `pmset -g assertions`); it is ignored elsewhere.
    pub fn new(identifier: &str) -> Self {
        Self::for_host(identifier, HostOs::current(), SystemPower)
    }

    /// Choose a backend as if running on `host`, calling the OS through
    /// `api`.
    pub fn for_host<P>(identifier: &str, host: HostOs, api: P) -> Self
    where
        P: AssertionApi + ExecutionStateApi + 'static,
    {
        let kind = BackendKind::select(host);
        let backend: Box<dyn Backend> = match kind {
            BackendKind::MacAssertion => Box::new(MacAssertion::with_api(identifier, api)),
            BackendKind::WindowsExecutionState => Box::new(WindowsExecutionState::with_api(api)),
            BackendKind::Null => Box::new(NullBackend::new()),
        };
        debug!(?host, backend = %kind, identifier, "selected sleep-inhibition backend");
        Self { backend }
    }

    /// The backend chosen at construction.
    pub fn kind(&self) -> BackendKind {
        self.backend.kind()
    }

    pub fn state(&self) -> InhibitionState {
        self.backend.state()
    }

    pub fn is_active(&self) -> bool {
        self.state().is_active()
    }

    /// Start inhibiting sleep.  Calling this while already active does not
    /// acquire a second native resource.
    pub fn inhibit(&mut self) -> Result<()> {
        self.backend.inhibit()
    }

    /// Stop inhibiting sleep.  A no-op when nothing is held.
    pub fn release(&mut self) {
        self.backend.release();
    }
}

impl Drop for SleepInhibitor {
    fn drop(&mut self) {
        if self.backend.state().is_active() {
            debug!(backend = %self.backend.kind(), "releasing sleep inhibition on drop");
            self.backend.release();
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
