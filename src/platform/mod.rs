// ── Platform abstraction layer ────────────────────────────────────────────────
//
// Answers "which native sleep-inhibition mechanism does this host have" and
// defines the narrow seam the backends call through.  No `unsafe` lives here;
// all FFI is confined to the `macos` and `win32` sub-modules and never leaks
// outward.

use std::fmt;

use serde::Serialize;

mod native;

#[cfg(target_os = "macos")]
mod macos;
#[cfg(windows)]
mod win32;

#[cfg(test)]
pub(crate) mod fake;

pub use native::{AssertionApi, AssertionLevel, ExecutionStateApi, ExecutionStateFlags, SystemPower};

// ── Host identity ─────────────────────────────────────────────────────────────

/// Operating-system family, as far as sleep inhibition is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HostOs {
    MacOs,
    Windows,
    /// Anything else (Linux, the BSDs, …).  Only the null backend applies.
    Other,
}

impl HostOs {
    /// The OS this binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(windows) {
            Self::Windows
        } else {
            Self::Other
        }
    }
}

// ── Backend kind ──────────────────────────────────────────────────────────────

/// Which backend a facade chose.  Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// IOKit power assertion (`NoDisplaySleepAssertion`).
    MacAssertion,
    /// `SetThreadExecutionState` with system + display required.
    WindowsExecutionState,
    /// No native mechanism; every call is a no-op.
    Null,
}

impl BackendKind {
    /// Selection priority used by the facade.
    pub const PRIORITY: [BackendKind; 3] = [
        BackendKind::MacAssertion,
        BackendKind::WindowsExecutionState,
        BackendKind::Null,
    ];

    /// Stable lowercase name, also used when serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MacAssertion => "mac-assertion",
            Self::WindowsExecutionState => "windows-execution-state",
            Self::Null => "null",
        }
    }

    /// First backend in [`Self::PRIORITY`] that `host` supports.
    pub fn select(host: HostOs) -> Self {
        Self::PRIORITY
            .into_iter()
            .find(|&kind| is_supported_on(kind, host))
            .unwrap_or(Self::Null)
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Capability detection ──────────────────────────────────────────────────────

/// Is `kind` usable on the running host?
///
/// Pure and side-effect free; callable before any backend exists, e.g. as a
/// pre-flight check before constructing a [`SleepInhibitor`].
///
/// [`SleepInhibitor`]: crate::SleepInhibitor
pub fn is_supported(kind: BackendKind) -> bool {
    is_supported_on(kind, HostOs::current())
}

/// Is `kind` usable on `host`?  OS family is the only criterion.
pub fn is_supported_on(kind: BackendKind, host: HostOs) -> bool {
    match kind {
        BackendKind::MacAssertion => host == HostOs::MacOs,
        BackendKind::WindowsExecutionState => host == HostOs::Windows,
        BackendKind::Null => true,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
