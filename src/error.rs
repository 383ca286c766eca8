// ── Central error type ────────────────────────────────────────────────────────
//
// Fallible operations return `error::Result<T>`.  Only `inhibit()` and the
// platform-specific backend constructors can fail; `release()` never does.

use thiserror::Error;

use crate::platform::BackendKind;

/// Every error that inhibit-sleep can produce.
#[derive(Debug, Error)]
pub enum InhibitError {
    /// A platform-specific backend was constructed directly on a host that
    /// lacks its native mechanism.  The facade never returns this; it falls
    /// back to the null backend instead.
    #[error("the {backend} backend is not supported on this operating system")]
    UnsupportedPlatform {
        /// The backend the caller asked for.
        backend: BackendKind,
    },

    /// A native power-management call reported failure.
    #[error("{function} failed (status {code:#010x})")]
    NativeCallFailed {
        /// The name of the failing function, for display purposes.
        function: &'static str,
        /// The raw status code (an `IOReturn` on macOS).
        code: i32,
    },

    /// Reading a settings file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A settings file was not valid JSON for `Settings`.
    #[error("invalid settings: {0}")]
    Config(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, InhibitError>;
