// ── Safety policy ────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except:
//   • `platform::macos` – IOKit / CoreFoundation FFI
//   • `platform::win32` – kernel32 FFI
// Each unsafe block in those modules MUST carry a `// SAFETY:` comment.
#![deny(unsafe_code)]

//! Keep the host awake for as long as you ask, then let it sleep again.
//!
//! [`SleepInhibitor`] picks the native mechanism for the running OS (an IOKit
//! power assertion on macOS, the thread execution state on Windows, nothing
//! elsewhere) and releases it when dropped.

pub mod backend;
pub mod config;
pub mod error;
pub mod platform;

mod inhibitor;

pub use backend::{Backend, InhibitionState};
pub use error::{InhibitError, Result};
pub use inhibitor::SleepInhibitor;
pub use platform::{is_supported, BackendKind, ExecutionStateFlags, HostOs};
