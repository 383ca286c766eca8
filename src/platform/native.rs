// ── Native-call seam ──────────────────────────────────────────────────────────
//
// The backends never call the OS directly.  They go through these two traits,
// which mirror the native entry points one-to-one, so the handle lifecycle
// and idempotency logic can be exercised without touching the OS.

use std::ops::BitOr;

// ── macOS power assertions ────────────────────────────────────────────────────

/// `IOPMAssertionLevel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum AssertionLevel {
    Off = 0x00,
    On = 0xFF,
}

/// IOKit power-assertion entry points.
pub trait AssertionApi: Send {
    /// `IOPMAssertionCreateWithName`.  `Ok` carries the new assertion id,
    /// `Err` the non-zero `IOReturn` status.
    fn create_assertion(
        &self,
        assertion_type: &str,
        level: AssertionLevel,
        name: &str,
    ) -> Result<u32, i32>;

    /// `IOPMAssertionRelease`.  Returns the `IOReturn` status.
    fn release_assertion(&self, assertion_id: u32) -> i32;
}

// ── Windows execution state ───────────────────────────────────────────────────

/// `EXECUTION_STATE` bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ExecutionStateFlags(pub u32);

impl ExecutionStateFlags {
    pub const CONTINUOUS: Self = Self(0x8000_0000);
    pub const SYSTEM_REQUIRED: Self = Self(0x0000_0001);
    pub const DISPLAY_REQUIRED: Self = Self(0x0000_0002);

    /// Keep both the system and the display awake until told otherwise.
    pub const KEEP_AWAKE: Self =
        Self(Self::CONTINUOUS.0 | Self::SYSTEM_REQUIRED.0 | Self::DISPLAY_REQUIRED.0);

    /// Clear any previous override.
    pub const CLEAR: Self = Self::CONTINUOUS;

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ExecutionStateFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Kernel32 execution-state entry point.
pub trait ExecutionStateApi: Send {
    /// `SetThreadExecutionState`.  Returns the previous state, or zero on
    /// failure; callers treat it as advisory only.
    fn set_thread_execution_state(&self, flags: ExecutionStateFlags) -> ExecutionStateFlags;
}

// ── Real implementation ───────────────────────────────────────────────────────

/// Calls straight into the host OS.
///
/// Each method only does real work on its own platform.  Elsewhere it reports
/// failure without side effects; the facade never routes calls there.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPower;

/// `kIOReturnUnsupported`.
#[cfg(not(target_os = "macos"))]
const IO_RETURN_UNSUPPORTED: i32 = 0xE000_02C7_u32 as i32;

impl AssertionApi for SystemPower {
    #[cfg(target_os = "macos")]
    fn create_assertion(
        &self,
        assertion_type: &str,
        level: AssertionLevel,
        name: &str,
    ) -> Result<u32, i32> {
        super::macos::create_assertion(assertion_type, level as u32, name)
    }

    #[cfg(not(target_os = "macos"))]
    fn create_assertion(&self, _: &str, _: AssertionLevel, _: &str) -> Result<u32, i32> {
        Err(IO_RETURN_UNSUPPORTED)
    }

    #[cfg(target_os = "macos")]
    fn release_assertion(&self, assertion_id: u32) -> i32 {
        super::macos::release_assertion(assertion_id)
    }

    #[cfg(not(target_os = "macos"))]
    fn release_assertion(&self, _: u32) -> i32 {
        IO_RETURN_UNSUPPORTED
    }
}

impl ExecutionStateApi for SystemPower {
    #[cfg(windows)]
    fn set_thread_execution_state(&self, flags: ExecutionStateFlags) -> ExecutionStateFlags {
        ExecutionStateFlags(super::win32::set_thread_execution_state(flags.bits()))
    }

    #[cfg(not(windows))]
    fn set_thread_execution_state(&self, _: ExecutionStateFlags) -> ExecutionStateFlags {
        ExecutionStateFlags::default()
    }
}
