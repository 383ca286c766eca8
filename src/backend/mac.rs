// ── macOS power-assertion backend ─────────────────────────────────────────────
//
// Inactive --inhibit--> Active   create a named "NoDisplaySleepAssertion",
//                                keep the returned id
// Active  --release--> Inactive  release that id, reset to NO_ASSERTION

use tracing::{debug, warn};

use super::{Backend, InhibitionState};
use crate::{
    error::{InhibitError, Result},
    platform::{self, AssertionApi, AssertionLevel, BackendKind, SystemPower},
};

/// IOKit assertion type that keeps both the system and the display awake.
pub const ASSERTION_TYPE: &str = "NoDisplaySleepAssertion";

/// Assertion id meaning "no assertion held".
pub const NO_ASSERTION: u32 = 0;

/// Holds at most one IOKit power assertion, labelled with a caller-supplied
/// name that shows up in `pmset -g assertions`.
#[derive(Debug)]
pub struct MacAssertion<A: AssertionApi = SystemPower> {
    api: A,
    name: String,
    assertion_id: u32,
}

impl MacAssertion {
    /// Whether IOKit power assertions exist on this host.
    pub fn is_supported() -> bool {
        platform::is_supported(BackendKind::MacAssertion)
    }

    /// A backend bound to the real IOKit.  Fails off macOS.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        if !Self::is_supported() {
            return Err(InhibitError::UnsupportedPlatform {
                backend: BackendKind::MacAssertion,
            });
        }
        Ok(Self::with_api(name, SystemPower))
    }
}

impl<A: AssertionApi> MacAssertion<A> {
    /// A backend calling through `api`, without any host check.
    pub fn with_api(name: impl Into<String>, api: A) -> Self {
        Self {
            api,
            name: name.into(),
            assertion_id: NO_ASSERTION,
        }
    }

    /// The label attached to the assertion.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The live assertion id, or [`NO_ASSERTION`].
    pub fn assertion_id(&self) -> u32 {
        self.assertion_id
    }
}

impl<A: AssertionApi> Backend for MacAssertion<A> {
    fn kind(&self) -> BackendKind {
        BackendKind::MacAssertion
    }

    fn state(&self) -> InhibitionState {
        if self.assertion_id == NO_ASSERTION {
            InhibitionState::Inactive
        } else {
            InhibitionState::Active
        }
    }

    fn inhibit(&mut self) -> Result<()> {
        if self.assertion_id != NO_ASSERTION {
            debug!(assertion_id = self.assertion_id, "power assertion already held");
            return Ok(());
        }

        match self
            .api
            .create_assertion(ASSERTION_TYPE, AssertionLevel::On, &self.name)
        {
            Ok(id) => {
                self.assertion_id = id;
                debug!(assertion_id = id, name = %self.name, "created power assertion");
                Ok(())
            }
            Err(code) => {
                warn!(code, name = %self.name, "IOPMAssertionCreateWithName failed");
                Err(InhibitError::NativeCallFailed {
                    function: "IOPMAssertionCreateWithName",
                    code,
                })
            }
        }
    }

    fn release(&mut self) {
        if self.assertion_id == NO_ASSERTION {
            return;
        }

        let id = std::mem::replace(&mut self.assertion_id, NO_ASSERTION);
        let status = self.api.release_assertion(id);
        if status == 0 {
            debug!(assertion_id = id, "released power assertion");
        } else {
            warn!(assertion_id = id, status, "IOPMAssertionRelease failed");
        }
    }
}

impl<A: AssertionApi> Drop for MacAssertion<A> {
    fn drop(&mut self) {
        self.release();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::fake::{Call, RecordingApi};

    #[test]
    fn inhibit_creates_named_assertion_and_release_resets_handle() {
        let api = RecordingApi::starting_at(42);
        let mut mac = MacAssertion::with_api("TestApp", api.clone());

        mac.inhibit().expect("inhibit");
        assert_eq!(mac.assertion_id(), 42);
        assert_eq!(mac.state(), InhibitionState::Active);

        mac.release();
        assert_eq!(mac.assertion_id(), NO_ASSERTION);
        assert_eq!(mac.state(), InhibitionState::Inactive);

        assert_eq!(
            api.calls(),
            vec![
                Call::Create {
                    assertion_type: "NoDisplaySleepAssertion".to_owned(),
                    level: AssertionLevel::On,
                    name: "TestApp".to_owned(),
                },
                Call::Release(42),
            ]
        );
    }

    #[test]
    fn second_inhibit_does_not_create_again() {
        let api = RecordingApi::new();
        let mut mac = MacAssertion::with_api("TestApp", api.clone());

        mac.inhibit().expect("first");
        mac.inhibit().expect("second");

        assert_eq!(api.calls().len(), 1);
        assert_eq!(api.live_assertions(), vec![mac.assertion_id()]);
    }

    #[test]
    fn release_without_assertion_skips_native_call() {
        let api = RecordingApi::new();
        let mut mac = MacAssertion::with_api("TestApp", api.clone());
        mac.release();
        mac.release();
        assert!(api.calls().is_empty());
    }

    #[test]
    fn failed_create_surfaces_error_and_allows_retry() {
        let api = RecordingApi::starting_at(7);
        api.fail_create_with(Some(0xE00002C2_u32 as i32));
        let mut mac = MacAssertion::with_api("TestApp", api.clone());

        let err = mac.inhibit().expect_err("create should fail");
        assert!(matches!(
            err,
            InhibitError::NativeCallFailed {
                function: "IOPMAssertionCreateWithName",
                code,
            } if code == 0xE00002C2_u32 as i32
        ));
        assert_eq!(mac.state(), InhibitionState::Inactive);
        assert_eq!(mac.assertion_id(), NO_ASSERTION);

        // A release after the failure must not touch the OS.
        mac.release();
        assert_eq!(api.calls().len(), 1);

        api.fail_create_with(None);
        mac.inhibit().expect("retry");
        assert_eq!(mac.assertion_id(), 7);
    }

    #[test]
    fn drop_releases_a_held_assertion() {
        let api = RecordingApi::starting_at(9);
        {
            let mut mac = MacAssertion::with_api("TestApp", api.clone());
            mac.inhibit().expect("inhibit");
        }
        assert_eq!(api.calls().last(), Some(&Call::Release(9)));
        assert!(api.live_assertions().is_empty());
    }

    #[test]
    fn direct_construction_checks_the_host() {
        let result = MacAssertion::new("TestApp");
        if cfg!(target_os = "macos") {
            assert!(result.is_ok());
        } else {
            assert!(matches!(
                result,
                Err(InhibitError::UnsupportedPlatform {
                    backend: BackendKind::MacAssertion
                })
            ));
        }
    }
}
