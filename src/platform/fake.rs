// ── Recording fake for the native-call seam ───────────────────────────────────
//
// Test-only.  Records every native call, and the thread it came from, so
// backend state machines can be checked against a simulated host.

use std::{
    sync::{Arc, Mutex, MutexGuard},
    thread::{self, ThreadId},
};

use super::{AssertionApi, AssertionLevel, ExecutionStateApi, ExecutionStateFlags};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Create {
        assertion_type: String,
        level: AssertionLevel,
        name: String,
    },
    Release(u32),
    SetExecutionState(ExecutionStateFlags),
}

#[derive(Debug, Default)]
struct Log {
    calls: Vec<(Call, ThreadId)>,
    next_id: u32,
    create_failure: Option<i32>,
    live: Vec<u32>,
    previous_state: ExecutionStateFlags,
}

/// Clones share one log, so a test can keep a handle after moving the fake
/// into a backend.
#[derive(Debug, Clone)]
pub(crate) struct RecordingApi(Arc<Mutex<Log>>);

impl RecordingApi {
    pub(crate) fn new() -> Self {
        Self::starting_at(1)
    }

    /// Assertion ids are handed out from `first_id` upwards.
    pub(crate) fn starting_at(first_id: u32) -> Self {
        Self(Arc::new(Mutex::new(Log {
            next_id: first_id,
            ..Log::default()
        })))
    }

    /// Make every following create call fail with `status`; `None` restores
    /// success.
    pub(crate) fn fail_create_with(&self, status: Option<i32>) {
        self.log().create_failure = status;
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.log().calls.iter().map(|(c, _)| c.clone()).collect()
    }

    pub(crate) fn threads(&self) -> Vec<ThreadId> {
        self.log().calls.iter().map(|(_, t)| *t).collect()
    }

    /// Assertion ids created and not yet released.
    pub(crate) fn live_assertions(&self) -> Vec<u32> {
        self.log().live.clone()
    }

    fn log(&self) -> MutexGuard<'_, Log> {
        self.0.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(log: &mut Log, call: Call) {
        log.calls.push((call, thread::current().id()));
    }
}

impl AssertionApi for RecordingApi {
    fn create_assertion(
        &self,
        assertion_type: &str,
        level: AssertionLevel,
        name: &str,
    ) -> Result<u32, i32> {
        let mut log = self.log();
        Self::record(
            &mut log,
            Call::Create {
                assertion_type: assertion_type.to_owned(),
                level,
                name: name.to_owned(),
            },
        );
        if let Some(status) = log.create_failure {
            return Err(status);
        }
        let id = log.next_id;
        log.next_id += 1;
        log.live.push(id);
        Ok(id)
    }

    fn release_assertion(&self, assertion_id: u32) -> i32 {
        let mut log = self.log();
        Self::record(&mut log, Call::Release(assertion_id));
        log.live.retain(|&id| id != assertion_id);
        0
    }
}

impl ExecutionStateApi for RecordingApi {
    fn set_thread_execution_state(&self, flags: ExecutionStateFlags) -> ExecutionStateFlags {
        let mut log = self.log();
        Self::record(&mut log, Call::SetExecutionState(flags));
        std::mem::replace(&mut log.previous_state, flags)
    }
}
