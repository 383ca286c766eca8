// ── IOKit / CoreFoundation bindings ───────────────────────────────────────────
//
// One of exactly two modules where `unsafe` is permitted (the other is
// `platform::win32`).  Every `unsafe` block carries a `// SAFETY:` comment.

#![allow(unsafe_code)]

use std::{
    ffi::{c_char, c_void, CString},
    ptr,
};

type CFStringRef = *const c_void;
type CFAllocatorRef = *const c_void;

/// `kCFStringEncodingUTF8`.
const CF_STRING_ENCODING_UTF8: u32 = 0x0800_0100;

/// `kIOReturnError`, reported when a CFString cannot be built.
const IO_RETURN_ERROR: i32 = 0xE000_02BC_u32 as i32;

#[link(name = "IOKit", kind = "framework")]
extern "C" {
    fn IOPMAssertionCreateWithName(
        assertion_type: CFStringRef,
        level: u32,
        assertion_name: CFStringRef,
        assertion_id: *mut u32,
    ) -> i32;

    fn IOPMAssertionRelease(assertion_id: u32) -> i32;
}

#[link(name = "CoreFoundation", kind = "framework")]
extern "C" {
    fn CFStringCreateWithCString(
        alloc: CFAllocatorRef,
        c_str: *const c_char,
        encoding: u32,
    ) -> CFStringRef;

    fn CFRelease(cf: *const c_void);
}

// ── Owned CFString ────────────────────────────────────────────────────────────

/// A `CFStringRef` we created and must `CFRelease`.
struct CfString(CFStringRef);

impl CfString {
    /// Interior NUL bytes are dropped; CFString cannot carry them through a C
    /// string.
    fn new(s: &str) -> Option<Self> {
        let c = CString::new(s.replace('\0', "")).ok()?;
        // SAFETY: `c` is a valid NUL-terminated UTF-8 buffer that outlives the
        // call; a null allocator selects the default allocator.
        let r = unsafe { CFStringCreateWithCString(ptr::null(), c.as_ptr(), CF_STRING_ENCODING_UTF8) };
        if r.is_null() {
            None
        } else {
            Some(Self(r))
        }
    }
}

impl Drop for CfString {
    fn drop(&mut self) {
        // SAFETY: `self.0` is non-null and was returned by a CF "Create"
        // function, so we own exactly one reference to it.
        unsafe { CFRelease(self.0) }
    }
}

// ── Assertions ────────────────────────────────────────────────────────────────

pub(super) fn create_assertion(assertion_type: &str, level: u32, name: &str) -> Result<u32, i32> {
    let (Some(kind), Some(label)) = (CfString::new(assertion_type), CfString::new(name)) else {
        return Err(IO_RETURN_ERROR);
    };

    let mut id = 0u32;
    // SAFETY: both CFStrings are live for the duration of the call (IOKit
    // retains what it keeps), and `id` is a valid out-pointer.
    let status = unsafe { IOPMAssertionCreateWithName(kind.0, level, label.0, &mut id) };
    if status == 0 {
        Ok(id)
    } else {
        Err(status)
    }
}

pub(super) fn release_assertion(assertion_id: u32) -> i32 {
    // SAFETY: takes a plain integer id; an unknown id yields an error status,
    // not undefined behaviour.
    unsafe { IOPMAssertionRelease(assertion_id) }
}
