use crate::error::{with_last_error_mut, DefaultFfiError, FfiError, FwiErrorCode};
use fwi_core::FwiError;
use std::ffi::CString;

/// Set the thread-local error message and code.
/// Accepts any type implementing `FfiError` trait.
pub(crate) fn set_last_error(error: &impl FfiError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl FfiError) -> FwiErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = FwiErrorCode::Ok;
    });
}

/// Write a successful value to `out` or record the engine error.
///
/// # Safety
/// `out` must be a valid, non-null, writable pointer to `T`.
pub(crate) unsafe fn write_result<T>(result: Result<T, FwiError>, out: *mut T) -> FwiErrorCode {
    match result {
        Ok(value) => {
            unsafe {
                *out = value;
            }
            clear_last_error();
            FwiErrorCode::Ok
        }
        Err(e) => track_error(&DefaultFfiError::from(e)),
    }
}

/// Borrow a required input pointer, recording a null-pointer error if it is null.
///
/// # Safety
/// `ptr` must be null or point to a valid, initialised `T` for the returned lifetime.
pub(crate) unsafe fn required<'a, T>(ptr: *const T, name: &str) -> Result<&'a T, FwiErrorCode> {
    unsafe { ptr.as_ref() }.ok_or_else(|| track_error(&DefaultFfiError::null_pointer(name)))
}
