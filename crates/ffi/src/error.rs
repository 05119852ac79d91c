use fwi_core::FwiError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for errors crossing the FFI boundary.
///
/// - `code()` - The error code returned to the caller
/// - `msg()` - The diagnostic message stored for [`fwi_get_last_error`]
pub(crate) trait FfiError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> FwiErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `FfiError`: a code plus a formatted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultFfiError {
    code: FwiErrorCode,
    msg: String,
}

impl DefaultFfiError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"obs"`, `"out_result"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: FwiErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }
}

impl From<FwiError> for DefaultFfiError {
    fn from(error: FwiError) -> Self {
        Self {
            code: FwiErrorCode::from(&error),
            msg: error.to_string(),
        }
    }
}

impl FfiError for DefaultFfiError {
    fn code(&self) -> FwiErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by FWI functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FwiErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// An input or previous code is outside its valid range, or is NaN/infinite.
    OutOfDomain = 2,

    /// Month outside 1-12.
    InvalidMonth = 3,

    /// Hourly time step is not finite and positive.
    InvalidTimeStep = 4,

    /// Invalid parameter passed to function.
    InvalidParameter = 5,
}

impl From<&FwiError> for FwiErrorCode {
    fn from(error: &FwiError) -> Self {
        match error {
            FwiError::OutOfDomain { .. } | FwiError::NonFinite { .. } => FwiErrorCode::OutOfDomain,
            FwiError::InvalidMonth { .. } => FwiErrorCode::InvalidMonth,
            FwiError::InvalidTimeStep { .. } => FwiErrorCode::InvalidTimeStep,
            FwiError::SeriesObservation { source, .. } => FwiErrorCode::from(source.as_ref()),
            FwiError::EmptyThresholds
            | FwiError::InvalidThreshold { .. }
            | FwiError::UnorderedThresholds { .. } => FwiErrorCode::InvalidParameter,
        }
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is owned here so the pointer handed out by `fwi_get_last_error` stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, FwiErrorCode)> = const { RefCell::new((None, FwiErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, FwiErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, FwiErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// FwiDailyResult today;
/// FwiErrorCode err = fwi_run_daily(&yesterday, &obs, NULL, &today);
/// if (err != Ok) {
///     const char* error = fwi_get_last_error();
///     if (error) {
///         printf("FWI failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn fwi_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code on this thread.
///
/// Returns `FwiErrorCode::Ok` (0) if the last call succeeded.
#[no_mangle]
pub extern "C" fn fwi_get_last_error_code() -> FwiErrorCode {
    with_last_error(|(_cstring, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_family_maps_to_out_of_domain() {
        let non_finite = FwiError::NonFinite {
            input: "temperature",
            value: f64::NAN,
        };
        assert_eq!(FwiErrorCode::from(&non_finite), FwiErrorCode::OutOfDomain);
        assert_eq!(
            FwiErrorCode::from(&FwiError::InvalidMonth { month: 0 }),
            FwiErrorCode::InvalidMonth
        );
    }

    #[test]
    fn test_series_error_uses_inner_code() {
        let wrapped = FwiError::SeriesObservation {
            index: 3,
            source: Box::new(FwiError::InvalidMonth { month: 13 }),
        };
        let error = DefaultFfiError::from(wrapped);
        assert_eq!(error.code(), FwiErrorCode::InvalidMonth);
        assert_eq!(
            error.msg(),
            "observation 3 rejected: month must be in 1..=12, got 13"
        );
    }
}
