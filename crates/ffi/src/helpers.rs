use crate::error::{with_last_error_mut, DefaultTvError, TvError, TvErrorCode};
use std::ffi::CString;

/// Set the thread-local error message and code.
/// Accepts any type implementing `TvError` trait.
pub(crate) fn set_last_error(error: &impl TvError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl TvError) -> TvErrorCode {
    tracing::debug!(code = ?error.code(), msg = error.msg(), "FFI call failed");
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful operations so a stale message is never reported.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = TvErrorCode::Ok;
    });
}

/// Record the error of a failed result, passing the value through on success.
pub(crate) fn track_result<T, E: TvError>(result: Result<T, E>) -> Result<T, TvErrorCode> {
    match result {
        Ok(value) => {
            clear_last_error();
            Ok(value)
        }
        Err(error) => Err(track_error(&error)),
    }
}

/// Run an FFI body and collapse its result into an error code.
pub(crate) fn handle_ffi_result_error<F, E>(f: F) -> TvErrorCode
where
    F: FnOnce() -> Result<(), E>,
    E: TvError,
{
    match track_result(f()) {
        Ok(()) => TvErrorCode::Ok,
        Err(code) => code,
    }
}

/// Borrow an opaque handle.
///
/// # Safety
/// `ptr` must be null or a live pointer produced by this library.
pub(crate) unsafe fn instance_from_ptr<'a, T>(
    ptr: *const T,
    name: &str,
) -> Result<&'a T, DefaultTvError> {
    unsafe { ptr.as_ref() }.ok_or_else(|| DefaultTvError::null_pointer(name))
}

/// Mutably borrow an opaque handle.
///
/// # Safety
/// `ptr` must be null or a live pointer produced by this library, with no
/// other borrow active.
pub(crate) unsafe fn instance_from_mut_ptr<'a, T>(
    ptr: *mut T,
    name: &str,
) -> Result<&'a mut T, DefaultTvError> {
    unsafe { ptr.as_mut() }.ok_or_else(|| DefaultTvError::null_pointer(name))
}

/// Write through an out-pointer, reporting null as an error.
///
/// # Safety
/// `out` must be null or valid for a write of `T`.
pub(crate) unsafe fn write_out<T>(
    out: *mut T,
    name: &str,
    value: T,
) -> Result<(), DefaultTvError> {
    if out.is_null() {
        return Err(DefaultTvError::null_pointer(name));
    }
    unsafe {
        out.write(value);
    }
    Ok(())
}
