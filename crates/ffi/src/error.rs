use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;
use transparent_view_core::SceneError;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait TvError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> TvErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `TvError` for the errors this library raises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultTvError {
    code: TvErrorCode,
    msg: String,
}

impl DefaultTvError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out_scene"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: TvErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for an invalid argument.
    pub fn invalid_parameter(message: String) -> Self {
        Self {
            code: TvErrorCode::InvalidParameter,
            msg: message,
        }
    }

    /// Create error for a scene description that failed to parse or validate.
    pub fn invalid_config(error: &SceneError) -> Self {
        Self {
            code: TvErrorCode::InvalidConfig,
            msg: error.to_string(),
        }
    }

    /// Create error for a caller-provided buffer that cannot hold the output.
    ///
    /// # Arguments
    /// * `param_name` - The buffer parameter (e.g., `"out_vertices"`)
    /// * `required` - Elements needed
    /// * `provided` - Elements the caller declared
    pub fn buffer_too_small(param_name: &str, required: usize, provided: usize) -> Self {
        Self {
            code: TvErrorCode::BufferTooSmall,
            msg: format!("Buffer '{param_name}' holds {provided} elements, {required} required"),
        }
    }
}

impl TvError for DefaultTvError {
    fn code(&self) -> TvErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by transparent view functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TvErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Invalid parameter passed to function.
    InvalidParameter = 2,

    /// Scene description could not be parsed or failed validation.
    InvalidConfig = 3,

    /// Output buffer shorter than the data to be written.
    BufferTooSmall = 4,
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is kept alive here so the pointer handed out stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, TvErrorCode)> = const { RefCell::new((None, TvErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, TvErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, TvErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last fallible call on
///   this thread failed.
/// - `null` if the last fallible call succeeded.
///
/// Calls that cannot fail (vector arithmetic, `tv_cube_layout`,
/// `tv_slider_rotation_new`, ...) leave the stored error untouched.
///
/// # Lifetime
/// The returned pointer is valid until the next fallible FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// TvScene* scene = NULL;
/// if (tv_scene_new(config_text, &scene) != Ok) {
///     __android_log_print(ANDROID_LOG_ERROR, "tv", "%s", tv_get_last_error());
/// }
/// ```
#[no_mangle]
pub extern "C" fn tv_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code for this thread.
///
/// Returns `TvErrorCode::Ok` (0) if the last fallible call succeeded.
#[no_mangle]
pub extern "C" fn tv_get_last_error_code() -> TvErrorCode {
    with_last_error(|(_cstring, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_pointer_message() {
        let err = DefaultTvError::null_pointer("ptr");
        assert_eq!(err.code(), TvErrorCode::NullPointer);
        assert_eq!(err.msg(), "Parameter 'ptr' cannot be null");
    }

    #[test]
    fn test_invalid_config_carries_scene_error_message() {
        let err = DefaultTvError::invalid_config(&SceneError::ZeroDirection {
            name: "sun.direction",
        });
        assert_eq!(err.code(), TvErrorCode::InvalidConfig);
        assert_eq!(err.msg(), "sun.direction must have a non-zero length");
    }
}
