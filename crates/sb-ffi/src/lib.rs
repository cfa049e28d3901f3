mod context;
mod error;
mod types;

pub use context::*;
pub use error::*;
pub use types::*;

use std::ffi::CString;
use std::os::raw::c_char;

use sb_blas::{EnvPlatform, PlatformProvider};

/// Execute a closure that returns an `SBStatus`, catching any panics
/// and converting them into `SBStatus::ErrorInternal`.
fn catch_panic<F: FnOnce() -> SBStatus>(f: F) -> SBStatus {
    // Kernels and gates hold no mutable state that a panic could corrupt.
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(status) => status,
        Err(_) => {
            set_last_error("internal panic".to_string());
            SBStatus::ErrorInternal
        }
    }
}

/// Identifier of the platform this process runs on.
///
/// Honors the `SGEMM_BRIDGE_PLATFORM` override.
#[no_mangle]
pub extern "C" fn sb_platform_id() -> i32 {
    EnvPlatform::from_env().platform_id()
}

/// Returns true iff the accelerated kernel is usable on this platform.
#[no_mangle]
pub extern "C" fn sb_is_current_platform_supported() -> bool {
    sb_blas::PlatformGate::from_env().is_supported()
}

/// Create a new dispatch context using the requested kernel.
///
/// On success, writes a heap-allocated `SBContext` pointer into `*ctx_out`
/// and returns `SBStatus::Ok`. The caller must later call `sb_context_destroy`
/// to free the context.
#[no_mangle]
pub unsafe extern "C" fn sb_context_create(
    kernel: SBKernelType,
    ctx_out: *mut *mut SBContext,
) -> SBStatus {
    catch_panic(|| {
        if ctx_out.is_null() {
            set_last_error("ctx_out is null".to_string());
            return SBStatus::ErrorInvalidArgument;
        }
        let ctx = match SBContext::new(kernel) {
            Some(ctx) => Box::new(ctx),
            None => {
                set_last_error(format!("kernel {:?} is not compiled into this build", kernel));
                return SBStatus::ErrorKernelUnavailable;
            }
        };
        unsafe {
            *ctx_out = Box::into_raw(ctx);
        }
        SBStatus::Ok
    })
}

/// Destroy a context previously created by `sb_context_create`.
///
/// Passing a null pointer is a no-op and returns `SBStatus::Ok`.
#[no_mangle]
pub unsafe extern "C" fn sb_context_destroy(ctx: *mut SBContext) -> SBStatus {
    if ctx.is_null() {
        return SBStatus::Ok;
    }
    drop(Box::from_raw(ctx));
    SBStatus::Ok
}

/// Row-major `C := op(A) * op(B) + beta * C` with `alpha = 1`.
///
/// Null handles or buffers are rejected, and a context built on the native
/// kernel refuses to run when the platform gate reports no support.
/// Dimensions and leading dimensions are forwarded to the kernel unchecked:
/// the buffers must cover the matrices they describe.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn sb_sgemm(
    ctx: *const SBContext,
    m: i32,
    n: i32,
    k: i32,
    a: *const f32,
    lda: i32,
    b: *const f32,
    ldb: i32,
    c: *mut f32,
    ldc: i32,
    beta: f32,
    transpose_a: bool,
    transpose_b: bool,
) -> SBStatus {
    catch_panic(|| {
        if ctx.is_null() {
            set_last_error("ctx is null".to_string());
            return SBStatus::ErrorInvalidArgument;
        }
        if a.is_null() || b.is_null() || c.is_null() {
            set_last_error("null matrix buffer".to_string());
            return SBStatus::ErrorInvalidArgument;
        }
        let ctx = unsafe { &*ctx };
        if ctx.requires_gate() {
            if let Err(e) = ctx.gate.require() {
                set_last_error(e.to_string());
                return SBStatus::ErrorUnsupportedPlatform;
            }
        }
        unsafe {
            ctx.dispatcher.multiply(
                m,
                n,
                k,
                a,
                lda,
                b,
                ldb,
                c,
                ldc,
                beta,
                transpose_a,
                transpose_b,
            );
        }
        SBStatus::Ok
    })
}

/// Retrieve the last error message.
///
/// Returns a pointer to a C string describing the most recent error, or
/// null if no error has occurred. The caller must free the returned string
/// with `sb_free_string`.
#[no_mangle]
pub extern "C" fn sb_last_error() -> *mut c_char {
    match error::take_last_error() {
        Some(e) => e.into_raw(),
        None => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by `sb_last_error`.
#[no_mangle]
pub unsafe extern "C" fn sb_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
