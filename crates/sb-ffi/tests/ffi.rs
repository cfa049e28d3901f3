use std::ffi::CStr;
use std::ptr;

use sb_blas::SgemmKernel;
use sb_ffi::*;

fn reference_context() -> *mut SBContext {
    let mut ctx = ptr::null_mut();
    let status = unsafe { sb_context_create(SBKernelType::Reference, &mut ctx) };
    assert_eq!(status, SBStatus::Ok);
    assert!(!ctx.is_null());
    ctx
}

fn last_error() -> Option<String> {
    let raw = sb_last_error();
    if raw.is_null() {
        return None;
    }
    let msg = unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned();
    unsafe { sb_free_string(raw) };
    Some(msg)
}

#[test]
fn test_support_matches_platform_id() {
    assert_eq!(sb_is_current_platform_supported(), sb_platform_id() == 8);
}

#[test]
fn test_sgemm_reference_transpose_b() {
    let ctx = reference_context();
    let a = [1.0f32, 2.0, 3.0, 4.0];
    let b = [5.0f32, 6.0, 7.0, 8.0];
    let mut c = [0.0f32; 4];
    let status = unsafe {
        sb_sgemm(ctx, 2, 2, 2, a.as_ptr(), 2, b.as_ptr(), 2, c.as_mut_ptr(), 2, 0.0, false, true)
    };
    assert_eq!(status, SBStatus::Ok);
    assert_eq!(c, [17.0, 23.0, 39.0, 53.0]);
    assert_eq!(unsafe { sb_context_destroy(ctx) }, SBStatus::Ok);
}

#[test]
fn test_sgemm_reference_accumulates() {
    let ctx = reference_context();
    let a = [1.0f32, 2.0, 3.0, 4.0];
    let b = [1.0f32, 0.0, 0.0, 1.0];
    let mut c = [10.0f32, 10.0, 10.0, 10.0];
    let status = unsafe {
        sb_sgemm(ctx, 2, 2, 2, a.as_ptr(), 2, b.as_ptr(), 2, c.as_mut_ptr(), 2, 0.5, true, false)
    };
    assert_eq!(status, SBStatus::Ok);
    // A^T = [1,3;2,4]
    assert_eq!(c, [6.0, 8.0, 7.0, 9.0]);
    unsafe { sb_context_destroy(ctx) };
}

#[test]
fn test_null_arguments_rejected() {
    let status = unsafe { sb_context_create(SBKernelType::Reference, ptr::null_mut()) };
    assert_eq!(status, SBStatus::ErrorInvalidArgument);
    assert_eq!(last_error().as_deref(), Some("ctx_out is null"));

    let mut c = [0.0f32; 1];
    let status = unsafe {
        sb_sgemm(ptr::null(), 1, 1, 1, [1.0].as_ptr(), 1, [1.0].as_ptr(), 1, c.as_mut_ptr(), 1, 0.0, false, false)
    };
    assert_eq!(status, SBStatus::ErrorInvalidArgument);
    assert_eq!(last_error().as_deref(), Some("ctx is null"));

    let ctx = reference_context();
    let status = unsafe {
        sb_sgemm(ctx, 1, 1, 1, ptr::null(), 1, [1.0].as_ptr(), 1, c.as_mut_ptr(), 1, 0.0, false, false)
    };
    assert_eq!(status, SBStatus::ErrorInvalidArgument);
    assert_eq!(last_error().as_deref(), Some("null matrix buffer"));
    unsafe { sb_context_destroy(ctx) };
}

#[test]
fn test_last_error_is_taken_once() {
    unsafe { sb_context_create(SBKernelType::Reference, ptr::null_mut()) };
    assert!(last_error().is_some());
    assert!(last_error().is_none());
}

#[test]
fn test_destroy_null_is_noop() {
    assert_eq!(unsafe { sb_context_destroy(ptr::null_mut()) }, SBStatus::Ok);
}

#[cfg(not(feature = "native"))]
#[test]
fn test_native_kernel_unavailable_without_feature() {
    let mut ctx = ptr::null_mut();
    let status = unsafe { sb_context_create(SBKernelType::Native, &mut ctx) };
    assert_eq!(status, SBStatus::ErrorKernelUnavailable);
    assert!(ctx.is_null());
    assert!(last_error().unwrap().contains("Native"));
}

#[test]
fn test_reference_context_skips_gate() {
    let ctx = SBContext::new(SBKernelType::Reference).unwrap();
    assert!(!ctx.requires_gate());
    assert_eq!(ctx.dispatcher.kernel().name(), "reference");
}
