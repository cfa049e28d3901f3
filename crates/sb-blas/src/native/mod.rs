// Kernels backed by an externally linked `sgemm` symbol.
//
// Both symbols take the CBLAS positional convention, so each kernel only
// lowers the order and transpose enums to their raw codes.

use crate::cblas::{Order, Transpose};
use crate::kernel::SgemmKernel;

#[cfg(feature = "native")]
extern "C" {
    /// Exported by the host application; resolved at load time.
    fn ios_sgemm(
        order: i32,
        trans_a: i32,
        trans_b: i32,
        m: i32,
        n: i32,
        k: i32,
        alpha: f32,
        a: *const f32,
        lda: i32,
        b: *const f32,
        ldb: i32,
        beta: f32,
        c: *mut f32,
        ldc: i32,
    );
}

/// Calls the `ios_sgemm` symbol provided by the embedding application.
///
/// Only usable where [`PlatformGate`](crate::PlatformGate) reports support;
/// elsewhere the symbol is typically missing and linking or loading fails.
#[cfg(feature = "native")]
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeKernel;

#[cfg(feature = "native")]
impl SgemmKernel for NativeKernel {
    fn name(&self) -> &str {
        "native"
    }

    unsafe fn sgemm(
        &self,
        order: Order,
        trans_a: Transpose,
        trans_b: Transpose,
        m: i32,
        n: i32,
        k: i32,
        alpha: f32,
        a: *const f32,
        lda: i32,
        b: *const f32,
        ldb: i32,
        beta: f32,
        c: *mut f32,
        ldc: i32,
    ) {
        ios_sgemm(
            order.as_raw(),
            trans_a.as_raw(),
            trans_b.as_raw(),
            m,
            n,
            k,
            alpha,
            a,
            lda,
            b,
            ldb,
            beta,
            c,
            ldc,
        )
    }
}

#[cfg(feature = "accelerate")]
#[link(name = "Accelerate", kind = "framework")]
extern "C" {
    fn cblas_sgemm(
        order: i32,
        trans_a: i32,
        trans_b: i32,
        m: i32,
        n: i32,
        k: i32,
        alpha: f32,
        a: *const f32,
        lda: i32,
        b: *const f32,
        ldb: i32,
        beta: f32,
        c: *mut f32,
        ldc: i32,
    );
}

/// `cblas_sgemm` from Apple's Accelerate framework.
#[cfg(feature = "accelerate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct AccelerateKernel;

#[cfg(feature = "accelerate")]
impl SgemmKernel for AccelerateKernel {
    fn name(&self) -> &str {
        "accelerate"
    }

    unsafe fn sgemm(
        &self,
        order: Order,
        trans_a: Transpose,
        trans_b: Transpose,
        m: i32,
        n: i32,
        k: i32,
        alpha: f32,
        a: *const f32,
        lda: i32,
        b: *const f32,
        ldb: i32,
        beta: f32,
        c: *mut f32,
        ldc: i32,
    ) {
        cblas_sgemm(
            order.as_raw(),
            trans_a.as_raw(),
            trans_b.as_raw(),
            m,
            n,
            k,
            alpha,
            a,
            lda,
            b,
            ldb,
            beta,
            c,
            ldc,
        )
    }
}
