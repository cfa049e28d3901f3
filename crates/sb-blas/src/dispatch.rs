use crate::cblas::cblas_codes;
use crate::error::Result;
use crate::kernel::SgemmKernel;
use crate::platform::{PlatformGate, PlatformProvider};
use crate::request::{to_blas_int, SgemmRequest};

/// Translates row-major multiply requests into kernel calls.
///
/// Holds no state besides the kernel; every call is an independent
/// translation and forward.
#[derive(Debug, Clone)]
pub struct SgemmDispatcher<K> {
    kernel: K,
}

impl<K: SgemmKernel> SgemmDispatcher<K> {
    pub fn new(kernel: K) -> Self {
        Self { kernel }
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Computes `C := op(A) * op(B) + beta * C` on row-major operands.
    ///
    /// The kernel receives `RowMajor`, one transpose code per flag,
    /// `alpha = 1.0`, and every other argument unchanged.
    ///
    /// # Safety
    ///
    /// Nothing is validated. The caller guarantees that `a`, `b` and `c`
    /// point to buffers covering the matrices described by `m`, `n`, `k`,
    /// the transpose flags and the leading dimensions, that `c` is valid
    /// for writes and does not alias `a` or `b`, and that the kernel is
    /// available on this platform (see [`PlatformGate`]).
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn multiply(
        &self,
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
    ) {
        let (order, trans_a, trans_b) = cblas_codes(transpose_a, transpose_b);
        self.kernel.sgemm(
            order, trans_a, trans_b, m, n, k, 1.0, a, lda, b, ldb, beta, c, ldc,
        );
    }

    /// Safe entry point: validates `req` against the slices, then multiplies.
    ///
    /// Still requires the kernel to be usable on this platform.
    pub fn multiply_slices(
        &self,
        req: &SgemmRequest,
        a: &[f32],
        b: &[f32],
        c: &mut [f32],
    ) -> Result<()> {
        req.validate(a.len(), b.len(), c.len())?;
        // SAFETY: validate() checked every length, stride and the i32 range.
        // `c` is a unique borrow, so it cannot alias `a` or `b`.
        unsafe {
            self.multiply(
                to_blas_int("m", req.m)?,
                to_blas_int("n", req.n)?,
                to_blas_int("k", req.k)?,
                a.as_ptr(),
                to_blas_int("lda", req.lda)?,
                b.as_ptr(),
                to_blas_int("ldb", req.ldb)?,
                c.as_mut_ptr(),
                to_blas_int("ldc", req.ldc)?,
                req.beta,
                req.transpose_a,
                req.transpose_b,
            );
        }
        Ok(())
    }
}

/// A dispatcher that consults a [`PlatformGate`] before every checked call.
#[derive(Debug, Clone)]
pub struct GatedDispatcher<P, K> {
    gate: PlatformGate<P>,
    dispatcher: SgemmDispatcher<K>,
}

impl<P: PlatformProvider, K: SgemmKernel> GatedDispatcher<P, K> {
    pub fn new(gate: PlatformGate<P>, kernel: K) -> Self {
        Self {
            gate,
            dispatcher: SgemmDispatcher::new(kernel),
        }
    }

    pub fn gate(&self) -> &PlatformGate<P> {
        &self.gate
    }

    pub fn dispatcher(&self) -> &SgemmDispatcher<K> {
        &self.dispatcher
    }

    pub fn is_supported(&self) -> bool {
        self.gate.is_supported()
    }

    /// Returns `UnsupportedPlatform` without touching the kernel when the
    /// gate refuses, otherwise behaves like
    /// [`SgemmDispatcher::multiply_slices`].
    pub fn try_multiply_slices(
        &self,
        req: &SgemmRequest,
        a: &[f32],
        b: &[f32],
        c: &mut [f32],
    ) -> Result<()> {
        self.gate.require()?;
        self.dispatcher.multiply_slices(req, a, b, c)
    }
}
