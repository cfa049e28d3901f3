use std::fmt::Debug;
use std::sync::Arc;

use crate::cblas::{Order, Transpose};

/// Trait for pluggable `sgemm` kernels (reference, native, Accelerate).
///
/// Computes `C := alpha * op(A) * op(B) + beta * C` where `op(X)` is `X` or
/// its transpose. The parameter list mirrors `cblas_sgemm` positionally.
pub trait SgemmKernel: Send + Sync + Debug {
    /// Returns the name of this kernel (e.g., "reference", "native").
    fn name(&self) -> &str;

    /// Runs the kernel.
    ///
    /// # Safety
    ///
    /// `a`, `b` and `c` must point to buffers large enough for the matrices
    /// described by `order`, the transpose codes, the dimensions and the
    /// leading dimensions. `c` must be valid for writes and must not alias
    /// `a` or `b`. Nothing here is checked.
    #[allow(clippy::too_many_arguments)]
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
    );
}

macro_rules! forward_kernel {
    ($($ty:ty),*) => {$(
        impl<K: SgemmKernel + ?Sized> SgemmKernel for $ty {
            fn name(&self) -> &str {
                (**self).name()
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
                (**self).sgemm(
                    order, trans_a, trans_b, m, n, k, alpha, a, lda, b, ldb, beta, c, ldc,
                )
            }
        }
    )*};
}

forward_kernel!(&K, Box<K>, Arc<K>);
