pub mod matmul;

use crate::cblas::{Order, Transpose};
use crate::kernel::SgemmKernel;

/// Pure-Rust `sgemm` kernel.
///
/// Implements the full CBLAS contract (both orders, both transpose modes,
/// arbitrary leading dimensions, alpha and beta) with straightforward loops
/// optimized for correctness rather than peak performance. Intended as a
/// reference implementation and as the fallback on platforms without the
/// native kernel.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceKernel;

impl ReferenceKernel {
    pub fn new() -> Self {
        ReferenceKernel
    }
}

impl Default for ReferenceKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl SgemmKernel for ReferenceKernel {
    fn name(&self) -> &str {
        "reference"
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
        matmul::sgemm(
            order, trans_a, trans_b, m, n, k, alpha, a, lda, b, ldb, beta, c, ldc,
        )
    }
}
