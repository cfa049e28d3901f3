// Reference sgemm loop.
//
// Straight triple loop over op(A) and op(B) with explicit leading dimensions.
// Follows reference BLAS: when beta is zero C is overwritten without being
// read, and when alpha is zero A and B are not read.

use crate::cblas::{Order, Transpose};

/// Offset of element `(row, col)` of `op(X)` inside X's storage.
#[inline(always)]
fn op_offset(order: Order, trans: Transpose, row: usize, col: usize, ld: usize) -> usize {
    // A transposed operand swaps the roles of row and column in storage.
    let (r, c) = match trans {
        Transpose::NoTrans => (row, col),
        Transpose::Trans => (col, row),
    };
    match order {
        Order::RowMajor => r * ld + c,
        Order::ColMajor => r + c * ld,
    }
}

/// # Safety
///
/// See [`SgemmKernel::sgemm`](crate::kernel::SgemmKernel::sgemm).
#[allow(clippy::too_many_arguments)]
pub(crate) unsafe fn sgemm(
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
    if m <= 0 || n <= 0 {
        return;
    }
    let (m, n, k) = (m as usize, n as usize, k.max(0) as usize);
    let (lda, ldb, ldc) = (lda.max(0) as usize, ldb.max(0) as usize, ldc.max(0) as usize);
    let reads_ab = alpha != 0.0 && k > 0;

    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0f32;
            if reads_ab {
                for p in 0..k {
                    let av = *a.add(op_offset(order, trans_a, i, p, lda));
                    let bv = *b.add(op_offset(order, trans_b, p, j, ldb));
                    sum += av * bv;
                }
            }
            let dst = c.add(op_offset(order, Transpose::NoTrans, i, j, ldc));
            *dst = if beta == 0.0 {
                alpha * sum
            } else {
                alpha * sum + beta * *dst
            };
        }
    }
}
