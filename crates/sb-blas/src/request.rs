use crate::error::{BlasError, Result};

/// Parameters of a row-major `C := op(A) * op(B) + beta * C` request.
///
/// `m x n` is the shape of C and `k` the shared reduction dimension. The
/// leading dimensions describe the operands as they are *stored*: a
/// transposed A is stored as `[k, m]`, a transposed B as `[n, k]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SgemmRequest {
    pub m: usize,
    pub n: usize,
    pub k: usize,
    pub lda: usize,
    pub ldb: usize,
    pub ldc: usize,
    pub beta: f32,
    pub transpose_a: bool,
    pub transpose_b: bool,
}

impl SgemmRequest {
    /// A non-transposed request over densely packed operands with `beta = 0`.
    pub fn new(m: usize, n: usize, k: usize) -> Self {
        let mut req = Self {
            m,
            n,
            k,
            lda: 0,
            ldb: 0,
            ldc: 0,
            beta: 0.0,
            transpose_a: false,
            transpose_b: false,
        };
        req.pack_leading_dims();
        req
    }

    /// Sets the transpose flags.
    ///
    /// A leading dimension still equal to its packed value follows the new
    /// stored shape; one set through [`with_leading_dims`](Self::with_leading_dims)
    /// to anything else is kept as is.
    pub fn with_transpose(mut self, transpose_a: bool, transpose_b: bool) -> Self {
        let was_packed_a = self.lda == self.packed_lda();
        let was_packed_b = self.ldb == self.packed_ldb();
        self.transpose_a = transpose_a;
        self.transpose_b = transpose_b;
        if was_packed_a {
            self.lda = self.packed_lda();
        }
        if was_packed_b {
            self.ldb = self.packed_ldb();
        }
        self
    }

    /// Overrides the leading dimensions, e.g. for views into larger buffers.
    ///
    /// Leading dimensions describe the stored operands, so set them for the
    /// final transpose flags. [`with_transpose`](Self::with_transpose) keeps
    /// them unless they equal the packed values.
    pub fn with_leading_dims(mut self, lda: usize, ldb: usize, ldc: usize) -> Self {
        self.lda = lda;
        self.ldb = ldb;
        self.ldc = ldc;
        self
    }

    pub fn with_beta(mut self, beta: f32) -> Self {
        self.beta = beta;
        self
    }

    fn pack_leading_dims(&mut self) {
        self.lda = self.packed_lda();
        self.ldb = self.packed_ldb();
        self.ldc = self.n.max(1);
    }

    fn packed_lda(&self) -> usize {
        self.stored_a().1.max(1)
    }

    fn packed_ldb(&self) -> usize {
        self.stored_b().1.max(1)
    }

    /// Stored `(rows, cols)` of A.
    pub fn stored_a(&self) -> (usize, usize) {
        if self.transpose_a {
            (self.k, self.m)
        } else {
            (self.m, self.k)
        }
    }

    /// Stored `(rows, cols)` of B.
    pub fn stored_b(&self) -> (usize, usize) {
        if self.transpose_b {
            (self.n, self.k)
        } else {
            (self.k, self.n)
        }
    }

    /// Minimum element count of A's buffer.
    pub fn required_len_a(&self) -> Result<usize> {
        let (rows, cols) = self.stored_a();
        required_len('A', rows, cols, self.lda)
    }

    /// Minimum element count of B's buffer.
    pub fn required_len_b(&self) -> Result<usize> {
        let (rows, cols) = self.stored_b();
        required_len('B', rows, cols, self.ldb)
    }

    /// Minimum element count of C's buffer.
    pub fn required_len_c(&self) -> Result<usize> {
        required_len('C', self.m, self.n, self.ldc)
    }

    /// Checks the request against buffer lengths and the kernel's `i32` range.
    pub fn validate(&self, a_len: usize, b_len: usize, c_len: usize) -> Result<()> {
        for (name, value) in [
            ("m", self.m),
            ("n", self.n),
            ("k", self.k),
            ("lda", self.lda),
            ("ldb", self.ldb),
            ("ldc", self.ldc),
        ] {
            to_blas_int(name, value)?;
        }

        check_leading_dim('A', self.lda, self.stored_a().1)?;
        check_leading_dim('B', self.ldb, self.stored_b().1)?;
        check_leading_dim('C', self.ldc, self.n)?;

        check_len('A', a_len, self.required_len_a()?)?;
        check_len('B', b_len, self.required_len_b()?)?;
        check_len('C', c_len, self.required_len_c()?)?;
        Ok(())
    }
}

/// Converts a dimension to the kernel's integer type.
pub fn to_blas_int(name: &'static str, value: usize) -> Result<i32> {
    i32::try_from(value).map_err(|_| BlasError::DimensionOverflow { name, value })
}

/// `(rows - 1) * ld + cols`, or `BufferOverflow` if that exceeds `usize`.
fn required_len(operand: char, rows: usize, cols: usize, ld: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Ok(0);
    }
    (rows - 1)
        .checked_mul(ld)
        .and_then(|v| v.checked_add(cols))
        .ok_or(BlasError::BufferOverflow {
            operand,
            rows,
            cols,
            ld,
        })
}

fn check_leading_dim(operand: char, ld: usize, cols: usize) -> Result<()> {
    let min = cols.max(1);
    if ld < min {
        return Err(BlasError::InvalidLeadingDimension { operand, ld, min });
    }
    Ok(())
}

fn check_len(operand: char, len: usize, required: usize) -> Result<()> {
    if len < required {
        return Err(BlasError::BufferTooSmall {
            operand,
            len,
            required,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_leading_dims() {
        let req = SgemmRequest::new(2, 3, 4);
        assert_eq!((req.lda, req.ldb, req.ldc), (4, 3, 3));
        assert_eq!(req.beta, 0.0);

        let req = req.with_transpose(true, true);
        // A stored [k, m], B stored [n, k].
        assert_eq!((req.lda, req.ldb, req.ldc), (2, 4, 3));
    }

    #[test]
    fn test_required_lengths() {
        let req = SgemmRequest::new(2, 3, 4);
        assert_eq!(req.required_len_a(), Ok(8));
        assert_eq!(req.required_len_b(), Ok(12));
        assert_eq!(req.required_len_c(), Ok(6));

        // Padded rows: last row does not need its padding.
        let req = req.with_leading_dims(5, 4, 4);
        assert_eq!(req.required_len_a(), Ok(9));
        assert_eq!(req.required_len_b(), Ok(15));
        assert_eq!(req.required_len_c(), Ok(7));
    }

    #[test]
    fn test_validate_ok() {
        let req = SgemmRequest::new(2, 2, 2).with_transpose(false, true);
        assert!(req.validate(4, 4, 4).is_ok());
    }

    #[test]
    fn test_validate_short_buffer() {
        let req = SgemmRequest::new(2, 2, 2);
        assert_eq!(
            req.validate(4, 3, 4),
            Err(BlasError::BufferTooSmall {
                operand: 'B',
                len: 3,
                required: 4
            })
        );
    }

    #[test]
    fn test_validate_leading_dim_too_small() {
        let req = SgemmRequest::new(2, 3, 4).with_leading_dims(3, 3, 3);
        assert_eq!(
            req.validate(100, 100, 100),
            Err(BlasError::InvalidLeadingDimension {
                operand: 'A',
                ld: 3,
                min: 4
            })
        );
    }

    #[test]
    fn test_validate_empty_request() {
        let req = SgemmRequest::new(0, 0, 0);
        assert_eq!((req.lda, req.ldb, req.ldc), (1, 1, 1));
        assert!(req.validate(0, 0, 0).is_ok());
        assert!(req.with_leading_dims(0, 1, 1).validate(0, 0, 0).is_err());
    }

    #[test]
    fn test_validate_overflow() {
        let big = i32::MAX as usize + 1;
        let req = SgemmRequest::new(1, 1, big);
        assert_eq!(
            req.validate(usize::MAX, usize::MAX, usize::MAX),
            Err(BlasError::DimensionOverflow {
                name: "k",
                value: big
            })
        );
    }

    #[test]
    fn test_required_len_overflow() {
        // Product past u32::MAX; wraps on 32-bit targets, exceeds usize on 64-bit.
        let rows = usize::MAX / 65536 + 2;
        assert_eq!(
            required_len('A', rows, 1, 65536),
            Err(BlasError::BufferOverflow {
                operand: 'A',
                rows,
                cols: 1,
                ld: 65536
            })
        );
        assert!(required_len('B', 2, usize::MAX, usize::MAX).is_err());

        #[cfg(target_pointer_width = "64")]
        assert_eq!(required_len('C', 65537, 1, 65536), Ok((1usize << 32) + 1));
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn test_validate_rejects_wrapping_length() {
        let req = SgemmRequest::new(65537, 1, 1).with_leading_dims(65536, 1, 1);
        assert!(matches!(
            req.validate(1, 1, 65537),
            Err(BlasError::BufferOverflow { operand: 'A', .. })
        ));
    }

    #[test]
    fn test_transpose_keeps_explicit_leading_dims() {
        let req = SgemmRequest::new(2, 3, 4)
            .with_leading_dims(8, 8, 8)
            .with_transpose(true, true);
        assert_eq!((req.lda, req.ldb, req.ldc), (8, 8, 8));

        // Only the packed operand follows the new shape.
        let req = SgemmRequest::new(2, 3, 4)
            .with_leading_dims(4, 8, 3)
            .with_transpose(true, true);
        assert_eq!((req.lda, req.ldb, req.ldc), (2, 8, 3));
    }
}
