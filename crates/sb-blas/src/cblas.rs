//! CBLAS enumeration codes understood by the native `sgemm` kernel.

/// Memory layout of the operands (`CBLAS_ORDER`).
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    RowMajor = 101,
    ColMajor = 102,
}

impl Order {
    /// The raw integer code passed across the kernel boundary.
    pub fn as_raw(self) -> i32 {
        self as i32
    }
}

/// Operand mode (`CBLAS_TRANSPOSE`).
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transpose {
    NoTrans = 111,
    Trans = 112,
}

impl Transpose {
    /// Maps a single operand's transpose flag to its code.
    #[inline]
    pub fn from_flag(transpose: bool) -> Self {
        if transpose {
            Transpose::Trans
        } else {
            Transpose::NoTrans
        }
    }

    pub fn is_transposed(self) -> bool {
        self == Transpose::Trans
    }

    /// The raw integer code passed across the kernel boundary.
    pub fn as_raw(self) -> i32 {
        self as i32
    }
}

/// Derives the `(Order, TransA, TransB)` triple for a request.
///
/// Order is always [`Order::RowMajor`]. Each transpose code depends only on
/// its own flag.
#[inline]
pub fn cblas_codes(transpose_a: bool, transpose_b: bool) -> (Order, Transpose, Transpose) {
    (
        Order::RowMajor,
        Transpose::from_flag(transpose_a),
        Transpose::from_flag(transpose_b),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_codes_match_cblas() {
        assert_eq!(Order::RowMajor.as_raw(), 101);
        assert_eq!(Order::ColMajor.as_raw(), 102);
        assert_eq!(Transpose::NoTrans.as_raw(), 111);
        assert_eq!(Transpose::Trans.as_raw(), 112);
    }

    #[test]
    fn test_codes_for_every_flag_pair() {
        let cases = [
            (false, false, Transpose::NoTrans, Transpose::NoTrans),
            (true, false, Transpose::Trans, Transpose::NoTrans),
            (false, true, Transpose::NoTrans, Transpose::Trans),
            (true, true, Transpose::Trans, Transpose::Trans),
        ];
        for (ta, tb, want_a, want_b) in cases {
            let (order, trans_a, trans_b) = cblas_codes(ta, tb);
            assert_eq!(order, Order::RowMajor);
            assert_eq!(trans_a, want_a, "transpose_a={ta}");
            assert_eq!(trans_b, want_b, "transpose_b={tb}");
            assert_eq!(trans_a.is_transposed(), ta);
            assert_eq!(trans_b.is_transposed(), tb);
        }
    }
}
