/// Status codes returned by all FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SBStatus {
    Ok = 0,
    ErrorInvalidArgument = 1,
    ErrorUnsupportedPlatform = 2,
    ErrorKernelUnavailable = 3,
    ErrorInternal = 4,
}

/// Kernel selector for `sb_context_create`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SBKernelType {
    /// Portable pure-Rust kernel; runs on every platform.
    Reference = 0,
    /// The host application's `ios_sgemm`; requires the `native` feature.
    Native = 1,
    /// Apple Accelerate `cblas_sgemm`; requires the `accelerate` feature.
    Accelerate = 2,
}
