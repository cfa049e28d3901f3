//! `sb-blas` - Platform-gated SGEMM dispatch for sgemm-bridge.
//!
//! This crate provides:
//! - A `PlatformGate` that decides whether the accelerated kernel is usable
//! - A `SgemmDispatcher` that translates transpose flags into CBLAS codes
//! - A `SgemmKernel` trait for pluggable kernels (reference, native, Accelerate)
//! - A pure-Rust `ReferenceKernel` implementing full CBLAS `sgemm` semantics
//! - `SgemmRequest` for the checked, slice-based entry point

pub mod cblas;
pub mod cpu;
pub mod dispatch;
pub mod error;
pub mod kernel;
#[cfg(any(feature = "native", feature = "accelerate"))]
pub mod native;
pub mod platform;
pub mod request;

// Re-export primary types at the crate root for convenience.
pub use cblas::{cblas_codes, Order, Transpose};
pub use cpu::ReferenceKernel;
pub use dispatch::{GatedDispatcher, SgemmDispatcher};
pub use error::{BlasError, Result};
pub use kernel::SgemmKernel;
#[cfg(feature = "accelerate")]
pub use native::AccelerateKernel;
#[cfg(feature = "native")]
pub use native::NativeKernel;
pub use platform::{
    EnvPlatform, FixedPlatform, HostPlatform, PlatformGate, PlatformProvider, RuntimePlatform,
};
pub use request::SgemmRequest;
