use sb_blas::{EnvPlatform, PlatformGate, ReferenceKernel, SgemmDispatcher, SgemmKernel};

use crate::types::SBKernelType;

/// Opaque context handle that owns the platform gate and the kernel.
#[derive(Debug)]
pub struct SBContext {
    pub kernel_type: SBKernelType,
    pub gate: PlatformGate<EnvPlatform>,
    pub dispatcher: SgemmDispatcher<Box<dyn SgemmKernel>>,
}

impl Default for SBContext {
    fn default() -> Self {
        Self::with_kernel(SBKernelType::Reference, Box::new(ReferenceKernel::new()))
    }
}

impl SBContext {
    /// Builds a context for `kernel_type`, or `None` when that kernel was
    /// not compiled into this build.
    pub fn new(kernel_type: SBKernelType) -> Option<Self> {
        let kernel: Box<dyn SgemmKernel> = match kernel_type {
            SBKernelType::Reference => Box::new(ReferenceKernel::new()),
            #[cfg(feature = "native")]
            SBKernelType::Native => Box::new(sb_blas::NativeKernel),
            #[cfg(feature = "accelerate")]
            SBKernelType::Accelerate => Box::new(sb_blas::AccelerateKernel),
            #[allow(unreachable_patterns)]
            _ => return None,
        };
        Some(Self::with_kernel(kernel_type, kernel))
    }

    fn with_kernel(kernel_type: SBKernelType, kernel: Box<dyn SgemmKernel>) -> Self {
        Self {
            kernel_type,
            gate: PlatformGate::from_env(),
            dispatcher: SgemmDispatcher::new(kernel),
        }
    }

    /// Whether calls through this context must pass the platform gate.
    ///
    /// Only the host application's symbol is tied to the gated platform.
    pub fn requires_gate(&self) -> bool {
        self.kernel_type == SBKernelType::Native
    }
}
