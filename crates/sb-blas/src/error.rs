use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlasError {
    #[error("accelerated sgemm is not available on platform {platform}")]
    UnsupportedPlatform { platform: i32 },
    #[error("unknown platform identifier: {0}")]
    UnknownPlatform(i32),
    #[error("invalid platform name: {0:?}")]
    InvalidPlatformName(String),
    #[error("dimension {name}={value} does not fit in a 32-bit BLAS integer")]
    DimensionOverflow { name: &'static str, value: usize },
    #[error("leading dimension of {operand} is {ld} but must be at least {min}")]
    InvalidLeadingDimension { operand: char, ld: usize, min: usize },
    #[error("{operand} spans {rows} rows of stride {ld} plus {cols}, which overflows usize")]
    BufferOverflow {
        operand: char,
        rows: usize,
        cols: usize,
        ld: usize,
    },
    #[error("buffer {operand} holds {len} elements but {required} are required")]
    BufferTooSmall {
        operand: char,
        len: usize,
        required: usize,
    },
}

pub type Result<T> = std::result::Result<T, BlasError>;
