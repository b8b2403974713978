use graphseg_image::FieldError;

use super::KernelError;
use crate::parallel::ParallelError;

/// Errors that can occur while filtering a field.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FilterError {
    /// Error related to the field shapes.
    #[error(transparent)]
    FieldError(#[from] FieldError),

    /// Error related to the kernel.
    #[error(transparent)]
    KernelError(#[from] KernelError),

    /// Error related to parallel execution.
    #[error(transparent)]
    ParallelError(#[from] ParallelError),
}
